use abet_detector::{CheckReport, CheckRequest, Detector};
use abet_domain::analysis::{Category, CategorySet, DomainVerification, Tier};
use abet_domain::education::EducationKey;
use abet_registry::{FileSource, Registry, StaticSource};
use std::fs;
use tempfile::tempdir;

fn detector(domains: &[&str]) -> Detector {
    let registry = Registry::builder().source(StaticSource::new(domains.iter().copied())).build();
    Detector::build(registry).expect("rules compile")
}

const AFFILIATE_URL: &str = "https://portal.com/afiliado/ganhe-dinheiro";
const AFFILIATE_TEXT: &str = "Descubra a estratégia infalível que ninguém conta. \
                              Cadastre-se na Blaze e comece hoje!";

#[test]
fn affiliate_page_with_unlisted_operator() {
    let report =
        detector(&["betano.bet.br"]).check(&CheckRequest::new(AFFILIATE_URL, AFFILIATE_TEXT));

    assert_eq!(report.score, 100);
    assert_eq!(report.tier, Tier::High);
    assert_eq!(
        report.evidence.categories(),
        CategorySet::URL_PATTERN | CategorySet::OPERATOR | CategorySet::CTA | CategorySet::DECEPTIVE
    );
    assert_eq!(report.evidence.literals(Category::UrlPattern).collect::<Vec<_>>(), ["afiliado"]);
    assert_eq!(
        report.domain_checks,
        [DomainVerification { domain: "blaze".to_owned(), is_authorized: false }]
    );
    assert_eq!(report.education.key, EducationKey::UnauthorizedOperator);
    assert_eq!(report.url, AFFILIATE_URL);
}

#[test]
fn authorized_operator_falls_through_to_language_cards() {
    let report = detector(&["blaze"]).check(&CheckRequest::new(AFFILIATE_URL, AFFILIATE_TEXT));

    assert!(report.domain_checks.iter().all(|c| c.is_authorized));
    assert_eq!(report.education.key, EducationKey::Deceptive);
}

#[test]
fn plain_news_page() {
    let report = detector(&[]).check(&CheckRequest::new(
        "https://news.example.com/economy",
        "Central bank announced new rates",
    ));

    assert_eq!(report.score, 0);
    assert_eq!(report.tier, Tier::Low);
    assert!(report.evidence.is_empty());
    assert!(report.domain_checks.is_empty());
    assert_eq!(report.education.key, EducationKey::Default);
}

#[test]
fn operators_are_verified_once_each_in_sorted_order() {
    let report = detector(&["betano"]).check(&CheckRequest::new(
        "",
        "Betano, BLAZE, betano e blaze de novo.",
    ));

    let domains: Vec<_> = report.domain_checks.iter().map(|c| c.domain.as_str()).collect();
    assert_eq!(domains, ["betano", "blaze"]);
    assert_eq!(report.education.key, EducationKey::UnauthorizedOperator);
}

#[test]
fn checks_are_idempotent() {
    let detector = detector(&["betano"]);
    let request = CheckRequest::new(AFFILIATE_URL, AFFILIATE_TEXT);

    assert_eq!(detector.check(&request), detector.check(&request));
    assert_eq!(detector.verify("https://www.betano/"), detector.verify("betano"));
}

#[test]
fn missing_registry_file_means_nothing_is_authorized() {
    let dir = tempdir().expect("tempdir");
    let registry =
        Registry::builder().source(FileSource::new(dir.path().join("absent.json"))).build();
    let detector = Detector::build(registry).expect("rules compile");

    let report = detector.check(&CheckRequest::new("", "Aposte agora na Betano"));
    assert_eq!(report.domain_checks.len(), 1);
    assert!(!report.domain_checks[0].is_authorized);
    assert_eq!(report.education.key, EducationKey::UnauthorizedOperator);
}

#[test]
fn registry_file_is_read_lazily_and_once() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("spa.json");
    fs::write(&path, r#"{"authorized_domains": ["WWW.Betano", "betano"]}"#).expect("write");

    let registry = Registry::builder().source(FileSource::new(&path)).build();
    let detector = Detector::build(registry.clone()).expect("rules compile");
    assert_eq!(registry.load_count(), 0);

    for _ in 0..3 {
        let report = detector.check(&CheckRequest::new("", "Jogue agora na Betano"));
        assert_eq!(report.education.key, EducationKey::Cta);
    }
    assert_eq!(registry.load_count(), 1);
    assert_eq!(registry.snapshot().len(), 1);
}

#[test]
fn json_boundary() {
    let request = CheckRequest::from_json(
        r#"{"url": "https://blog.com/publi", "text_content": "Conteúdo patrocinado: jogue agora!"}"#,
    )
    .expect("decodes");

    let report: CheckReport = detector(&[]).check(&request);
    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("encodes")).expect("valid JSON");

    // URL_PATTERN 15 + CTA 25 + LABEL 15
    assert_eq!(json["score"], 55);
    assert_eq!(json["tier"], "Moderate");
    assert_eq!(json["evidence"]["CTA"], serde_json::json!(["jogue agora"]));
    assert_eq!(json["evidence"]["LABEL"], serde_json::json!(["conteúdo patrocinado"]));
    assert_eq!(json["domain_checks"], serde_json::json!([]));
    assert_eq!(json["education"]["key"], "CTA");
    assert!(json["education"]["title"].is_string());
    assert!(json["education"]["body"].is_string());
    assert!(json["education"]["help_link_text"].is_string());
    assert_eq!(json["url"], "https://blog.com/publi");
}

#[test]
fn internationalized_domain_verifies_against_unicode_entry() {
    let detector = detector(&["apostá.com.br"]);
    assert!(detector.verifier().registry().is_authorized("apostá.com.br"));

    assert_eq!(
        detector.verify("https://www.apostá.com.br/promo"),
        DomainVerification { domain: "apostá.com.br".to_owned(), is_authorized: true }
    );
}
