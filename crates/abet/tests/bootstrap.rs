use abet::detector::{CheckRequest, Detector};
use abet::domain::config::AppConfig;
use abet::domain::education::EducationKey;
use std::fs;
use tempfile::tempdir;

#[test]
fn bootstrap_wires_detector_to_configured_registry() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("spa_authorized_list.json");
    fs::write(&path, r#"{"authorized_domains": ["betano", "www.blaze"]}"#)?;

    let mut config = AppConfig::default();
    config.registry.path = path;

    let ctx = abet::bootstrap(config)?;
    let detector = ctx.try_get_slice::<Detector>()?;

    let report = detector.check(&CheckRequest::new("", "Aposte agora na Blaze ou na Betano"));
    assert!(report.domain_checks.iter().all(|c| c.is_authorized));
    assert_eq!(report.education.key, EducationKey::Cta);

    // The context and the slice share one registry handle.
    assert_eq!(ctx.registry.load_count(), 1);
    assert_eq!(ctx.registry.snapshot().sorted(), ["betano", "blaze"]);
    Ok(())
}

#[test]
fn features_are_listed() {
    assert!(abet::features::is_enabled("detector"));
    assert!(!abet::features::is_enabled("chat"));
}
