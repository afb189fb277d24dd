//! Domain extraction and registry lookup.

use abet_domain::analysis::DomainVerification;
use abet_domain::constants::DEFAULT_SCHEME;
use abet_registry::{Registry, normalize_domain};
use tracing::debug;
use url::Url;

/// Host part of a verifier input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedDomain {
    /// Parsed host, lowercased, in Unicode form, without `www.` or port.
    Host(String),
    /// A valid URL with an empty or missing host (`file:///...`).
    NoHost,
    /// Not a URL; carries the lowercased input as the lookup fallback.
    Unparseable(String),
}

/// Extracts the lookup domain from `input`, assuming `http://` when no scheme is given.
#[must_use]
pub fn extract_domain(input: &str) -> ExtractedDomain {
    let candidate = input.trim();
    let parsed = if candidate.contains("://") {
        Url::parse(candidate)
    } else {
        Url::parse(&format!("{DEFAULT_SCHEME}://{candidate}"))
    };

    match parsed {
        Ok(url) => match url.host_str().map(normalize_domain) {
            Some(host) if !host.is_empty() => ExtractedDomain::Host(host),
            _ => ExtractedDomain::NoHost,
        },
        Err(err) => {
            debug!(input, error = %err, "Unparseable URL, falling back to the raw input");
            ExtractedDomain::Unparseable(input.to_lowercase())
        },
    }
}

/// Resolves URLs to [`DomainVerification`]s against the shared registry.
#[derive(Debug, Clone)]
pub struct DomainVerifier {
    registry: Registry,
}

impl DomainVerifier {
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Verifies one URL or bare host.
    ///
    /// Empty input and host-less URLs return [`DomainVerification::empty`] without touching
    /// the registry. Unparseable input is looked up verbatim (lowercased).
    #[must_use]
    pub fn verify(&self, url: &str) -> DomainVerification {
        if url.trim().is_empty() {
            return DomainVerification::empty();
        }

        let domain = match extract_domain(url) {
            ExtractedDomain::Host(host) | ExtractedDomain::Unparseable(host) => host,
            ExtractedDomain::NoHost => return DomainVerification::empty(),
        };

        let is_authorized = self.registry.is_authorized(&domain);
        DomainVerification { domain, is_authorized }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abet_registry::StaticSource;

    fn verifier(domains: &[&str]) -> DomainVerifier {
        DomainVerifier::new(
            Registry::builder().source(StaticSource::new(domains.iter().copied())).build(),
        )
    }

    #[test]
    fn extracts_host_without_port_or_www() {
        assert_eq!(
            extract_domain("https://WWW.Casa.bet.br:8443/promo?x=1"),
            ExtractedDomain::Host("casa.bet.br".to_owned())
        );
        assert_eq!(
            extract_domain("casa.bet.br/path"),
            ExtractedDomain::Host("casa.bet.br".to_owned())
        );
        assert_eq!(extract_domain("http://www./"), ExtractedDomain::NoHost);
        assert_eq!(
            extract_domain("Not A Url"),
            ExtractedDomain::Unparseable("not a url".to_owned())
        );
    }

    #[test]
    fn empty_input_skips_registry() {
        let v = verifier(&["casa.bet.br"]);
        assert_eq!(v.verify(""), DomainVerification::empty());
        assert_eq!(v.verify("   "), DomainVerification::empty());
        assert_eq!(v.registry().load_count(), 0);
    }

    #[test]
    fn hostless_url_skips_registry() {
        let v = verifier(&["casa.bet.br"]);
        assert_eq!(v.verify("file:///tmp/page.html"), DomainVerification::empty());
        assert_eq!(v.registry().load_count(), 0);
    }

    #[test]
    fn schemeless_and_www_inputs_resolve_the_same() {
        let v = verifier(&["casa.bet.br"]);
        let a = v.verify("casa.bet.br");
        let b = v.verify("https://www.CASA.bet.br/bonus");

        assert_eq!(a, DomainVerification { domain: "casa.bet.br".to_owned(), is_authorized: true });
        assert_eq!(a, b);
    }

    #[test]
    fn internationalized_host_matches_unicode_entry() {
        let v = verifier(&["apostá.com.br"]);
        assert!(v.registry().is_authorized("apostá.com.br"));

        let expected =
            DomainVerification { domain: "apostá.com.br".to_owned(), is_authorized: true };
        assert_eq!(v.verify("https://www.apostá.com.br/promo"), expected);
        assert_eq!(v.verify("https://www.xn--apost-1qa.com.br/promo"), expected);
        assert_eq!(
            extract_domain("APOSTÁ.com.br"),
            ExtractedDomain::Host("apostá.com.br".to_owned())
        );
    }

    #[test]
    fn unparseable_input_is_still_looked_up() {
        let v = verifier(&["not a url"]);
        assert_eq!(
            v.verify("Not A Url"),
            DomainVerification { domain: "not a url".to_owned(), is_authorized: true }
        );
        assert!(!verifier(&[]).verify("Not A Url").is_authorized);
    }
}
