//! The authorized-domain set and its normalization rules.

use crate::error::{RegistryError, RegistryErrorExt};
use abet_domain::constants::{ACE_PREFIX, AUTHORIZED_DOMAINS_KEY, WWW_PREFIX};
use fxhash::FxHashSet;
use serde_json::Value;
use tracing::warn;

/// Canonical lookup key for a domain: trimmed, lowercase, punycode labels decoded to
/// Unicode, every leading `www.` removed.
///
/// Load-time entries and query-time inputs go through the same function, which is
/// what makes lookups case-, `www.`- and IDNA-insensitive.
///
/// ```rust
/// use abet_registry::normalize_domain;
///
/// assert_eq!(normalize_domain("WWW.Example.COM"), "example.com");
/// assert_eq!(normalize_domain(" site.com.br "), "site.com.br");
/// assert_eq!(normalize_domain("www.xn--apost-1qa.com.br"), "apostá.com.br");
/// ```
#[must_use]
pub fn normalize_domain(raw: &str) -> String {
    let mut domain = raw.trim().to_lowercase();

    if domain.split('.').any(|label| label.starts_with(ACE_PREFIX)) {
        // Invalid punycode is kept as written.
        if let (unicode, Ok(())) = idna::domain_to_unicode(&domain) {
            domain = unicode;
        }
    }

    let mut rest = domain.as_str();
    while let Some(stripped) = rest.strip_prefix(WWW_PREFIX) {
        rest = stripped;
    }
    rest.to_owned()
}

/// An immutable set of normalized domains.
///
/// The registry never mutates a published set; reloads build a new one and swap it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    domains: FxHashSet<String>,
}

impl DomainSet {
    /// Builds a set from raw entries, normalizing each and dropping empties.
    pub fn from_domains<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = entries
            .into_iter()
            .map(|entry| normalize_domain(entry.as_ref()))
            .filter(|domain| !domain.is_empty())
            .collect();
        Self { domains }
    }

    /// Parses a registry document: `{ "authorized_domains": ["a.com", ...] }`.
    ///
    /// A missing key yields an empty set. Non-string list items are skipped.
    ///
    /// # Errors
    /// * [`RegistryError::SourceMalformed`] when the bytes are not JSON.
    /// * [`RegistryError::UnexpectedShape`] when the root is not an object or the key
    ///   does not hold a list.
    pub fn from_document(bytes: &[u8]) -> Result<Self, RegistryError> {
        let document: Value =
            serde_json::from_slice(bytes).context("Decoding authorized domain list")?;

        let root = match document {
            Value::Object(root) => root,
            other => {
                return Err(RegistryError::UnexpectedShape {
                    message: format!("expected a JSON object, found {}", kind(&other)).into(),
                    context: None,
                });
            },
        };

        let Some(entries) = root.get(AUTHORIZED_DOMAINS_KEY) else {
            warn!(key = AUTHORIZED_DOMAINS_KEY, "Registry document has no domain list");
            return Ok(Self::default());
        };

        let Value::Array(entries) = entries else {
            return Err(RegistryError::UnexpectedShape {
                message: format!("'{AUTHORIZED_DOMAINS_KEY}' is {}, not a list", kind(entries))
                    .into(),
                context: None,
            });
        };

        let mut skipped = 0_usize;
        let set = Self::from_domains(entries.iter().filter_map(|entry| {
            let domain = entry.as_str();
            if domain.is_none() {
                skipped += 1;
            }
            domain
        }));

        if skipped > 0 {
            warn!(skipped, "Ignored non-string entries in authorized domain list");
        }

        Ok(set)
    }

    /// Membership test for an already-normalized domain.
    #[must_use]
    pub fn contains(&self, normalized: &str) -> bool {
        self.domains.contains(normalized)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Domains in lexical order, for stable diagnostics output.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.iter().collect();
        domains.sort_unstable();
        domains
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_after_normalization() {
        let set = DomainSet::from_document(br#"{"authorized_domains": ["site.com", "SITE.com"]}"#)
            .expect("valid document");
        assert_eq!(set.len(), 1);
        assert!(set.contains("site.com"));
    }

    #[test]
    fn every_leading_www_is_stripped() {
        assert_eq!(normalize_domain("www.www.example.com"), "example.com");
        assert_eq!(normalize_domain("WWW.www.Example.com"), "example.com");
        assert_eq!(normalize_domain("wwwexample.com"), "wwwexample.com");
        assert_eq!(normalize_domain("app.www.example.com"), "app.www.example.com");
    }

    #[test]
    fn punycode_and_unicode_forms_agree() {
        assert_eq!(normalize_domain("xn--apost-1qa.com.br"), "apostá.com.br");
        assert_eq!(normalize_domain("Apostá.com.br"), "apostá.com.br");
        assert_eq!(normalize_domain("xn--"), "xn--");

        let set = DomainSet::from_domains(["xn--apost-1qa.com.br", "apostá.com.br"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("apostá.com.br"));
    }

    #[test]
    fn non_string_items_are_skipped() {
        let set = DomainSet::from_document(br#"{"authorized_domains": ["a.com", 42, null, ""]}"#)
            .expect("valid document");
        assert_eq!(set.sorted(), vec!["a.com"]);
    }

    #[test]
    fn missing_key_is_empty() {
        let set = DomainSet::from_document(br#"{"domains": ["a.com"]}"#).expect("valid document");
        assert!(set.is_empty());
    }

    #[test]
    fn shape_errors_are_classified() {
        let err = DomainSet::from_document(br#"{"authorized_domains": "a.com"}"#).unwrap_err();
        assert_eq!(err.reason(), "unexpected_shape");

        let err = DomainSet::from_document(br#"["a.com"]"#).unwrap_err();
        assert_eq!(err.reason(), "unexpected_shape");

        let err = DomainSet::from_document(br#"{"authorized_domains": ["a.com"]"#).unwrap_err();
        assert_eq!(err.reason(), "source_malformed");
    }
}
