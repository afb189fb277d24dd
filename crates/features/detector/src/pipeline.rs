//! Request and report types of the check pipeline.

use crate::error::{DetectorError, DetectorErrorExt};
use abet_domain::analysis::{DomainVerification, Evidence, Tier};
use abet_domain::education::EducationMessage;
use serde::{Deserialize, Serialize};

/// One page to check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub url: String,
    #[serde(default)]
    pub text_content: String,
}

impl CheckRequest {
    pub fn new(url: impl Into<String>, text_content: impl Into<String>) -> Self {
        Self { url: url.into(), text_content: text_content.into() }
    }

    /// Decodes a `{ "url": ..., "text_content": ... }` document.
    ///
    /// # Errors
    /// Returns [`DetectorError::Json`] if the document is not a valid request.
    pub fn from_json(json: &str) -> Result<Self, DetectorError> {
        serde_json::from_str(json).context("Decoding check request")
    }
}

/// Full outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub score: u8,
    pub tier: Tier,
    pub evidence: Evidence,
    pub domain_checks: Vec<DomainVerification>,
    pub education: &'static EducationMessage,
    /// The request URL, echoed verbatim.
    pub url: String,
}

impl CheckReport {
    /// Encodes the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`DetectorError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, DetectorError> {
        serde_json::to_string_pretty(self).context("Encoding check report")
    }
}
