//! # Advertorial Detector
//!
//! Flags undisclosed gambling advertorials and picks the educational card to show.
//!
//! A check runs three stateless stages over one shared [`Registry`]:
//!
//! 1. **Scoring ([`scorer`])**: weighted pattern rules ([`rules`]) over the URL and page text
//!    produce a score in `0..=100`, a risk tier, and categorized evidence.
//! 2. **Verification ([`verifier`])**: every distinct operator found in the evidence is
//!    normalized and looked up in the authorization registry.
//! 3. **Selection ([`education`])**: a fixed priority order picks exactly one card.
//!
//! Nothing in the pipeline fails at runtime: empty input scores zero, unparseable URLs fall
//! back to the raw string, and an unavailable registry authorizes nothing.
//!
//! ## Example
//!
//! ```rust
//! use abet_detector::{CheckRequest, Detector};
//! use abet_domain::analysis::Tier;
//! use abet_domain::education::EducationKey;
//! use abet_registry::{Registry, StaticSource};
//!
//! let registry = Registry::builder().source(StaticSource::new(["betano.bet.br"])).build();
//! let detector = Detector::build(registry).unwrap();
//!
//! let report = detector.check(&CheckRequest::new(
//!     "https://portal.com/afiliado/ganhe-dinheiro",
//!     "Estratégia infalível! Cadastre-se na Blaze agora.",
//! ));
//!
//! assert_eq!(report.tier, Tier::High);
//! assert_eq!(report.education.key, EducationKey::UnauthorizedOperator);
//! ```

pub mod education;
mod error;
pub mod pipeline;
pub mod rules;
pub mod scorer;
pub mod verifier;

pub use crate::error::{DetectorError, DetectorErrorExt};
pub use crate::pipeline::{CheckReport, CheckRequest};
use crate::scorer::Scorer;
use crate::verifier::DomainVerifier;
use abet_domain::analysis::{Category, DomainVerification, ScoreResult};
use abet_kernel::domain::registry::InitializedSlice;
use abet_registry::Registry;
use tracing::debug;

/// Detector feature state
#[abet_derive::abet_slice]
pub struct Detector {
    scorer: Scorer,
    verifier: DomainVerifier,
}

impl Detector {
    /// Compiles the rule table and binds the verifier to `registry`.
    ///
    /// The registry is not read here; it loads on the first verification.
    ///
    /// # Errors
    /// Returns [`DetectorError::Pattern`] if a rule does not compile.
    pub fn build(registry: Registry) -> Result<Self, DetectorError> {
        Ok(Self::new(DetectorInner {
            scorer: Scorer::new()?,
            verifier: DomainVerifier::new(registry),
        }))
    }

    #[must_use]
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    #[must_use]
    pub fn verifier(&self) -> &DomainVerifier {
        &self.verifier
    }

    #[must_use]
    pub fn score(&self, url: &str, text: &str) -> ScoreResult {
        self.scorer.score(url, text)
    }

    #[must_use]
    pub fn verify(&self, url: &str) -> DomainVerification {
        self.verifier.verify(url)
    }

    /// Runs score, verify and select for one page.
    #[must_use]
    pub fn check(&self, request: &CheckRequest) -> CheckReport {
        let ScoreResult { score, tier, evidence, url } =
            self.scorer.score(&request.url, &request.text_content);

        // Literals are already distinct and sorted.
        let domain_checks: Vec<DomainVerification> = evidence
            .literals(Category::Operator)
            .map(|operator| self.verifier.verify(operator))
            .collect();

        let education = education::select(&evidence, &domain_checks);

        debug!(
            url = %url,
            score,
            tier = %tier,
            operators = domain_checks.len(),
            education = ?education.key,
            "Check completed"
        );

        CheckReport { score, tier, evidence, domain_checks, education, url }
    }
}

/// Initialize the detector feature.
///
/// # Errors
/// Returns [`DetectorError::Pattern`] if a rule does not compile.
pub fn init(registry: &Registry) -> Result<InitializedSlice, DetectorError> {
    let slice = Detector::build(registry.clone())?;
    tracing::info!(rules = slice.scorer.rules().len(), "Detector slice initialized");
    Ok(InitializedSlice::new(slice))
}

