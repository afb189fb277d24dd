//! Picks the one educational card to show for a page.

use abet_domain::analysis::{Category, DomainVerification, Evidence};
use abet_domain::education::{EducationKey, EducationMessage};

/// Selection priority, most severe first.
///
/// 1. any unverified operator domain
/// 2. deceptive claims
/// 3. calls to action
/// 4. operator mentions
/// 5. the default card
#[must_use]
pub fn select_key(evidence: &Evidence, authorizations: &[DomainVerification]) -> EducationKey {
    if authorizations.iter().any(|v| !v.is_authorized) {
        EducationKey::UnauthorizedOperator
    } else if evidence.contains(Category::Deceptive) {
        EducationKey::Deceptive
    } else if evidence.contains(Category::Cta) {
        EducationKey::Cta
    } else if evidence.contains(Category::Operator) {
        EducationKey::Operator
    } else {
        EducationKey::Default
    }
}

/// Returns exactly one catalog card for the given evidence and authorization results.
#[must_use]
pub fn select(
    evidence: &Evidence,
    authorizations: &[DomainVerification],
) -> &'static EducationMessage {
    EducationMessage::for_key(select_key(evidence, authorizations))
}
