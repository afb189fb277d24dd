//! Advertorial scoring.

use crate::error::DetectorError;
use crate::rules::{Rule, compile_rules};
use abet_domain::analysis::{Evidence, ScoreResult, Tier};
use std::sync::Arc;
use tracing::trace;

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;

/// Stateless scorer over an immutable, shared rule table.
#[derive(Debug, Clone)]
pub struct Scorer {
    rules: Arc<[Rule]>,
}

impl Scorer {
    /// Compiles the built-in rule table.
    ///
    /// # Errors
    /// Returns [`DetectorError::Pattern`] if a rule pattern does not compile.
    pub fn new() -> Result<Self, DetectorError> {
        Ok(Self::with_rules(compile_rules()?))
    }

    #[must_use]
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules: rules.into() }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Scores a page. Never fails: empty inputs simply match nothing.
    ///
    /// `URL_PATTERN` rules run against `url`, every other rule against `text`. Each category
    /// with at least one match adds its contribution; the sum is clamped to [`MAX_SCORE`].
    #[must_use]
    pub fn score(&self, url: &str, text: &str) -> ScoreResult {
        let mut total: u32 = 0;

        let evidence: Evidence = self
            .rules
            .iter()
            .map(|rule| {
                let haystack = if rule.targets_url() { url } else { text };
                let matches = rule.matches(haystack);
                let contribution = rule.contribution(matches.len());
                if contribution > 0 {
                    trace!(
                        category = %rule.category,
                        matches = matches.len(),
                        contribution,
                        "Rule matched"
                    );
                }
                total = total.saturating_add(contribution);
                (rule.category, matches)
            })
            .collect();

        let score = u8::try_from(total.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE);

        ScoreResult { score, tier: Tier::from_score(score), evidence, url: url.to_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abet_domain::analysis::Category;

    fn scorer() -> Scorer {
        Scorer::new().expect("rules compile")
    }

    #[test]
    fn empty_input_scores_zero() {
        let result = scorer().score("", "");
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, Tier::Low);
        assert!(result.evidence.is_empty());
        assert_eq!(result.url, "");
    }

    #[test]
    fn url_rules_ignore_text_and_text_rules_ignore_url() {
        let s = scorer();

        let from_text = s.score("https://example.com/", "leia nosso afiliado");
        assert!(!from_text.evidence.contains(Category::UrlPattern));

        let from_url = s.score("https://example.com/blaze/cadastre-se", "");
        assert!(!from_url.evidence.contains(Category::Operator));
        assert!(!from_url.evidence.contains(Category::Cta));
    }

    #[test]
    fn contributions_add_up() {
        // CTA: 20 + 5 * 2, LABEL: 15.
        let result = scorer().score("", "Cadastre-se e jogue agora! Conteúdo patrocinado.");
        assert_eq!(result.score, 45);
        assert_eq!(result.tier, Tier::Moderate);
        assert_eq!(result.evidence.len(), 2);
    }

    #[test]
    fn repeated_literal_counts_once() {
        let once = scorer().score("", "blaze");
        let thrice = scorer().score("", "Blaze, BLAZE e blaze");
        assert_eq!(once.score, 27);
        assert_eq!(thrice.score, once.score);
    }

    #[test]
    fn total_is_clamped() {
        let text = "Estratégia infalível, como ganhar sempre, hack do tigrinho, ganhe fácil, \
                    dinheiro rápido. Cadastre-se na Blaze e na Betano.";
        let result = scorer().score("https://x.com/publieditorial", text);
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.tier, Tier::High);
    }
}
