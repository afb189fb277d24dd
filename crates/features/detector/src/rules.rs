//! The weighted pattern rules behind the advertorial score.
//!
//! Each [`Category`] has one rule: a word-bounded, case-insensitive alternation of known
//! phrases (Portuguese first, English second), a base weight added once when anything
//! matches, and an optional bonus per distinct matched phrase.
//!
//! | category      | base | bonus per distinct match |
//! |---------------|------|--------------------------|
//! | `URL_PATTERN` | 15   | -                        |
//! | `OPERATOR`    | 25   | 2                        |
//! | `CTA`         | 20   | 5                        |
//! | `DECEPTIVE`   | 40   | 10                       |
//! | `LABEL`       | 15   | -                        |

use crate::error::{DetectorError, DetectorErrorExt};
use abet_domain::analysis::Category;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Static description of a rule before its pattern is compiled.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub category: Category,
    pub phrases: &'static [&'static str],
    pub base_weight: u32,
    pub per_match_bonus: Option<u32>,
}

/// The rule table. Order is irrelevant to the score.
pub const RULE_SPECS: [RuleSpec; 5] = [
    RuleSpec {
        category: Category::UrlPattern,
        phrases: &[
            "conteudo-patrocinado",
            "publieditorial",
            "publi",
            "branded",
            "afiliado",
            "parceria",
            "advertorial",
            "sponsored-content",
            "sponsored",
            "affiliate",
        ],
        base_weight: 15,
        per_match_bonus: None,
    },
    RuleSpec {
        category: Category::Operator,
        phrases: &[
            "bet365",
            "1xbet",
            "betano",
            "pixbet",
            "sportingbet",
            "superbet",
            "betfair",
            "estrelabet",
            "novibet",
            "leovegas",
            "blaze",
            "stake",
            "kto",
        ],
        base_weight: 25,
        per_match_bonus: Some(2),
    },
    RuleSpec {
        category: Category::Cta,
        phrases: &[
            "cadastre-se",
            "ganhe bônus",
            "aposte agora",
            "deposite aqui",
            "jogue agora",
            "sign up",
            "claim your bonus",
            "claim bonus",
            "bet now",
            "play now",
            "deposit now",
        ],
        base_weight: 20,
        per_match_bonus: Some(5),
    },
    RuleSpec {
        category: Category::Deceptive,
        phrases: &[
            "estratégia infalível",
            "como ganhar sempre",
            "hack do tigrinho",
            "ganhe fácil",
            "dinheiro rápido",
            "guaranteed win",
            "infallible strategy",
            "easy money",
            "never lose",
            "can't lose",
        ],
        base_weight: 40,
        per_match_bonus: Some(10),
    },
    RuleSpec {
        category: Category::Label,
        phrases: &[
            "conteúdo patrocinado",
            "parceria paga",
            "publieditorial",
            "publi",
            "advertorial",
            "branded content",
            "sponsored content",
            "paid partnership",
        ],
        base_weight: 15,
        per_match_bonus: None,
    },
];

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub pattern: Regex,
    pub base_weight: u32,
    pub per_match_bonus: Option<u32>,
}

impl Rule {
    /// Compiles `spec` into a single alternation; longer phrases are tried first.
    ///
    /// # Errors
    /// Returns [`DetectorError::Pattern`] if the pattern does not compile.
    pub fn compile(spec: &RuleSpec) -> Result<Self, DetectorError> {
        let mut phrases = spec.phrases.to_vec();
        phrases.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));

        let alternation =
            phrases.iter().map(|p| regex::escape(p)).collect::<Vec<_>>().join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .unicode(true)
            .build()
            .context(format!("Compiling {} rule", spec.category))?;

        Ok(Self {
            category: spec.category,
            pattern,
            base_weight: spec.base_weight,
            per_match_bonus: spec.per_match_bonus,
        })
    }

    /// Distinct case-folded literals of `haystack` matched by this rule.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> BTreeSet<String> {
        self.pattern.find_iter(haystack).map(|m| m.as_str().to_lowercase()).collect()
    }

    /// Score added for `distinct` matches: nothing for zero, otherwise the base weight
    /// plus the bonus for every distinct match.
    #[must_use]
    pub fn contribution(&self, distinct: usize) -> u32 {
        if distinct == 0 {
            return 0;
        }
        let count = u32::try_from(distinct).unwrap_or(u32::MAX);
        let bonus = self.per_match_bonus.unwrap_or(0).saturating_mul(count);
        self.base_weight.saturating_add(bonus)
    }

    /// Whether this rule looks at the URL rather than the body text.
    #[must_use]
    pub const fn targets_url(&self) -> bool {
        matches!(self.category, Category::UrlPattern)
    }
}

/// Compiles the full [`RULE_SPECS`] table.
///
/// # Errors
/// Returns [`DetectorError::Pattern`] for the first rule that fails to compile.
pub fn compile_rules() -> Result<Vec<Rule>, DetectorError> {
    RULE_SPECS.iter().map(Rule::compile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: Category) -> Rule {
        let spec = RULE_SPECS.iter().find(|s| s.category == category).expect("spec");
        Rule::compile(spec).expect("compiles")
    }

    #[test]
    fn every_category_has_one_rule() {
        let rules = compile_rules().expect("compiles");
        for category in Category::ALL {
            assert_eq!(rules.iter().filter(|r| r.category == category).count(), 1, "{category}");
        }
    }

    #[test]
    fn matches_are_word_bounded_and_case_folded() {
        let operator = rule(Category::Operator);

        let found = operator.matches("Jogue na BLAZE ou na Betano, nunca na blazer.");
        assert_eq!(found, BTreeSet::from(["blaze".to_owned(), "betano".to_owned()]));
        assert!(operator.matches("alphabet soup").is_empty());
    }

    #[test]
    fn accented_phrases_fold_case() {
        let deceptive = rule(Category::Deceptive);
        let found = deceptive.matches("A ESTRATÉGIA INFALÍVEL do momento");
        assert_eq!(found, BTreeSet::from(["estratégia infalível".to_owned()]));
    }

    #[test]
    fn longer_phrase_wins_over_prefix() {
        let cta = rule(Category::Cta);
        let found = cta.matches("Claim your bonus today");
        assert_eq!(found, BTreeSet::from(["claim your bonus".to_owned()]));
    }

    #[test]
    fn contribution_applies_bonus_per_distinct_match() {
        assert_eq!(rule(Category::Operator).contribution(0), 0);
        assert_eq!(rule(Category::Operator).contribution(1), 27);
        assert_eq!(rule(Category::Cta).contribution(2), 30);
        assert_eq!(rule(Category::Deceptive).contribution(3), 70);
        assert_eq!(rule(Category::Label).contribution(4), 15);
        assert_eq!(rule(Category::UrlPattern).contribution(2), 15);
    }
}
