//! Scoring and verification results.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Named bucket of matched phrases supporting a risk judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Suspicious URL path segments (`afiliado`, `sponsored-content`, ...).
    UrlPattern,
    /// Betting brand names.
    Operator,
    /// Calls to action (`cadastre-se`, `bet now`, ...).
    Cta,
    /// Manipulative claims (`estratégia infalível`, `guaranteed win`, ...).
    Deceptive,
    /// Disclosure labels (`conteúdo patrocinado`, `paid partnership`, ...).
    Label,
}

impl Category {
    pub const ALL: [Self; 5] =
        [Self::UrlPattern, Self::Operator, Self::Cta, Self::Deceptive, Self::Label];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UrlPattern => "URL_PATTERN",
            Self::Operator => "OPERATOR",
            Self::Cta => "CTA",
            Self::Deceptive => "DECEPTIVE",
            Self::Label => "LABEL",
        }
    }

    #[must_use]
    pub const fn flag(self) -> CategorySet {
        match self {
            Self::UrlPattern => CategorySet::URL_PATTERN,
            Self::Operator => CategorySet::OPERATOR,
            Self::Cta => CategorySet::CTA,
            Self::Deceptive => CategorySet::DECEPTIVE,
            Self::Label => CategorySet::LABEL,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Compact set of the categories present in an [`Evidence`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CategorySet: u8 {
        const URL_PATTERN = 1 << 0;
        const OPERATOR = 1 << 1;
        const CTA = 1 << 2;
        const DECEPTIVE = 1 << 3;
        const LABEL = 1 << 4;
    }
}

/// Matched literals per category.
///
/// Built once per request and immutable afterwards. Every present category holds at
/// least one literal: empty match sets are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence(BTreeMap<Category, BTreeSet<String>>);

impl Evidence {
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.0.get(&category)
    }

    /// Literals matched for `category`, empty when the category is absent.
    pub fn literals(&self, category: Category) -> impl Iterator<Item = &str> {
        self.0.get(&category).into_iter().flatten().map(String::as_str)
    }

    #[must_use]
    pub fn categories(&self) -> CategorySet {
        self.0.keys().fold(CategorySet::empty(), |set, c| set | c.flag())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        self.0.iter().map(|(c, m)| (*c, m))
    }
}

impl FromIterator<(Category, BTreeSet<String>)> for Evidence {
    fn from_iter<I: IntoIterator<Item = (Category, BTreeSet<String>)>>(iter: I) -> Self {
        let mut map: BTreeMap<Category, BTreeSet<String>> = BTreeMap::new();
        for (category, matches) in iter.into_iter().filter(|(_, m)| !m.is_empty()) {
            map.entry(category).or_default().extend(matches);
        }
        Self(map)
    }
}

/// Coarse risk bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Moderate,
    High,
}

impl Tier {
    /// Lowest score classified as [`Tier::High`].
    pub const HIGH_MIN: u8 = 70;
    /// Lowest score classified as [`Tier::Moderate`].
    pub const MODERATE_MIN: u8 = 30;

    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_MIN {
            Self::High
        } else if score >= Self::MODERATE_MIN {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Always within `0..=100`.
    pub score: u8,
    pub tier: Tier,
    pub evidence: Evidence,
    /// The input URL, echoed verbatim.
    pub url: String,
}

/// Authorization status of one normalized domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainVerification {
    pub domain: String,
    pub is_authorized: bool,
}

impl DomainVerification {
    /// Result for inputs with nothing to look up.
    #[must_use]
    pub const fn empty() -> Self {
        Self { domain: String::new(), is_authorized: false }
    }
}
