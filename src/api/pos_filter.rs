use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PosCategory, PosToken};
use crate::render::{PosEncoding, pos_encoding};

/// Either every category or exactly one category code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "code")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parses the toggle value used by the dashboard (`"all"` or a code).
    #[must_use]
    pub fn from_toggle(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_owned())
        }
    }

    #[must_use]
    pub fn matches(&self, pos: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(code) => code == pos,
        }
    }
}

/// Search text plus category filter for the token table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PosFilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

impl PosFilterCriteria {
    #[must_use]
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    fn matcher(&self) -> TokenMatcher<'_> {
        TokenMatcher {
            needle: self.search_term.to_lowercase(),
            category: &self.category,
        }
    }
}

struct TokenMatcher<'a> {
    needle: String,
    category: &'a CategoryFilter,
}

impl TokenMatcher<'_> {
    fn matches(&self, token: &PosToken) -> bool {
        let matches_search = self.needle.is_empty()
            || token.token.to_lowercase().contains(&self.needle)
            || token.pos.to_lowercase().contains(&self.needle);
        matches_search && self.category.matches(&token.pos)
    }
}

/// Count and share of one category over the whole token stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosCategoryStat {
    pub code: String,
    pub encoding: PosEncoding,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosView {
    pub criteria: PosFilterCriteria,
    pub filtered_tokens: Vec<PosToken>,
    pub distinct_categories: Vec<String>,
    /// Computed over all tokens, independent of `criteria`.
    pub category_stats: Vec<PosCategoryStat>,
    pub total_tokens: usize,
}

/// Returns matching tokens in their original order.
#[must_use]
pub fn filter_tokens(tokens: &[PosToken], criteria: &PosFilterCriteria) -> Vec<PosToken> {
    let matcher = criteria.matcher();
    tokens
        .iter()
        .filter(|token| matcher.matches(token))
        .cloned()
        .collect()
}

/// Category codes in first-seen order.
#[must_use]
pub fn distinct_categories(tokens: &[PosToken]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| token.pos.as_str())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[must_use]
pub fn category_counts(tokens: &[PosToken]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for token in tokens {
        *counts.entry(token.pos.clone()).or_insert(0) += 1;
    }
    counts
}

/// Share of `code` among `total` tokens, in percent; `None` when there are no tokens.
#[must_use]
pub fn category_percentage(
    counts: &IndexMap<String, usize>,
    total: usize,
    code: &str,
) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let count = counts.get(code).copied().unwrap_or(0);
    Some(count as f64 / total as f64 * 100.0)
}

#[must_use]
pub fn derive_pos_view(tokens: &[PosToken], criteria: &PosFilterCriteria) -> PosView {
    let total_tokens = tokens.len();
    let counts = category_counts(tokens);
    let category_stats = counts
        .iter()
        .map(|(code, count)| PosCategoryStat {
            code: code.clone(),
            encoding: pos_encoding(&PosCategory::from_code(code)),
            count: *count,
            percentage: category_percentage(&counts, total_tokens, code).unwrap_or(0.0),
        })
        .collect();
    let filtered_tokens = filter_tokens(tokens, criteria);
    debug!(
        total_tokens,
        filtered = filtered_tokens.len(),
        categories = counts.len(),
        "derived pos view"
    );

    PosView {
        criteria: criteria.clone(),
        filtered_tokens,
        distinct_categories: distinct_categories(tokens),
        category_stats,
        total_tokens,
    }
}
