use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

use super::{CategoryFilter, PosFilterCriteria};

/// Dashboard panels in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Sentiment,
    Emotions,
    Entities,
    PosTags,
    Keywords,
    Readability,
}

impl DashboardTab {
    pub const ALL: [Self; 6] = [
        Self::Sentiment,
        Self::Emotions,
        Self::Entities,
        Self::PosTags,
        Self::Keywords,
        Self::Readability,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Sentiment => "Sentiment",
            Self::Emotions => "Emotions",
            Self::Entities => "Entities",
            Self::PosTags => "POS Tags",
            Self::Keywords => "Keywords",
            Self::Readability => "Readability",
        }
    }
}

/// Interactive session state owned by the rendering layer.
///
/// Derivers only ever read it; changing it never touches the record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub pos_filter: PosFilterCriteria,
    #[serde(default)]
    pub active_tab: DashboardTab,
}

impl ViewState {
    #[must_use]
    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.pos_filter.search_term = search_term.into();
        self
    }

    #[must_use]
    pub fn with_category_filter(mut self, category: CategoryFilter) -> Self {
        self.pos_filter.category = category;
        self
    }

    #[must_use]
    pub fn with_active_tab(mut self, tab: DashboardTab) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn to_json_pretty(&self) -> AnalysisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AnalysisError::InvalidConfig(format!("failed to serialize view state: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> AnalysisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AnalysisError::InvalidConfig(format!("failed to parse view state: {e}")))
    }
}
