use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AnalysisRecord, SentimentLabel};
use crate::error::AnalysisResult;
use crate::render::VisualEncoding;

use super::{
    DashboardTab, DerivationConfig, EmotionView, EntityView, KeywordView, PosView,
    ReadabilityView, SentimentView, ViewState, derive_emotion_view, derive_entity_view,
    derive_keyword_view, derive_pos_view, derive_readability_view, derive_sentiment_view,
    encode_sentiment_label,
};

/// Headline figures shown above the tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub language: String,
    pub textblob_sentiment: SentimentLabel,
    pub textblob_encoding: VisualEncoding,
    pub vader_sentiment: SentimentLabel,
    pub vader_encoding: VisualEncoding,
    pub reading_ease_rounded: i64,
    pub entity_count: usize,
}

impl DashboardOverview {
    #[must_use]
    pub fn from_record(record: &AnalysisRecord) -> Self {
        Self {
            language: record.language.clone(),
            textblob_sentiment: record.textblob_sentiment.sentiment,
            textblob_encoding: encode_sentiment_label(record.textblob_sentiment.sentiment),
            vader_sentiment: record.nltk_sentiment.sentiment,
            vader_encoding: encode_sentiment_label(record.nltk_sentiment.sentiment),
            reading_ease_rounded: record.readability.flesch_reading_ease.round() as i64,
            entity_count: record.entities.len(),
        }
    }
}

/// Every derived view for one record, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDashboard {
    pub active_tab: DashboardTab,
    pub overview: DashboardOverview,
    pub sentiment: SentimentView,
    pub emotions: EmotionView,
    pub entities: EntityView,
    pub pos: PosView,
    pub keywords: KeywordView,
    pub readability: ReadabilityView,
}

impl AnalysisDashboard {
    /// Validates the record and config, then builds all views.
    ///
    /// A malformed record fails here before any view exists, so callers never
    /// see a partially derived dashboard.
    pub fn derive(
        record: &AnalysisRecord,
        config: &DerivationConfig,
        view_state: &ViewState,
    ) -> AnalysisResult<Self> {
        let config = config.validate()?;
        record.validate()?;

        let dashboard = build_views(record, &config, view_state);
        debug!(
            language = %record.language,
            active_tab = ?view_state.active_tab,
            "derived analysis dashboard"
        );
        Ok(dashboard)
    }

    /// Re-derives only the POS view for new filter criteria.
    ///
    /// Other views do not depend on view state and are kept as-is.
    #[must_use]
    pub fn with_view_state(mut self, record: &AnalysisRecord, view_state: &ViewState) -> Self {
        self.active_tab = view_state.active_tab;
        if self.pos.criteria != view_state.pos_filter {
            self.pos = derive_pos_view(&record.pos_tags, &view_state.pos_filter);
        }
        self
    }
}

#[cfg(not(feature = "parallel-derivation"))]
fn build_views(
    record: &AnalysisRecord,
    config: &DerivationConfig,
    view_state: &ViewState,
) -> AnalysisDashboard {
    AnalysisDashboard {
        active_tab: view_state.active_tab,
        overview: DashboardOverview::from_record(record),
        sentiment: derive_sentiment_view(&record.textblob_sentiment, &record.nltk_sentiment),
        emotions: derive_emotion_view(&record.emotions, &record.emojis, config.top_emotion_count),
        entities: derive_entity_view(&record.entities),
        pos: derive_pos_view(&record.pos_tags, &view_state.pos_filter),
        keywords: derive_keyword_view(&record.keywords, &record.wordcloud_data, config),
        readability: derive_readability_view(&record.readability),
    }
}

// Derivers share no state, so the heavier ones run on the rayon pool.
#[cfg(feature = "parallel-derivation")]
fn build_views(
    record: &AnalysisRecord,
    config: &DerivationConfig,
    view_state: &ViewState,
) -> AnalysisDashboard {
    let ((entities, pos), (keywords, emotions)) = rayon::join(
        || {
            rayon::join(
                || derive_entity_view(&record.entities),
                || derive_pos_view(&record.pos_tags, &view_state.pos_filter),
            )
        },
        || {
            rayon::join(
                || derive_keyword_view(&record.keywords, &record.wordcloud_data, config),
                || {
                    derive_emotion_view(
                        &record.emotions,
                        &record.emojis,
                        config.top_emotion_count,
                    )
                },
            )
        },
    );

    AnalysisDashboard {
        active_tab: view_state.active_tab,
        overview: DashboardOverview::from_record(record),
        sentiment: derive_sentiment_view(&record.textblob_sentiment, &record.nltk_sentiment),
        emotions,
        entities,
        pos,
        keywords,
        readability: derive_readability_view(&record.readability),
    }
}
