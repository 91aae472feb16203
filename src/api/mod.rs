//! Pure derivers turning an [`AnalysisRecord`](crate::core::AnalysisRecord)
//! into display-ready views.

mod dashboard;
mod derivation_config;
mod emotion_deriver;
mod entity_aggregator;
mod json_contract;
mod keyword_deriver;
mod pos_filter;
mod readability_classifier;
mod request;
mod sentiment_encoder;
mod view_state;

pub use dashboard::{AnalysisDashboard, DashboardOverview};
pub use derivation_config::{
    DEFAULT_HIGHLIGHTED_KEYWORD_COUNT, DEFAULT_TOP_EMOTION_COUNT, DEFAULT_TOP_KEYWORD_LIMIT,
    DEFAULT_WORD_CLOUD_HUE_STEP_DEGREES, DEFAULT_WORD_CLOUD_MAX_SIZE, DEFAULT_WORD_CLOUD_MIN_SIZE,
    DEFAULT_WORD_CLOUD_OPACITY_FLOOR, DerivationConfig,
};
pub use emotion_deriver::{
    EmojiSummary, EmotionRow, EmotionView, RankedEmotion, TopEmotions, derive_emotion_view,
    emoji_summary, emotion_rows, top_emotions,
};
pub use entity_aggregator::{
    EntityDistributionRow, EntityGroups, EntitySummary, EntityView, derive_entity_view,
    entity_distribution, group_entities, summarize_entities,
};
pub use json_contract::{DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshotJsonContractV1};
pub use keyword_deriver::{
    KeywordStatistics, KeywordTag, KeywordView, RankedKeyword, WordCloudEntry,
    derive_keyword_view, keyword_statistics, keyword_tags, top_keywords, word_cloud_layout,
};
pub use pos_filter::{
    CategoryFilter, PosCategoryStat, PosFilterCriteria, PosView, category_counts,
    category_percentage, derive_pos_view, distinct_categories, filter_tokens,
};
pub use readability_classifier::{
    FleschLevel, ReadabilityBand, ReadabilityMetric, ReadabilityMetricRow, ReadabilityView,
    TextStatistic, classify_all, classify_metric, complexity_note, derive_readability_view,
    difficult_word_percentage, text_statistics,
};
pub use request::{
    AnalysisRequest, BatchAnalysisRequest, BatchAnalysisResponse, BatchSentimentRow,
    HealthStatus, NO_TEXTS_MESSAGE, ServiceErrorPayload,
};
pub use sentiment_encoder::{
    ChartDatum, NEGATIVE_SLICE_COLOR, NEUTRAL_SLICE_COLOR, POLARITY_BAR_COLOR,
    POSITIVE_SLICE_COLOR, SUBJECTIVITY_BAR_COLOR, SentimentView, TextBlobPanel, VaderPanel,
    derive_sentiment_view, encode_sentiment, encode_sentiment_label,
};
pub use view_state::{DashboardTab, ViewState};
