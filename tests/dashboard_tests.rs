use analysis_lens::api::{
    CategoryFilter, DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardTab, DerivationConfig,
};
use analysis_lens::render::{ColorClass, IconKind};
use analysis_lens::{AnalysisDashboard, AnalysisError, AnalysisRecord, ViewState};
use approx::assert_relative_eq;

const SAMPLE: &str = include_str!("fixtures/sample_analysis.json");

fn sample_record() -> AnalysisRecord {
    AnalysisRecord::from_json_str(SAMPLE).expect("valid record")
}

fn derive_default(record: &AnalysisRecord) -> AnalysisDashboard {
    AnalysisDashboard::derive(record, &DerivationConfig::default(), &ViewState::default())
        .expect("dashboard derives")
}

#[test]
fn overview_reflects_record_headline_figures() {
    let dashboard = derive_default(&sample_record());
    let overview = &dashboard.overview;

    assert_eq!(overview.language, "en");
    assert_eq!(overview.reading_ease_rounded, 76);
    assert_eq!(overview.entity_count, 4);
    assert_eq!(overview.textblob_encoding.color, ColorClass::Success);
    assert_eq!(overview.vader_encoding.icon, IconKind::SentimentPositive);
    assert_eq!(dashboard.active_tab, DashboardTab::Sentiment);
}

#[test]
fn every_view_is_derived_from_the_sample() {
    let dashboard = derive_default(&sample_record());

    let group_codes: Vec<&str> = dashboard.entities.groups.keys().map(String::as_str).collect();
    assert_eq!(group_codes, vec!["GPE", "ORG", "DATE"]);
    assert_eq!(dashboard.entities.summary.most_common_type_count, 2);
    assert_relative_eq!(
        dashboard.entities.summary.avg_entity_length.expect("entities present"),
        6.25
    );

    assert_eq!(dashboard.pos.total_tokens, 13);
    assert_eq!(dashboard.pos.filtered_tokens.len(), 13);
    assert_eq!(dashboard.pos.category_stats[0].code, "PROPN");
    assert_eq!(dashboard.pos.category_stats[0].count, 5);

    let stats = dashboard.keywords.statistics.expect("keywords present");
    assert_eq!(stats.total_occurrences, 9);
    assert_eq!(stats.max_frequency, 2);
    assert_relative_eq!(dashboard.keywords.word_cloud[0].size, 48.0);
    assert_relative_eq!(dashboard.keywords.word_cloud[1].size, 24.0);
    assert_relative_eq!(dashboard.keywords.word_cloud[1].opacity, 0.65, epsilon = 1e-12);

    assert_eq!(dashboard.emotions.top[0].name, "Joy");
    assert_eq!(dashboard.emotions.top.len(), 3);
    assert_eq!(dashboard.emotions.emojis.total, 2);

    assert_eq!(dashboard.readability.metrics.len(), 8);
    assert_eq!(dashboard.readability.flesch_level.label(), "Fairly Easy");
}

#[test]
fn malformed_record_fails_before_any_view_is_built() {
    let mut record = sample_record();
    record.nltk_sentiment.compound = -1.2;

    let err =
        AnalysisDashboard::derive(&record, &DerivationConfig::default(), &ViewState::default())
            .expect_err("out-of-range compound must fail");
    assert!(matches!(err, AnalysisError::MalformedRecord(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let config = DerivationConfig::default().with_word_cloud_size_range(40.0, 10.0);
    let err = AnalysisDashboard::derive(&sample_record(), &config, &ViewState::default())
        .expect_err("inverted size range must fail");
    assert!(matches!(err, AnalysisError::InvalidConfig(_)));
}

#[test]
fn view_state_change_only_rederives_pos_view() {
    let record = sample_record();
    let dashboard = derive_default(&record);
    let before = dashboard.clone();

    let view_state = ViewState::default()
        .with_category_filter(CategoryFilter::from_toggle("PROPN"))
        .with_search_term("par")
        .with_active_tab(DashboardTab::PosTags);
    let updated = dashboard.with_view_state(&record, &view_state);

    let words: Vec<&str> = updated.pos.filtered_tokens.iter().map(|t| t.token.as_str()).collect();
    assert_eq!(words, vec!["Paris", "Paris"]);
    assert_eq!(updated.active_tab, DashboardTab::PosTags);
    assert_eq!(updated.pos.category_stats, before.pos.category_stats);
    assert_eq!(updated.keywords, before.keywords);
    assert_eq!(updated.sentiment, before.sentiment);
}

#[test]
fn incremental_update_matches_full_derivation() {
    let record = sample_record();
    let view_state = ViewState::default().with_category_filter(CategoryFilter::from_toggle("ADJ"));

    let incremental = derive_default(&record).with_view_state(&record, &view_state);
    let full = AnalysisDashboard::derive(&record, &DerivationConfig::default(), &view_state)
        .expect("dashboard derives");
    assert_eq!(incremental, full);
}

#[test]
fn derivation_is_deterministic() {
    let record = sample_record();
    assert_eq!(derive_default(&record), derive_default(&record));
}

#[test]
fn snapshot_contract_v1_round_trips() {
    let dashboard = derive_default(&sample_record());
    let json = dashboard
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains(&format!(
        "\"schema_version\": {DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1}"
    )));

    let restored = AnalysisDashboard::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, dashboard);

    let bare = dashboard.to_json_pretty().expect("serialize bare");
    let restored_bare = AnalysisDashboard::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored_bare, dashboard);
}

#[test]
fn unsupported_snapshot_version_is_rejected() {
    let dashboard = derive_default(&sample_record());
    let json = dashboard
        .to_json_contract_v1_pretty()
        .expect("serialize contract")
        .replacen("\"schema_version\": 1", "\"schema_version\": 2", 1);

    let err = AnalysisDashboard::from_json_compat_str(&json).expect_err("version 2 unsupported");
    assert!(err.to_string().contains("unsupported dashboard snapshot schema version: 2"));
}
