use analysis_lens::api::{CategoryFilter, DashboardTab};
use analysis_lens::ViewState;

#[test]
fn tabs_follow_dashboard_order() {
    let titles: Vec<&str> = DashboardTab::ALL.iter().map(|tab| tab.title()).collect();
    assert_eq!(
        titles,
        vec!["Sentiment", "Emotions", "Entities", "POS Tags", "Keywords", "Readability"]
    );
    assert_eq!(DashboardTab::PosTags.index(), 3);
    assert_eq!(DashboardTab::from_index(5), Some(DashboardTab::Readability));
    assert_eq!(DashboardTab::from_index(6), None);
}

#[test]
fn default_view_state_shows_everything() {
    let state = ViewState::default();
    assert_eq!(state.active_tab, DashboardTab::Sentiment);
    assert_eq!(state.pos_filter.category, CategoryFilter::All);
    assert!(state.pos_filter.search_term.is_empty());
}

#[test]
fn view_state_round_trips_through_json() {
    let state = ViewState::default()
        .with_search_term("run")
        .with_category_filter(CategoryFilter::from_toggle("VERB"))
        .with_active_tab(DashboardTab::PosTags);
    let json = state.to_json_pretty().expect("serialize");
    assert!(json.contains("\"pos_tags\""));
    assert_eq!(ViewState::from_json_str(&json).expect("parse"), state);
}

#[test]
fn empty_document_yields_default_state() {
    assert_eq!(
        ViewState::from_json_str("{}").expect("parse"),
        ViewState::default()
    );
}
