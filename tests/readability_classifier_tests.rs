use analysis_lens::api::{
    FleschLevel, ReadabilityBand, ReadabilityMetric, classify_all, classify_metric,
    complexity_note, derive_readability_view, difficult_word_percentage,
};
use analysis_lens::core::ReadabilityScores;
use analysis_lens::render::ColorClass;
use approx::assert_relative_eq;

fn scores() -> ReadabilityScores {
    ReadabilityScores {
        flesch_reading_ease: 62.3,
        flesch_kincaid_grade: 8.0,
        gunning_fog: 12.0,
        smog_index: 10.5,
        automated_readability_index: 7.2,
        coleman_liau_index: 13.1,
        linsear_write_formula: 9.0,
        dale_chall_readability_score: 7.5,
        syllable_count: 140,
        lexicon_count: 100,
        sentence_count: 6,
        difficult_words: 12,
    }
}

#[test]
fn flesch_level_boundaries_are_inclusive_on_lower_bound() {
    assert_eq!(FleschLevel::from_score(90.0), FleschLevel::VeryEasy);
    assert_eq!(FleschLevel::from_score(89.999), FleschLevel::Easy);
    assert_eq!(FleschLevel::from_score(80.0), FleschLevel::Easy);
    assert_eq!(FleschLevel::from_score(70.0), FleschLevel::FairlyEasy);
    assert_eq!(FleschLevel::from_score(60.0), FleschLevel::Standard);
    assert_eq!(FleschLevel::from_score(50.0), FleschLevel::FairlyDifficult);
    assert_eq!(FleschLevel::from_score(30.0), FleschLevel::Difficult);
    assert_eq!(FleschLevel::from_score(29.9), FleschLevel::VeryDifficult);
    assert_eq!(FleschLevel::from_score(-12.0), FleschLevel::VeryDifficult);
}

#[test]
fn flesch_level_labels_and_colors() {
    assert_eq!(FleschLevel::from_score(60.0).label(), "Standard");
    assert_eq!(FleschLevel::from_score(95.0).label(), "Very Easy");
    assert_eq!(FleschLevel::from_score(55.0).label(), "Fairly Difficult");
    assert_eq!(FleschLevel::from_score(75.0).color_class(), ColorClass::Success);
    assert_eq!(FleschLevel::from_score(65.0).color_class(), ColorClass::Warning);
    assert_eq!(FleschLevel::from_score(35.0).color_class(), ColorClass::Error);
}

#[test]
fn reading_ease_band_is_higher_is_simpler() {
    let metric = ReadabilityMetric::FleschReadingEase;
    assert_eq!(classify_metric(metric, 60.0), ReadabilityBand::Good);
    assert_eq!(classify_metric(metric, 59.9), ReadabilityBand::Moderate);
    assert_eq!(classify_metric(metric, 30.0), ReadabilityBand::Moderate);
    assert_eq!(classify_metric(metric, 29.9), ReadabilityBand::Difficult);
}

#[test]
fn grade_metrics_use_eight_and_twelve_thresholds() {
    for metric in [
        ReadabilityMetric::FleschKincaidGrade,
        ReadabilityMetric::GunningFog,
        ReadabilityMetric::AutomatedReadabilityIndex,
        ReadabilityMetric::ColemanLiauIndex,
        ReadabilityMetric::LinsearWriteFormula,
    ] {
        assert_eq!(classify_metric(metric, 8.0), ReadabilityBand::Good);
        assert_eq!(classify_metric(metric, 12.0), ReadabilityBand::Moderate);
        assert_eq!(classify_metric(metric, 12.5), ReadabilityBand::Difficult);
    }
}

#[test]
fn smog_and_dale_chall_use_their_own_thresholds() {
    let smog = ReadabilityMetric::SmogIndex;
    assert_eq!(classify_metric(smog, 6.0), ReadabilityBand::Good);
    assert_eq!(classify_metric(smog, 10.0), ReadabilityBand::Moderate);
    assert_eq!(classify_metric(smog, 10.1), ReadabilityBand::Difficult);

    let dale_chall = ReadabilityMetric::DaleChallReadabilityScore;
    assert_eq!(classify_metric(dale_chall, 6.0), ReadabilityBand::Good);
    assert_eq!(classify_metric(dale_chall, 8.0), ReadabilityBand::Moderate);
    assert_eq!(classify_metric(dale_chall, 8.1), ReadabilityBand::Difficult);
}

#[test]
fn classify_all_covers_eight_metrics_in_display_order() {
    let rows = classify_all(&scores());
    let bands: Vec<ReadabilityBand> = rows.iter().map(|row| row.band).collect();

    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].name, "Flesch Reading Ease");
    assert_relative_eq!(rows[0].grade, 8.0);
    assert_eq!(
        bands,
        vec![
            ReadabilityBand::Good,
            ReadabilityBand::Good,
            ReadabilityBand::Moderate,
            ReadabilityBand::Difficult,
            ReadabilityBand::Good,
            ReadabilityBand::Difficult,
            ReadabilityBand::Moderate,
            ReadabilityBand::Moderate,
        ]
    );
}

#[test]
fn difficult_word_percentage_is_guarded_for_zero_words() {
    assert_relative_eq!(difficult_word_percentage(&scores()).expect("percentage"), 12.0);

    let mut empty = scores();
    empty.lexicon_count = 0;
    empty.difficult_words = 0;
    assert_eq!(difficult_word_percentage(&empty), None);
}

#[test]
fn readability_view_collects_statistics_and_notes() {
    let view = derive_readability_view(&scores());

    assert_eq!(view.flesch_level, FleschLevel::Standard);
    assert_eq!(view.complexity_note, complexity_note(62.3));
    assert_eq!(
        view.complexity_note,
        "It should be easily understood by most readers."
    );
    let names: Vec<&str> = view.text_statistics.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Syllables", "Words", "Sentences", "Difficult Words"]);
    assert_eq!(view.text_statistics[1].value, 100);
}

#[test]
fn band_labels_and_colors() {
    assert_eq!(ReadabilityBand::Good.label(), "Good");
    assert_eq!(ReadabilityBand::Moderate.color_class(), ColorClass::Warning);
    assert_eq!(ReadabilityBand::Difficult.color_class(), ColorClass::Error);
}
