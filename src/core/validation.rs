use std::collections::HashSet;

use tracing::warn;

use crate::core::record::{AnalysisRecord, KeywordFrequency, ReadabilityScores};
use crate::error::{AnalysisError, AnalysisResult};

/// Checks every record invariant and reports the first violation.
///
/// Out-of-range scores are rejected rather than clamped.
pub fn validate_record(record: &AnalysisRecord) -> AnalysisResult<()> {
    let result = validate_sentiments(record)
        .and_then(|()| validate_emotions(record))
        .and_then(|()| validate_emojis(record))
        .and_then(|()| validate_keyword_entries("keywords", &record.keywords))
        .and_then(|()| validate_keyword_entries("wordcloud_data", &record.wordcloud_data))
        .and_then(|()| validate_entities(record))
        .and_then(|()| validate_readability(&record.readability));

    if let Err(err) = &result {
        warn!(error = %err, "analysis record failed validation");
    }
    result
}

fn validate_sentiments(record: &AnalysisRecord) -> AnalysisResult<()> {
    let textblob = record.textblob_sentiment;
    let vader = record.nltk_sentiment;

    for (name, value, min) in [
        ("textblob_sentiment.polarity", textblob.polarity, -1.0),
        ("textblob_sentiment.subjectivity", textblob.subjectivity, 0.0),
        ("nltk_sentiment.compound", vader.compound, -1.0),
        ("nltk_sentiment.positive", vader.positive, 0.0),
        ("nltk_sentiment.negative", vader.negative, 0.0),
        ("nltk_sentiment.neutral", vader.neutral, 0.0),
    ] {
        check_bounded(name, value, min, 1.0)?;
    }
    Ok(())
}

fn validate_emotions(record: &AnalysisRecord) -> AnalysisResult<()> {
    for (emotion, score) in &record.emotions {
        check_bounded(&format!("emotions.{emotion}"), *score, 0.0, 1.0)?;
    }
    Ok(())
}

fn validate_emojis(record: &AnalysisRecord) -> AnalysisResult<()> {
    for (index, emoji) in record.emojis.iter().enumerate() {
        if emoji.emoji.is_empty() {
            return Err(AnalysisError::MalformedRecord(format!(
                "emojis[{index}].emoji must not be empty"
            )));
        }
        if emoji.count == 0 {
            return Err(AnalysisError::MalformedRecord(format!(
                "emojis[{index}].count must be >= 1"
            )));
        }
    }
    Ok(())
}

fn validate_keyword_entries(field: &str, entries: &[KeywordFrequency]) -> AnalysisResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.frequency == 0 {
            return Err(AnalysisError::MalformedRecord(format!(
                "{field}[{index}].frequency must be >= 1"
            )));
        }
        if !seen.insert(entry.word.as_str()) {
            return Err(AnalysisError::MalformedRecord(format!(
                "{field} contains duplicate word `{}`",
                entry.word
            )));
        }
    }
    Ok(())
}

fn validate_entities(record: &AnalysisRecord) -> AnalysisResult<()> {
    for (index, entity) in record.entities.iter().enumerate() {
        if entity.end <= entity.start {
            return Err(AnalysisError::MalformedRecord(format!(
                "entities[{index}] span must satisfy end > start (start={}, end={})",
                entity.start, entity.end
            )));
        }
    }
    Ok(())
}

fn validate_readability(scores: &ReadabilityScores) -> AnalysisResult<()> {
    for (name, value) in [
        ("flesch_reading_ease", scores.flesch_reading_ease),
        ("flesch_kincaid_grade", scores.flesch_kincaid_grade),
        ("gunning_fog", scores.gunning_fog),
        ("smog_index", scores.smog_index),
        (
            "automated_readability_index",
            scores.automated_readability_index,
        ),
        ("coleman_liau_index", scores.coleman_liau_index),
        ("linsear_write_formula", scores.linsear_write_formula),
        (
            "dale_chall_readability_score",
            scores.dale_chall_readability_score,
        ),
    ] {
        if !value.is_finite() {
            return Err(AnalysisError::MalformedRecord(format!(
                "readability.{name} must be finite"
            )));
        }
    }

    if scores.difficult_words > scores.lexicon_count {
        return Err(AnalysisError::MalformedRecord(format!(
            "readability.difficult_words ({}) exceeds lexicon_count ({})",
            scores.difficult_words, scores.lexicon_count
        )));
    }
    Ok(())
}

fn check_bounded(name: &str, value: f64, min: f64, max: f64) -> AnalysisResult<()> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(AnalysisError::MalformedRecord(format!(
            "{name} must be finite and in [{min}, {max}], got {value}"
        )));
    }
    Ok(())
}
