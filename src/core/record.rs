use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::validation::validate_record;
use crate::error::{AnalysisError, AnalysisResult};

/// Three-way sentiment class assigned by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Pattern-based polarity/subjectivity scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextBlobSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: SentimentLabel,
}

/// Lexicon-based (VADER) compound score and class proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaderSentiment {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub sentiment: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u32,
}

/// One `(word, frequency)` entry shared by `keywords` and `wordcloud_data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub word: String,
    pub frequency: u32,
}

impl KeywordFrequency {
    #[must_use]
    pub fn new(word: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Named entity with character offsets into the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        label: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }

    /// Length of the entity surface text in characters.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosToken {
    pub token: String,
    pub pos: String,
    pub tag: String,
    pub dep: String,
}

impl PosToken {
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        pos: impl Into<String>,
        tag: impl Into<String>,
        dep: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            pos: pos.into(),
            tag: tag.into(),
            dep: dep.into(),
        }
    }
}

/// Readability formula outputs and raw text counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
    pub linsear_write_formula: f64,
    pub dale_chall_readability_score: f64,
    pub syllable_count: u32,
    pub lexicon_count: u32,
    pub sentence_count: u32,
    pub difficult_words: u32,
}

/// Full result of one text analysis as returned by the analysis service.
///
/// The record is immutable input for every deriver: it is replaced wholesale
/// on the next request and never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    pub language: String,
    pub textblob_sentiment: TextBlobSentiment,
    pub nltk_sentiment: VaderSentiment,
    pub emotions: IndexMap<String, f64>,
    pub emojis: Vec<EmojiCount>,
    pub keywords: Vec<KeywordFrequency>,
    pub wordcloud_data: Vec<KeywordFrequency>,
    pub entities: Vec<Entity>,
    pub pos_tags: Vec<PosToken>,
    pub readability: ReadabilityScores,
}

impl AnalysisRecord {
    /// Decodes and validates a service payload.
    ///
    /// Shape failures and invariant violations both surface as
    /// [`AnalysisError::MalformedRecord`].
    pub fn from_json_str(input: &str) -> AnalysisResult<Self> {
        let record: Self = serde_json::from_str(input).map_err(|e| {
            warn!(error = %e, "rejecting undecodable analysis payload");
            AnalysisError::MalformedRecord(format!("failed to parse analysis payload: {e}"))
        })?;
        record.validate()?;
        Ok(record)
    }

    /// Decodes an already-parsed JSON value, with the same checks as
    /// [`AnalysisRecord::from_json_str`].
    pub fn from_json_value(value: serde_json::Value) -> AnalysisResult<Self> {
        let record: Self = serde_json::from_value(value).map_err(|e| {
            warn!(error = %e, "rejecting undecodable analysis payload");
            AnalysisError::MalformedRecord(format!("failed to decode analysis payload: {e}"))
        })?;
        record.validate()?;
        Ok(record)
    }

    pub fn to_json_pretty(&self) -> AnalysisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AnalysisError::MalformedRecord(format!("failed to serialize analysis record: {e}"))
        })
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        validate_record(self)
    }
}
