use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::KeywordFrequency;
use crate::render::HslColor;

use super::DerivationConfig;

/// Keyword with its 1-based position in the caller-supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub rank: usize,
    pub word: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeywordStatistics {
    pub unique_count: usize,
    pub total_occurrences: u64,
    pub max_frequency: u32,
    pub avg_frequency: f64,
}

/// Visual weight of one word-cloud word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub word: String,
    pub frequency: u32,
    pub size: f64,
    pub opacity: f64,
    pub hue: f64,
}

impl WordCloudEntry {
    #[must_use]
    pub fn color(&self) -> HslColor {
        HslColor::word_cloud(self.hue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTag {
    pub word: String,
    pub frequency: u32,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordView {
    pub top_keywords: Vec<RankedKeyword>,
    /// `None` when the record carries no keywords.
    pub statistics: Option<KeywordStatistics>,
    pub word_cloud: Vec<WordCloudEntry>,
    pub tags: Vec<KeywordTag>,
}

/// Takes the first `limit` keywords as given; the service already sorts them.
#[must_use]
pub fn top_keywords(keywords: &[KeywordFrequency], limit: usize) -> Vec<RankedKeyword> {
    keywords
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, keyword)| RankedKeyword {
            rank: index + 1,
            word: keyword.word.clone(),
            frequency: keyword.frequency,
        })
        .collect()
}

#[must_use]
pub fn keyword_statistics(keywords: &[KeywordFrequency]) -> Option<KeywordStatistics> {
    let max_frequency = keywords.iter().map(|k| k.frequency).max()?;
    let unique_count = keywords.len();
    let total_occurrences: u64 = keywords.iter().map(|k| u64::from(k.frequency)).sum();

    Some(KeywordStatistics {
        unique_count,
        total_occurrences,
        max_frequency,
        avg_frequency: total_occurrences as f64 / unique_count as f64,
    })
}

/// Computes size, opacity and hue for every word-cloud entry.
///
/// - `size = max(min_size, freq / max_freq * max_size)`
/// - `opacity = floor + freq / max_freq * (1 - floor)`
/// - `hue = index * hue_step mod 360`
///
/// Returns an empty layout when the input is empty or every frequency is zero.
#[must_use]
pub fn word_cloud_layout(
    entries: &[KeywordFrequency],
    config: &DerivationConfig,
) -> Vec<WordCloudEntry> {
    let max_frequency = entries.iter().map(|e| e.frequency).max().unwrap_or(0);
    if max_frequency == 0 {
        trace!(entries = entries.len(), "word cloud has no positive frequency");
        return Vec::new();
    }
    let max_frequency = f64::from(max_frequency);
    let floor = config.word_cloud_opacity_floor;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let ratio = f64::from(entry.frequency) / max_frequency;
            WordCloudEntry {
                word: entry.word.clone(),
                frequency: entry.frequency,
                size: (ratio * config.word_cloud_max_size).max(config.word_cloud_min_size),
                opacity: floor + ratio * (1.0 - floor),
                hue: (index as f64 * config.word_cloud_hue_step_degrees).rem_euclid(360.0),
            }
        })
        .collect()
}

#[must_use]
pub fn keyword_tags(keywords: &[KeywordFrequency], highlighted_count: usize) -> Vec<KeywordTag> {
    keywords
        .iter()
        .enumerate()
        .map(|(index, keyword)| KeywordTag {
            word: keyword.word.clone(),
            frequency: keyword.frequency,
            highlighted: index < highlighted_count,
        })
        .collect()
}

#[must_use]
pub fn derive_keyword_view(
    keywords: &[KeywordFrequency],
    wordcloud_data: &[KeywordFrequency],
    config: &DerivationConfig,
) -> KeywordView {
    let view = KeywordView {
        top_keywords: top_keywords(keywords, config.top_keyword_limit),
        statistics: keyword_statistics(keywords),
        word_cloud: word_cloud_layout(wordcloud_data, config),
        tags: keyword_tags(keywords, config.highlighted_keyword_count),
    };
    debug!(
        keywords = keywords.len(),
        word_cloud = view.word_cloud.len(),
        "derived keyword view"
    );
    view
}
