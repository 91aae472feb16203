use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::EmojiCount;
use crate::render::{Color, emotion_color};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRow {
    pub key: String,
    pub name: String,
    pub score: f64,
    pub percentage: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEmotion {
    pub rank: usize,
    pub name: String,
    pub score: f64,
}

/// Most dominant emotions; three fit inline.
pub type TopEmotions = SmallVec<[RankedEmotion; 3]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiSummary {
    pub emojis: Vec<EmojiCount>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionView {
    pub rows: Vec<EmotionRow>,
    pub top: TopEmotions,
    pub emojis: EmojiSummary,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Emotion rows in the order the service reported them.
#[must_use]
pub fn emotion_rows(emotions: &IndexMap<String, f64>) -> Vec<EmotionRow> {
    emotions
        .iter()
        .map(|(key, score)| EmotionRow {
            key: key.clone(),
            name: capitalize(key),
            score: *score,
            percentage: score * 100.0,
            color: emotion_color(key),
        })
        .collect()
}

/// Ranks rows by descending score; equal scores keep service order.
#[must_use]
pub fn top_emotions(rows: &[EmotionRow], count: usize) -> TopEmotions {
    let mut ranked: Vec<&EmotionRow> = rows.iter().collect();
    ranked.sort_by_key(|row| Reverse(OrderedFloat(row.score)));
    ranked
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, row)| RankedEmotion {
            rank: index + 1,
            name: row.name.clone(),
            score: row.score,
        })
        .collect()
}

#[must_use]
pub fn emoji_summary(emojis: &[EmojiCount]) -> EmojiSummary {
    EmojiSummary {
        emojis: emojis.to_vec(),
        total: emojis.iter().map(|e| u64::from(e.count)).sum(),
    }
}

#[must_use]
pub fn derive_emotion_view(
    emotions: &IndexMap<String, f64>,
    emojis: &[EmojiCount],
    top_count: usize,
) -> EmotionView {
    let rows = emotion_rows(emotions);
    let top = top_emotions(&rows, top_count);
    let emojis = emoji_summary(emojis);
    debug!(
        emotions = rows.len(),
        emoji_total = emojis.total,
        "derived emotion view"
    );

    EmotionView { rows, top, emojis }
}
