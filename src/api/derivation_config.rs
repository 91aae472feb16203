use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

pub const DEFAULT_TOP_KEYWORD_LIMIT: usize = 10;
pub const DEFAULT_HIGHLIGHTED_KEYWORD_COUNT: usize = 5;
pub const DEFAULT_WORD_CLOUD_MIN_SIZE: f64 = 12.0;
pub const DEFAULT_WORD_CLOUD_MAX_SIZE: f64 = 48.0;
pub const DEFAULT_WORD_CLOUD_OPACITY_FLOOR: f64 = 0.3;
/// Golden-angle hue step between consecutive word-cloud entries.
pub const DEFAULT_WORD_CLOUD_HUE_STEP_DEGREES: f64 = 137.5;
pub const DEFAULT_TOP_EMOTION_COUNT: usize = 3;

/// Tunables shared by all derivers.
///
/// Serializable so hosts can persist display settings next to their own
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivationConfig {
    #[serde(default = "default_top_keyword_limit")]
    pub top_keyword_limit: usize,
    #[serde(default = "default_highlighted_keyword_count")]
    pub highlighted_keyword_count: usize,
    #[serde(default = "default_word_cloud_min_size")]
    pub word_cloud_min_size: f64,
    #[serde(default = "default_word_cloud_max_size")]
    pub word_cloud_max_size: f64,
    #[serde(default = "default_word_cloud_opacity_floor")]
    pub word_cloud_opacity_floor: f64,
    #[serde(default = "default_word_cloud_hue_step_degrees")]
    pub word_cloud_hue_step_degrees: f64,
    #[serde(default = "default_top_emotion_count")]
    pub top_emotion_count: usize,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            top_keyword_limit: default_top_keyword_limit(),
            highlighted_keyword_count: default_highlighted_keyword_count(),
            word_cloud_min_size: default_word_cloud_min_size(),
            word_cloud_max_size: default_word_cloud_max_size(),
            word_cloud_opacity_floor: default_word_cloud_opacity_floor(),
            word_cloud_hue_step_degrees: default_word_cloud_hue_step_degrees(),
            top_emotion_count: default_top_emotion_count(),
        }
    }
}

impl DerivationConfig {
    /// Sets how many keywords the ranked list shows.
    #[must_use]
    pub fn with_top_keyword_limit(mut self, limit: usize) -> Self {
        self.top_keyword_limit = limit;
        self
    }

    /// Sets how many leading keyword tags are highlighted.
    #[must_use]
    pub fn with_highlighted_keyword_count(mut self, count: usize) -> Self {
        self.highlighted_keyword_count = count;
        self
    }

    /// Sets the word-cloud size range in font-size-equivalent units.
    #[must_use]
    pub fn with_word_cloud_size_range(mut self, min_size: f64, max_size: f64) -> Self {
        self.word_cloud_min_size = min_size;
        self.word_cloud_max_size = max_size;
        self
    }

    #[must_use]
    pub fn with_word_cloud_opacity_floor(mut self, floor: f64) -> Self {
        self.word_cloud_opacity_floor = floor;
        self
    }

    #[must_use]
    pub fn with_word_cloud_hue_step_degrees(mut self, step: f64) -> Self {
        self.word_cloud_hue_step_degrees = step;
        self
    }

    #[must_use]
    pub fn with_top_emotion_count(mut self, count: usize) -> Self {
        self.top_emotion_count = count;
        self
    }

    pub fn validate(self) -> AnalysisResult<Self> {
        for (name, value) in [
            ("word_cloud_min_size", self.word_cloud_min_size),
            ("word_cloud_max_size", self.word_cloud_max_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        if self.word_cloud_min_size > self.word_cloud_max_size {
            return Err(AnalysisError::InvalidConfig(
                "`word_cloud_min_size` must be <= `word_cloud_max_size`".to_owned(),
            ));
        }

        if !self.word_cloud_opacity_floor.is_finite()
            || !(0.0..=1.0).contains(&self.word_cloud_opacity_floor)
        {
            return Err(AnalysisError::InvalidConfig(
                "`word_cloud_opacity_floor` must be finite and in [0, 1]".to_owned(),
            ));
        }

        if !self.word_cloud_hue_step_degrees.is_finite() {
            return Err(AnalysisError::InvalidConfig(
                "`word_cloud_hue_step_degrees` must be finite".to_owned(),
            ));
        }

        Ok(self)
    }

    pub fn to_json_pretty(&self) -> AnalysisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AnalysisError::InvalidConfig(format!("failed to serialize derivation config: {e}"))
        })
    }

    /// Parses and validates a config document; missing keys take defaults.
    pub fn from_json_str(input: &str) -> AnalysisResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            AnalysisError::InvalidConfig(format!("failed to parse derivation config: {e}"))
        })?;
        config.validate()
    }
}

fn default_top_keyword_limit() -> usize {
    DEFAULT_TOP_KEYWORD_LIMIT
}

fn default_highlighted_keyword_count() -> usize {
    DEFAULT_HIGHLIGHTED_KEYWORD_COUNT
}

fn default_word_cloud_min_size() -> f64 {
    DEFAULT_WORD_CLOUD_MIN_SIZE
}

fn default_word_cloud_max_size() -> f64 {
    DEFAULT_WORD_CLOUD_MAX_SIZE
}

fn default_word_cloud_opacity_floor() -> f64 {
    DEFAULT_WORD_CLOUD_OPACITY_FLOOR
}

fn default_word_cloud_hue_step_degrees() -> f64 {
    DEFAULT_WORD_CLOUD_HUE_STEP_DEGREES
}

fn default_top_emotion_count() -> usize {
    DEFAULT_TOP_EMOTION_COUNT
}
