use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ReadabilityScores;
use crate::render::ColorClass;

/// Qualitative difficulty band of one readability metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    Good,
    Moderate,
    Difficult,
}

impl ReadabilityBand {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Difficult => "Difficult",
        }
    }

    #[must_use]
    pub fn color_class(self) -> ColorClass {
        match self {
            Self::Good => ColorClass::Success,
            Self::Moderate => ColorClass::Warning,
            Self::Difficult => ColorClass::Error,
        }
    }
}

/// Band cut-offs; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BandThresholds {
    HigherIsSimpler { good_min: f64, moderate_min: f64 },
    LowerIsSimpler { good_max: f64, moderate_max: f64 },
}

impl BandThresholds {
    fn classify(self, value: f64) -> ReadabilityBand {
        match self {
            Self::HigherIsSimpler {
                good_min,
                moderate_min,
            } => {
                if value >= good_min {
                    ReadabilityBand::Good
                } else if value >= moderate_min {
                    ReadabilityBand::Moderate
                } else {
                    ReadabilityBand::Difficult
                }
            }
            Self::LowerIsSimpler {
                good_max,
                moderate_max,
            } => {
                if value <= good_max {
                    ReadabilityBand::Good
                } else if value <= moderate_max {
                    ReadabilityBand::Moderate
                } else {
                    ReadabilityBand::Difficult
                }
            }
        }
    }
}

const GRADE_LEVEL_THRESHOLDS: BandThresholds = BandThresholds::LowerIsSimpler {
    good_max: 8.0,
    moderate_max: 12.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityMetric {
    FleschReadingEase,
    FleschKincaidGrade,
    GunningFog,
    SmogIndex,
    AutomatedReadabilityIndex,
    ColemanLiauIndex,
    LinsearWriteFormula,
    DaleChallReadabilityScore,
}

impl ReadabilityMetric {
    pub const ALL: [Self; 8] = [
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
        Self::GunningFog,
        Self::SmogIndex,
        Self::AutomatedReadabilityIndex,
        Self::ColemanLiauIndex,
        Self::LinsearWriteFormula,
        Self::DaleChallReadabilityScore,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::FleschKincaidGrade => "Flesch-Kincaid Grade",
            Self::GunningFog => "Gunning Fog Index",
            Self::SmogIndex => "SMOG Index",
            Self::AutomatedReadabilityIndex => "Automated Readability Index",
            Self::ColemanLiauIndex => "Coleman-Liau Index",
            Self::LinsearWriteFormula => "Linsear Write Formula",
            Self::DaleChallReadabilityScore => "Dale-Chall Readability Score",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::FleschReadingEase => {
                "Measures how easy a text is to read (0-100, higher is easier)"
            }
            Self::FleschKincaidGrade => "U.S. grade level required to understand the text",
            Self::GunningFog => "Years of formal education needed to understand the text",
            Self::SmogIndex => "Years of education needed to understand the text",
            Self::AutomatedReadabilityIndex => "U.S. grade level (0-14+)",
            Self::ColemanLiauIndex | Self::LinsearWriteFormula => "U.S. grade level",
            Self::DaleChallReadabilityScore => "Grade level (0-9+)",
        }
    }

    #[must_use]
    pub fn value(self, scores: &ReadabilityScores) -> f64 {
        match self {
            Self::FleschReadingEase => scores.flesch_reading_ease,
            Self::FleschKincaidGrade => scores.flesch_kincaid_grade,
            Self::GunningFog => scores.gunning_fog,
            Self::SmogIndex => scores.smog_index,
            Self::AutomatedReadabilityIndex => scores.automated_readability_index,
            Self::ColemanLiauIndex => scores.coleman_liau_index,
            Self::LinsearWriteFormula => scores.linsear_write_formula,
            Self::DaleChallReadabilityScore => scores.dale_chall_readability_score,
        }
    }

    /// Grade-level companion shown next to the score.
    ///
    /// Reading ease has no grade of its own and borrows Flesch-Kincaid.
    #[must_use]
    pub fn grade(self, scores: &ReadabilityScores) -> f64 {
        match self {
            Self::FleschReadingEase => scores.flesch_kincaid_grade,
            other => other.value(scores),
        }
    }

    fn thresholds(self) -> BandThresholds {
        match self {
            Self::FleschReadingEase => BandThresholds::HigherIsSimpler {
                good_min: 60.0,
                moderate_min: 30.0,
            },
            Self::SmogIndex => BandThresholds::LowerIsSimpler {
                good_max: 6.0,
                moderate_max: 10.0,
            },
            Self::DaleChallReadabilityScore => BandThresholds::LowerIsSimpler {
                good_max: 6.0,
                moderate_max: 8.0,
            },
            Self::FleschKincaidGrade
            | Self::GunningFog
            | Self::AutomatedReadabilityIndex
            | Self::ColemanLiauIndex
            | Self::LinsearWriteFormula => GRADE_LEVEL_THRESHOLDS,
        }
    }
}

#[must_use]
pub fn classify_metric(metric: ReadabilityMetric, value: f64) -> ReadabilityBand {
    metric.thresholds().classify(value)
}

/// Seven-step descriptive level for Flesch Reading Ease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleschLevel {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl FleschLevel {
    /// Evaluated top-down; each lower bound is inclusive.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }

    #[must_use]
    pub fn color_class(self) -> ColorClass {
        match self {
            Self::VeryEasy | Self::Easy | Self::FairlyEasy => ColorClass::Success,
            Self::Standard | Self::FairlyDifficult => ColorClass::Warning,
            Self::Difficult | Self::VeryDifficult => ColorClass::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetricRow {
    pub metric: ReadabilityMetric,
    pub name: String,
    pub description: String,
    pub value: f64,
    pub grade: f64,
    pub band: ReadabilityBand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistic {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityView {
    pub metrics: Vec<ReadabilityMetricRow>,
    pub flesch_reading_ease: f64,
    pub flesch_level: FleschLevel,
    pub text_statistics: Vec<TextStatistic>,
    pub complexity_note: String,
    /// `None` when the text has no words.
    pub difficult_word_percentage: Option<f64>,
}

#[must_use]
pub fn classify_all(scores: &ReadabilityScores) -> Vec<ReadabilityMetricRow> {
    ReadabilityMetric::ALL
        .into_iter()
        .map(|metric| {
            let value = metric.value(scores);
            ReadabilityMetricRow {
                metric,
                name: metric.name().to_owned(),
                description: metric.description().to_owned(),
                value,
                grade: metric.grade(scores),
                band: classify_metric(metric, value),
            }
        })
        .collect()
}

#[must_use]
pub fn text_statistics(scores: &ReadabilityScores) -> Vec<TextStatistic> {
    [
        ("Syllables", scores.syllable_count),
        ("Words", scores.lexicon_count),
        ("Sentences", scores.sentence_count),
        ("Difficult Words", scores.difficult_words),
    ]
    .into_iter()
    .map(|(name, value)| TextStatistic {
        name: name.to_owned(),
        value,
    })
    .collect()
}

/// Reader-facing sentence describing the overall reading effort.
#[must_use]
pub fn complexity_note(flesch_reading_ease: f64) -> &'static str {
    match classify_metric(ReadabilityMetric::FleschReadingEase, flesch_reading_ease) {
        ReadabilityBand::Good => "It should be easily understood by most readers.",
        ReadabilityBand::Moderate => "It may require some effort to read and understand.",
        ReadabilityBand::Difficult => {
            "It is quite challenging and may require specialized knowledge or higher education level."
        }
    }
}

#[must_use]
pub fn difficult_word_percentage(scores: &ReadabilityScores) -> Option<f64> {
    (scores.lexicon_count > 0)
        .then(|| f64::from(scores.difficult_words) / f64::from(scores.lexicon_count) * 100.0)
}

#[must_use]
pub fn derive_readability_view(scores: &ReadabilityScores) -> ReadabilityView {
    let flesch_level = FleschLevel::from_score(scores.flesch_reading_ease);
    debug!(
        flesch_reading_ease = scores.flesch_reading_ease,
        level = flesch_level.label(),
        "derived readability view"
    );

    ReadabilityView {
        metrics: classify_all(scores),
        flesch_reading_ease: scores.flesch_reading_ease,
        flesch_level,
        text_statistics: text_statistics(scores),
        complexity_note: complexity_note(scores.flesch_reading_ease).to_owned(),
        difficult_word_percentage: difficult_word_percentage(scores),
    }
}
