use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{SentimentLabel, TextBlobSentiment, VaderSentiment};
use crate::render::{Color, ColorClass, IconKind, VisualEncoding};

pub const POLARITY_BAR_COLOR: Color = Color::from_rgb_hex(0x1976d2);
pub const SUBJECTIVITY_BAR_COLOR: Color = Color::from_rgb_hex(0xdc004e);
pub const POSITIVE_SLICE_COLOR: Color = Color::from_rgb_hex(0x4caf50);
pub const NEGATIVE_SLICE_COLOR: Color = Color::from_rgb_hex(0xf44336);
pub const NEUTRAL_SLICE_COLOR: Color = Color::from_rgb_hex(0x9e9e9e);

const NEUTRAL_ENCODING: VisualEncoding =
    VisualEncoding::new(ColorClass::Default, IconKind::SentimentNeutral);

#[must_use]
pub fn encode_sentiment_label(label: SentimentLabel) -> VisualEncoding {
    match label {
        SentimentLabel::Positive => {
            VisualEncoding::new(ColorClass::Success, IconKind::SentimentPositive)
        }
        SentimentLabel::Negative => {
            VisualEncoding::new(ColorClass::Error, IconKind::SentimentNegative)
        }
        SentimentLabel::Neutral => NEUTRAL_ENCODING,
    }
}

/// Maps any label string to an encoding; unrecognized labels get the neutral one.
#[must_use]
pub fn encode_sentiment(label: &str) -> VisualEncoding {
    match SentimentLabel::parse(label) {
        Some(label) => encode_sentiment_label(label),
        None => {
            trace!(label, "unrecognized sentiment label, using neutral encoding");
            NEUTRAL_ENCODING
        }
    }
}

/// One named value in a bar or pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub fill: Color,
}

impl ChartDatum {
    fn new(name: &str, value: f64, fill: Color) -> Self {
        Self {
            name: name.to_owned(),
            value,
            fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlobPanel {
    pub label: SentimentLabel,
    pub encoding: VisualEncoding,
    pub polarity: f64,
    pub subjectivity: f64,
    pub bars: Vec<ChartDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaderPanel {
    pub label: SentimentLabel,
    pub encoding: VisualEncoding,
    pub compound: f64,
    pub slices: Vec<ChartDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentView {
    pub textblob: TextBlobPanel,
    pub vader: VaderPanel,
}

#[must_use]
pub fn derive_sentiment_view(
    textblob: &TextBlobSentiment,
    vader: &VaderSentiment,
) -> SentimentView {
    SentimentView {
        textblob: TextBlobPanel {
            label: textblob.sentiment,
            encoding: encode_sentiment_label(textblob.sentiment),
            polarity: textblob.polarity,
            subjectivity: textblob.subjectivity,
            bars: vec![
                ChartDatum::new("Polarity", textblob.polarity, POLARITY_BAR_COLOR),
                ChartDatum::new("Subjectivity", textblob.subjectivity, SUBJECTIVITY_BAR_COLOR),
            ],
        },
        vader: VaderPanel {
            label: vader.sentiment,
            encoding: encode_sentiment_label(vader.sentiment),
            compound: vader.compound,
            slices: vec![
                ChartDatum::new("Positive", vader.positive, POSITIVE_SLICE_COLOR),
                ChartDatum::new("Negative", vader.negative, NEGATIVE_SLICE_COLOR),
                ChartDatum::new("Neutral", vader.neutral, NEUTRAL_SLICE_COLOR),
            ],
        },
    }
}
