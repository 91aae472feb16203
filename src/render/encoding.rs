use serde::{Deserialize, Serialize};

use crate::core::{EntityCategory, PosCategory};

use super::primitives::Color;

/// Semantic color slot, resolved to concrete colors by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    Primary,
    Secondary,
    Success,
    Warning,
    Info,
    Error,
    Default,
}

/// Icon identity, independent of any icon font or widget toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Person,
    Business,
    Location,
    Event,
    Language,
    CheckCircle,
    SentimentPositive,
    SentimentNegative,
    SentimentNeutral,
}

/// Color class plus icon for one displayed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEncoding {
    pub color: ColorClass,
    pub icon: IconKind,
}

impl VisualEncoding {
    #[must_use]
    pub const fn new(color: ColorClass, icon: IconKind) -> Self {
        Self { color, icon }
    }
}

/// Display label and encoding for an entity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEncoding {
    pub label: String,
    pub encoding: VisualEncoding,
}

/// Display label and color class for a part-of-speech category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosEncoding {
    pub description: String,
    pub color: ColorClass,
}

#[must_use]
pub fn entity_encoding(category: &EntityCategory) -> CategoryEncoding {
    use ColorClass as C;
    use IconKind as I;

    let (label, color, icon) = match category {
        EntityCategory::Person => ("Person", C::Primary, I::Person),
        EntityCategory::Organization => ("Organization", C::Secondary, I::Business),
        EntityCategory::Location => ("Location", C::Success, I::Location),
        EntityCategory::Date => ("Date", C::Warning, I::Event),
        EntityCategory::Time => ("Time", C::Warning, I::Event),
        EntityCategory::Money => ("Money", C::Info, I::Language),
        EntityCategory::Percent => ("Percentage", C::Info, I::Language),
        EntityCategory::Facility => ("Facility", C::Success, I::Location),
        EntityCategory::Product => ("Product", C::Secondary, I::Business),
        EntityCategory::Event => ("Event", C::Warning, I::Event),
        EntityCategory::WorkOfArt => ("Work of Art", C::Info, I::Language),
        EntityCategory::Law => ("Law", C::Info, I::Language),
        EntityCategory::Language => ("Language", C::Info, I::Language),
        EntityCategory::Other(code) => (code.as_str(), C::Default, I::CheckCircle),
    };

    CategoryEncoding {
        label: label.to_owned(),
        encoding: VisualEncoding::new(color, icon),
    }
}

#[must_use]
pub fn pos_encoding(category: &PosCategory) -> PosEncoding {
    use ColorClass as C;

    let (description, color) = match category {
        PosCategory::Noun => ("Noun", C::Primary),
        PosCategory::Verb => ("Verb", C::Secondary),
        PosCategory::Adjective => ("Adjective", C::Success),
        PosCategory::Adverb => ("Adverb", C::Warning),
        PosCategory::Pronoun => ("Pronoun", C::Info),
        PosCategory::Determiner => ("Determiner", C::Error),
        PosCategory::Adposition => ("Adposition", C::Default),
        PosCategory::Number => ("Number", C::Primary),
        PosCategory::Conjunction => ("Conjunction", C::Secondary),
        PosCategory::Interjection => ("Interjection", C::Success),
        PosCategory::Punctuation => ("Punctuation", C::Warning),
        PosCategory::Particle => ("Particle", C::Info),
        PosCategory::Unclassified => ("Other", C::Error),
        PosCategory::Space => ("Space", C::Default),
        PosCategory::Other(code) => (code.as_str(), C::Default),
    };

    PosEncoding {
        description: description.to_owned(),
        color,
    }
}

pub const EMOTION_FALLBACK_COLOR: Color = Color::from_rgb_hex(0x9e9e9e);

/// Fixed chart color per emotion name, case-insensitive.
#[must_use]
pub fn emotion_color(emotion: &str) -> Color {
    match emotion.to_lowercase().as_str() {
        "joy" => Color::from_rgb_hex(0x4caf50),
        "sadness" => Color::from_rgb_hex(0x2196f3),
        "anger" => Color::from_rgb_hex(0xf44336),
        "fear" => Color::from_rgb_hex(0x9c27b0),
        "surprise" => Color::from_rgb_hex(0xff9800),
        "disgust" => Color::from_rgb_hex(0x795548),
        "trust" => Color::from_rgb_hex(0x607d8b),
        _ => EMOTION_FALLBACK_COLOR,
    }
}
