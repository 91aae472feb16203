use serde::{Deserialize, Serialize};

/// Named-entity category codes emitted by the entity recognizer.
///
/// Unrecognized codes are preserved verbatim in [`EntityCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Date,
    Time,
    Money,
    Percent,
    Facility,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Other(String),
}

impl EntityCategory {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "PERSON" => Self::Person,
            "ORG" => Self::Organization,
            "GPE" => Self::Location,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "MONEY" => Self::Money,
            "PERCENT" => Self::Percent,
            "FAC" => Self::Facility,
            "PRODUCT" => Self::Product,
            "EVENT" => Self::Event,
            "WORK_OF_ART" => Self::WorkOfArt,
            "LAW" => Self::Law,
            "LANGUAGE" => Self::Language,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORG",
            Self::Location => "GPE",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
            Self::Facility => "FAC",
            Self::Product => "PRODUCT",
            Self::Event => "EVENT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Law => "LAW",
            Self::Language => "LANGUAGE",
            Self::Other(code) => code,
        }
    }
}

/// Universal part-of-speech classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Number,
    Conjunction,
    Interjection,
    Punctuation,
    Particle,
    Unclassified,
    Space,
    Other(String),
}

impl PosCategory {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "NOUN" => Self::Noun,
            "VERB" => Self::Verb,
            "ADJ" => Self::Adjective,
            "ADV" => Self::Adverb,
            "PRON" => Self::Pronoun,
            "DET" => Self::Determiner,
            "ADP" => Self::Adposition,
            "NUM" => Self::Number,
            "CONJ" => Self::Conjunction,
            "INTJ" => Self::Interjection,
            "PUNCT" => Self::Punctuation,
            "PART" => Self::Particle,
            "X" => Self::Unclassified,
            "SPACE" => Self::Space,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
            Self::Pronoun => "PRON",
            Self::Determiner => "DET",
            Self::Adposition => "ADP",
            Self::Number => "NUM",
            Self::Conjunction => "CONJ",
            Self::Interjection => "INTJ",
            Self::Punctuation => "PUNCT",
            Self::Particle => "PART",
            Self::Unclassified => "X",
            Self::Space => "SPACE",
            Self::Other(code) => code,
        }
    }
}
