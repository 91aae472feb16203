pub mod category;
pub mod record;
pub mod validation;

pub use category::{EntityCategory, PosCategory};
pub use record::{
    AnalysisRecord, EmojiCount, Entity, KeywordFrequency, PosToken, ReadabilityScores,
    SentimentLabel, TextBlobSentiment, VaderSentiment,
};
pub use validation::validate_record;
