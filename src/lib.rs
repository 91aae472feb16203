//! analysis-lens: display-ready views over text-analysis results.
//!
//! The crate never scores text itself. It takes the record produced by an
//! external analysis service and derives groupings, rankings, percentages and
//! visual encodings from it through pure, side-effect-free functions.

pub mod api;
#[cfg(feature = "client")]
pub mod client;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AnalysisDashboard, DerivationConfig, ViewState};
pub use crate::core::AnalysisRecord;
pub use error::{AnalysisError, AnalysisResult};
