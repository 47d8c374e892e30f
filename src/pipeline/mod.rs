// Analysis pipeline: text in, stored analyses out.
//
// Combines the external text analyzer (summary, topics, sentiment) with the
// local keyword extractor, persists each result and returns the payloads.

pub mod analyze;
pub mod error;

pub use analyze::{analyze_texts, AnalyzeRequest};
pub use error::PipelineError;
