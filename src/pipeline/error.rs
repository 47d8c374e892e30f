// Error types for the analysis pipeline.
//
// The pipeline is the one place where callers need to tell failures apart:
// the HTTP layer answers 400, 502 or 500 depending on the variant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input text is empty. Provide 'text' or non-empty 'texts'.")]
    EmptyInput,

    #[error("Analysis failed: {0}")]
    Analyzer(String),

    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),
}
