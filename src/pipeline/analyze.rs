// Analyze one or more texts and persist the results.
//
// Texts are processed in order, one analyzer call each. The first analyzer
// failure aborts the whole batch; analyses stored before the failure stay
// stored.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::PipelineError;
use crate::analysis::traits::TextAnalyzer;
use crate::db::models::{AnalysisPayload, NewAnalysis};
use crate::db::Database;
use crate::keywords::extract_keywords;

/// Topics kept per analysis.
pub const MAX_TOPICS: usize = 3;

/// Request body for an analysis: either a single `text` or a batch of `texts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
    pub texts: Option<Vec<String>>,
}

impl AnalyzeRequest {
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            texts: None,
        }
    }

    pub fn batch(texts: Vec<String>) -> Self {
        Self {
            text: None,
            texts: Some(texts),
        }
    }

    /// The trimmed, non-blank texts to analyze.
    ///
    /// A non-blank `text` wins over `texts`. Blank entries in `texts` are
    /// dropped; if nothing remains the request is rejected.
    pub fn texts(&self) -> Result<Vec<String>, PipelineError> {
        if let Some(text) = self.text.as_deref().map(str::trim) {
            if !text.is_empty() {
                return Ok(vec![text.to_string()]);
            }
        }

        let texts: Vec<String> = self
            .texts
            .iter()
            .flatten()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        if texts.is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        Ok(texts)
    }
}

/// Run every text through the analyzer and keyword extractor, store the
/// combined result, and return the payloads in input order.
pub async fn analyze_texts(
    analyzer: &dyn TextAnalyzer,
    db: &dyn Database,
    texts: &[String],
    top_k: usize,
) -> Result<Vec<AnalysisPayload>, PipelineError> {
    if texts.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let mut results = Vec::with_capacity(texts.len());

    for text in texts {
        let llm = analyzer.analyze(text).await.map_err(|e| {
            warn!(error = %e, "Text analyzer failed");
            PipelineError::Analyzer(format!("{e:#}"))
        })?;

        let topics: Vec<String> = llm
            .meta
            .topics
            .iter()
            .map(|t| t.trim().to_string())
            .take(MAX_TOPICS)
            .collect();

        let keywords = extract_keywords(text, top_k);

        let new = NewAnalysis {
            title: llm.meta.title,
            summary: Some(llm.summary.unwrap_or_default()),
            sentiment: llm.meta.sentiment,
            topics,
            keywords,
            input_text: text.clone(),
        };

        let stored = db
            .insert_analysis(&new)
            .await
            .map_err(PipelineError::Storage)?;

        info!(
            id = stored.id,
            topics = ?stored.topics,
            keywords = ?stored.keywords,
            "Stored analysis"
        );

        results.push(stored.to_payload());
    }

    Ok(results)
}
