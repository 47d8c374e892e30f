// Text analyzer trait: the external collaborator that produces summaries,
// topics and sentiment. Keywords are NOT part of this; they come from the
// local heuristic in `crate::keywords`.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What an analyzer returns for one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmAnalysis {
    /// One or two sentence summary, if the provider produced one
    pub summary: Option<String>,
    pub meta: AnalysisMeta,
}

/// Structured metadata about a text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMeta {
    pub title: Option<String>,
    pub topics: Vec<String>,
    /// positive / neutral / negative
    pub sentiment: Option<String>,
}

impl AnalysisMeta {
    /// Read metadata from a loosely-shaped JSON object.
    ///
    /// Language models don't always follow the schema exactly: missing keys
    /// become `None`/empty, and non-string topics are stringified.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("expected a JSON object, got: {value}"))?;

        let text_field = |key: &str| match obj.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        let topics = match obj.get("topics") {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|v| !v.is_null())
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            title: text_field("title"),
            topics,
            sentiment: text_field("sentiment"),
        })
    }
}

/// Trait for analyzing a single text. Implementations are async because
/// real providers make HTTP calls.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<LlmAnalysis>;
}
