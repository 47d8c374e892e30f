// Data models: Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};

use crate::scoring::confidence::confidence_score;

/// A stored analysis row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub sentiment: Option<String>,
    /// Topics from the text analyzer (JSON-encoded in the DB)
    pub topics: Vec<String>,
    /// Keywords from the local extractor (JSON-encoded in the DB)
    pub keywords: Vec<String>,
    pub input_text: String,
    pub created_at: String,
}

/// Everything needed to insert a new analysis; the DB assigns id and timestamp.
#[derive(Debug, Clone, Default)]
pub struct NewAnalysis {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub sentiment: Option<String>,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    pub input_text: String,
}

/// The outward-facing view of an analysis, as returned by the API and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub sentiment: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
}

impl Analysis {
    /// Build the payload, computing confidence from the stored text and keywords.
    pub fn to_payload(&self) -> AnalysisPayload {
        AnalysisPayload {
            id: self.id,
            title: self.title.clone(),
            summary: self.summary.clone(),
            sentiment: self.sentiment.clone(),
            topics: self.topics.clone(),
            keywords: self.keywords.clone(),
            confidence: confidence_score(&self.input_text, &self.keywords),
        }
    }
}
