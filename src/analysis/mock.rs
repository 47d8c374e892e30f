// Deterministic mock analyzer.
//
// Used when LLM_MODE=mock and throughout the test suite. Summary is the
// first sentence (or the first 120 characters), topics come from a few
// substring checks, and sentiment is always neutral.

use anyhow::Result;
use async_trait::async_trait;

use super::traits::{AnalysisMeta, LlmAnalysis, TextAnalyzer};

/// Maximum summary length when the text has no period.
const SNIPPET_CHARS: usize = 120;

/// (substring to look for, topic label), checked in order
const TOPIC_RULES: &[(&str, &str)] = &[("ai", "AI"), ("cloud", "Cloud"), ("data", "Data")];

const FILLER_TOPIC: &str = "General";

pub struct MockAnalyzer;

impl MockAnalyzer {
    /// Synchronous core, shared by the trait impl and tests.
    pub fn analyze_sync(text: &str) -> LlmAnalysis {
        let snippet: String = match text.find('.') {
            Some(idx) => text[..=idx].to_string(),
            None => text.chars().take(SNIPPET_CHARS).collect(),
        };
        let summary = match snippet.trim() {
            "" => "No content.".to_string(),
            s => s.to_string(),
        };

        let lower = text.to_lowercase();
        let mut topics: Vec<String> = TOPIC_RULES
            .iter()
            .filter(|(needle, _)| lower.contains(needle))
            .map(|(_, label)| label.to_string())
            .collect();
        while topics.len() < 3 {
            topics.push(FILLER_TOPIC.to_string());
        }
        topics.truncate(3);

        LlmAnalysis {
            summary: Some(summary),
            meta: AnalysisMeta {
                title: None,
                topics,
                sentiment: Some("neutral".to_string()),
            },
        }
    }
}

#[async_trait]
impl TextAnalyzer for MockAnalyzer {
    async fn analyze(&self, text: &str) -> Result<LlmAnalysis> {
        Ok(Self::analyze_sync(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_first_sentence() {
        let out = MockAnalyzer::analyze_sync("  First one. Second one.");
        assert_eq!(out.summary.as_deref(), Some("First one."));
    }

    #[test]
    fn test_summary_truncates_without_period() {
        let text = "x".repeat(300);
        let out = MockAnalyzer::analyze_sync(&text);
        assert_eq!(out.summary.unwrap().len(), SNIPPET_CHARS);
    }

    #[test]
    fn test_summary_for_blank_text() {
        let out = MockAnalyzer::analyze_sync("   ");
        assert_eq!(out.summary.as_deref(), Some("No content."));
    }

    #[test]
    fn test_topics_detected_in_order() {
        let out = MockAnalyzer::analyze_sync("Data pipelines in the cloud power AI");
        assert_eq!(out.meta.topics, vec!["AI", "Cloud", "Data"]);
    }

    #[test]
    fn test_topics_padded_with_general() {
        let out = MockAnalyzer::analyze_sync("Nothing relevant here");
        assert_eq!(out.meta.topics, vec!["General", "General", "General"]);
        assert_eq!(out.meta.sentiment.as_deref(), Some("neutral"));
        assert!(out.meta.title.is_none());
    }

    #[tokio::test]
    async fn test_trait_matches_sync() {
        let text = "Cloud costs rose.";
        let out = MockAnalyzer.analyze(text).await.unwrap();
        assert_eq!(out, MockAnalyzer::analyze_sync(text));
    }
}
