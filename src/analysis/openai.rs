// OpenAI-compatible chat completions analyzer.
//
// Sends a single-message prompt asking for a short summary plus a JSON
// object with title, topics and sentiment, then parses the reply. Works
// against any endpoint that speaks the /chat/completions protocol, so
// OPENAI_BASE_URL can point at a local or proxy server.
//
// API docs: https://platform.openai.com/docs/api-reference/chat

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{AnalysisMeta, LlmAnalysis, TextAnalyzer};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Low temperature keeps the output format stable.
const TEMPERATURE: f64 = 0.2;

/// Analyzer backed by an OpenAI-compatible API.
pub struct OpenAiAnalyzer {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiAnalyzer {
    pub fn new(api_key: String, model: String, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("gleaner/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TextAnalyzer for OpenAiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<LlmAnalysis> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(text),
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("LLM call failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("LLM call failed: API returned {}: {}", status, body);
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Failed to parse chat completions response")?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow::anyhow!("LLM response contained no message content"))?;

        debug!(
            model = %self.model,
            chars = content.len(),
            "Received LLM analysis"
        );

        parse_llm_output(content.trim())
    }
}

/// Build the extraction prompt for one text.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are a precise information extractor.
Given the following text, produce:
1) A 1–2 sentence summary.
2) A compact JSON with: title (if available), topics (3 key topics), sentiment (positive/neutral/negative).

Text:
---
{text}
---

Respond EXACTLY in the following format:
SUMMARY: <one or two sentences>
JSON: {{"title": "...", "topics": ["t1","t2","t3"], "sentiment": "neutral"}}"#
    )
}

/// Parse a `SUMMARY: ... JSON: {...}` reply.
///
/// The summary is everything before the first `JSON:` marker, minus an
/// optional `SUMMARY:` label. If the JSON after the marker doesn't parse
/// (or there is no marker), the last `{...}` block in the whole reply is
/// tried instead.
pub fn parse_llm_output(content: &str) -> Result<LlmAnalysis> {
    let (head, tail) = match content.split_once("JSON:") {
        Some((head, tail)) => (head, Some(tail)),
        None => (content, None),
    };

    let head = head.trim();
    let summary = if head.to_uppercase().starts_with("SUMMARY") {
        head.split_once(':').map(|(_, rest)| rest.trim()).unwrap_or("")
    } else {
        head
    };

    let meta_json = tail
        .and_then(|t| serde_json::from_str::<serde_json::Value>(t.trim()).ok())
        .or_else(|| last_brace_block(content));

    let meta = match meta_json {
        Some(value) => AnalysisMeta::from_json(&value)
            .with_context(|| format!("Could not parse LLM output: {content}"))?,
        None => anyhow::bail!("Could not parse LLM output: {content}"),
    };

    Ok(LlmAnalysis {
        summary: Some(summary.to_string()),
        meta,
    })
}

/// Parse the span from the last `{` to the last `}` as JSON.
fn last_brace_block(content: &str) -> Option<serde_json::Value> {
    let start = content.rfind('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&content[start..=end]).ok()
}

// --- Chat completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
