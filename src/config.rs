use std::env;

use anyhow::Result;

use crate::keywords::DEFAULT_TOP_K;

/// Default OpenAI-compatible API root.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model for the OpenAI analyzer.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Which text analysis backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerBackend {
    /// OpenAI-compatible chat completions API (default), needs OPENAI_API_KEY
    OpenAi,
    /// Deterministic local stand-in for tests and offline development
    Mock,
}

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// Which analyzer produces summaries, topics and sentiment (LLM_MODE)
    pub analyzer_backend: AnalyzerBackend,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    /// How many keywords to keep per analyzed text
    pub top_k: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only the OpenAI backend additionally needs
    /// an API key, checked by `require_analyzer`.
    pub fn load() -> Result<Self> {
        let analyzer_backend = match env::var("LLM_MODE")
            .map(|m| m.to_lowercase())
            .as_deref()
        {
            Ok("mock") => AnalyzerBackend::Mock,
            // "openai" or unset both default to OpenAI
            _ => AnalyzerBackend::OpenAi,
        };

        let top_k = match env::var("GLEANER_TOP_K") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("GLEANER_TOP_K must be a whole number: {e}"))?,
            Err(_) => DEFAULT_TOP_K,
        };

        Ok(Self {
            db_path: env::var("GLEANER_DB_PATH").unwrap_or_else(|_| "./gleaner.db".to_string()),
            analyzer_backend,
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            top_k,
        })
    }

    /// Validate that the chosen analyzer backend has what it needs.
    /// Call this before any operation that analyzes text.
    pub fn require_analyzer(&self) -> Result<()> {
        match self.analyzer_backend {
            AnalyzerBackend::Mock => Ok(()),
            AnalyzerBackend::OpenAi => {
                if self.openai_api_key.is_empty() {
                    anyhow::bail!(
                        "OPENAI_API_KEY is not set. Add it to your .env file,\n\
                         or set LLM_MODE=mock to use the offline analyzer."
                    );
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend: AnalyzerBackend, key: &str) -> Config {
        Config {
            db_path: ":memory:".to_string(),
            analyzer_backend: backend,
            openai_api_key: key.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            top_k: DEFAULT_TOP_K,
        }
    }

    #[test]
    fn test_mock_needs_no_key() {
        assert!(config(AnalyzerBackend::Mock, "").require_analyzer().is_ok());
    }

    #[test]
    fn test_openai_requires_key() {
        assert!(config(AnalyzerBackend::OpenAi, "").require_analyzer().is_err());
        assert!(config(AnalyzerBackend::OpenAi, "sk-test")
            .require_analyzer()
            .is_ok());
    }
}
