// Keyword extraction: rule-based noun/keyword detection.
//
// Pipeline: tokenize -> classify candidates -> rank by frequency, falling
// back to every non-stopword token when no candidate was found. No POS
// tagging or models; the heuristic is deterministic and never fails, the
// worst case is an empty list.

pub mod classify;
pub mod lexicon;
pub mod rank;
pub mod tokenize;

use tracing::debug;

use self::classify::is_candidate;
use self::lexicon::Lexicon;
use self::rank::KeywordCounter;
use self::tokenize::tokenize;

/// Keywords kept per analysis unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// Shorthand for `KeywordExtractor::new(top_k).extract(text)`.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    KeywordExtractor::new(top_k).extract(text)
}

/// Extracts up to `top_k` lower-cased keywords from a text.
///
/// Holds no mutable state: the same input always produces the same output,
/// and one extractor can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor<'a> {
    pub top_k: usize,
    lexicon: &'a Lexicon,
}

impl Default for KeywordExtractor<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl KeywordExtractor<'static> {
    /// Extractor over the built-in English lexicon.
    pub fn new(top_k: usize) -> Self {
        Self {
            top_k,
            lexicon: Lexicon::english(),
        }
    }
}

impl<'a> KeywordExtractor<'a> {
    pub fn with_lexicon(top_k: usize, lexicon: &'a Lexicon) -> Self {
        Self { top_k, lexicon }
    }

    /// Extract keywords, most frequent first; ties keep first-seen order.
    ///
    /// Returns an empty list for `top_k == 0`, empty input, or input made
    /// only of stopwords and short words.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if self.top_k == 0 {
            return Vec::new();
        }

        let tokens: Vec<&str> = tokenize(text).collect();

        let mut candidates = KeywordCounter::new();
        let mut previous: Option<&str> = None;
        for &token in &tokens {
            if is_candidate(token, previous, self.lexicon) {
                candidates.add(token.to_lowercase());
            }
            previous = Some(token);
        }

        let counter = if candidates.is_empty() {
            self.fallback(&tokens)
        } else {
            candidates
        };

        counter
            .most_common(self.top_k)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Looser pass used when no token passed the classifier: every
    /// non-stopword token longer than two characters.
    fn fallback(&self, tokens: &[&str]) -> KeywordCounter {
        let mut counter = KeywordCounter::new();
        for token in tokens {
            let lower = token.to_lowercase();
            if !self.lexicon.is_stopword(&lower) && lower.chars().count() > 2 {
                counter.add(lower);
            }
        }
        debug!(
            tokens = tokens.len(),
            fallback_terms = counter.len(),
            "No keyword candidates, using fallback ranking"
        );
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_top_k() {
        assert_eq!(KeywordExtractor::default().top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn test_repeated_candidate_ranks_first() {
        let text = "The Server restarted. Another Server failed while the Scheduler waited.";
        assert_eq!(
            extract_keywords(text, 3),
            vec!["server", "another", "scheduler"]
        );
    }

    #[test]
    fn test_fallback_when_no_candidates() {
        // No capitals after the first token, no suffixes, no hyphens.
        let text = "Running quickly, running happily";
        assert_eq!(extract_keywords(text, 3), vec!["running", "quickly", "happily"]);
    }

    #[test]
    fn test_fallback_skips_short_words() {
        assert!(extract_keywords("go go go", 3).is_empty());
    }

    #[test]
    fn test_top_k_zero() {
        assert!(extract_keywords("Acceleration matters", 0).is_empty());
    }

    #[test]
    fn test_custom_lexicon() {
        let lex = Lexicon::new(["river"], ["ing"]);
        let extractor = KeywordExtractor::with_lexicon(2, &lex);
        assert_eq!(
            extractor.extract("the river kept flowing past the mill"),
            vec!["flowing"]
        );
    }
}
