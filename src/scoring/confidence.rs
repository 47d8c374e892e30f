// Confidence score for a stored analysis.
//
// A naive signal combining how much text there was to work with and how many
// distinct keywords the extractor found. It is computed on read from the
// stored input and keywords, never persisted.

use std::collections::HashSet;

/// Weights and saturation points for the confidence formula.
///
/// `score = length_weight * min(1, chars / length_cap)
///        + keyword_weight * min(1, distinct_keywords / keyword_cap)`
pub struct ConfidenceWeights {
    /// Weight for the text-length factor (default 0.6)
    pub length_weight: f64,
    /// Weight for the keyword-count factor (default 0.4)
    pub keyword_weight: f64,
    /// Character count at which the length factor saturates (default 1200)
    pub length_cap: f64,
    /// Distinct keyword count at which the keyword factor saturates (default 3)
    pub keyword_cap: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            length_weight: 0.6,
            keyword_weight: 0.4,
            length_cap: 1200.0,
            keyword_cap: 3.0,
        }
    }
}

/// Confidence in [0.0, 1.0], rounded to two decimals, using default weights.
pub fn confidence_score(text: &str, keywords: &[String]) -> f64 {
    confidence_score_with(text, keywords, &ConfidenceWeights::default())
}

pub fn confidence_score_with(text: &str, keywords: &[String], weights: &ConfidenceWeights) -> f64 {
    let length_factor = (text.chars().count() as f64 / weights.length_cap).min(1.0);
    let distinct: HashSet<&str> = keywords.iter().map(String::as_str).collect();
    let keyword_factor = (distinct.len() as f64 / weights.keyword_cap).min(1.0);

    let score = weights.length_weight * length_factor + weights.keyword_weight * keyword_factor;
    (score * 100.0).round() / 100.0
}
