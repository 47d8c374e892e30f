// Fixed word lists for the keyword heuristic.
//
// Both lists are plain static arrays. The `Lexicon` built from them is
// initialised once on first use and only ever read afterwards, so any
// number of threads can classify tokens against it without coordination.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Compact English stopword list: articles, pronouns, auxiliaries and
/// their contractions. Matched against the lower-cased token.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few", "for",
    "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself",
    "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is",
    "isn't", "it", "it's", "its", "itself", "let's", "me", "more", "most", "mustn't", "my",
    "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
    "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
    "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Word endings that hint at a noun (nominalizations and agent nouns).
/// Plural forms are listed explicitly so "abstractions" counts the same
/// as "abstraction".
pub const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "er", "or", "ist", "ism",
    "acy", "tions", "sions", "ments", "nesses", "ities", "ships", "ances", "ences", "ers",
    "ors", "ists", "isms", "acies",
];

static ENGLISH: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new(STOPWORDS.iter().copied(), NOUN_SUFFIXES.iter().copied()));

/// Stopwords and noun suffixes used by the candidate classifier.
///
/// Every lookup is a membership test, so the storage order of either list
/// has no effect on extraction results.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    noun_suffixes: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary word lists. Entries are lower-cased.
    pub fn new<'a>(
        stopwords: impl IntoIterator<Item = &'a str>,
        noun_suffixes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            stopwords: stopwords.into_iter().map(str::to_lowercase).collect(),
            noun_suffixes: noun_suffixes.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// The shared English lexicon built from `STOPWORDS` and `NOUN_SUFFIXES`.
    pub fn english() -> &'static Lexicon {
        &ENGLISH
    }

    /// Expects an already lower-cased word.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Expects an already lower-cased word.
    pub fn has_noun_suffix(&self, word: &str) -> bool {
        self.noun_suffixes.iter().any(|s| word.ends_with(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_include_contractions() {
        let lex = Lexicon::english();
        assert!(lex.is_stopword("the"));
        assert!(lex.is_stopword("don't"));
        assert!(lex.is_stopword("they've"));
        assert!(!lex.is_stopword("river"));
    }

    #[test]
    fn test_stopword_lookup_expects_lowercase() {
        let lex = Lexicon::english();
        assert!(!lex.is_stopword("The"));
    }

    #[test]
    fn test_noun_suffixes() {
        let lex = Lexicon::english();
        assert!(lex.has_noun_suffix("acceleration"));
        assert!(lex.has_noun_suffix("abstractions"));
        assert!(lex.has_noun_suffix("teacher"));
        assert!(lex.has_noun_suffix("democracy"));
        assert!(!lex.has_noun_suffix("quickly"));
        assert!(!lex.has_noun_suffix("running"));
    }

    #[test]
    fn test_custom_lexicon_lowercases_entries() {
        let lex = Lexicon::new(["FOO"], ["ING"]);
        assert!(lex.is_stopword("foo"));
        assert!(lex.has_noun_suffix("running"));
    }
}
