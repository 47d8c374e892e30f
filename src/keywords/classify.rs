// Candidate classifier: decides whether a token looks like a keyword.
//
// Rules are checked in a fixed order and the first match wins:
//
//   1. stopword, or 2 characters or fewer     -> reject
//   2. capitalized and not the first token    -> accept (proper-noun hint)
//   3. ends with a noun suffix                -> accept
//   4. contains a hyphen                      -> accept (compound term)
//   5. anything else                          -> reject
//
// Rule 2 only asks whether a previous token exists. A capitalized word that
// opens the second sentence of a text is still accepted; only the very first
// token of the input is excluded. This is a known limitation of the heuristic
// and is kept as-is so results stay stable.

use super::lexicon::Lexicon;

/// Which rule decided the outcome for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    RejectStopword,
    RejectShort,
    AcceptCapitalized,
    AcceptNounSuffix,
    AcceptHyphenated,
    Reject,
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        matches!(
            self,
            Verdict::AcceptCapitalized | Verdict::AcceptNounSuffix | Verdict::AcceptHyphenated
        )
    }
}

/// Run the classifier rules against `token`, given the token that
/// immediately preceded it (or `None` for the first token of the input).
pub fn classify(token: &str, previous: Option<&str>, lexicon: &Lexicon) -> Verdict {
    let lower = token.to_lowercase();

    if lexicon.is_stopword(&lower) {
        return Verdict::RejectStopword;
    }
    if lower.chars().count() <= 2 {
        return Verdict::RejectShort;
    }
    if previous.is_some() && token.chars().next().is_some_and(|c| c.is_uppercase()) {
        return Verdict::AcceptCapitalized;
    }
    if lexicon.has_noun_suffix(&lower) {
        return Verdict::AcceptNounSuffix;
    }
    if lower.contains('-') {
        return Verdict::AcceptHyphenated;
    }
    Verdict::Reject
}

/// Convenience wrapper over [`classify`].
pub fn is_candidate(token: &str, previous: Option<&str>, lexicon: &Lexicon) -> bool {
    classify(token, previous, lexicon).is_accept()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(token: &str, previous: Option<&str>) -> Verdict {
        classify(token, previous, Lexicon::english())
    }

    #[test]
    fn test_stopword_rejected_even_when_capitalized() {
        assert_eq!(verdict("The", Some("see")), Verdict::RejectStopword);
        assert_eq!(verdict("Other", Some("see")), Verdict::RejectStopword);
    }

    #[test]
    fn test_short_tokens_rejected() {
        assert_eq!(verdict("AI", Some("new")), Verdict::RejectShort);
        assert_eq!(verdict("ok", None), Verdict::RejectShort);
    }

    #[test]
    fn test_capitalized_needs_previous_token() {
        assert_eq!(verdict("Paris", Some("visited")), Verdict::AcceptCapitalized);
        assert_eq!(verdict("Paris", None), Verdict::Reject);
    }

    #[test]
    fn test_capitalized_after_period_still_accepted() {
        // The classifier only sees the previous token, not sentence boundaries.
        assert_eq!(verdict("Yesterday", Some("done")), Verdict::AcceptCapitalized);
    }

    #[test]
    fn test_capitalization_beats_suffix() {
        assert_eq!(
            verdict("Determination", Some("and")),
            Verdict::AcceptCapitalized
        );
    }

    #[test]
    fn test_first_token_can_still_match_suffix() {
        assert_eq!(verdict("Acceleration", None), Verdict::AcceptNounSuffix);
    }

    #[test]
    fn test_hyphenated_compound() {
        assert_eq!(verdict("machine-learning", None), Verdict::AcceptHyphenated);
    }

    #[test]
    fn test_plain_words_rejected() {
        assert_eq!(verdict("powerful", Some("is")), Verdict::Reject);
        assert!(!is_candidate("helps", Some("machine-learning"), Lexicon::english()));
    }
}
