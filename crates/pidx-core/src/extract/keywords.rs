//! Keyword tokenization shared by extraction and search.
//!
//! Search relevance is a pure token-overlap fraction, so the query and
//! the pattern body must tokenize identically: lowercase alphanumeric
//! runs, length > 2, stop-words removed, deduplicated into a set.

use std::collections::BTreeSet;

/// Fixed stop-word list. Tokens here carry no search signal for a
/// pattern library and are excluded from keyword sets and queries.
const STOP_WORDS: &[&str] = &[
    "all", "also", "and", "any", "are", "but", "can", "could", "each", "for", "from", "had",
    "has", "have", "how", "into", "its", "may", "more", "most", "not", "one", "our", "over",
    "should", "some", "such", "than", "that", "the", "their", "them", "then", "they", "this",
    "under", "use", "used", "using", "was", "were", "what", "when", "where", "which", "will",
    "with", "would", "you", "your",
];

/// Tokenize text into the keyword set: lowercase alphanumeric runs,
/// length > 2, stop-words excluded.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(|t| t.to_lowercase())
        .filter(|t| t.len() > 2 && !is_stop_word(t))
        .collect()
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stop_word_list_is_sorted() {
        // binary_search requires it
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn splits_on_non_alphanumeric_runs() {
        let tokens = tokenize("circuit-breaker: retry/backoff (HTTP)");
        assert!(tokens.contains("circuit"));
        assert!(tokens.contains("breaker"));
        assert!(tokens.contains("retry"));
        assert!(tokens.contains("backoff"));
        assert!(tokens.contains("http"));
    }

    #[test]
    fn short_tokens_and_stop_words_excluded() {
        let tokens = tokenize("an id for the API and its use");
        assert!(!tokens.contains("an"));
        assert!(!tokens.contains("id"));
        assert!(!tokens.contains("for"));
        assert!(!tokens.contains("the"));
        assert!(!tokens.contains("and"));
        assert!(!tokens.contains("its"));
        assert!(!tokens.contains("use"));
        assert!(tokens.contains("api"));
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    proptest! {
        #[test]
        fn tokens_are_lowercase_and_long_enough(text in "[ -~]{0,200}") {
            for token in tokenize(&text) {
                prop_assert!(token.len() > 2);
                prop_assert_eq!(token.to_lowercase(), token.clone());
                prop_assert!(!is_stop_word(&token));
                prop_assert!(token.chars().all(char::is_alphanumeric));
            }
        }
    }
}
