//! Naive keyword extraction shared by the lesson planner, quiz builder,
//! chatbot and resource suggestions.

/// Words dropped before keywords are picked
pub const STOP_WORDS: [&str; 14] = [
    "the", "and", "a", "of", "to", "in", "for", "on", "with", "is", "are", "by", "this", "that",
];

/// Maximum number of keywords returned
pub const MAX_KEYWORDS: usize = 6;

/// Lowercase `text`, split it on runs of non-alphanumeric characters and keep the
/// first six tokens that are not stop words, in order of appearance.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty() && !STOP_WORDS.contains(token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_removed_and_case_folded() {
        assert_eq!(
            extract_keywords("The quick brown fox and THE dog"),
            vec!["quick", "brown", "fox", "dog"]
        );
    }

    #[test]
    fn test_truncates_to_six() {
        let keywords = extract_keywords("one two three four five six seven eight");
        assert_eq!(keywords, vec!["one", "two", "three", "four", "five", "six"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(
            extract_keywords("What are stomata? Define: photo-synthesis!"),
            vec!["what", "stomata", "define", "photo", "synthesis"]
        );
    }

    #[test]
    fn test_empty_and_stop_word_only_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("the and of").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_act_as_separators() {
        assert_eq!(extract_keywords("café 42"), vec!["caf", "42"]);
    }
}
