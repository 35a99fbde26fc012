//! Word tokenization shared by the index builder and the query scorer.

/// Split text into lowercased word tokens.
///
/// Tokens are maximal alphanumeric runs; punctuation and whitespace are
/// delimiters. Single-character tokens are dropped. No stemming or
/// stopword removal.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("How do I reset my password?"),
            vec!["how", "do", "reset", "my", "password"]
        );
    }

    #[test]
    fn test_drops_single_character_tokens() {
        assert_eq!(tokenize("a I x yz"), vec!["yz"]);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ?!  ").is_empty());
    }

    #[test]
    fn test_digits_are_word_characters() {
        assert_eq!(tokenize("error 404 page"), vec!["error", "404", "page"]);
    }
}
