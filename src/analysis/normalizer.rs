//! Token normalization and query tokenization.
//!
//! Normalization is a naive pt-BR singularization: lowercase, trim, and
//! strip a trailing `s` from words long enough that the `s` is almost
//! certainly a plural marker. This is intentionally crude — it pairs with
//! substring matching, so over-stripping only widens a match.
//!
//! # Examples
//!
//! ```
//! use vitrine::analysis::normalizer::{normalize_token, tokenize};
//!
//! assert_eq!(normalize_token("Geladeiras"), "geladeira");
//! assert_eq!(normalize_token("tvs"), "tvs"); // too short to strip
//! assert_eq!(tokenize("tv 50 polegadas"), vec!["polegadas"]);
//! ```

/// Normalize a single token: lowercase, trim, strip a plural `s`.
///
/// The trailing `s` is only stripped when the word has more than 4
/// characters, so short words like `tvs` or `mes` are left alone. Total
/// function; never fails.
pub fn normalize_token(word: &str) -> String {
    let word = word.trim().to_lowercase();
    if word.ends_with('s') && word.chars().count() > 4 {
        let mut chars = word.chars();
        chars.next_back();
        chars.as_str().to_string()
    } else {
        word
    }
}

/// Split a raw query into lowercase tokens longer than 2 characters.
///
/// Tokens of 1–2 characters are dropped to guard against degenerate
/// queries; an empty result means "match nothing" downstream.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .filter(|w| w.chars().count() > 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_token("  GELADEIRA  "), "geladeira");
    }

    #[test]
    fn test_normalize_strips_plural() {
        assert_eq!(normalize_token("refrigeradores"), "refrigeradore");
        assert_eq!(normalize_token("notebooks"), "notebook");
    }

    #[test]
    fn test_normalize_keeps_short_words() {
        // 4 chars or fewer: the trailing s stays.
        assert_eq!(normalize_token("tvs"), "tvs");
        assert_eq!(normalize_token("mais"), "mais");
        // Exactly 5 chars: stripped.
        assert_eq!(normalize_token("fotos"), "foto");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize_token("Televisões"), "televisõe");
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert!(tokenize("tv 4k de 50").is_empty());
        assert_eq!(
            tokenize("Smart TV Samsung"),
            vec!["smart".to_string(), "samsung".to_string()]
        );
    }

    #[test]
    fn test_tokenize_empty_query() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("a b c").is_empty());
    }
}
