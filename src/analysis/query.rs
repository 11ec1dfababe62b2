//! Parsed search queries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{normalize_token, tokenize};
use crate::analysis::synonym;

/// One query word with its derived matching forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryToken {
    /// The lowercase token as typed.
    pub original: String,
    /// The plural-stripped form used for substring matching.
    pub normalized: String,
    /// Synonym expansion of both forms (may be empty).
    pub synonyms: HashSet<String>,
}

/// A parsed search query: the raw string plus its token set.
///
/// Parsing is total. A query whose every word is 2 characters or shorter
/// parses to an empty token set, which downstream means "match nothing".
///
/// # Examples
///
/// ```
/// use vitrine::analysis::Query;
///
/// let query = Query::parse("Geladeiras Brastemp");
/// assert_eq!(query.tokens.len(), 2);
/// assert_eq!(query.tokens[0].normalized, "geladeira");
/// assert!(Query::parse("tv").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// The raw query string as submitted.
    pub raw: String,
    /// Tokens longer than 2 characters, in query order.
    pub tokens: Vec<QueryToken>,
}

impl Query {
    /// Parse a raw query string into tokens with normalized forms and
    /// synonym expansions.
    pub fn parse(raw: &str) -> Self {
        let tokens = tokenize(raw)
            .into_iter()
            .map(|original| {
                let normalized = normalize_token(&original);
                let synonyms = synonym::expand(&original, &normalized);
                QueryToken {
                    original,
                    normalized,
                    synonyms,
                }
            })
            .collect();

        Query {
            raw: raw.to_string(),
            tokens,
        }
    }

    /// Whether the query has no usable tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_tokens() {
        let query = Query::parse("Smartphones Samsung");
        assert_eq!(query.raw, "Smartphones Samsung");
        assert_eq!(query.tokens.len(), 2);

        let first = &query.tokens[0];
        assert_eq!(first.original, "smartphones");
        assert_eq!(first.normalized, "smartphone");
        assert!(first.synonyms.contains("celular"));

        let second = &query.tokens[1];
        assert_eq!(second.original, "samsung");
        assert!(second.synonyms.is_empty());
    }

    #[test]
    fn test_degenerate_query_is_empty() {
        assert!(Query::parse("").is_empty());
        assert!(Query::parse("tv").is_empty());
        assert!(Query::parse("de a é").is_empty());
    }
}
