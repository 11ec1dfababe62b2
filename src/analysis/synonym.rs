//! Fixed domain synonym table.
//!
//! Brazilian storefronts name the same appliance in several ways (a fridge
//! is both "geladeira" and "refrigerador"), so the relevance filter expands
//! query tokens through this table before matching. The table is a
//! hand-maintained, process-wide constant; entries are lowercase and lookup
//! is case-sensitive, so callers must lowercase first.
//!
//! The mapping is directional, not a symmetric thesaurus: "iphone" expands
//! to "apple", but "apple" expands to nothing.
//!
//! # Examples
//!
//! ```
//! use vitrine::analysis::synonym::expand;
//!
//! let expansion = expand("geladeira", "geladeira");
//! assert!(expansion.contains("refrigerador"));
//! assert!(expand("parafusadeira", "parafusadeira").is_empty());
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Domain synonym groups, keyed by query term.
static SYNONYMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    map.insert("geladeira", &["refrigerador", "refrigeradores"]);
    map.insert("refrigerador", &["geladeira"]);
    map.insert("tv", &["televisor", "televisão", "smart tv"]);
    map.insert("televisão", &["tv", "smart tv"]);
    map.insert("maquina de lavar", &["lavadora", "lava e seca"]);
    map.insert("notebook", &["laptop"]);
    map.insert("smartphone", &["celular", "iphone", "smartphones"]);
    map.insert("smartphones", &["celular", "iphone", "smartphone"]);
    map.insert("iphone", &["apple", "smartphone"]);
    map
});

/// Expand a query token through the synonym table.
///
/// Both the original spelling and the normalized (plural-stripped) form are
/// looked up; the result is the union of the two rows, or an empty set when
/// neither is in the table.
pub fn expand(original: &str, normalized: &str) -> HashSet<String> {
    let mut expansion = HashSet::new();
    for key in [original, normalized] {
        if let Some(synonyms) = SYNONYMS.get(key) {
            expansion.extend(synonyms.iter().map(|s| s.to_string()));
        }
    }
    expansion
}
