//! Brand derivation for products without an explicit brand field.
//!
//! Scraped offers frequently omit the brand, but the brand facet still has
//! to show something, so it is derived from the product name: strip the
//! category vocabulary ("geladeira", "smart", ...) and take the first word
//! that survives. The stripping is sequential substring removal, and the
//! term order below is load-bearing — "smartphone" must be removed before
//! "smart", "usado:" before "usado", "maquina de lavar" before "maquina".
//! Removal is substring-based, not token-based, so a term embedded in a
//! longer word is also removed; that is inherited behavior and changing it
//! would change derived brands.

use std::sync::LazyLock;

use regex::Regex;

use crate::product::Product;

/// Brand used when nothing of the name survives noise removal.
pub const UNKNOWN_BRAND: &str = "OUTRO";

/// Category vocabulary stripped from names before picking a brand word.
/// Removal order matters; keep longer terms before their prefixes.
const CATEGORY_NOISE: &[&str] = &[
    "ar condicionado",
    "geladeira",
    "refrigerador",
    "fogão",
    "tv",
    "smart",
    "smartphone",
    "celular",
    "maquina de lavar",
    "usado:",
    "usado",
    "maquina",
    "lavadora",
];

/// Word separators seen in product names: whitespace, comma, slash, hyphen.
static WORD_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,/-]+").unwrap());

/// Derive the facet brand for a product.
///
/// An explicit brand wins and is returned uppercased. Otherwise every
/// occurrence of each category-noise term is removed from the lowercased
/// name, the remainder is split on separators, and the first token longer
/// than 2 characters becomes the brand ([`UNKNOWN_BRAND`] when none is
/// left). Deterministic and pure.
pub fn resolve_brand(product: &Product) -> String {
    if let Some(brand) = &product.brand {
        return brand.to_uppercase();
    }

    let mut name = product.name.to_lowercase();
    for term in CATEGORY_NOISE {
        name = name.replace(term, "").trim().to_string();
    }

    WORD_SPLIT
        .split(&name)
        .find(|word| word.chars().count() > 2)
        .unwrap_or(UNKNOWN_BRAND)
        .to_uppercase()
}
