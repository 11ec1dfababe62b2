//! Product records and the upstream search envelope.
//!
//! Products arrive from the search backend as JSON records with pt-BR field
//! names (`nome`, `preco`, `site`, ...). The structs here accept both those
//! names and their English equivalents, so the same types cover the live
//! `/api/buscar/{term}` endpoint and the static fallback dataset.
//!
//! Prices are the one messy field: the backend emits them as a JSON number,
//! a numeric string, or garbage (scrape failures). Anything that does not
//! parse to a finite number becomes `None`, and the filtering core treats
//! `None` as "excluded from price predicates and buckets" rather than as an
//! error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, VitrineError};

/// Link values the upstream scraper uses to mean "no link".
const LINK_SENTINELS: &[&str] = &["", "null", "None", "undefined"];

/// A single product offer.
///
/// Immutable once deserialized; the filtering core takes slices of products
/// and returns fresh vectors, never mutating its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product display name.
    #[serde(alias = "nome")]
    pub name: String,
    /// Numeric price, if the upstream value was usable.
    #[serde(alias = "preco", default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
    /// Store (site) offering the product.
    #[serde(alias = "site")]
    pub store: String,
    /// Explicit brand, when the backend provides one.
    #[serde(alias = "marca", default)]
    pub brand: Option<String>,
    /// Product image URL.
    #[serde(alias = "imagem", default)]
    pub image_url: Option<String>,
    /// Outbound link to the store page. May hold sentinel "absent" values.
    #[serde(default)]
    pub link: Option<String>,
    /// Pre-formatted price string from the backend (e.g. `R$ 2.399,00`).
    #[serde(alias = "preco_formatado", default)]
    pub price_formatted: Option<String>,
}

impl Product {
    /// Create a product with the two mandatory fields.
    pub fn new<S: Into<String>, T: Into<String>>(name: S, store: T) -> Self {
        Product {
            name: name.into(),
            price: None,
            store: store.into(),
            brand: None,
            image_url: None,
            link: None,
            price_formatted: None,
        }
    }

    /// Set the numeric price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the explicit brand.
    pub fn with_brand<S: Into<String>>(mut self, brand: S) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the outbound link.
    pub fn with_link<S: Into<String>>(mut self, link: S) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Whether the product carries a usable outbound link.
    ///
    /// The scraper serializes missing links as `"null"`, `"None"`,
    /// `"undefined"` or an empty string; those all count as absent.
    pub fn has_valid_link(&self) -> bool {
        match &self.link {
            Some(link) => !LINK_SENTINELS.contains(&link.as_str()),
            None => false,
        }
    }
}

/// Accept a price as a JSON number or a numeric string; anything else is `None`.
fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let price = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

/// The `{sucesso, produtos}` envelope returned by the search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Whether the backend search succeeded.
    #[serde(alias = "sucesso")]
    pub success: bool,
    /// The matching products (empty on failure).
    #[serde(alias = "produtos", default)]
    pub products: Vec<Product>,
}

impl SearchResponse {
    /// Validate the envelope and extract the product list.
    ///
    /// The filtering core must never see malformed input, so callers go
    /// through this before invoking any filter.
    pub fn into_products(self) -> Result<Vec<Product>> {
        if self.success {
            Ok(self.products)
        } else {
            Err(VitrineError::data("upstream search reported failure"))
        }
    }
}

/// Parse a JSON payload holding either a search envelope or a bare product
/// array (the shape of the static fallback dataset).
pub fn products_from_json(payload: &str) -> Result<Vec<Product>> {
    if let Ok(envelope) = serde_json::from_str::<SearchResponse>(payload) {
        return envelope.into_products();
    }
    let products: Vec<Product> = serde_json::from_str(payload)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pt_br_fields() {
        let json = r#"{
            "nome": "Geladeira Brastemp 400L",
            "preco": 2399.0,
            "site": "Magalu",
            "imagem": "https://example.com/g.jpg",
            "preco_formatado": "R$ 2.399,00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.name, "Geladeira Brastemp 400L");
        assert_eq!(product.price, Some(2399.0));
        assert_eq!(product.store, "Magalu");
        assert_eq!(product.brand, None);
        assert_eq!(product.price_formatted.as_deref(), Some("R$ 2.399,00"));
    }

    #[test]
    fn test_price_from_numeric_string() {
        let json = r#"{"nome": "TV", "preco": "1899.90", "site": "Amazon"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Some(1899.90));
    }

    #[test]
    fn test_non_numeric_price_becomes_none() {
        for raw in [r#""abc""#, r#""""#, "null", r#""NaN""#] {
            let json = format!(r#"{{"nome": "TV", "preco": {raw}, "site": "Amazon"}}"#);
            let product: Product = serde_json::from_str(&json).unwrap();
            assert_eq!(product.price, None, "price {raw} should not parse");
        }
    }

    #[test]
    fn test_link_sentinels() {
        let product = Product::new("TV", "Amazon");
        assert!(!product.has_valid_link());
        assert!(!product.clone().with_link("null").has_valid_link());
        assert!(!product.clone().with_link("None").has_valid_link());
        assert!(!product.clone().with_link("undefined").has_valid_link());
        assert!(!product.clone().with_link("").has_valid_link());
        assert!(product.with_link("https://example.com").has_valid_link());
    }

    #[test]
    fn test_envelope_validation() {
        let ok = SearchResponse {
            success: true,
            products: vec![Product::new("TV", "Amazon")],
        };
        assert_eq!(ok.into_products().unwrap().len(), 1);

        let failed = SearchResponse {
            success: false,
            products: vec![],
        };
        assert!(failed.into_products().is_err());
    }

    #[test]
    fn test_products_from_json_both_shapes() {
        let envelope = r#"{"sucesso": true, "produtos": [{"nome": "TV", "site": "Amazon"}]}"#;
        assert_eq!(products_from_json(envelope).unwrap().len(), 1);

        let bare = r#"[{"name": "TV", "store": "Amazon"}]"#;
        assert_eq!(products_from_json(bare).unwrap().len(), 1);
    }
}
