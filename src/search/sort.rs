//! Ordering of filtered results.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitrineError};
use crate::product::Product;

/// How to order the result list.
///
/// `Relevance` preserves the input order, which already encodes the stable
/// order of the relevance filter. The price modes use a total order in
/// which products without a numeric price sort LAST in both directions;
/// ties keep their input order (the sort is stable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep the input order.
    #[default]
    Relevance,
    /// Cheapest first, priceless products last.
    PriceAsc,
    /// Most expensive first, priceless products last.
    PriceDesc,
}

impl FromStr for SortMode {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "relevance" => Ok(SortMode::Relevance),
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            other => Err(VitrineError::query(format!("unknown sort mode: {other}"))),
        }
    }
}

/// Compare two optional prices with `None` greater than any number.
fn cmp_price_none_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a newly ordered copy of `products`; the input is never mutated.
pub fn sort(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match mode {
        SortMode::Relevance => {}
        SortMode::PriceAsc => {
            sorted.sort_by(|a, b| cmp_price_none_last(a.price, b.price));
        }
        SortMode::PriceDesc => {
            sorted.sort_by(|a, b| match (a.price, b.price) {
                (Some(a), Some(b)) => b.total_cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
    sorted
}
