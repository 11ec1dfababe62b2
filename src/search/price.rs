//! Fixed price-range catalog and bucketing.
//!
//! The storefront shows nine fixed price bands. Each band has a stable key
//! of the form `{min}-{max}`, with `0` standing in for "no upper bound" on
//! the last band; the keys double as the facet-selection values for the
//! price dimension.

use serde::Serialize;

use crate::product::Product;

/// One band of the price catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    /// Display label (pt-BR, as rendered by the storefront).
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound; `None` means unbounded.
    pub max: Option<f64>,
}

/// The fixed, ordered price-band catalog.
pub const PRICE_RANGES: &[PriceRange] = &[
    PriceRange { label: "R$ 0 - R$ 25", min: 0.0, max: Some(25.0) },
    PriceRange { label: "R$ 25 - R$ 50", min: 25.0, max: Some(50.0) },
    PriceRange { label: "R$ 50 - R$ 100", min: 50.0, max: Some(100.0) },
    PriceRange { label: "R$ 100 - R$ 250", min: 100.0, max: Some(250.0) },
    PriceRange { label: "R$ 250 - R$ 500", min: 250.0, max: Some(500.0) },
    PriceRange { label: "R$ 500 - R$ 1.000", min: 500.0, max: Some(1000.0) },
    PriceRange { label: "R$ 1.000 - R$ 2.500", min: 1000.0, max: Some(2500.0) },
    PriceRange { label: "R$ 2.500 - R$ 5.000", min: 2500.0, max: Some(5000.0) },
    PriceRange { label: "Acima de R$ 5.000", min: 5000.0, max: None },
];

impl PriceRange {
    /// Stable selection key: `{min}-{max}`, `0` for the unbounded band.
    pub fn key(&self) -> String {
        format!("{}-{}", self.min as u64, self.max.map_or(0, |m| m as u64))
    }

    /// Whether a numeric price falls inside this band (bounds inclusive).
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Parse a selection key back into `(min, max)` bounds.
///
/// Returns `None` for malformed keys; a malformed active key simply matches
/// no product. A `0` upper bound means unbounded, mirroring [`PriceRange::key`].
pub fn parse_key(key: &str) -> Option<(f64, Option<f64>)> {
    let (min, max) = key.split_once('-')?;
    let min = min.trim().parse::<f64>().ok()?;
    let max = max.trim().parse::<f64>().ok()?;
    Some((min, (max != 0.0).then_some(max)))
}

/// A band of the catalog together with its live count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRangeCount {
    /// The band.
    pub range: PriceRange,
    /// Number of products whose numeric price falls in the band.
    pub count: usize,
}

/// Count products per band, in catalog order.
///
/// Products without a numeric price belong to no band. Bands with count 0
/// are dropped unless their key is in `active_keys`, so a selected band
/// that no longer matches anything stays visible rather than vanishing
/// mid-interaction.
pub fn bucket(products: &[Product], active_keys: &[String]) -> Vec<PriceRangeCount> {
    PRICE_RANGES
        .iter()
        .map(|range| PriceRangeCount {
            range: *range,
            count: products
                .iter()
                .filter(|p| p.price.is_some_and(|price| range.contains(price)))
                .count(),
        })
        .filter(|entry| entry.count > 0 || active_keys.contains(&entry.range.key()))
        .collect()
}
