//! Faceted filtering with cross-filtered counts.
//!
//! Three independent dimensions — store, brand, price range — each hold a
//! set of selected values. A product must match every dimension (values
//! within one dimension are OR'd), and each dimension's displayed counts
//! are computed over the candidate set that applies the OTHER two
//! predicates only. That is what makes multi-select discovery work: with
//! "BRASTEMP" checked, the count next to "CONSUL" still tells the user
//! what checking it would add.
//!
//! The predicates are exposed as individual methods on [`FacetSelection`]
//! and combined in one place, so the result list and the three count
//! computations cannot drift apart.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::search::brand::resolve_brand;
use crate::search::price::{self, PriceRangeCount};

/// The active filter selections, one set per dimension.
///
/// An empty set means "no filter on that dimension". Stores are compared
/// case-insensitively (held lowercase), brands uppercase, price-range keys
/// verbatim. A new search resets the selection to [`FacetSelection::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    stores: Vec<String>,
    brands: Vec<String>,
    price_ranges: Vec<String>,
}

impl FacetSelection {
    /// Create an empty selection (all dimensions unfiltered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected stores (compared case-insensitively).
    pub fn with_stores<I, S>(mut self, stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stores = stores
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    /// Replace the selected brands (compared uppercase).
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.brands = brands
            .into_iter()
            .map(|s| s.as_ref().trim().to_uppercase())
            .collect();
        self
    }

    /// Replace the selected price-range keys (`"{min}-{max}"`, `0` = unbounded).
    pub fn with_price_ranges<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.price_ranges = keys.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Selected stores, lowercased.
    pub fn stores(&self) -> &[String] {
        &self.stores
    }

    /// Selected brands, uppercased.
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Selected price-range keys.
    pub fn price_ranges(&self) -> &[String] {
        &self.price_ranges
    }

    /// Whether no dimension has an active filter.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty() && self.brands.is_empty() && self.price_ranges.is_empty()
    }

    /// Store predicate: empty selection matches everything.
    pub fn store_matches(&self, product: &Product) -> bool {
        self.stores.is_empty() || self.stores.contains(&product.store.trim().to_lowercase())
    }

    /// Brand predicate over the derived brand: empty selection matches everything.
    pub fn brand_matches(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&resolve_brand(product))
    }

    /// Price predicate: a product without a numeric price never matches a
    /// non-empty price selection; malformed keys match nothing.
    pub fn price_matches(&self, product: &Product) -> bool {
        if self.price_ranges.is_empty() {
            return true;
        }
        let Some(price) = product.price else {
            return false;
        };
        self.price_ranges.iter().any(|key| match price::parse_key(key) {
            Some((min, max)) => price >= min && max.is_none_or(|m| price <= m),
            None => false,
        })
    }

    /// All three predicates AND'd together.
    pub fn matches(&self, product: &Product) -> bool {
        self.store_matches(product) && self.brand_matches(product) && self.price_matches(product)
    }
}

/// A facet value with its live count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    /// The facet value (raw store name, derived brand, or price-range key).
    pub key: String,
    /// Number of candidate products carrying this value.
    pub count: usize,
}

/// The output of one faceting pass: filtered products plus refreshed counts.
#[derive(Debug, Clone, Serialize)]
pub struct FacetResults {
    /// Products matching all three dimensions, in input order.
    pub products: Vec<Product>,
    /// Brand counts, descending by count, active zero-count brands last.
    pub brands: Vec<FacetCount>,
    /// Store counts in first-seen order, active zero-count stores last.
    pub stores: Vec<FacetCount>,
    /// Price bands in catalog order, zero-count bands dropped unless active.
    pub price_ranges: Vec<PriceRangeCount>,
}

/// Filter products by the active selection and recompute all facet counts.
///
/// `products` is the relevance-filtered working set for the current search.
/// The result list applies all three predicates; each dimension's counts
/// are computed over the candidate set that excludes that dimension's own
/// predicate. Active values that no longer match any product stay in the
/// output with count 0 instead of disappearing while checked.
pub fn apply_facets(products: &[Product], selection: &FacetSelection) -> FacetResults {
    let results: Vec<Product> = products
        .iter()
        .filter(|p| selection.matches(p))
        .cloned()
        .collect();

    // Per-dimension candidates: the other two predicates only.
    let brand_candidates: Vec<&Product> = products
        .iter()
        .filter(|p| selection.store_matches(p) && selection.price_matches(p))
        .collect();
    let store_candidates: Vec<&Product> = products
        .iter()
        .filter(|p| selection.brand_matches(p) && selection.price_matches(p))
        .collect();
    let price_candidates: Vec<Product> = products
        .iter()
        .filter(|p| selection.store_matches(p) && selection.brand_matches(p))
        .cloned()
        .collect();

    FacetResults {
        products: results,
        brands: brand_counts(&brand_candidates, &selection.brands),
        stores: store_counts(&store_candidates, products, &selection.stores),
        price_ranges: price::bucket(&price_candidates, &selection.price_ranges),
    }
}

/// Count derived brands, sort descending by count, append active brands
/// that fell to zero.
fn brand_counts(candidates: &[&Product], active: &[String]) -> Vec<FacetCount> {
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    let mut order: Vec<String> = Vec::new();
    for product in candidates {
        let brand = resolve_brand(product);
        if !counts.contains_key(&brand) {
            order.push(brand.clone());
        }
        *counts.entry(brand).or_insert(0) += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| {
        let count_a = counts.get(a).copied().unwrap_or(0);
        let count_b = counts.get(b).copied().unwrap_or(0);
        count_b.cmp(&count_a)
    });

    for brand in active {
        if !counts.contains_key(brand) {
            order.push(brand.clone());
        }
    }

    order
        .into_iter()
        .map(|key| {
            let count = counts.get(&key).copied().unwrap_or(0);
            FacetCount { key, count }
        })
        .collect()
}

/// Count stores in first-seen order, appending active stores with no
/// remaining candidates. Appended keys reuse the casing found in the
/// working set when possible, otherwise the active key itself.
fn store_counts(
    candidates: &[&Product],
    working_set: &[Product],
    active: &[String],
) -> Vec<FacetCount> {
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    let mut order: Vec<String> = Vec::new();
    for product in candidates {
        if !counts.contains_key(&product.store) {
            order.push(product.store.clone());
        }
        *counts.entry(product.store.clone()).or_insert(0) += 1;
    }

    for store in active {
        let already_listed = order.iter().any(|k| k.trim().to_lowercase() == *store);
        if already_listed {
            continue;
        }
        let display = working_set
            .iter()
            .find(|p| p.store.trim().to_lowercase() == *store)
            .map(|p| p.store.clone())
            .unwrap_or_else(|| store.clone());
        order.push(display);
    }

    order
        .into_iter()
        .map(|key| {
            let count = counts.get(&key).copied().unwrap_or(0);
            FacetCount { key, count }
        })
        .collect()
}
