//! # Vitrine
//!
//! The client-side filtering core of a price-comparison storefront.
//!
//! A search backend returns a broad list of scraped offers; this crate
//! narrows it down. One relevance pass per search submission, then a
//! faceted-filtering pass per user interaction:
//!
//! - Synonym-aware relevance filtering of raw results
//! - Brand derivation for offers without an explicit brand
//! - Faceted store/brand/price filtering with cross-filtered counts
//! - Fixed price-band bucketing
//! - Price/relevance sorting
//!
//! All core operations are synchronous, pure and re-entrant; the only
//! shared state is a pair of immutable static tables (synonyms and
//! category vocabulary).
//!
//! ## Example
//!
//! ```
//! use vitrine::analysis::Query;
//! use vitrine::product::Product;
//! use vitrine::search::{apply_facets, filter_by_relevance, FacetSelection};
//!
//! let offers = vec![
//!     Product::new("Geladeira Brastemp 400L", "Magalu").with_price(2000.0),
//!     Product::new("Refrigerador Consul", "Amazon").with_price(1800.0),
//!     Product::new("Fogão Atlas 4 bocas", "Magalu").with_price(700.0),
//! ];
//!
//! // "geladeira" also matches "Refrigerador" through the synonym table.
//! let working_set = filter_by_relevance(&offers, &Query::parse("geladeira"));
//! assert_eq!(working_set.len(), 2);
//!
//! let selection = FacetSelection::new().with_brands(["Brastemp"]);
//! let results = apply_facets(&working_set, &selection);
//! assert_eq!(results.products.len(), 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod product;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
