//! Filtering, faceting and ordering of search results.
//!
//! The pipeline runs in two stages. [`relevance::filter_by_relevance`] is
//! applied once per search submission and produces the working set; on every
//! filter interaction [`facet::apply_facets`] recomputes the visible result
//! list and the per-facet counts over that working set. [`sort`] reorders
//! whatever the facet stage produced.

pub mod brand;
pub mod facet;
pub mod price;
pub mod relevance;
pub mod sort;

pub use brand::resolve_brand;
pub use facet::{apply_facets, FacetCount, FacetResults, FacetSelection};
pub use price::{bucket, PriceRange, PriceRangeCount, PRICE_RANGES};
pub use relevance::filter_by_relevance;
pub use sort::{sort, SortMode};
