//! Relevance filtering of raw search results.
//!
//! The backend search is broad (it scrapes whatever the store search pages
//! return), so the first client-side pass keeps only products whose name
//! actually contains a query token or one of its synonyms. Matching is
//! substring-based rather than word-boundary-based on purpose: product
//! names are full of compounds ("Smart TV", "LavaeSeca") that word
//! boundaries would miss.

use crate::analysis::Query;
use crate::product::Product;

/// Keep the products whose name matches at least one query token.
///
/// A product matches when, for ANY token, the normalized token or any of
/// its synonyms is a substring of the lowercased product name. An empty
/// token set matches nothing — a guard against one- and two-letter queries.
/// The filter is stable: survivors keep their relative order.
pub fn filter_by_relevance(products: &[Product], query: &Query) -> Vec<Product> {
    if query.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|product| {
            let name = product.name.to_lowercase();
            query.tokens.iter().any(|token| {
                name.contains(&token.normalized)
                    || token
                        .synonyms
                        .iter()
                        .any(|synonym| name.contains(&synonym.to_lowercase()))
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Geladeira Brastemp 400L", "Magalu").with_price(2000.0),
            Product::new("Refrigerador Consul", "Amazon").with_price(1800.0),
            Product::new("Fogão Electrolux 4 bocas", "Casas Bahia").with_price(900.0),
        ]
    }

    #[test]
    fn test_synonym_match() {
        let products = catalog();
        let result = filter_by_relevance(&products, &Query::parse("geladeira"));

        // "Refrigerador Consul" matches through the synonym table.
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Geladeira Brastemp 400L");
        assert_eq!(result[1].name, "Refrigerador Consul");
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let products = catalog();
        let result = filter_by_relevance(&products, &Query::parse("brastemp fogão"));

        assert_eq!(result.len(), 2);
        // Original relative order, not query-token order.
        assert_eq!(result[0].name, "Geladeira Brastemp 400L");
        assert_eq!(result[1].name, "Fogão Electrolux 4 bocas");
    }

    #[test]
    fn test_plural_query_matches_singular_name() {
        let products = catalog();
        let result = filter_by_relevance(&products, &Query::parse("geladeiras"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_substring_matching_tolerates_compounds() {
        let products = vec![Product::new("SuperGeladeiraX", "Magalu")];
        let result = filter_by_relevance(&products, &Query::parse("geladeira"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_degenerate_query_matches_nothing() {
        let products = catalog();
        assert!(filter_by_relevance(&products, &Query::parse("tv")).is_empty());
        assert!(filter_by_relevance(&products, &Query::parse("")).is_empty());
    }

    #[test]
    fn test_no_match() {
        let products = catalog();
        assert!(filter_by_relevance(&products, &Query::parse("notebook")).is_empty());
    }
}
