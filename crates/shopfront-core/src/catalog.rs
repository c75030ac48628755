//! # Catalog Module
//!
//! Filter/sort criteria and the derived catalog view.
//!
//! ## Where the Work Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Derivation Split                             │
//! │                                                                         │
//! │  SERVER SIDE (re-fetch)              CLIENT SIDE (pure, this module)   │
//! │  ──────────────────────              ────────────────────────────────  │
//! │  • category scoping                  • free-text search filter         │
//! │    GET /products/category/{c}          (title OR description,          │
//! │  • price ordering                       case-insensitive substring)    │
//! │    GET /products?sort=asc|desc       • rating ordering                 │
//! │                                        (stable sort, ties keep         │
//! │  The API only sorts by price;          server order)                   │
//! │  rating orders never reach it.                                         │
//! │                                                                         │
//! │  Criteria change → refetch?                                            │
//! │    category changed ............ yes                                   │
//! │    price sort changed .......... yes                                   │
//! │    rating sort changed ......... no (local re-derive only)             │
//! │    search term changed ......... no (local re-derive only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The derived view is recomputed on every read and is always a
//! permutation-subset of the last successfully fetched product list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Sort Order
// =============================================================================

/// Requested ordering of the catalog view.
///
/// Price orders are delegated to the server; rating orders are applied
/// client-side because the API cannot produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortOrder {
    /// Price low to high (server-side).
    PriceAsc,
    /// Price high to low (server-side).
    PriceDesc,
    /// Rating low to high (client-side).
    RatingAsc,
    /// Rating high to low (client-side).
    RatingDesc,
}

impl SortOrder {
    /// The `sort=` query value the API understands, if any.
    ///
    /// Rating orders return `None`: they must not be sent to the server,
    /// which would misread them as price ordering.
    pub fn server_param(self) -> Option<&'static str> {
        match self {
            SortOrder::PriceAsc => Some("asc"),
            SortOrder::PriceDesc => Some("desc"),
            SortOrder::RatingAsc | SortOrder::RatingDesc => None,
        }
    }

    /// True if this order is applied locally during view derivation.
    pub fn is_client_side(self) -> bool {
        self.server_param().is_none()
    }
}

// =============================================================================
// Criteria
// =============================================================================

/// The three independent inputs of the derived catalog view.
///
/// Transient UI state; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogCriteria {
    /// Category filter; `None` means all categories.
    pub category: Option<String>,

    /// Free-text search term; empty means no filtering.
    pub search: String,

    /// Requested ordering; `None` keeps server order.
    pub sort: Option<SortOrder>,
}

impl CatalogCriteria {
    /// The `sort=` value the next fetch should carry, if any.
    pub fn server_sort(&self) -> Option<&'static str> {
        self.sort.and_then(SortOrder::server_param)
    }

    /// Whether moving from `self` to `next` requires a new fetch.
    ///
    /// A fetch is needed iff the category changed or the server-side
    /// component of the sort changed. Search and rating-sort transitions
    /// re-derive locally from the already-fetched list.
    pub fn needs_refetch(&self, next: &CatalogCriteria) -> bool {
        self.category != next.category || self.server_sort() != next.server_sort()
    }
}

// =============================================================================
// View Derivation
// =============================================================================

/// Derives the visible product list from the fetched catalog and criteria.
///
/// Pure function, recomputed on every read, no caching:
/// 1. keep products whose title OR description contains the search term
///    (case-insensitive substring; empty term keeps everything)
/// 2. if a rating order is requested, stable-sort by rating so that ties
///    keep their server-provided relative order
///
/// Price orders and "none" leave the server order untouched.
pub fn derive_view(products: &[Product], criteria: &CatalogCriteria) -> Vec<Product> {
    let needle = criteria.search.trim().to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    match criteria.sort {
        Some(SortOrder::RatingAsc) => {
            view.sort_by(|a, b| a.rating.rate.total_cmp(&b.rating.rate));
        }
        Some(SortOrder::RatingDesc) => {
            view.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate));
        }
        // Price orders came back from the server already sorted
        Some(SortOrder::PriceAsc) | Some(SortOrder::PriceDesc) | None => {}
    }

    view
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::types::Rating;

    fn product(id: u64, title: &str, description: &str, rate: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: Price::from_cents(1000),
            description: description.to_string(),
            category: "test".to_string(),
            image: "https://example.com/p.jpg".to_string(),
            rating: Rating { rate, count: 5 },
        }
    }

    fn criteria(search: &str, sort: Option<SortOrder>) -> CatalogCriteria {
        CatalogCriteria {
            category: None,
            search: search.to_string(),
            sort,
        }
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let products = vec![
            product(1, "Red Shirt", "cotton", 4.5),
            product(2, "Blue Hat", "wool", 2.0),
        ];

        let view = derive_view(&products, &criteria("RED", None));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_search_matches_description() {
        let products = vec![
            product(1, "Shirt", "a deep red shade", 4.5),
            product(2, "Hat", "navy blue", 2.0),
        ];

        let view = derive_view(&products, &criteria("red", None));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let products = vec![
            product(1, "Red Shirt", "cotton", 4.5),
            product(2, "Blue Hat", "wool", 2.0),
        ];

        let view = derive_view(&products, &criteria("", None));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_rating_sort_both_directions() {
        let products = vec![
            product(1, "A", "", 4.5),
            product(2, "B", "", 2.0),
        ];

        let asc = derive_view(&products, &criteria("", Some(SortOrder::RatingAsc)));
        let rates: Vec<f64> = asc.iter().map(|p| p.rating.rate).collect();
        assert_eq!(rates, vec![2.0, 4.5]);

        let desc = derive_view(&products, &criteria("", Some(SortOrder::RatingDesc)));
        let rates: Vec<f64> = desc.iter().map(|p| p.rating.rate).collect();
        assert_eq!(rates, vec![4.5, 2.0]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        // Equal ratings keep their server-provided relative order
        let products = vec![
            product(1, "A", "", 3.0),
            product(2, "B", "", 3.0),
            product(3, "C", "", 1.0),
        ];

        let asc = derive_view(&products, &criteria("", Some(SortOrder::RatingAsc)));
        let ids: Vec<u64> = asc.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_price_sort_preserves_server_order() {
        // The server already ordered these; derivation must not touch them
        let products = vec![
            product(2, "B", "", 1.0),
            product(1, "A", "", 5.0),
        ];

        let view = derive_view(&products, &criteria("", Some(SortOrder::PriceDesc)));
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_server_param_mapping() {
        assert_eq!(SortOrder::PriceAsc.server_param(), Some("asc"));
        assert_eq!(SortOrder::PriceDesc.server_param(), Some("desc"));
        assert_eq!(SortOrder::RatingAsc.server_param(), None);
        assert_eq!(SortOrder::RatingDesc.server_param(), None);
    }

    #[test]
    fn test_needs_refetch_on_category_change() {
        let old = CatalogCriteria::default();
        let new = CatalogCriteria {
            category: Some("electronics".to_string()),
            ..CatalogCriteria::default()
        };
        assert!(old.needs_refetch(&new));
    }

    #[test]
    fn test_needs_refetch_on_price_sort_change() {
        let old = criteria("", None);
        let new = criteria("", Some(SortOrder::PriceAsc));
        assert!(old.needs_refetch(&new));

        let flipped = criteria("", Some(SortOrder::PriceDesc));
        assert!(new.needs_refetch(&flipped));
    }

    #[test]
    fn test_local_changes_do_not_refetch() {
        // Search term is purely local
        let old = criteria("", None);
        let new = criteria("shirt", None);
        assert!(!old.needs_refetch(&new));

        // Rating sort is purely local
        let new = criteria("", Some(SortOrder::RatingDesc));
        assert!(!old.needs_refetch(&new));

        // Switching between the two rating orders stays local too
        let other = criteria("", Some(SortOrder::RatingAsc));
        assert!(!new.needs_refetch(&other));
    }
}
