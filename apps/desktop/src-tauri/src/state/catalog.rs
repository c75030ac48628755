//! # Catalog State
//!
//! Holds the fetched catalog and the criteria of the derived view.
//!
//! ## Fetch Generations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stale Response Handling                              │
//! │                                                                         │
//! │  Fetches are not cancelled or deduplicated; a rapid re-trigger just    │
//! │  starts a second request. Each fetch takes a generation number at      │
//! │  issue time and its result is only folded in if the generation still   │
//! │  matches, so responses landing out of order cannot clobber newer data: │
//! │                                                                         │
//! │  begin_fetch() ──► gen 1 ──► GET /products           (slow)            │
//! │  begin_fetch() ──► gen 2 ──► GET /products/category  (fast)            │
//! │                                                                         │
//! │  gen 2 response ──► apply_fetch(2) ── 2 == current ──► applied         │
//! │  gen 1 response ──► apply_fetch(1) ── 1 != current ──► DISCARDED       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! A failed re-fetch keeps the last successfully fetched product list and
//! records a user-facing error: the user keeps browsing stale-but-real
//! products instead of staring at an empty grid.

use std::sync::Mutex;

use tracing::debug;

use shopfront_core::{derive_view, CatalogCriteria, Product, SortOrder};

// =============================================================================
// Catalog
// =============================================================================

/// The catalog as last fetched, plus the view criteria.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Last successfully fetched product list (server order).
    pub products: Vec<Product>,

    /// All known category labels.
    pub categories: Vec<String>,

    /// Current filter/search/sort criteria.
    pub criteria: CatalogCriteria,

    /// Last user-facing load error, if any.
    pub error: Option<String>,

    /// Generation of the most recently issued fetch.
    generation: u64,
}

impl Catalog {
    /// The derived view: filtered and (for rating orders) sorted.
    ///
    /// Recomputed on every call; always a permutation-subset of `products`.
    pub fn visible(&self) -> Vec<Product> {
        derive_view(&self.products, &self.criteria)
    }

    /// Looks up a fetched product by id.
    pub fn find_product(&self, id: u64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}

// =============================================================================
// Catalog State
// =============================================================================

/// Tauri-managed catalog state.
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: Mutex<Catalog>,
}

impl CatalogState {
    /// Creates an empty catalog state.
    pub fn new() -> Self {
        CatalogState::default()
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }

    /// Registers a new fetch and snapshots what it should ask the server.
    ///
    /// Returns the fetch generation plus the category and sort the request
    /// must carry. Issuing the fetch outside the lock keeps the catalog
    /// readable while the request is in flight.
    pub fn begin_fetch(&self) -> (u64, Option<String>, Option<SortOrder>) {
        self.with_catalog_mut(|c| {
            c.generation += 1;
            (c.generation, c.criteria.category.clone(), c.criteria.sort)
        })
    }

    /// Folds a fetch result back into the catalog.
    ///
    /// Returns false (and changes nothing) when a newer fetch was issued
    /// after this one: the late response is stale and discarded.
    ///
    /// On success the product list is replaced and any error cleared; on
    /// failure the previous list is KEPT and the error recorded.
    pub fn apply_fetch(&self, generation: u64, result: Result<Vec<Product>, String>) -> bool {
        self.with_catalog_mut(|c| {
            if generation != c.generation {
                debug!(
                    generation,
                    current = c.generation,
                    "discarding stale fetch result"
                );
                return false;
            }

            match result {
                Ok(products) => {
                    debug!(count = products.len(), "catalog updated");
                    c.products = products;
                    c.error = None;
                }
                Err(message) => {
                    c.error = Some(message);
                }
            }
            true
        })
    }

    /// Folds a category-list result into the catalog.
    ///
    /// On failure the category list stays empty and the error is recorded.
    pub fn apply_categories(&self, result: Result<Vec<String>, String>) {
        self.with_catalog_mut(|c| match result {
            Ok(categories) => c.categories = categories,
            Err(message) => c.error = Some(message),
        });
    }

    /// Applies a criteria change and reports whether it needs a re-fetch.
    ///
    /// Category and price-sort changes need fresh server data; search and
    /// rating-sort changes only re-derive the view locally.
    pub fn update_criteria<F>(&self, change: F) -> bool
    where
        F: FnOnce(&mut CatalogCriteria),
    {
        self.with_catalog_mut(|c| {
            let mut next = c.criteria.clone();
            change(&mut next);
            let refetch = c.criteria.needs_refetch(&next);
            c.criteria = next;
            refetch
        })
    }

    /// Looks up a fetched product by id.
    pub fn find_product(&self, id: u64) -> Option<Product> {
        self.with_catalog(|c| c.find_product(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Price, Rating};

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Price::from_cents(1000),
            description: "test".to_string(),
            category: "test".to_string(),
            image: "https://example.com/p.jpg".to_string(),
            rating: Rating { rate: 4.0, count: 1 },
        }
    }

    #[test]
    fn test_apply_fetch_updates_products() {
        let state = CatalogState::new();
        let (generation, _, _) = state.begin_fetch();

        assert!(state.apply_fetch(generation, Ok(vec![product(1), product(2)])));
        assert_eq!(state.with_catalog(|c| c.products.len()), 2);
        assert_eq!(state.with_catalog(|c| c.error.clone()), None);
    }

    #[test]
    fn test_stale_fetch_discarded() {
        let state = CatalogState::new();
        let (old_generation, _, _) = state.begin_fetch();
        let (new_generation, _, _) = state.begin_fetch();

        // The newer fetch lands first
        assert!(state.apply_fetch(new_generation, Ok(vec![product(2)])));

        // The older response arrives late and must not clobber it
        assert!(!state.apply_fetch(old_generation, Ok(vec![product(1)])));
        let ids: Vec<u64> = state.with_catalog(|c| c.products.iter().map(|p| p.id).collect());
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_products() {
        let state = CatalogState::new();
        let (generation, _, _) = state.begin_fetch();
        state.apply_fetch(generation, Ok(vec![product(1)]));

        let (generation, _, _) = state.begin_fetch();
        state.apply_fetch(generation, Err("Could not load products".to_string()));

        // Stale-but-available: the old list survives, the error is recorded
        assert_eq!(state.with_catalog(|c| c.products.len()), 1);
        assert_eq!(
            state.with_catalog(|c| c.error.clone()),
            Some("Could not load products".to_string())
        );
    }

    #[test]
    fn test_successful_fetch_clears_error() {
        let state = CatalogState::new();
        let (generation, _, _) = state.begin_fetch();
        state.apply_fetch(generation, Err("boom".to_string()));

        let (generation, _, _) = state.begin_fetch();
        state.apply_fetch(generation, Ok(vec![product(1)]));

        assert_eq!(state.with_catalog(|c| c.error.clone()), None);
    }

    #[test]
    fn test_update_criteria_refetch_decisions() {
        let state = CatalogState::new();

        // Category change refetches
        assert!(state.update_criteria(|c| c.category = Some("electronics".to_string())));

        // Search change does not
        assert!(!state.update_criteria(|c| c.search = "phone".to_string()));

        // Rating sort does not
        assert!(!state.update_criteria(|c| c.sort = Some(SortOrder::RatingDesc)));

        // Price sort does
        assert!(state.update_criteria(|c| c.sort = Some(SortOrder::PriceAsc)));
    }

    #[test]
    fn test_begin_fetch_snapshots_criteria() {
        let state = CatalogState::new();
        state.update_criteria(|c| {
            c.category = Some("jewelery".to_string());
            c.sort = Some(SortOrder::PriceDesc);
        });

        let (_, category, sort) = state.begin_fetch();
        assert_eq!(category.as_deref(), Some("jewelery"));
        assert_eq!(sort, Some(SortOrder::PriceDesc));
    }

    #[test]
    fn test_failed_categories_leaves_list_empty() {
        let state = CatalogState::new();
        state.apply_categories(Err("Could not load categories".to_string()));

        assert!(state.with_catalog(|c| c.categories.is_empty()));
        assert!(state.with_catalog(|c| c.error.is_some()));
    }
}
