//! # Catalog Commands
//!
//! Tauri commands for browsing the catalog.
//!
//! ## Fetch vs Local Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Which Command Hits the Network?                      │
//! │                                                                         │
//! │  load_products ............ always fetches                             │
//! │  load_categories .......... always fetches                             │
//! │  set_category_filter ...... fetches (server scopes by category)        │
//! │  set_sort_order ........... fetches only when the server-side price    │
//! │                             component changed; rating orders are       │
//! │                             local re-derivation                        │
//! │  set_search_term .......... never fetches (local re-derivation)        │
//! │  get_catalog .............. never fetches (pure read)                  │
//! │                                                                         │
//! │  Every command returns the full CatalogView so the frontend can        │
//! │  re-render from one payload.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::{debug, warn};

use crate::error::CommandError;
use crate::state::{ApiState, Catalog, CatalogState};
use shopfront_api::{ApiClient, ListQuery};
use shopfront_core::{CatalogCriteria, Product, SortOrder};

/// Catalog view returned to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// The derived view: filtered and locally sorted.
    pub products: Vec<Product>,

    /// All known category labels.
    pub categories: Vec<String>,

    /// Criteria the view was derived from.
    pub criteria: CatalogCriteria,

    /// Last load error, if any (transient banner in the UI).
    pub error: Option<String>,
}

impl From<&Catalog> for CatalogView {
    fn from(catalog: &Catalog) -> Self {
        CatalogView {
            products: catalog.visible(),
            categories: catalog.categories.clone(),
            criteria: catalog.criteria.clone(),
            error: catalog.error.clone(),
        }
    }
}

/// Fetches the product list for the catalog's current criteria.
///
/// Category and server-side sort are snapshotted together with a fetch
/// generation; a result that comes back after a newer fetch was issued is
/// discarded. Failures keep the previous list and record a generic
/// user-facing message (the raw error only goes to the log).
pub(crate) async fn refresh_products(api: &ApiClient, catalog: &CatalogState) {
    let (generation, category, sort) = catalog.begin_fetch();
    let query = ListQuery { limit: None, sort };

    let result = match &category {
        Some(category) => api.list_by_category(category, &query).await,
        None => api.list_products(&query).await,
    };

    match result {
        Ok(products) => {
            catalog.apply_fetch(generation, Ok(products));
        }
        Err(e) => {
            warn!(error = %e, ?category, "product fetch failed");
            catalog.apply_fetch(generation, Err("Could not load products".to_string()));
        }
    }
}

/// Loads (or reloads) the product list for the current criteria.
#[tauri::command]
pub async fn load_products(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
) -> Result<CatalogView, CommandError> {
    debug!("load_products command");
    refresh_products(api.client(), catalog.inner()).await;
    Ok(catalog.with_catalog(CatalogView::from))
}

/// Loads the category list.
///
/// On failure the category list stays empty and a generic message is
/// recorded; the products already on screen are untouched.
#[tauri::command]
pub async fn load_categories(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
) -> Result<CatalogView, CommandError> {
    debug!("load_categories command");

    match api.client().list_categories().await {
        Ok(categories) => catalog.apply_categories(Ok(categories)),
        Err(e) => {
            warn!(error = %e, "category fetch failed");
            catalog.apply_categories(Err("Could not load categories".to_string()));
        }
    }

    Ok(catalog.with_catalog(CatalogView::from))
}

/// Sets the category filter (`None` = all categories) and re-fetches.
#[tauri::command]
pub async fn set_category_filter(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
    category: Option<String>,
) -> Result<CatalogView, CommandError> {
    debug!(?category, "set_category_filter command");

    if catalog.update_criteria(|c| c.category = category) {
        refresh_products(api.client(), catalog.inner()).await;
    }
    Ok(catalog.with_catalog(CatalogView::from))
}

/// Sets the sort order, fetching only when the server must be involved.
#[tauri::command]
pub async fn set_sort_order(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
    sort: Option<SortOrder>,
) -> Result<CatalogView, CommandError> {
    debug!(?sort, "set_sort_order command");

    if catalog.update_criteria(|c| c.sort = sort) {
        refresh_products(api.client(), catalog.inner()).await;
    }
    Ok(catalog.with_catalog(CatalogView::from))
}

/// Sets the search term. Purely local: the view is re-derived from the
/// already-fetched list, no network involved.
#[tauri::command]
pub fn set_search_term(catalog: State<'_, CatalogState>, term: String) -> CatalogView {
    debug!(%term, "set_search_term command");

    catalog.update_criteria(|c| c.search = term);
    catalog.with_catalog(CatalogView::from)
}

/// Returns the current catalog view without touching the network.
#[tauri::command]
pub fn get_catalog(catalog: State<'_, CatalogState>) -> CatalogView {
    debug!("get_catalog command");
    catalog.with_catalog(CatalogView::from)
}
