//! # Admin Commands
//!
//! Tauri commands for the validated product CRUD flow.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Create/Update Flow                             │
//! │                                                                         │
//! │  Frontend submits form (submit button disabled while in flight)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product_form()                                                │
//! │       │                                                                 │
//! │       ├── invalid ──► CommandError with one message per field,          │
//! │       │               NO network call issued                            │
//! │       ▼                                                                 │
//! │  POST/PUT to the API                                                    │
//! │       │                                                                 │
//! │       ├── failure ──► generic per-operation message (transient banner)  │
//! │       ▼                                                                 │
//! │  Re-fetch the product list into CatalogState                            │
//! │  (no optimistic update, no partial patching of local state)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AdminNotice { message, product } ──► transient success banner          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deletion additionally requires `confirmed: true`; the frontend asks the
//! user first and the command refuses to touch the network otherwise.

use serde::Serialize;
use tauri::State;
use tracing::{debug, warn};

use crate::commands::catalog::refresh_products;
use crate::error::CommandError;
use crate::state::{ApiState, CatalogState};
use shopfront_core::validation::validate_product_form;
use shopfront_core::{Product, ProductForm};

/// Success payload for admin mutations: the transient notice text plus the
/// entity the server echoed back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNotice {
    pub message: String,
    pub product: Product,
}

/// Creates a product after validating the form.
///
/// Validation failure blocks submission and surfaces one message per
/// invalid field; nothing is sent to the network.
#[tauri::command]
pub async fn create_product(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
    form: ProductForm,
) -> Result<AdminNotice, CommandError> {
    debug!(title = %form.title, "create_product command");

    validate_product_form(&form).map_err(CommandError::validation_fields)?;

    let product = api.client().create_product(&form).await.map_err(|e| {
        warn!(error = %e, "create product failed");
        CommandError::network("Could not create product")
    })?;

    refresh_products(api.client(), catalog.inner()).await;

    Ok(AdminNotice {
        message: "Product created".to_string(),
        product,
    })
}

/// Replaces a product after validating the form.
#[tauri::command]
pub async fn update_product(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
    product_id: u64,
    form: ProductForm,
) -> Result<AdminNotice, CommandError> {
    debug!(product_id, "update_product command");

    validate_product_form(&form).map_err(CommandError::validation_fields)?;

    let product = api
        .client()
        .replace_product(product_id, &form)
        .await
        .map_err(|e| {
            warn!(error = %e, product_id, "update product failed");
            CommandError::network("Could not update product")
        })?;

    refresh_products(api.client(), catalog.inner()).await;

    Ok(AdminNotice {
        message: "Product updated".to_string(),
        product,
    })
}

/// Deletes a product.
///
/// `confirmed` must be true: the frontend shows the confirmation dialog
/// and this command enforces that no unconfirmed delete reaches the API.
#[tauri::command]
pub async fn delete_product(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
    product_id: u64,
    confirmed: bool,
) -> Result<AdminNotice, CommandError> {
    debug!(product_id, confirmed, "delete_product command");

    if !confirmed {
        return Err(CommandError::validation("Deletion requires confirmation"));
    }

    let product = api.client().delete_product(product_id).await.map_err(|e| {
        warn!(error = %e, product_id, "delete product failed");
        CommandError::network("Could not delete product")
    })?;

    refresh_products(api.client(), catalog.inner()).await;

    Ok(AdminNotice {
        message: "Product deleted".to_string(),
        product,
    })
}
