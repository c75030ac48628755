//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────────────┐            │
//! │  │  Empty   │────►│ In Cart  │────►│ (checkout happens    │            │
//! │  │  Cart    │     │          │     │  outside this app)   │            │
//! │  └──────────┘     └──────────┘     └──────────────────────┘            │
//! │        ▲               │                                                │
//! │        │          add_to_cart                                           │
//! │        │          update_cart_line                                      │
//! │        │          remove_from_cart                                      │
//! │        │               │                                                │
//! │        └── clear_cart ◄┘                                                │
//! │                                                                         │
//! │  Every mutation persists the cart before the command returns, so a     │
//! │  restart at any point resumes from the last completed operation.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, CartState, CatalogState};
use shopfront_core::{Cart, CartLine, Price, Product};

/// One cart line plus its derived subtotal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,

    /// price × quantity, computed at response time.
    pub subtotal: Price,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub line_count: usize,
    pub total_quantity: u64,
    pub total: Price,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    subtotal: line.subtotal(),
                    line: line.clone(),
                })
                .collect(),
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

/// Gets the current cart contents with totals.
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(CartResponse::from)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If the product is already in the cart: its quantity increases
/// - If not: a new line is appended
/// - The product is resolved from the loaded catalog first; a product the
///   catalog has not seen (deep link, stale view) is fetched by id
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1)
#[tauri::command]
pub async fn add_to_cart(
    api: State<'_, ApiState>,
    catalog: State<'_, CatalogState>,
    cart: State<'_, CartState>,
    product_id: u64,
    quantity: Option<u32>,
) -> Result<CartResponse, CommandError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, quantity, "add_to_cart command");

    let product: Product = match catalog.find_product(product_id) {
        Some(product) => product,
        None => api
            .client()
            .get_product(product_id)
            .await
            .map_err(|_| CommandError::not_found("Product", product_id))?,
    };

    cart.mutate(|c| c.add_line(&product, quantity))??;
    Ok(cart.with_cart(CartResponse::from))
}

/// Sets the quantity of a cart line.
///
/// Quantity 0 is rejected (the line invariant is >= 1); use
/// `remove_from_cart` to drop a line.
#[tauri::command]
pub fn update_cart_line(
    cart: State<'_, CartState>,
    product_id: u64,
    quantity: u32,
) -> Result<CartResponse, CommandError> {
    debug!(product_id, quantity, "update_cart_line command");

    cart.mutate(|c| c.set_quantity(product_id, quantity))??;
    Ok(cart.with_cart(CartResponse::from))
}

/// Removes a line from the cart. Removing an absent product is a no-op.
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    product_id: u64,
) -> Result<CartResponse, CommandError> {
    debug!(product_id, "remove_from_cart command");

    cart.mutate(|c| c.remove_line(product_id))?;
    Ok(cart.with_cart(CartResponse::from))
}

/// Empties the cart.
#[tauri::command]
pub fn clear_cart(cart: State<'_, CartState>) -> Result<CartResponse, CommandError> {
    debug!("clear_cart command");

    cart.mutate(|c| c.clear())?;
    Ok(cart.with_cart(CartResponse::from))
}
