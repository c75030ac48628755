//! # Cart Module
//!
//! The shopping cart: a quantity-augmented subset of the catalog.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Command                 Cart Change           │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Click "Add" ────────────► add_to_cart() ───────► add_line()           │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_line() ──► set_quantity()       │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► remove_line()        │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► clear()              │
//! │                                                                         │
//! │  Every mutation is followed by a synchronous save to local storage     │
//! │  (shopfront-store); this module is the pure in-memory half.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product merges quantity)
//! - Quantity is always >= 1 (`set_quantity` rejects 0)
//! - Insertion order is preserved across merges and removals

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::price::Price;
use crate::types::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart: a product copy plus a purchase quantity.
///
/// The product fields are serialized flat next to `quantity`, which is the
/// exact shape the persisted cart uses on disk and the frontend sees over IPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// The product this line refers to (copied, not referenced).
    #[serde(flatten)]
    pub product: Product,

    /// Purchase quantity, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price × quantity, computed on demand, never cached.
    #[inline]
    pub fn subtotal(&self) -> Price {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Restores a cart from previously persisted lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Read access to the lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds a product to the cart or merges into the existing line.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: its quantity increases by
    ///   `quantity` (no upper bound) and the line keeps its position
    /// - If not: a new line is appended with the given quantity
    pub fn add_line(&mut self, product: &Product, quantity: u32) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
            return Ok(());
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    /// Removes the line for the given product id.
    ///
    /// Idempotent: removing an absent product is a no-op, not an error.
    pub fn remove_line(&mut self, product_id: u64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - Quantity 0 is rejected; the >= 1 invariant is enforced here, not
    ///   left to callers
    /// - An absent product id is an error
    pub fn set_quantity(&mut self, product_id: u64, quantity: u32) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id)
            .ok_or(CoreError::LineNotFound(product_id))?;

        line.quantity = quantity;
        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of unique lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    /// Cart total: sum of all line subtotals, computed on demand.
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn test_product(id: u64, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Price::from_cents(price_cents),
            description: format!("Description {}", id),
            category: "test".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 999); // $9.99

        cart.add_line(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total().cents(), 1998); // $19.98
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_line(&product, 2).unwrap();
        cart.add_line(&product, 3).unwrap();
        cart.add_line(&product, 1).unwrap();

        // One line whose quantity is the sum of everything added
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 6);
    }

    #[test]
    fn test_merge_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 100), 1).unwrap();
        cart.add_line(&test_product(2, 200), 1).unwrap();
        cart.add_line(&test_product(1, 100), 1).unwrap();

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new();
        assert!(cart.add_line(&test_product(1, 100), 0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_line_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 999), 1).unwrap();

        cart.remove_line(1);
        assert!(cart.is_empty());

        // Second removal is a no-op, not an error
        cart.remove_line(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 250), 1).unwrap();

        cart.set_quantity(1, 4).unwrap();
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.total().cents(), 1000);
    }

    #[test]
    fn test_set_quantity_zero_rejected() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 250), 2).unwrap();

        assert!(cart.set_quantity(1, 0).is_err());
        // Line is untouched
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_missing_line() {
        let mut cart = Cart::new();
        let err = cart.set_quantity(99, 1).unwrap_err();
        assert!(matches!(err, CoreError::LineNotFound(99)));
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_total_matches_line_subtotals() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 999), 2).unwrap();
        cart.add_line(&test_product(2, 1550), 3).unwrap();

        let by_lines: i64 = cart.lines().iter().map(|l| l.subtotal().cents()).sum();
        assert_eq!(cart.total().cents(), by_lines);
        assert_eq!(cart.total().cents(), 2 * 999 + 3 * 1550);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_line_serde_round_trip() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 999), 2).unwrap();
        cart.add_line(&test_product(2, 1550), 1).unwrap();

        let json = serde_json::to_string(cart.lines()).unwrap();
        let restored: Vec<CartLine> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, cart.lines());
    }

    #[test]
    fn test_line_wire_shape_is_flat() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 999), 2).unwrap();

        let value = serde_json::to_value(&cart.lines()[0]).unwrap();
        // Product fields sit next to quantity, not nested under "product"
        assert_eq!(value["id"], 1);
        assert_eq!(value["quantity"], 2);
        assert!(value.get("product").is_none());
    }
}
