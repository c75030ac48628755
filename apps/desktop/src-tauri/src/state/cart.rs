//! # Cart State
//!
//! The in-memory cart plus its write-through persistence.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Persistence                                     │
//! │                                                                         │
//! │  STARTUP   cart.json ──deserialize──► Cart (empty if missing/corrupt)   │
//! │                                                                         │
//! │  MUTATION  mutate(f):                                                   │
//! │              1. lock cart                                               │
//! │              2. run f (add/remove/update/clear)                         │
//! │              3. save full line list to cart.json  ◄── synchronous,      │
//! │                                                       every mutation    │
//! │                                                                         │
//! │  The cart on disk therefore always reflects the last completed          │
//! │  mutation; there is no flush step to forget.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use shopfront_core::Cart;
use shopfront_store::{LocalStore, StoreResult};

/// Tauri-managed cart state.
///
/// ## Thread Safety
/// `Mutex` because Tauri commands can run concurrently and every cart
/// operation is a quick read-modify-write.
#[derive(Debug)]
pub struct CartState {
    cart: Mutex<Cart>,
    store: LocalStore,
}

impl CartState {
    /// Loads the persisted cart (empty on first run or corruption).
    pub fn load(store: LocalStore) -> Self {
        let cart = Cart::from_lines(store.load_cart());
        CartState {
            cart: Mutex::new(cart),
            store,
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a mutation and persists the cart afterwards.
    ///
    /// The save happens inside the lock so two racing mutations cannot
    /// interleave their writes and persist an intermediate state.
    pub fn mutate<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        let out = f(&mut cart);
        self.store.save_cart(cart.lines())?;
        Ok(out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Price, Product, Rating};

    fn product(id: u64, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Price::from_cents(price_cents),
            description: "test".to_string(),
            category: "test".to_string(),
            image: "https://example.com/p.jpg".to_string(),
            rating: Rating { rate: 4.0, count: 1 },
        }
    }

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_mutations_survive_reload() {
        let (_dir, store) = temp_store();

        let state = CartState::load(store.clone());
        state
            .mutate(|c| c.add_line(&product(1, 999), 2))
            .unwrap()
            .unwrap();
        state
            .mutate(|c| c.add_line(&product(2, 1550), 1))
            .unwrap()
            .unwrap();

        // A fresh state over the same store sees the same cart
        let reloaded = CartState::load(store);
        assert_eq!(reloaded.with_cart(|c| c.line_count()), 2);
        assert_eq!(reloaded.with_cart(|c| c.total().cents()), 2 * 999 + 1550);
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let (_dir, store) = temp_store();

        let state = CartState::load(store.clone());
        state
            .mutate(|c| c.add_line(&product(1, 999), 1))
            .unwrap()
            .unwrap();
        state.mutate(|c| c.clear()).unwrap();

        let reloaded = CartState::load(store);
        assert!(reloaded.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_failed_core_op_still_persists_consistent_state() {
        let (_dir, store) = temp_store();

        let state = CartState::load(store.clone());
        state
            .mutate(|c| c.add_line(&product(1, 999), 1))
            .unwrap()
            .unwrap();

        // Rejected quantity leaves the line untouched in memory and on disk
        let result = state.mutate(|c| c.set_quantity(1, 0)).unwrap();
        assert!(result.is_err());

        let reloaded = CartState::load(store);
        assert_eq!(reloaded.with_cart(|c| c.lines()[0].quantity), 1);
    }
}
