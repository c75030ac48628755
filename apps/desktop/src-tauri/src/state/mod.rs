//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything (or the
//! ambient global singletons the original storefront used), we use separate
//! state types with well-defined read/write access points:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(api_state);      app.manage(cart_state);            │   │
//! │  │  app.manage(catalog_state);  app.manage(auth_state);            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │              │               │               │              │          │
//! │              ▼               ▼               ▼              ▼          │
//! │  ┌──────────────┐ ┌───────────────┐ ┌──────────────┐ ┌────────────┐   │
//! │  │   ApiState   │ │ CatalogState  │ │  CartState   │ │ AuthState  │   │
//! │  │              │ │               │ │              │ │            │   │
//! │  │  ApiClient   │ │  Mutex<       │ │  Mutex<Cart> │ │ RwLock<    │   │
//! │  │  (pooled,    │ │   Catalog>    │ │  + LocalStore│ │  token>    │   │
//! │  │   shareable) │ │  + fetch gen  │ │  (persisted) │ │ +LocalStore│   │
//! │  └──────────────┘ └───────────────┘ └──────────────┘ └────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ApiState: reqwest::Client is internally pooled (thread-safe)        │
//! │  • CatalogState/CartState: Mutex for exclusive access                  │
//! │  • AuthState: RwLock (reads dominate: every guard check)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod api;
mod auth;
mod cart;
mod catalog;

pub use api::ApiState;
pub use auth::AuthState;
pub use cart::CartState;
pub use catalog::{Catalog, CatalogState};
