//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (WebView)                          │   │
//! │  │    Catalog UI ──► Cart UI ──► Login UI ──► Admin UI            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     Tauri Commands                              │   │
//! │  │    load_products, add_to_cart, login, create_product, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Price   │  │   Cart    │  │ criteria  │  │   │
//! │  │   │   User    │  │           │  │ CartLine  │  │ derive    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PERSISTENCE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌──────────────────┐  ┌──────▼────────────┐                          │
//! │  │ shopfront-store  │  │  shopfront-api    │                          │
//! │  │ (persistence)    │  │  (REST client)    │                          │
//! │  └──────────────────┘  └───────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rating, forms, User)
//! - [`price`] - Price type with integer-cent arithmetic
//! - [`cart`] - Shopping cart and line math
//! - [`catalog`] - Filter/sort criteria and view derivation
//! - [`validation`] - Admin form validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and persistence access is FORBIDDEN here
//! 3. **Integer Prices**: Monetary values are cents (i64) internally; the wire
//!    format stays the decimal number the storefront API speaks
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Price` instead of
// `use shopfront_core::price::Price`

pub use cart::{Cart, CartLine};
pub use catalog::{derive_view, CatalogCriteria, SortOrder};
pub use error::{CoreError, ValidationError};
pub use price::Price;
pub use types::*;
