//! # Tauri Commands Module
//!
//! All commands exposed to the WebView frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Catalog loading, filter/search/sort
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── auth.rs     ◄─── Login, logout, session status, profile
//! └── admin.rs    ◄─── Validated product CRUD
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ─────────                                                              │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const cart = await invoke('add_to_cart', {                             │
//! │    productId: 7,                                                        │
//! │    quantity: 2                                                          │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn add_to_cart(                                                  │
//! │      api: State<'_, ApiState>,       ◄── Injected by Tauri             │
//! │      catalog: State<'_, CatalogState>,                                  │
//! │      cart: State<'_, CartState>,                                        │
//! │      product_id: u64,                ◄── From invoke params            │
//! │      quantity: Option<u32>,          ◄── Optional param                │
//! │  ) -> Result<CartResponse, CommandError>                                │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives the updated cart                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: State<'_, CartState>)
//!
//! // Needs network and catalog
//! async fn load_products(api: State<'_, ApiState>, catalog: State<'_, CatalogState>)
//!
//! // Needs all three
//! async fn add_to_cart(api: ..., catalog: ..., cart: ..., product_id: u64, ...)
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
