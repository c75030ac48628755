//! # Shopfront Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Desktop                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                   Storefront Frontend                      │  │  │
//! │  │  │  • Catalog Browser      • Cart View                        │  │  │
//! │  │  │  • Login View           • Admin Panel                      │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                           │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Hands off to lib.rs                               │  │
//! │  │  lib.rs ─────► Logging, stores, state, command registration      │  │
//! │  │  commands/ ──► load_products, add_to_cart, login, admin CRUD     │  │
//! │  │  state/ ─────► ApiState, CatalogState, CartState, AuthState      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                    │                          │                         │
//! │                    ▼                          ▼                         │
//! │  ┌─────────────────────────────┐  ┌──────────────────────────────┐     │
//! │  │  Storefront REST API        │  │  Local store (cart.json,     │     │
//! │  │  (https, fixed base host)   │  │  auth.json in app data dir)  │     │
//! │  └─────────────────────────────┘  └──────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    shopfront_desktop_lib::run();
}
