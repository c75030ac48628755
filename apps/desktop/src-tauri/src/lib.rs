//! # Shopfront Desktop Library
//!
//! Core library for the Shopfront desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! shopfront_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── api.rs      ◄─── REST client wrapper
//! │   ├── catalog.rs  ◄─── Catalog state (fetch generations, derived view)
//! │   ├── cart.rs     ◄─── Cart state (write-through persistence)
//! │   └── auth.rs     ◄─── Auth token slot
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Catalog browsing commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── auth.rs     ◄─── Login/logout/status/profile commands
//! │   └── admin.rs    ◄─── Validated CRUD commands
//! └── error.rs        ◄─── CommandError for command results
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_api::ApiClient;
use shopfront_store::LocalStore;
use state::{ApiState, AuthState, CartState, CatalogState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Open Local Store ─────────────────────────────────────────────────► │
/// │     • Platform app data directory                                       │
/// │     • cart.json / auth.json loaded (empty on first run or corruption)   │
/// │                                                                         │
/// │  3. Build API Client ─────────────────────────────────────────────────► │
/// │     • Base URL from SHOPFRONT_API_URL or the public demo host           │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ApiState, CatalogState, CartState, AuthState                      │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Shopfront Desktop Application");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            // Open the persistence layer; a corrupt slot degrades to empty
            // inside LocalStore, so only a missing data dir can fail here
            let store = LocalStore::open_default()?;
            info!(dir = ?store.dir(), "local store opened");

            let api = ApiClient::from_env()?;
            info!(base_url = %api.base_url(), "API client ready");

            // Initialize state objects
            let api_state = ApiState::new(api);
            let catalog_state = CatalogState::new();
            let cart_state = CartState::load(store.clone());
            let auth_state = AuthState::load(store);

            // Register state with Tauri
            app.manage(api_state);
            app.manage(catalog_state);
            app.manage(cart_state);
            app.manage(auth_state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog
            commands::catalog::load_products,
            commands::catalog::load_categories,
            commands::catalog::set_category_filter,
            commands::catalog::set_sort_order,
            commands::catalog::set_search_term,
            commands::catalog::get_catalog,
            // Cart
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::update_cart_line,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            // Auth
            commands::auth::login,
            commands::auth::logout,
            commands::auth::auth_status,
            commands::auth::get_profile,
            // Admin
            commands::admin::create_product,
            commands::admin::update_product,
            commands::admin::delete_product,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber.
///
/// Default level is INFO; override with RUST_LOG (e.g.
/// `RUST_LOG=shopfront_desktop_lib=debug,shopfront_api=debug`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
