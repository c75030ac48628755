//! # shopfront-api: REST Client for the Storefront API
//!
//! Thin typed wrapper around the public storefront REST endpoints.
//! One method per endpoint; no retry, no caching, no timeout beyond the
//! HTTP stack's defaults. Higher layers decide what a failure means.
//!
//! ## Endpoint Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ApiClient method            HTTP call                                  │
//! │  ─────────────────           ─────────                                  │
//! │  list_products               GET    /products[?limit=&sort=]            │
//! │  get_product                 GET    /products/{id}                      │
//! │  list_categories             GET    /products/categories                │
//! │  list_by_category            GET    /products/category/{cat}[?...]      │
//! │  create_product              POST   /products                           │
//! │  replace_product             PUT    /products/{id}                      │
//! │  patch_product               PATCH  /products/{id}                      │
//! │  delete_product              DELETE /products/{id}                      │
//! │  login                       POST   /auth/login                         │
//! │  get_user                    GET    /users/{id}   (Bearer token)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod error;

pub use client::{ApiClient, ListQuery, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
