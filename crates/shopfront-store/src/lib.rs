//! # shopfront-store: Client-Side Persistence
//!
//! The local-storage layer of the storefront: the cart and the auth token
//! survive restarts here, nothing else does.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Persistence Model                                 │
//! │                                                                         │
//! │  <data dir>/shopfront/                                                  │
//! │  ├── cart.json    { version, savedAt, data: [CartLine, ...] }           │
//! │  └── auth.json    { version, savedAt, data: "<token>" | null }          │
//! │                                                                         │
//! │  LOAD: missing file          → default value                            │
//! │        corrupt payload       → default value + warning (never fatal)    │
//! │        version mismatch      → default value + warning                  │
//! │                                                                         │
//! │  SAVE: serialize envelope → write temp file → rename over slot          │
//! │        (synchronous, called after every state mutation)                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod envelope;
pub mod error;
pub mod store;

pub use envelope::{Envelope, ENVELOPE_VERSION};
pub use error::{StoreError, StoreResult};
pub use store::LocalStore;
