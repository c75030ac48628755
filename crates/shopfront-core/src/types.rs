//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Rating      │   │   ProductForm   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  rate (0-5)     │   │  title          │       │
//! │  │  title          │   │  count          │   │  price          │       │
//! │  │  price (cents)  │   └─────────────────┘   │  description    │       │
//! │  │  category       │                         │  image          │       │
//! │  │  image          │   ┌─────────────────┐   │  category       │       │
//! │  │  rating         │   │  Credentials    │   └─────────────────┘       │
//! │  └─────────────────┘   │  ─────────────  │                             │
//! │                        │  username       │   ┌─────────────────┐       │
//! │                        │  password       │   │  ProductPatch   │       │
//! │                        └─────────────────┘   │  (all optional) │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All wire shapes match the storefront REST API exactly; `ts-rs` exports
//! them so the WebView frontend consumes the same contract.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::Price;

// =============================================================================
// Rating
// =============================================================================

/// Average review score for a product.
///
/// `rate` is a 0-5 average; `count` is how many ratings produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,

    /// Number of ratings behind the average.
    pub count: u64,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable once fetched; changes go through explicit admin update calls.
/// Owned by the catalog state and copied into cart lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the server.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Unit price; decimal on the wire, integer cents in memory.
    #[ts(type = "number")]
    pub price: Price,

    /// Long-form description.
    pub description: String,

    /// Free-text category label.
    pub category: String,

    /// Image URL.
    pub image: String,

    /// Average review score and count.
    pub rating: Rating,
}

// =============================================================================
// Admin Form Payloads
// =============================================================================

/// Payload for creating a product (all fields sans id).
///
/// Also the PUT body for a full replace. Validated by
/// [`crate::validation::validate_product_form`] before any network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub title: String,
    #[ts(type = "number")]
    pub price: Price,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl ProductForm {
    /// Pre-fills the form from an existing product (the edit flow).
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// Partial-update payload for PATCH. Absent fields are left untouched
/// by the server, so `None` fields are omitted from the body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// =============================================================================
// Authentication
// =============================================================================

/// Login request body for POST /auth/login.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// =============================================================================
// User
// =============================================================================

/// A user record from GET /users/{id} (authenticated profile lookup).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub name: UserName,
    pub address: UserAddress,
    pub phone: String,
}

/// First/last name pair as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserName {
    pub firstname: String,
    pub lastname: String,
}

/// Postal address with the API's string-typed geolocation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserAddress {
    pub city: String,
    pub street: String,
    pub number: u64,
    pub zipcode: String,
    pub geolocation: Geolocation,
}

/// Latitude/longitude as strings, matching the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Geolocation {
    pub lat: String,
    pub long: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
