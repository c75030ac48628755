//! # API State
//!
//! Wraps the REST client for Tauri state management.

use shopfront_api::ApiClient;

/// Tauri-managed API client.
///
/// `ApiClient` is internally an Arc'd connection pool, so no lock is
/// needed; commands borrow it directly.
#[derive(Debug)]
pub struct ApiState {
    client: ApiClient,
}

impl ApiState {
    /// Wraps an API client for state management.
    pub fn new(client: ApiClient) -> Self {
        ApiState { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
