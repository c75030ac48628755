//! # API Client
//!
//! Typed wrapper over `reqwest` for the storefront REST API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request Flow                                       │
//! │                                                                         │
//! │  command ──► ApiClient::list_products(&query)                           │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  endpoint(["products"]) + query.apply(&mut url)                         │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  GET https://fakestoreapi.com/products?sort=desc                        │
//! │                  │                                                      │
//! │         ┌────────┴────────┐                                             │
//! │         ▼                 ▼                                             │
//! │   2xx: decode JSON   non-2xx: ApiError::Status                          │
//! │                                                                         │
//! │  One shot per call: no retry, no caching, no per-call timeout.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{ApiError, ApiResult};
use shopfront_core::{Credentials, Product, ProductForm, ProductPatch, SortOrder, User};

/// The public demo API this storefront runs against.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Environment variable overriding the base URL (tests, staging mirrors).
pub const BASE_URL_ENV: &str = "SHOPFRONT_API_URL";

// =============================================================================
// List Query
// =============================================================================

/// Optional query parameters for the product listing endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuery {
    /// Maximum number of products to return.
    pub limit: Option<u32>,

    /// Requested ordering. Only the server-side component is sent:
    /// rating orders never reach the wire (the server would misread
    /// them as price ordering) and are applied client-side instead.
    pub sort: Option<SortOrder>,
}

impl ListQuery {
    /// Appends the non-empty parameters to the URL's query string.
    fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if let Some(sort) = self.sort.and_then(SortOrder::server_param) {
            pairs.append_pair("sort", sort);
        }
        drop(pairs);
        // An empty "?" suffix confuses nothing but keeps URLs tidy in logs
        if url.query() == Some("") {
            url.set_query(None);
        }
    }
}

// =============================================================================
// Wire-only bodies
// =============================================================================

/// Success body of POST /auth/login.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Error body some endpoints return: {"message": "..."}.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// API Client
// =============================================================================

/// Client for the storefront REST API.
///
/// Cheap to clone; the underlying `reqwest::Client` is an Arc'd pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(ApiClient {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Creates a client from `SHOPFRONT_API_URL`, falling back to the
    /// public demo host.
    pub fn from_env() -> ApiResult<Self> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL from path segments.
    ///
    /// Segments are percent-encoded individually, so category labels like
    /// "men's clothing" are safe to pass through.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base URL validated at construction");
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }

    /// Decodes a response: non-2xx becomes `ApiError::Status`, a body that
    /// doesn't match `T` becomes `ApiError::Decode`.
    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        url: Url,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.http.request(method, url).json(body).send().await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Catalog Endpoints
    // =========================================================================

    /// Lists the full product catalog. GET /products
    pub async fn list_products(&self, query: &ListQuery) -> ApiResult<Vec<Product>> {
        let mut url = self.endpoint(&["products"]);
        query.apply(&mut url);
        debug!(%url, "list products");
        self.get_json(url).await
    }

    /// Fetches one product by id. GET /products/{id}
    pub async fn get_product(&self, id: u64) -> ApiResult<Product> {
        let url = self.endpoint(&["products", &id.to_string()]);
        debug!(%url, "get product");
        self.get_json(url).await
    }

    /// Lists all category labels. GET /products/categories
    pub async fn list_categories(&self) -> ApiResult<Vec<String>> {
        let url = self.endpoint(&["products", "categories"]);
        debug!(%url, "list categories");
        self.get_json(url).await
    }

    /// Lists the products of one category. GET /products/category/{category}
    pub async fn list_by_category(
        &self,
        category: &str,
        query: &ListQuery,
    ) -> ApiResult<Vec<Product>> {
        let mut url = self.endpoint(&["products", "category", category]);
        query.apply(&mut url);
        debug!(%url, "list products by category");
        self.get_json(url).await
    }

    // =========================================================================
    // Admin Endpoints
    // =========================================================================

    /// Creates a product. POST /products
    pub async fn create_product(&self, form: &ProductForm) -> ApiResult<Product> {
        let url = self.endpoint(&["products"]);
        debug!(%url, title = %form.title, "create product");
        self.send_json(reqwest::Method::POST, url, form).await
    }

    /// Replaces a product. PUT /products/{id}
    pub async fn replace_product(&self, id: u64, form: &ProductForm) -> ApiResult<Product> {
        let url = self.endpoint(&["products", &id.to_string()]);
        debug!(%url, "replace product");
        self.send_json(reqwest::Method::PUT, url, form).await
    }

    /// Partially updates a product. PATCH /products/{id}
    pub async fn patch_product(&self, id: u64, patch: &ProductPatch) -> ApiResult<Product> {
        let url = self.endpoint(&["products", &id.to_string()]);
        debug!(%url, "patch product");
        self.send_json(reqwest::Method::PATCH, url, patch).await
    }

    /// Deletes a product; the server echoes the deleted entity back.
    /// DELETE /products/{id}
    pub async fn delete_product(&self, id: u64) -> ApiResult<Product> {
        let url = self.endpoint(&["products", &id.to_string()]);
        debug!(%url, "delete product");
        let response = self.http.delete(url).send().await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Auth Endpoints
    // =========================================================================

    /// Logs in and returns the bearer token. POST /auth/login
    ///
    /// A rejection surfaces the server's own message when the error body
    /// parses as `{"message": ...}`, else a generic fallback.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let url = self.endpoint(&["auth", "login"]);
        debug!(%url, username = %credentials.username, "login");

        let response = self.http.post(url).json(credentials).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                .map(|b| b.message)
                .unwrap_or_else(|| "Invalid credentials".to_string());
            return Err(ApiError::Auth { message });
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.token)
    }

    /// Fetches a user profile with the bearer token. GET /users/{id}
    pub async fn get_user(&self, id: u64, token: &str) -> ApiResult<User> {
        let url = self.endpoint(&["users", &id.to_string()]);
        debug!(%url, "get user");

        let response = self.http.get(url).bearer_auth(token).send().await?;
        Self::decode(response).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_endpoint_building() {
        let url = client().endpoint(&["products", "7"]);
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/7");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = ApiClient::new("https://fakestoreapi.com/").unwrap();
        let url = client.endpoint(&["products", "categories"]);
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/categories");
    }

    #[test]
    fn test_category_segment_is_percent_encoded() {
        let url = client().endpoint(&["products", "category", "men's clothing"]);
        assert_eq!(
            url.as_str(),
            "https://fakestoreapi.com/products/category/men's%20clothing"
        );
    }

    #[test]
    fn test_list_query_parameters() {
        let mut url = client().endpoint(&["products"]);
        ListQuery {
            limit: Some(5),
            sort: Some(SortOrder::PriceDesc),
        }
        .apply(&mut url);

        assert_eq!(url.query(), Some("limit=5&sort=desc"));
    }

    #[test]
    fn test_rating_sort_not_sent_to_server() {
        let mut url = client().endpoint(&["products"]);
        ListQuery {
            limit: None,
            sort: Some(SortOrder::RatingDesc),
        }
        .apply(&mut url);

        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_empty_query_leaves_url_bare() {
        let mut url = client().endpoint(&["products"]);
        ListQuery::default().apply(&mut url);
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:shop@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"username or password is incorrect"}"#).unwrap();
        assert_eq!(body.message, "username or password is incorrect");
    }
}
