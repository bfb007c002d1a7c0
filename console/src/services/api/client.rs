//! # API Client
//!
//! HTTP client wrapper for the tokenization API: base URL, credential passing
//! and uniform error normalization. Every call returns the decoded response
//! body on success and an [`ApiError`] on failure.

use crate::core::error::ApiError;
use crate::core::service::TokenizationService;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    BurnStockInput, CreateStockInput, MintStockInput, PlatformStats, Stock, Transaction,
    TransactionFilter, UpdateStockInput,
};
use std::time::{Duration, Instant};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `https://api.example.com`
    pub base_url: Url,
    /// Optional bearer credential sent with every request
    pub session_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

/// HTTP client for communicating with the tokenization API.
///
/// Holds one connection pool and a cookie store, so session cookies set by the
/// backend are sent back on later requests.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.session_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::network(format!("Invalid session token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL for API requests (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a path and decode the body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.get(self.url(path));
        self.send(Method::GET, path, request).await
    }

    /// `GET` a path with a serialized query string and decode the body.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        self.send(Method::GET, path, request).await
    }

    /// `POST` a JSON body and decode the response body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.send(Method::POST, path, request).await
    }

    /// `PUT` a JSON body and decode the response body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.put(self.url(path)).json(body);
        self.send(Method::PUT, path, request).await
    }

    #[tracing::instrument(skip(self, request), fields(method = %method, path = %path, request_id))]
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        tracing::debug!("Sending request");

        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    duration_ms = start.elapsed().as_millis(),
                    "Request network error"
                );
                ApiError::network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_response(status.as_u16(), e))?;
        let duration = start.elapsed();

        if status.is_success() {
            let decoded = serde_json::from_slice::<T>(&body).map_err(|e| {
                tracing::error!(
                    error = %e,
                    status = status.as_u16(),
                    "Response parse error"
                );
                ApiError::invalid_response(status.as_u16(), e)
            })?;

            tracing::debug!(
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            Ok(decoded)
        } else {
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(
                status = status.as_u16(),
                code = ?err.code,
                message = %err.message,
                duration_ms = duration.as_millis(),
                "Request failed"
            );
            Err(err)
        }
    }
}

// Implement TokenizationService trait for ApiClient
#[async_trait::async_trait]
impl TokenizationService for ApiClient {
    async fn create_stock(&self, input: CreateStockInput) -> Result<Stock, ApiError> {
        crate::services::api::tokenization::create_stock(self, &input).await
    }

    async fn update_stock(&self, symbol: String, input: UpdateStockInput) -> Result<Stock, ApiError> {
        crate::services::api::tokenization::update_stock(self, &symbol, &input).await
    }

    async fn mint_stock(&self, input: MintStockInput) -> Result<Transaction, ApiError> {
        crate::services::api::tokenization::mint_stock(self, &input).await
    }

    async fn burn_stock(&self, input: BurnStockInput) -> Result<Transaction, ApiError> {
        crate::services::api::tokenization::burn_stock(self, &input).await
    }

    async fn get_admin_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, ApiError> {
        crate::services::api::tokenization::get_admin_transactions(self, &filter).await
    }

    async fn get_platform_stats(&self) -> Result<PlatformStats, ApiError> {
        crate::services::api::tokenization::get_platform_stats(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> ApiConfig {
        ApiConfig {
            base_url: Url::parse(base).unwrap(),
            session_token: Some("session-abc".to_string()),
            timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new(&config("https://api.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.url("/api/v2/tokenization/admin/stats"),
            "https://api.example.com/api/v2/tokenization/admin/stats"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let client = ApiClient::new(&config("http://localhost:4000/backend")).unwrap();
        assert_eq!(client.url("/admin"), "http://localhost:4000/backend/admin");
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let mut bad = config("http://localhost:4000");
        bad.session_token = Some("abc\ndef".to_string());
        assert!(ApiClient::new(&bad).is_err());
    }

    #[tokio::test]
    async fn test_no_response_yields_status_zero() {
        // Nothing listens on port 1 on loopback
        let client = ApiClient::new(&config("http://127.0.0.1:1")).unwrap();
        let err = client
            .get::<serde_json::Value>("/api/v2/tokenization/admin/stats")
            .await
            .unwrap_err();

        assert_eq!(err.status, 0);
        assert!(err.is_network());
        assert!(!err.message.is_empty());
    }
}
