//! API client for the product and user-account service.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests that fetch products and change user passwords.

use std::sync::Arc;

use reqwest::{header, Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::{StaticToken, TimestampToken, TokenProvider};
use crate::config::Config;
use crate::models::{ChangePasswordEntity, ChangePasswordRequest, ChangePasswordResponse, Product, UserData};

use super::{ApiError, Result};

/// API client for the product service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// An explicit URL uses default settings and the placeholder timestamp
    /// token. An empty `base_url` loads everything from `Config::from_env`.
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.is_empty() {
            let config = Config::from_env().map_err(|e| ApiError::InvalidConfig(format!("{:#}", e)))?;
            return Self::from_config(&config);
        }
        Self::from_config(&Config::default().with_base_url(base_url))
    }

    /// Create a client from loaded configuration.
    /// A configured token selects `StaticToken`, otherwise `TimestampToken`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        let tokens: Arc<dyn TokenProvider> = match config.token {
            Some(ref token) => Arc::new(StaticToken::new(token.clone())?),
            None => Arc::new(TimestampToken),
        };

        Ok(Self {
            client,
            base_url: Self::normalize_base_url(&config.base_url)?,
            tokens,
        })
    }

    /// Replace the token provider, sharing the connection pool.
    pub fn with_token_provider(&self, provider: impl TokenProvider + 'static) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            tokens: Arc::new(provider),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate an http(s) base URL and strip one trailing slash.
    fn normalize_base_url(url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                url,
                parsed.scheme()
            )));
        }
        Ok(url.strip_suffix('/').unwrap_or(url).to_string())
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn with_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `Authorization` header value for the next request.
    pub fn auth_header(&self) -> Result<header::HeaderValue> {
        let token = self.tokens.token()?;
        let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::InvalidToken(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let url = self.with_path(path);
        debug!(method = %method, url = %url, "Sending request");
        Ok(self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, self.auth_header()?)
            .header(header::ACCEPT, "application/json"))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                url = %url,
                body = %ApiError::truncate_body(&body),
                "Request failed"
            );
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let url = response.url().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response body from {}: {}", url, e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .request(Method::POST, path)?
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response).await
    }

    // ===== Products =====

    /// Fetch every product, in the order the service returns them
    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.get("/products").await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Fetch a single product. A missing product fails with a 404 `ApiError::Http`.
    pub async fn get_product(&self, id: &str) -> Result<Product> {
        self.get(&format!("/product/{}", id)).await
    }

    // ===== User accounts =====

    /// Change a user's password.
    ///
    /// Rejections (wrong old password, unknown user) come back as
    /// `ApiError::Http` with the service's `{error, code}` payload attached.
    pub async fn change_user_password(
        &self,
        user: &UserData,
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse> {
        let entity = ChangePasswordEntity::new(user, request);
        self.post("/user/change-password", &entity).await
    }
}
