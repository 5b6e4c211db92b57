//! Client library for the product and user-account service.
//!
//! Build an [`ApiClient`] explicitly (there is no global instance), either
//! from a base URL or from [`Config::from_env`], then call it:
//!
//! ```no_run
//! # async fn run() -> Result<(), productapi_core::ApiError> {
//! use productapi_core::ApiClient;
//!
//! let api = ApiClient::new("http://localhost:8080/")?;
//! for product in api.get_all_products().await? {
//!     println!("{} {}", product.id, product.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{StaticToken, TimestampToken, TokenProvider};
pub use config::Config;
pub use models::{ChangePasswordRequest, ChangePasswordResponse, ErrorBody, Product, UserData};
