//! REST API client module for the product and user-account service.
//!
//! This module provides the `ApiClient` for fetching products and
//! changing user passwords. Every request carries a bearer token
//! obtained from a pluggable `TokenProvider`.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
