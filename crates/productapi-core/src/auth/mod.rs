//! Bearer token providers.
//!
//! This module provides:
//! - `TokenProvider`: the seam through which `ApiClient` obtains tokens
//! - `TimestampToken`: placeholder token built from the current time
//! - `StaticToken`: a fixed token supplied by the caller
//!
//! `TimestampToken` carries no credential. Deployments talking to a real
//! service must supply a `StaticToken` or their own provider.

pub mod token;

pub use token::{StaticToken, TimestampToken, TokenProvider};
