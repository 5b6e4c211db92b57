//! Data models for the product and user-account service.
//!
//! - `Product`: catalogue item returned by the product endpoints
//! - `UserData`, `ChangePasswordRequest`: inputs to a password change
//! - `ChangePasswordResponse`: successful password change result
//! - `ErrorBody`: structured error payload returned with 4xx responses

pub mod product;
pub mod user;

pub use product::Product;
pub use user::{ChangePasswordRequest, ChangePasswordResponse, ErrorBody, UserData};

pub(crate) use user::ChangePasswordEntity;
