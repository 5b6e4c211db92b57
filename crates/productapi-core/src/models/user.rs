use serde::{Deserialize, Serialize};

/// Identity of the account whose password is being changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    /// Login name; the service knows it as the email address
    pub username: String,
    pub user_resource_guid: String,
}

impl UserData {
    pub fn new(username: impl Into<String>, user_resource_guid: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            user_resource_guid: user_resource_guid.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn new(old_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }
}

// Passwords stay out of logs.
impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Request body for `POST /user/change-password`.
#[derive(Serialize)]
pub(crate) struct ChangePasswordEntity<'a> {
    #[serde(rename = "emailAddress")]
    email_address: &'a str,
    #[serde(rename = "userResourceGuid")]
    user_resource_guid: &'a str,
    #[serde(rename = "oldPassword")]
    old_password: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

impl<'a> ChangePasswordEntity<'a> {
    pub(crate) fn new(user: &'a UserData, request: &'a ChangePasswordRequest) -> Self {
        Self {
            email_address: &user.username,
            user_resource_guid: &user.user_resource_guid,
            old_password: &request.old_password,
            new_password: &request.new_password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct ChangePasswordResponse {
    pub success: bool,
    pub message: String,
}

/// Error payload the service attaches to 4xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}
