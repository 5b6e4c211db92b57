//! Interactions published in the consumer pact.

use serde_json::{json, Value};

use super::{each_like, fields_like, like, Interaction};

pub const KNOWN_EMAIL: &str = "test@example.com";
pub const KNOWN_GUID: &str = "123e4567-e89b-12d3-a456-426614174000";
pub const UNKNOWN_EMAIL: &str = "nonexistent@example.com";
pub const UNKNOWN_GUID: &str = "999e4567-e89b-12d3-a456-426614174999";
pub const NEW_PASSWORD: &str = "newPassword456";

pub fn product_10() -> Value {
    json!({ "id": "10", "type": "CREDIT_CARD", "name": "28 Degrees", "quantity": 1 })
}

fn change_password_body(email: &str, guid: &str, old_password: &str) -> Value {
    json!({
        "emailAddress": email,
        "userResourceGuid": guid,
        "oldPassword": old_password,
        "newPassword": NEW_PASSWORD
    })
}

pub fn product_10_exists() -> Interaction {
    Interaction::given("a product with ID 10 exists")
        .upon_receiving("a request to get a product")
        .with_request("GET", "/product/10")
        .will_respond_with(200)
        .with_response_body(like(product_10()))
}

pub fn product_11_missing() -> Interaction {
    Interaction::given("a product with ID 11 does not exist")
        .upon_receiving("a request to get a product")
        .with_request("GET", "/product/11")
        .will_respond_with(404)
}

pub fn products_exist() -> Interaction {
    Interaction::given("products exist")
        .upon_receiving("a request to get all products")
        .with_request("GET", "/products")
        .will_respond_with(200)
        .with_response_body(each_like(json!({ "id": "10", "type": "CREDIT_CARD", "name": "28 Degrees" })))
}

pub fn password_changed() -> Interaction {
    Interaction::given("a user exists with valid credentials")
        .upon_receiving("a request to change user password")
        .with_request("POST", "/user/change-password")
        .with_json_body(fields_like(change_password_body(KNOWN_EMAIL, KNOWN_GUID, "oldPassword123")))
        .will_respond_with(200)
        .with_response_body(fields_like(json!({ "success": true, "message": "Password changed successfully" })))
}

pub fn wrong_old_password() -> Interaction {
    Interaction::given("a user exists but old password is incorrect")
        .upon_receiving("a request to change user password with wrong old password")
        .with_request("POST", "/user/change-password")
        .with_json_body(fields_like(change_password_body(KNOWN_EMAIL, KNOWN_GUID, "wrongPassword")))
        .will_respond_with(400)
        .with_response_body(fields_like(json!({ "error": "Invalid old password", "code": "INVALID_OLD_PASSWORD" })))
}

pub fn unknown_user() -> Interaction {
    Interaction::given("a user does not exist")
        .upon_receiving("a request to change password for non-existent user")
        .with_request("POST", "/user/change-password")
        .with_json_body(fields_like(change_password_body(UNKNOWN_EMAIL, UNKNOWN_GUID, "anyPassword")))
        .will_respond_with(404)
        .with_response_content_type("application/text; charset=utf-8")
        .with_response_body(fields_like(json!({ "error": "User not found", "code": "USER_NOT_FOUND" })))
}

/// Every interaction the provider must honour
pub fn published() -> Vec<Interaction> {
    vec![
        product_10_exists(),
        product_11_missing(),
        products_exist(),
        password_changed(),
        wrong_old_password(),
        unknown_user(),
    ]
}
