//! Authentication Requests

use serde::{Deserialize, Serialize};

/// Credentials submitted at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
    pub recaptcha_token: String,
}

/// New account registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
    pub recaptcha_token: String,
}
