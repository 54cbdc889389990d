//! User Requests

use serde::{Deserialize, Serialize};

/// Personal details update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPersonalInformationRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

/// Password change for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// First step of the forgotten-password flow: request a reset code by email.
/// The `recaptcha_token` comes from whatever challenge the caller completed;
/// the backend validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetTokenRequest {
    pub email: String,
    pub recaptcha_token: String,
}

/// Second step of the forgotten-password flow: redeem the emailed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email: String,
    pub reset_password_code: String,
    pub new_password: String,
    pub confirm_new_password: String,
    pub recaptcha_token: String,
}
