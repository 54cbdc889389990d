//! User Models

use serde::{Deserialize, Serialize};

/// Editable personal details attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPersonalInformation {
    pub user_personal_information_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl UserPersonalInformation {
    /// Display name in "First Last" form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An account as returned by the user endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub is_administrator: bool,
    pub user_personal_information: UserPersonalInformation,
}
