//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::{HttpResponse, PageResponse};

use crate::{
    client::{ApiClient, ApiError},
    domain::users::{
        models::{User, UserPersonalInformation},
        requests::{
            PasswordChangeRequest, PasswordResetRequest, PasswordResetTokenRequest,
            UserPersonalInformationRequest,
        },
    },
};

/// Page size of the administrator user listing.
const USERS_PAGE_SIZE: u32 = 3;

/// Users service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpUsersService {
    client: Arc<ApiClient>,
}

impl HttpUsersService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersService for HttpUsersService {
    async fn authenticated(&self) -> Result<HttpResponse<User>, ApiError> {
        self.client.get("/users/authenticated").await
    }

    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<User>>, ApiError> {
        self.client
            .get(&format!("/users?page={page}&size={USERS_PAGE_SIZE}"))
            .await
    }

    async fn delete(&self, user_id: i64) -> Result<HttpResponse<()>, ApiError> {
        self.client.delete(&format!("/users/id={user_id}")).await
    }

    async fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> Result<HttpResponse<()>, ApiError> {
        self.client
            .patch("/users/authenticated/change-password", &request)
            .await
    }

    async fn request_password_reset_code(
        &self,
        request: PasswordResetTokenRequest,
    ) -> Result<HttpResponse<()>, ApiError> {
        self.client
            .patch("/users/request-password-reset-code", &request)
            .await
    }

    async fn reset_password(
        &self,
        request: PasswordResetRequest,
    ) -> Result<HttpResponse<()>, ApiError> {
        self.client.patch("/users/reset-password", &request).await
    }

    async fn update_personal_information(
        &self,
        request: UserPersonalInformationRequest,
    ) -> Result<HttpResponse<UserPersonalInformation>, ApiError> {
        self.client
            .patch("/users-personal-informations/authenticated", &request)
            .await
    }

    async fn update_personal_information_for(
        &self,
        user_personal_information_id: i64,
        request: UserPersonalInformationRequest,
    ) -> Result<HttpResponse<UserPersonalInformation>, ApiError> {
        self.client
            .patch(
                &format!("/users-personal-informations/id={user_personal_information_id}"),
                &request,
            )
            .await
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// The signed-in user's account.
    async fn authenticated(&self) -> Result<HttpResponse<User>, ApiError>;

    /// Page of every account (administrator listing).
    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<User>>, ApiError>;

    /// Delete an account (administrator operation).
    async fn delete(&self, user_id: i64) -> Result<HttpResponse<()>, ApiError>;

    /// Change the signed-in user's password.
    async fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> Result<HttpResponse<()>, ApiError>;

    /// Email a password reset code to the given address.
    async fn request_password_reset_code(
        &self,
        request: PasswordResetTokenRequest,
    ) -> Result<HttpResponse<()>, ApiError>;

    /// Redeem a reset code and set a new password.
    async fn reset_password(
        &self,
        request: PasswordResetRequest,
    ) -> Result<HttpResponse<()>, ApiError>;

    /// Update the signed-in user's personal details.
    async fn update_personal_information(
        &self,
        request: UserPersonalInformationRequest,
    ) -> Result<HttpResponse<UserPersonalInformation>, ApiError>;

    /// Update another user's personal details (administrator operation).
    async fn update_personal_information_for(
        &self,
        user_personal_information_id: i64,
        request: UserPersonalInformationRequest,
    ) -> Result<HttpResponse<UserPersonalInformation>, ApiError>;
}
