//! Users

pub mod models;
pub mod requests;
pub mod service;

pub use models::{User, UserPersonalInformation};
pub use requests::{
    PasswordChangeRequest, PasswordResetRequest, PasswordResetTokenRequest,
    UserPersonalInformationRequest,
};
pub use service::*;
