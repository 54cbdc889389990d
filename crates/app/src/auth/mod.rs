//! Authentication
//!
//! Session-based: a successful sign-in sets the backend's session cookie on
//! the shared HTTP client, and every later call rides on it. No token is
//! stored client-side.

pub mod requests;
pub mod service;

pub use requests::{SignInRequest, SignUpRequest};
pub use service::*;
