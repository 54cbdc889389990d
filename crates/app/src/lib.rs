//! Allora backend synchronization layer.
//!
//! One service per backend resource, all speaking through a shared
//! [`client::ApiClient`]. The backend owns every business rule; these
//! services only shape requests, classify the response envelopes and hand
//! typed results to the presentation layer.

pub mod auth;
pub mod client;
pub mod context;
pub mod domain;

pub use context::AppContext;
