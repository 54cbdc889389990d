//! Cart
//!
//! The client-persisted shopping cart. The cart lives entirely on the
//! visitor's machine; it is translated into an order request only at
//! checkout time.

pub mod errors;
pub mod models;
pub mod storage;
pub mod store;

pub use errors::CartStorageError;
pub use models::CartItem;
pub use storage::{CartStorage, FileStorage, MemoryStorage};
pub use store::*;
