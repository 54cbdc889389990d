//! Command handlers, one module per command group.

pub mod admin;
pub mod ai;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod password;
pub mod products;
pub mod profile;
