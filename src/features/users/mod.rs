//! Admin directory.
//!
//! The `users` collection maps identity-provider accounts to back-office roles.
//! It has no HTTP surface of its own: accounts are provisioned directly in the
//! document store and only read here to authorize admin access.

pub mod models;
pub mod services;

pub use services::UserService;
