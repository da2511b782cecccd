//! HTTP request handlers.
//!
//! Page handlers return `Result<_, PageError>`: on failure the fixed per-route message and the
//! underlying cause are rendered by the error view (see [`crate::errors::PageError`]).
//! Successful form posts redirect back to the entity's index with `303 See Other`.

pub mod companies;
pub mod customers;
pub mod departments;
pub mod diagnostics;
pub mod employees;
pub mod home;
pub mod static_assets;
