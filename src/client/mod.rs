//! # Recipe API HTTP layer
//!
//! ## Modules
//!
//! - [`auth`] - Login and registration against the `/auth` endpoints
//! - [`client`] - Authenticated CRUD calls against `/recipes`
//! - [`types`] - Request and response bodies
//!
//! Both clients share one `reqwest::Client` and never retry or time out a
//! request; a call either completes or fails with a
//! [`ClientError`](crate::error::ClientError).

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use auth::AuthClient;
pub use client::RecipeClient;
pub use types::*;
