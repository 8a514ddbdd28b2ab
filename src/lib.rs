//! # Recipe Tracker Client
//!
//! Session handling and server-synchronised CRUD for a recipe-tracking web
//! API. The crate is split into layers:
//!
//! ## Client Module
//!
//! The [`client`] module talks HTTP: [`AuthClient`] for `/auth/login` and
//! `/auth/register`, [`RecipeClient`] for the bearer-authenticated
//! `/recipes` resource.
//!
//! ## Session and Sync
//!
//! [`session`] owns the token ([`Session`]) and its lifecycle, persisting it
//! through a [`TokenStore`]. [`sync`] keeps a read-only copy of the recipe
//! list and re-fetches it after every mutation.
//!
//! ## View-model
//!
//! [`RecipeTracker`] ties the layers together behind the operations a UI
//! needs and turns every outcome into a status message.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_tracker::{ClientConfig, FileTokenStore, RecipeTracker, View};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let store = FileTokenStore::new(&config.token_path);
//! let mut tracker = RecipeTracker::new(&config, store);
//!
//! if !tracker.restore().await {
//!     tracker.login("cook@example.com", "secret1").await;
//! }
//! if tracker.view() == View::Recipes {
//!     for recipe in tracker.recipes() {
//!         println!("{}", recipe);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod storage;
pub mod sync;
pub mod validation;

pub use client::{AuthClient, Recipe, RecipeClient, RecipeInput};
pub use config::ClientConfig;
pub use controller::{Pending, RecipeTracker, StatusKind, StatusMessage, View};
pub use error::ClientError;
pub use session::{Session, SessionManager};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
