//! Rendering-independent view-model.
//!
//! [`RecipeTracker`] exposes the user-facing operations (`restore`, `login`,
//! `register`, `logout`, `list`, `create`, the edit flow and the delete
//! flow) and keeps the state a front-end needs to draw: which view is
//! visible, the latest status message, the recipe list, the add-recipe form
//! and any pending edit or delete confirmation.
//!
//! No operation returns an error. Every outcome becomes a status message and
//! leaves the tracker in a state where the action can be retried.

use reqwest::Client;

use crate::client::{AuthClient, Recipe, RecipeClient, RecipeInput};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::{Session, SessionManager};
use crate::storage::TokenStore;
use crate::sync::{RecipeSync, Refresh};

const LOGIN_FAILED: &str = "Login failed.";
const LOGIN_UNREACHABLE: &str = "Login failed. Make sure the backend is running and reachable.";
const REGISTRATION_FAILED: &str = "Registration failed.";
const REGISTRATION_OK: &str = "Registration successful! Please login.";
const LOAD_FAILED: &str = "Failed to load recipes.";
const ADD_FAILED: &str = "Failed to add recipe.";
const EDIT_FAILED: &str = "Failed to edit recipe.";
const DELETE_FAILED: &str = "Failed to delete recipe.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Recipes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// An in-progress edit or delete waiting on the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    /// Edit draft pre-filled with the recipe's values at the time it opened.
    Edit { id: String, draft: RecipeInput },
    /// Delete awaiting explicit confirmation.
    ConfirmDelete { id: String, name: String },
}

pub struct RecipeTracker<S> {
    sessions: SessionManager<S>,
    sync: RecipeSync,
    view: View,
    status: Option<StatusMessage>,
    recipe_form: RecipeInput,
    pending: Option<Pending>,
}

impl<S: TokenStore> RecipeTracker<S> {
    pub fn new(config: &ClientConfig, store: S) -> Self {
        let http = Client::new();
        let session = Session::new();

        let auth = AuthClient::new(config.api_url.clone(), http.clone());
        let recipes = RecipeClient::new(config.api_url.clone(), http, session.clone());

        Self {
            sessions: SessionManager::new(session, store, auth),
            sync: RecipeSync::new(recipes),
            view: View::Login,
            status: None,
            recipe_form: RecipeInput::default(),
            pending: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.sync.recipes()
    }

    /// Contents of the add-recipe form; kept after a failed submission.
    pub fn recipe_form(&self) -> &RecipeInput {
        &self.recipe_form
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn store(&self) -> &S {
        self.sessions.store()
    }

    pub fn show_register(&mut self) {
        self.view = View::Register;
        self.status = None;
    }

    pub fn show_login(&mut self) {
        self.view = View::Login;
        self.status = None;
    }

    /// Picks up a persisted session on startup. Returns whether one was
    /// restored; if so the recipe view is shown and the list fetched.
    pub async fn restore(&mut self) -> bool {
        if !self.sessions.restore() {
            return false;
        }
        self.view = View::Recipes;
        self.list().await;
        true
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        match self.sessions.login(email, password).await {
            Ok(()) => {
                self.status = None;
                self.view = View::Recipes;
                self.list().await;
            }
            Err(e) => self.report(e, LOGIN_FAILED, LOGIN_UNREACHABLE),
        }
    }

    pub async fn register(&mut self, username: &str, email: &str, password: &str) {
        match self.sessions.register(username, email, password).await {
            Ok(()) => {
                self.view = View::Login;
                self.status = Some(StatusMessage::success(REGISTRATION_OK));
            }
            Err(e) => self.report(e, REGISTRATION_FAILED, REGISTRATION_FAILED),
        }
    }

    pub fn logout(&mut self) {
        self.sessions.logout();
        self.sync.discard();
        self.pending = None;
        self.recipe_form = RecipeInput::default();
        self.status = None;
        self.view = View::Login;
    }

    /// Re-fetches the full list. A failure keeps the list on screen.
    pub async fn list(&mut self) {
        if let Err(e) = self.sync.list().await {
            tracing::error!("Failed to load recipes: {}", e);
            self.status = Some(StatusMessage::error(LOAD_FAILED));
        }
    }

    pub async fn create(&mut self, name: &str, source: &str) {
        self.recipe_form = RecipeInput::new(name, source);

        match self.sync.create(name, source).await {
            Ok(refresh) => {
                self.recipe_form = RecipeInput::default();
                self.status = None;
                self.after_refresh(refresh);
            }
            Err(e) => self.report_mutation(e, ADD_FAILED),
        }
    }

    /// Opens an edit draft for `id` pre-filled with its current values.
    /// Returns `false` if the recipe is not in the current list.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.sync.find(id) {
            Some(recipe) => {
                self.pending = Some(Pending::Edit {
                    id: recipe.id.clone(),
                    draft: RecipeInput::from(recipe),
                });
                true
            }
            None => false,
        }
    }

    /// Submits the open edit draft with the new values.
    ///
    /// If either value is blank the draft is closed without a request or a
    /// message, matching a dismissed edit prompt.
    pub async fn submit_edit(&mut self, name: &str, source: &str) {
        let id = match self.pending.take() {
            Some(Pending::Edit { id, .. }) => id,
            other => {
                self.pending = other;
                return;
            }
        };

        if name.trim().is_empty() || source.trim().is_empty() {
            tracing::debug!("Edit of {} dismissed with a blank value", id);
            return;
        }

        self.update(&id, name, source).await;
    }

    /// Replaces a recipe's name and source and refreshes the list.
    pub async fn update(&mut self, id: &str, name: &str, source: &str) {
        match self.sync.update(id, name, source).await {
            Ok(refresh) => self.after_refresh(refresh),
            Err(e) => self.report_mutation(e, EDIT_FAILED),
        }
    }

    /// Asks for confirmation before deleting `id`. Nothing is sent until
    /// [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: &str) -> bool {
        match self.sync.find(id) {
            Some(recipe) => {
                self.pending = Some(Pending::ConfirmDelete {
                    id: recipe.id.clone(),
                    name: recipe.name.clone(),
                });
                true
            }
            None => false,
        }
    }

    pub async fn confirm_delete(&mut self) {
        let id = match self.pending.take() {
            Some(Pending::ConfirmDelete { id, .. }) => id,
            other => {
                self.pending = other;
                return;
            }
        };

        match self.sync.delete(&id).await {
            Ok(refresh) => self.after_refresh(refresh),
            Err(e) => self.report_mutation(e, DELETE_FAILED),
        }
    }

    /// Closes a pending edit or delete without sending anything.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn after_refresh(&mut self, refresh: Refresh) {
        if refresh.is_err() {
            self.status = Some(StatusMessage::error(LOAD_FAILED));
        }
    }

    /// Maps an error to the status line. Validation text is shown verbatim,
    /// rejections prefer the server's text, transport failures get
    /// `unreachable`.
    fn report(&mut self, error: ClientError, fallback: &str, unreachable: &str) {
        let text = match &error {
            ClientError::Validation(reason) => reason.to_string(),
            ClientError::Rejected { .. } => error
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            ClientError::Transport(e) => {
                tracing::error!("{}: {}", unreachable, e);
                unreachable.to_string()
            }
            ClientError::NotAuthenticated => fallback.to_string(),
        };
        self.status = Some(StatusMessage::error(text));
    }

    /// Recipe mutations show validation text or one generic message.
    fn report_mutation(&mut self, error: ClientError, generic: &str) {
        let text = match error {
            ClientError::Validation(reason) => reason.to_string(),
            other => {
                tracing::error!("{}: {}", generic, other);
                generic.to_string()
            }
        };
        self.status = Some(StatusMessage::error(text));
    }
}
