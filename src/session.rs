//! Session token ownership and the login/registration/logout lifecycle.

use std::sync::{Arc, PoisonError, RwLock};

use crate::client::auth::{token_preview, AuthClient};
use crate::error::Result;
use crate::storage::TokenStore;
use crate::validation;

/// Shared handle to the current session token.
///
/// Clones point at the same slot. The token is only ever read or replaced
/// as a whole.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn set_token(&self, token: String) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Drives the token lifecycle: restore from storage, login, register,
/// logout.
///
/// Storage failures are logged and never fail the operation; the in-memory
/// session stays authoritative for the running client.
pub struct SessionManager<S> {
    session: Session,
    store: S,
    auth: AuthClient,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(session: Session, store: S, auth: AuthClient) -> Self {
        Self {
            session,
            store,
            auth,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads a persisted token into the session. Returns whether one was
    /// found.
    pub fn restore(&self) -> bool {
        match self.store.load() {
            Ok(Some(token)) => {
                tracing::info!("Restored session token {}", token_preview(&token));
                self.session.set_token(token);
                true
            }
            Ok(None) => {
                tracing::debug!("No persisted session token");
                false
            }
            Err(e) => {
                tracing::warn!("Could not read persisted token: {}", e);
                false
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let request = validation::validate_login(email, password)?;
        let auth_token = self.auth.login(&request).await?;

        if let Err(e) = self.store.save(&auth_token.token) {
            tracing::warn!("Logged in, but the token could not be persisted: {}", e);
        }
        self.session.set_token(auth_token.token);
        Ok(())
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let request = validation::validate_registration(username, email, password)?;
        self.auth.register(&request).await?;
        Ok(())
    }

    pub fn logout(&self) {
        self.session.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!("Could not remove persisted token: {}", e);
        }
        tracing::info!("Logged out");
    }
}
