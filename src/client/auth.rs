//! Calls to the unauthenticated `/auth` endpoints.

use reqwest::Client;

use crate::client::types::{AuthToken, LoginRequest, RegisterRequest};
use crate::error::{ClientError, Result};

/// # Authentication endpoints
///
/// Exchanges credentials for a bearer token and registers new accounts.
/// Holds no token itself; the caller decides where a returned token lives.
#[derive(Debug, Clone)]
pub struct AuthClient {
    /// Base URL of the recipe API
    base_url: String,
    /// HTTP client shared with the recipe endpoints
    client: Client,
}

impl AuthClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthToken> {
        tracing::info!("Attempting login for: {}", request.email);

        let url = format!("{}/auth/login", self.base_url);
        tracing::debug!("Making login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error during login: {}", e);
                ClientError::Transport(e)
            })?;

        let status = response.status();
        tracing::debug!("Login response status: {}", status);

        if !status.is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let auth_token: AuthToken = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse login response: {}", e);
            ClientError::Transport(e)
        })?;

        tracing::info!("Login successful for: {}", request.email);
        tracing::debug!("Received token: {}", token_preview(&auth_token.token));

        Ok(auth_token)
    }

    /// Registers an account. The server's JSON reply is returned as-is.
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        tracing::info!("Registering user: {} <{}>", request.username, request.email);

        let url = format!("{}/auth/register", self.base_url);
        tracing::debug!("Making registration request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error during registration: {}", e);
                ClientError::Transport(e)
            })?;

        let status = response.status();
        tracing::debug!("Registration response status: {}", status);

        if !status.is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let body = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse registration response: {}", e);
            ClientError::Transport(e)
        })?;

        tracing::info!("Registration successful for: {}", request.username);
        Ok(body)
    }
}

/// First ten characters of a token, for logs.
pub fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(10).collect();
    format!("{}...", head)
}
