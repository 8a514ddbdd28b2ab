//! Error types shared by the HTTP layer, the session manager and the sync
//! client.

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::client::types::ApiErrorBody;
use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: StatusCode,
        /// Error text from the response body, when it carried one.
        message: Option<String>,
    },

    /// The request never completed or its body could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A recipe request was attempted with no session token.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl ClientError {
    /// Builds a [`ClientError::Rejected`] from a non-success response,
    /// pulling the `error` field out of a JSON body when present.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Request rejected with status {}: {}", status, body);

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|text| !text.trim().is_empty());

        ClientError::Rejected { status, message }
    }

    /// The server-provided error text, if this is a rejection that had one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
