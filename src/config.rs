//! Runtime configuration, read from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::TOKEN_KEY;

pub const DEFAULT_API_URL: &str = "https://recipe-tracker-umwu.onrender.com/api";
pub const API_URL_VAR: &str = "RECIPE_API_URL";
pub const TOKEN_PATH_VAR: &str = "RECIPE_TOKEN_PATH";

const DATA_DIR_NAME: &str = "recipe-tracker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the recipe API, without a trailing `/`.
    pub api_url: String,
    /// File holding the persisted session token.
    pub token_path: PathBuf,
}

impl ClientConfig {
    pub fn new(api_url: &str, token_path: impl Into<PathBuf>) -> Result<Self> {
        reqwest::Url::parse(api_url)
            .with_context(|| format!("invalid API URL: {}", api_url))?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_path: token_path.into(),
        })
    }

    /// Reads `RECIPE_API_URL` and `RECIPE_TOKEN_PATH`, falling back to the
    /// hosted API and the platform's local data directory.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let token_path = match env::var_os(TOKEN_PATH_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_token_path()?,
        };

        Self::new(&api_url, token_path)
    }
}

pub fn default_token_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().with_context(|| {
        format!(
            "could not determine a local data directory; set {} instead",
            TOKEN_PATH_VAR
        )
    })?;
    Ok(data_dir.join(DATA_DIR_NAME).join(TOKEN_KEY))
}
