//! Wire types for the recipe API.
//!
//! ## Key Types
//!
//! - [`Recipe`] - A recipe as listed by the server (`_id`, `name`, `source`)
//! - [`RecipeInput`] - Body of create and update requests
//! - [`LoginRequest`] / [`RegisterRequest`] - Credentials for the `/auth` endpoints
//! - [`AuthToken`] - Login response carrying the bearer token

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bearer token returned by `/auth/login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A recipe owned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Server-assigned identifier (`_id` on the wire)
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub source: String,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.source)
    }
}

/// Full replacement of a recipe's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    pub name: String,
    pub source: String,
}

impl RecipeInput {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

impl From<&Recipe> for RecipeInput {
    fn from(recipe: &Recipe) -> Self {
        Self::new(recipe.name.clone(), recipe.source.clone())
    }
}

/// Error body the API sends alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn recipe_reads_underscore_id() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "64f1",
            "name": "Pancakes",
            "source": "Grandma",
            "user": "ignored"
        }))
        .unwrap();

        assert_eq!(recipe.id, "64f1");
        assert_eq!(recipe.to_string(), "Pancakes - Grandma");
    }

    #[test]
    fn recipe_input_serializes_only_editable_fields() {
        let body = serde_json::to_value(RecipeInput::new("Soup", "Book")).unwrap();
        assert_eq!(body, json!({ "name": "Soup", "source": "Book" }));
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.error, None);
    }
}
