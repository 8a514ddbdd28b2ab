use reqwest::{Client, Response};

use crate::client::{
    auth::token_preview,
    types::*,
};
use crate::error::{ClientError, Result};
use crate::session::Session;

/// HTTP calls against the `/recipes` resource, authenticated with the token
/// held by the injected [`Session`].
#[derive(Debug, Clone)]
pub struct RecipeClient {
    base_url: String,
    client: Client,
    session: Session,
}

impl RecipeClient {
    pub fn new(base_url: String, client: Client, session: Session) -> Self {
        Self {
            base_url,
            client,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn get_auth_header(&self) -> Result<String> {
        match self.session.token() {
            Some(token) => {
                tracing::debug!("Using authentication token: {}", token_preview(&token));
                Ok(format!("Bearer {}", token))
            }
            None => {
                tracing::error!("Attempted to make authenticated request without a token");
                Err(ClientError::NotAuthenticated)
            }
        }
    }

    fn recipe_url(&self, id: &str) -> String {
        format!("{}/recipes/{}", self.base_url, urlencoding::encode(id))
    }

    async fn check(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        tracing::debug!("{} response status: {}", action, status);

        if !status.is_success() {
            return Err(ClientError::from_response(response).await);
        }
        Ok(response)
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let auth_header = self.get_auth_header()?;
        let url = format!("{}/recipes", self.base_url);

        tracing::debug!("Fetching recipes: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", auth_header)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error fetching recipes: {}", e);
                ClientError::Transport(e)
            })?;

        let response = Self::check(response, "List recipes").await?;

        let recipes: Vec<Recipe> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recipe list: {}", e);
            ClientError::Transport(e)
        })?;

        tracing::debug!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }

    pub async fn create_recipe(&self, input: &RecipeInput) -> Result<()> {
        let auth_header = self.get_auth_header()?;
        let url = format!("{}/recipes", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", auth_header)
            .json(input)
            .send()
            .await?;

        Self::check(response, "Create recipe").await?;
        tracing::info!("Created recipe: {}", input.name);
        Ok(())
    }

    pub async fn update_recipe(&self, id: &str, input: &RecipeInput) -> Result<()> {
        let auth_header = self.get_auth_header()?;
        let url = self.recipe_url(id);

        let response = self
            .client
            .put(&url)
            .header("Authorization", auth_header)
            .json(input)
            .send()
            .await?;

        Self::check(response, "Update recipe").await?;
        tracing::info!("Updated recipe {}", id);
        Ok(())
    }

    pub async fn delete_recipe(&self, id: &str) -> Result<()> {
        let auth_header = self.get_auth_header()?;
        let url = self.recipe_url(id);

        let response = self
            .client
            .delete(&url)
            .header("Authorization", auth_header)
            .send()
            .await?;

        Self::check(response, "Delete recipe").await?;
        tracing::info!("Deleted recipe {}", id);
        Ok(())
    }
}
