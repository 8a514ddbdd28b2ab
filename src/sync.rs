//! Keeps a local copy of the recipe list in step with the server.
//!
//! The cached list is never patched locally. Every successful mutation is
//! followed by exactly one full re-fetch, and the list only changes when a
//! fetch succeeds.

use crate::client::{Recipe, RecipeClient};
use crate::error::Result;
use crate::validation;

/// Result of the list refresh that follows a successful mutation.
///
/// Kept separate from the mutation's own result: the server accepted the
/// change even when the follow-up fetch fails.
pub type Refresh = Result<()>;

pub struct RecipeSync {
    client: RecipeClient,
    recipes: Vec<Recipe>,
}

impl RecipeSync {
    pub fn new(client: RecipeClient) -> Self {
        Self {
            client,
            recipes: Vec::new(),
        }
    }

    /// The last successfully fetched list.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Drops the cached list, e.g. when the session ends.
    pub fn discard(&mut self) {
        self.recipes.clear();
    }

    /// Fetches the full collection and replaces the cached list. On failure
    /// the previous list is kept.
    pub async fn list(&mut self) -> Result<&[Recipe]> {
        let recipes = self.client.list_recipes().await?;
        self.recipes = recipes;
        Ok(&self.recipes)
    }

    pub async fn create(&mut self, name: &str, source: &str) -> Result<Refresh> {
        let input = validation::validate_recipe(name, source)?;
        self.client.create_recipe(&input).await?;
        Ok(self.refresh().await)
    }

    /// Replaces both editable fields of recipe `id`.
    pub async fn update(&mut self, id: &str, name: &str, source: &str) -> Result<Refresh> {
        let input = validation::validate_recipe(name, source)?;
        self.client.update_recipe(id, &input).await?;
        Ok(self.refresh().await)
    }

    /// Deletes without asking; confirmation is the caller's job.
    pub async fn delete(&mut self, id: &str) -> Result<Refresh> {
        self.client.delete_recipe(id).await?;
        Ok(self.refresh().await)
    }

    async fn refresh(&mut self) -> Refresh {
        self.list().await.map(|_| ()).map_err(|e| {
            tracing::warn!("Refresh after mutation failed: {}", e);
            e
        })
    }
}
