use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::recipe::errors::RecipeError;
use crate::recipe::models::CreateRecipeCommand;
use crate::recipe::models::Recipe;
use crate::recipe::models::RecipeId;
use crate::recipe::models::UpdateRecipeCommand;
use crate::recipe::ports::RecipeCache;
use crate::recipe::ports::RecipeRepository;
use crate::recipe::ports::RecipeServicePort;

/// Domain service implementation for recipe operations.
///
/// Cache failures never fail a request; they are logged and the store is used.
pub struct RecipeService<RR, RC>
where
    RR: RecipeRepository,
    RC: RecipeCache,
{
    repository: Arc<RR>,
    cache: Arc<RC>,
}

impl<RR, RC> RecipeService<RR, RC>
where
    RR: RecipeRepository,
    RC: RecipeCache,
{
    /// Create a new recipe service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Recipe persistence implementation
    /// * `cache` - List cache implementation
    pub fn new(repository: Arc<RR>, cache: Arc<RC>) -> Self {
        Self { repository, cache }
    }

    async fn invalidate_list(&self) {
        if let Err(e) = self.cache.invalidate().await {
            tracing::warn!(error = %e, "Failed to invalidate recipe list cache");
        }
    }
}

#[async_trait]
impl<RR, RC> RecipeServicePort for RecipeService<RR, RC>
where
    RR: RecipeRepository,
    RC: RecipeCache,
{
    async fn create_recipe(&self, command: CreateRecipeCommand) -> Result<Recipe, RecipeError> {
        let recipe = Recipe::publish(command, Utc::now());

        let created = self.repository.create(recipe).await?;
        self.invalidate_list().await;

        tracing::info!(recipe_id = %created.id, name = %created.name, "Recipe created");
        Ok(created)
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipeError> {
        match self.cache.get_list().await {
            Ok(Some(recipes)) => {
                tracing::debug!(count = recipes.len(), "Recipe list served from cache");
                return Ok(recipes);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Recipe list cache read failed"),
        }

        let recipes = self.repository.list_all().await?;

        if let Err(e) = self.cache.put_list(&recipes).await {
            tracing::warn!(error = %e, "Recipe list cache write failed");
        }

        Ok(recipes)
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, RecipeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RecipeError::NotFound(*id))
    }

    async fn update_recipe(
        &self,
        id: &RecipeId,
        command: UpdateRecipeCommand,
    ) -> Result<Recipe, RecipeError> {
        let mut recipe = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RecipeError::NotFound(*id))?;

        recipe.apply(command);

        let updated = self.repository.update(recipe).await?;
        self.invalidate_list().await;

        tracing::info!(recipe_id = %updated.id, "Recipe updated");
        Ok(updated)
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), RecipeError> {
        self.repository.delete(id).await?;
        self.invalidate_list().await;

        tracing::info!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }

    async fn search_recipes(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError> {
        self.repository.find_by_tag(tag).await
    }
}
