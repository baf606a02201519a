use async_trait::async_trait;

use crate::recipe::errors::CacheError;
use crate::recipe::errors::RecipeError;
use crate::recipe::models::CreateRecipeCommand;
use crate::recipe::models::Recipe;
use crate::recipe::models::RecipeId;
use crate::recipe::models::UpdateRecipeCommand;

/// Port for recipe domain service operations.
#[async_trait]
pub trait RecipeServicePort: Send + Sync + 'static {
    /// Publish a new recipe.
    ///
    /// # Returns
    /// Created recipe with its assigned id and publication time
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_recipe(&self, command: CreateRecipeCommand) -> Result<Recipe, RecipeError>;

    /// List every recipe. May be served from the list cache.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipeError>;

    /// Retrieve a recipe by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, RecipeError>;

    /// Update the provided fields of an existing recipe.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_recipe(
        &self,
        id: &RecipeId,
        command: UpdateRecipeCommand,
    ) -> Result<Recipe, RecipeError>;

    /// Delete an existing recipe.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), RecipeError>;

    /// Recipes whose tags contain `tag` exactly.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_recipes(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError>;
}

/// Persistence operations for recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync + 'static {
    /// Persist a new recipe.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeError>;

    /// Retrieve all recipes.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError>;

    /// Retrieve recipe by identifier.
    ///
    /// # Returns
    /// Optional recipe (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError>;

    /// Overwrite the mutable fields of a stored recipe.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, recipe: Recipe) -> Result<Recipe, RecipeError>;

    /// Remove recipe from storage.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &RecipeId) -> Result<(), RecipeError>;

    /// Retrieve recipes tagged with exactly `tag`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError>;
}

/// Cache for the full recipe list.
///
/// Entries may be stale for up to the configured TTL.
#[async_trait]
pub trait RecipeCache: Send + Sync + 'static {
    /// Cached list, or None on a miss.
    async fn get_list(&self) -> Result<Option<Vec<Recipe>>, CacheError>;

    /// Store the full list.
    async fn put_list(&self, recipes: &[Recipe]) -> Result<(), CacheError>;

    /// Drop the cached list.
    async fn invalidate(&self) -> Result<(), CacheError>;
}
