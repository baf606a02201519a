//! Serialized form of recipes kept in the list cache.
//!
//! Decoupled from the domain model so a cache entry written by an older
//! build fails to decode instead of producing a half-valid recipe.
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::recipe::errors::CacheError;
use crate::recipe::models::Recipe;
use crate::recipe::models::RecipeId;
use crate::recipe::models::RecipeName;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedRecipe {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

impl From<&Recipe> for CachedRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name.as_str().to_string(),
            tags: recipe.tags.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            published_at: recipe.published_at,
        }
    }
}

impl TryFrom<CachedRecipe> for Recipe {
    type Error = CacheError;

    fn try_from(cached: CachedRecipe) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: RecipeId::from_string(&cached.id)
                .map_err(|e| CacheError::Serialization(e.to_string()))?,
            name: RecipeName::new(cached.name)
                .map_err(|e| CacheError::Serialization(e.to_string()))?,
            tags: cached.tags,
            ingredients: cached.ingredients,
            instructions: cached.instructions,
            published_at: cached.published_at,
        })
    }
}

pub fn encode_list(recipes: &[Recipe]) -> Result<String, CacheError> {
    let cached: Vec<CachedRecipe> = recipes.iter().map(CachedRecipe::from).collect();
    serde_json::to_string(&cached).map_err(|e| CacheError::Serialization(e.to_string()))
}

pub fn decode_list(payload: &str) -> Result<Vec<Recipe>, CacheError> {
    let cached: Vec<CachedRecipe> =
        serde_json::from_str(payload).map_err(|e| CacheError::Serialization(e.to_string()))?;

    cached.into_iter().map(Recipe::try_from).collect()
}
