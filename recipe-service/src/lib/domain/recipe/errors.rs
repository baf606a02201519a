use thiserror::Error;

use crate::recipe::models::RecipeId;

/// Error type for RecipeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for RecipeName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeNameError {
    #[error("Recipe name is empty")]
    Empty,

    #[error("Recipe name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for recipe list cache operations.
///
/// Never surfaced to clients: the service degrades to the store instead.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Cache command failed: {0}")]
    CommandFailed(String),

    #[error("Cached value could not be (de)serialized: {0}")]
    Serialization(String),
}

/// Top-level error type for all recipe operations
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Invalid recipe ID: {0}")]
    InvalidRecipeId(#[from] RecipeIdError),

    #[error("Invalid recipe name: {0}")]
    InvalidRecipeName(#[from] RecipeNameError),

    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
