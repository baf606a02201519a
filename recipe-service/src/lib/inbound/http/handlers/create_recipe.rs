use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::RecipeResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::recipe::errors::RecipeError;
use crate::recipe::models::CreateRecipeCommand;
use crate::recipe::models::RecipeName;

pub async fn create_recipe(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    body: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> Result<ApiSuccess<RecipeResponseData>, ApiError> {
    let Json(body) = body?;

    let recipe = state
        .recipe_service
        .create_recipe(body.try_into_command()?)
        .await?;

    tracing::debug!(recipe_id = %recipe.id, username = %caller.username, "Recipe published");

    Ok(ApiSuccess::ok((&recipe).into()))
}

/// HTTP request body for creating a recipe (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRecipeRequest {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
}

impl CreateRecipeRequest {
    fn try_into_command(self) -> Result<CreateRecipeCommand, RecipeError> {
        Ok(CreateRecipeCommand {
            name: RecipeName::new(self.name)?,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
        })
    }
}
