use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::inbound::http::router::AppState;
use crate::recipe::errors::RecipeError;
use crate::recipe::models::RecipeId;
use crate::recipe::models::RecipeName;
use crate::recipe::models::UpdateRecipeCommand;

/// HTTP request body for updating a recipe (raw JSON)
///
/// Absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

impl UpdateRecipeRequest {
    fn try_into_command(self) -> Result<UpdateRecipeCommand, RecipeError> {
        let name = self.name.map(RecipeName::new).transpose()?;

        Ok(UpdateRecipeCommand {
            name,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
        })
    }
}

pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateRecipeRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    // Parse recipe ID and request at HTTP boundary - errors automatically converted
    let recipe_id = RecipeId::from_string(&id).map_err(RecipeError::from)?;
    let Json(body) = body?;
    let command = body.try_into_command()?;

    state
        .recipe_service
        .update_recipe(&recipe_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageResponseData::new("Recipe has been updated")))
}
