use axum::extract::Path;
use axum::extract::State;

use super::ApiError;
use super::ApiSuccess;
use super::RecipeResponseData;
use crate::inbound::http::router::AppState;
use crate::recipe::errors::RecipeError;
use crate::recipe::models::RecipeId;

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<ApiSuccess<RecipeResponseData>, ApiError> {
    let recipe_id = RecipeId::from_string(&recipe_id).map_err(RecipeError::from)?;

    state
        .recipe_service
        .get_recipe(&recipe_id)
        .await
        .map_err(ApiError::from)
        .map(|ref recipe| ApiSuccess::ok(recipe.into()))
}
