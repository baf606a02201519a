use axum::extract::State;

use super::ApiError;
use super::ApiSuccess;
use super::RecipeResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RecipeResponseData>>, ApiError> {
    state
        .recipe_service
        .list_recipes()
        .await
        .map_err(ApiError::from)
        .map(|recipes| ApiSuccess::ok(recipes.iter().map(RecipeResponseData::from).collect()))
}
