use axum::extract::Path;
use axum::extract::State;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::inbound::http::router::AppState;
use crate::recipe::errors::RecipeError;
use crate::recipe::models::RecipeId;

pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let recipe_id = RecipeId::from_string(&id).map_err(RecipeError::from)?;

    state
        .recipe_service
        .delete_recipe(&recipe_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageResponseData::new("Recipe has been deleted")))
}
