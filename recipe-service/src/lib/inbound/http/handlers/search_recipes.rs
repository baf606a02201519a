use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::RecipeResponseData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRecipesQuery {
    pub tag: String,
}

pub async fn search_recipes(
    State(state): State<AppState>,
    query: Result<Query<SearchRecipesQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<RecipeResponseData>>, ApiError> {
    let Query(query) = query?;

    state
        .recipe_service
        .search_recipes(&query.tag)
        .await
        .map_err(ApiError::from)
        .map(|recipes| ApiSuccess::ok(recipes.iter().map(RecipeResponseData::from).collect()))
}
