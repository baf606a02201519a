use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::credential::errors::AuthError;
use crate::credential::models::AccessToken;
use crate::recipe::errors::RecipeError;
use crate::recipe::models::Recipe;

pub mod create_recipe;
pub mod delete_recipe;
pub mod get_recipe;
pub mod list_recipes;
pub mod refresh;
pub mod search_recipes;
pub mod sign_in;
pub mod sign_up;
pub mod update_recipe;

pub use create_recipe::create_recipe;
pub use delete_recipe::delete_recipe;
pub use get_recipe::get_recipe;
pub use list_recipes::list_recipes;
pub use refresh::refresh;
pub use search_recipes::search_recipes;
pub use sign_in::sign_in;
pub use sign_up::sign_up;
pub use update_recipe::update_recipe;

/// Successful response: status plus a bare JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalServerError(msg) => msg,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidUsername(_) | AuthError::InvalidPassword(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::InvalidCredentials | AuthError::InvalidToken(_) => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::TokenNotExpiringSoon => ApiError::BadRequest(err.to_string()),
            AuthError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AuthError::Hashing(_) | AuthError::Signing(_) | AuthError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            // An id that does not parse cannot name a stored recipe.
            RecipeError::NotFound(_) | RecipeError::InvalidRecipeId(_) => {
                ApiError::NotFound("Recipe not found".to_string())
            }
            RecipeError::InvalidRecipeName(_) => ApiError::BadRequest(err.to_string()),
            RecipeError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Token body returned by sign-in and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl From<AccessToken> for TokenResponseData {
    fn from(access: AccessToken) -> Self {
        Self {
            token: access.token,
            expires: access.expires_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResponseData {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeResponseData {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::errors::UsernameError;
    use crate::recipe::errors::RecipeIdError;
    use crate::recipe::models::RecipeId;

    #[test]
    fn test_auth_error_statuses() {
        let cases = [
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidToken("bad signature".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (AuthError::TokenNotExpiringSoon, StatusCode::BAD_REQUEST),
            (
                AuthError::InvalidUsername(UsernameError::InvalidCharacters),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::UsernameAlreadyExists("alice".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                AuthError::DatabaseError("connection reset".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_recipe_error_statuses() {
        assert_eq!(
            ApiError::from(RecipeError::NotFound(RecipeId::new())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RecipeError::InvalidRecipeId(RecipeIdError::InvalidFormat(
                "nope".to_string()
            )))
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RecipeError::DatabaseError("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_recipe_response_uses_published_at_camel_case() {
        let recipe = crate::recipe::models::Recipe::publish(
            crate::recipe::models::CreateRecipeCommand {
                name: crate::recipe::models::RecipeName::new("Pasta".to_string()).unwrap(),
                tags: vec![],
                ingredients: vec![],
                instructions: vec![],
            },
            Utc::now(),
        );

        let json = serde_json::to_value(RecipeResponseData::from(&recipe)).unwrap();
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("published_at").is_none());
    }
}
