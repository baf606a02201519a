use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::credential::errors::AuthError;
use crate::credential::models::Password;
use crate::credential::models::SignUpCommand;
use crate::credential::models::Username;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .sign_up(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageResponseData::new("Successfully signed up")))
}

/// HTTP request body for sign-up (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequest {
    username: String,
    password: String,
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<SignUpCommand, AuthError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(SignUpCommand::new(username, password))
    }
}
