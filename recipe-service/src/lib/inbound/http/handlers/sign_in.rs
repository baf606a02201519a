use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::credential::errors::AuthError;
use crate::credential::models::Password;
use crate::credential::models::Username;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let Json(body) = body?;

    // A username or password that could never have been registered is just
    // another wrong credential.
    let username = Username::new(body.username)
        .map_err(|_| ApiError::from(AuthError::InvalidCredentials))?;
    let password = Password::new(body.password)
        .map_err(|_| ApiError::from(AuthError::InvalidCredentials))?;

    state
        .auth_service
        .sign_in(&username, &password)
        .await
        .map_err(ApiError::from)
        .map(|access| ApiSuccess::ok(access.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    username: String,
    password: String,
}
