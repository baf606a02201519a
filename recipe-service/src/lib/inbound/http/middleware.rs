use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

/// Extension type carrying the caller validated by [`authorize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Middleware gating protected routes on a valid, unexpired token.
///
/// Rejections are a bare 401 with an empty body; the wrapped handler does
/// not run. Accepted requests carry an [`AuthenticatedUser`] extension.
pub async fn authorize(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = token_from_headers(req.headers()).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Missing or unreadable Authorization header");
        StatusCode::UNAUTHORIZED
    })?;

    let claims = authenticator.authorize(token, Utc::now()).map_err(|e| {
        tracing::warn!(uri = %req.uri(), error = %e, "Token rejected");
        StatusCode::UNAUTHORIZED
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });

    Ok(next.run(req).await)
}

/// Token from the `Authorization` header, given either raw or as `Bearer <token>`.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
