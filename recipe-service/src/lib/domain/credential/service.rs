use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::JwtError;
use chrono::DateTime;
use chrono::Utc;

use crate::config::TokenPolicy;
use crate::credential::errors::AuthError;
use crate::credential::models::AccessToken;
use crate::credential::models::Credential;
use crate::credential::models::Password;
use crate::credential::models::SignUpCommand;
use crate::credential::models::Username;
use crate::credential::ports::AuthServicePort;
use crate::credential::ports::CredentialRepository;

/// Domain service for sign-up, sign-in and token refresh.
///
/// Stateless between requests: a token carries everything needed to refresh it.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
    policy: TokenPolicy,
    // Verified against for unknown usernames, matching the cost of a wrong password.
    decoy_hash: String,
}

const DECOY_PASSWORD: &str = "decoy-password-never-issued";

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `authenticator` - Password hashing and token signing
    /// * `policy` - Token lifetimes and refresh window
    pub fn new(
        repository: Arc<CR>,
        authenticator: Arc<Authenticator>,
        policy: TokenPolicy,
    ) -> Self {
        let decoy_hash = authenticator
            .hash_password(DECOY_PASSWORD)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to hash decoy password");
                String::new()
            });

        Self {
            repository,
            authenticator,
            policy,
            decoy_hash,
        }
    }

    /// [`AuthServicePort::sign_in`] evaluated at `now`.
    pub async fn sign_in_at(
        &self,
        username: &Username,
        password: &Password,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let credential = match self.repository.find_by_username(username).await? {
            Some(credential) => credential,
            None => {
                let _ = self
                    .authenticator
                    .verify_password(password.expose(), &self.decoy_hash);
                tracing::debug!(username = %username, "Sign-in for unknown username");
                return Err(AuthError::InvalidCredentials);
            }
        };

        self.authenticator
            .verify_password(password.expose(), &credential.password_hash)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(username = %username, "Sign-in with wrong password");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(
                        username = %username,
                        error = %err,
                        "Stored password hash unreadable"
                    );
                    AuthError::Hashing(err.to_string())
                }
                AuthenticationError::JwtError(err) => AuthError::Signing(err.to_string()),
            })?;

        let issued = self
            .authenticator
            .issue_token(username.as_str(), self.policy.sign_in_ttl, now)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        tracing::info!(username = %username, expires_at = %issued.expires_at, "User signed in");

        Ok(issued.into())
    }

    /// [`AuthServicePort::refresh`] evaluated at `now`.
    pub async fn refresh_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        claims
            .ensure_not_expired(now)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        claims
            .ensure_expiring_within(self.policy.refresh_window, now)
            .map_err(|e| match e {
                JwtError::NotExpiringSoon { .. } => AuthError::TokenNotExpiringSoon,
                other => AuthError::InvalidToken(other.to_string()),
            })?;

        let issued = self
            .authenticator
            .issue_token(&claims.username, self.policy.refresh_ttl, now)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        tracing::info!(
            username = %claims.username,
            expires_at = %issued.expires_at,
            "Token refreshed"
        );

        Ok(issued.into())
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<Credential, AuthError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let credential = Credential {
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(credential).await?;
        tracing::info!(username = %created.username, "User signed up");

        Ok(created)
    }

    async fn sign_in(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AccessToken, AuthError> {
        self.sign_in_at(username, password, Utc::now()).await
    }

    async fn refresh(&self, token: &str) -> Result<AccessToken, AuthError> {
        self.refresh_at(token, Utc::now()).await
    }
}
