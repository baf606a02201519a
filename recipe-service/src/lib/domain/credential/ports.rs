use async_trait::async_trait;

use crate::credential::errors::AuthError;
use crate::credential::models::AccessToken;
use crate::credential::models::Credential;
use crate::credential::models::Password;
use crate::credential::models::SignUpCommand;
use crate::credential::models::Username;

/// Port for account and token lifecycle operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Does not sign the caller in.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Store rejected a duplicate username
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<Credential, AuthError>;

    /// Check credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `Signing` - Token generation failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(&self, username: &Username, password: &Password)
        -> Result<AccessToken, AuthError>;

    /// Exchange a token that is about to expire for a new one.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed, or already expired
    /// * `TokenNotExpiringSoon` - Token still has more than the refresh window left
    /// * `Signing` - Token generation failed
    async fn refresh(&self, token: &str) -> Result<AccessToken, AuthError>;
}

/// Persistence operations for credentials.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Persist a new credential.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, credential: Credential) -> Result<Credential, AuthError>;

    /// Retrieve a credential by username.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Credential>, AuthError>;
}
