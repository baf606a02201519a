use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordScheme;

/// Authentication coordinator combining password verification and token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// A freshly signed token and the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator hashing with Argon2id.
    ///
    /// # Errors
    /// * `EmptySecret` - `jwt_secret` is empty
    pub fn new(jwt_secret: &[u8]) -> Result<Self, JwtError> {
        Self::with_scheme(jwt_secret, PasswordScheme::default())
    }

    /// Create an authenticator hashing new passwords with `scheme`.
    ///
    /// # Errors
    /// * `EmptySecret` - `jwt_secret` is empty
    pub fn with_scheme(jwt_secret: &[u8], scheme: PasswordScheme) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::with_scheme(scheme),
            jwt_handler: JwtHandler::new(jwt_secret)?,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Sign a token for `username` valid for `ttl` from `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(
        &self,
        username: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_user(username, ttl, now);
        let token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verify a token's signature and decode its claims. Expiry is not checked.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this secret
    /// * `Malformed` - Token could not be decoded
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Signature check followed by an expiry check, as required for access
    /// to protected resources.
    ///
    /// # Errors
    /// * `InvalidSignature` / `Malformed` - see [`Self::validate_token`]
    /// * `TokenExpired` - Token is past its expiry
    pub fn authorize(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims = self.validate_token(token)?;
        claims.ensure_not_expired(now)?;
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            Authenticator::new(b""),
            Err(JwtError::EmptySecret)
        ));
    }

    #[test]
    fn test_verify_password() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("my_password", &hash).is_ok());
        assert!(matches!(
            authenticator.verify_password("wrong_password", &hash),
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_legacy_scheme() {
        let authenticator =
            Authenticator::with_scheme(SECRET, PasswordScheme::LegacySha256).unwrap();

        let hash = authenticator.hash_password("my_password").unwrap();
        assert!(hash.starts_with("sha256$"));
        assert!(authenticator.verify_password("my_password", &hash).is_ok());
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = Authenticator::new(SECRET).unwrap();
        let now = Utc::now();

        let issued = authenticator
            .issue_token("alice", Duration::minutes(10), now)
            .expect("Failed to issue token");

        let claims = authenticator
            .validate_token(&issued.token)
            .expect("Failed to validate token");

        assert_eq!(claims.username, "alice");
        assert_eq!(claims.expires_at(), issued.expires_at);
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[test]
    fn test_authorize_rejects_expired_token() {
        let authenticator = Authenticator::new(SECRET).unwrap();
        let now = Utc::now();

        let issued = authenticator
            .issue_token("alice", Duration::minutes(5), now)
            .unwrap();

        assert!(authenticator.authorize(&issued.token, now).is_ok());
        assert_eq!(
            authenticator
                .authorize(&issued.token, now + Duration::minutes(6))
                .unwrap_err(),
            JwtError::TokenExpired
        );
        // Signature-only validation still accepts it
        assert!(authenticator.validate_token(&issued.token).is_ok());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let authenticator = Authenticator::new(SECRET).unwrap();
        let other = Authenticator::new(b"another_secret_key_of_32_bytes!!").unwrap();
        let now = Utc::now();

        let issued = other
            .issue_token("alice", Duration::minutes(10), now)
            .unwrap();

        assert_eq!(
            authenticator.validate_token(&issued.token).unwrap_err(),
            JwtError::InvalidSignature
        );
        assert_eq!(
            authenticator.authorize(&issued.token, now).unwrap_err(),
            JwtError::InvalidSignature
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }
}
