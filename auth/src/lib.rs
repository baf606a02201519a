//! Authentication utilities library
//!
//! Provides the authentication building blocks used by the recipe service:
//! - Password hashing (Argon2id, with an opt-in legacy SHA-256 digest)
//! - HS256 token signing and signature verification
//! - Expiry checks kept separate from signature checks
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::Authenticator;
//! use chrono::{Duration, Utc};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! let now = Utc::now();
//! let issued = auth.issue_token("alice", Duration::minutes(10), now).unwrap();
//!
//! // Signature only
//! let claims = auth.validate_token(&issued.token).unwrap();
//! assert_eq!(claims.username, "alice");
//!
//! // Signature and expiry
//! assert!(auth.authorize(&issued.token, now).is_ok());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordScheme;
