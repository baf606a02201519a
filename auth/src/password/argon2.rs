use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::legacy;

/// Scheme used when hashing new passwords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Argon2id with a random per-password salt.
    #[default]
    Argon2id,
    /// Unsalted SHA-256 in the `sha256$<hex>` format.
    LegacySha256,
}

/// Password hashing implementation.
///
/// Hashes with the configured [`PasswordScheme`] and verifies against any
/// supported stored format.
pub struct PasswordHasher {
    scheme: PasswordScheme,
}

impl PasswordHasher {
    /// Create a new password hasher using Argon2id.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self::with_scheme(PasswordScheme::Argon2id)
    }

    /// Create a password hasher that produces hashes with `scheme`.
    pub fn with_scheme(scheme: PasswordScheme) -> Self {
        Self { scheme }
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string for Argon2id, `sha256$<hex>` for the legacy scheme
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.scheme {
            PasswordScheme::Argon2id => {
                let salt = SaltString::generate(&mut OsRng);
                let argon2 = Argon2::default();

                argon2
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))
            }
            PasswordScheme::LegacySha256 => Ok(legacy::digest(password)),
        }
    }

    /// Verify a password against a stored hash.
    ///
    /// Accepts both Argon2 PHC strings and legacy digests, independent of the
    /// scheme used for new hashes.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is not recognised
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if legacy::is_legacy(hash) {
            return Ok(legacy::verify(password, hash));
        }

        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_argon2_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_legacy_scheme_is_deterministic() {
        let hasher = PasswordHasher::with_scheme(PasswordScheme::LegacySha256);

        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();

        assert_eq!(first, second);
        assert!(hasher.verify("same_password", &first).unwrap());
    }

    #[test]
    fn test_default_hasher_still_verifies_legacy_digests() {
        let legacy = PasswordHasher::with_scheme(PasswordScheme::LegacySha256);
        let stored = legacy.hash("old_password").unwrap();

        let hasher = PasswordHasher::new();
        assert!(hasher.verify("old_password", &stored).unwrap());
        assert!(!hasher.verify("new_password", &stored).unwrap());
    }

    #[test]
    fn test_unprefixed_digest_is_not_a_legacy_hash() {
        let hasher = PasswordHasher::new();
        let unprefixed = legacy::digest("password").trim_start_matches(legacy::PREFIX).to_string();

        assert!(!legacy::is_legacy(&unprefixed));
        assert!(matches!(
            hasher.verify("password", &unprefixed),
            Err(PasswordError::VerificationFailed(_))
        ));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }
}
