//! Unsalted single-round SHA-256 digests.
//!
//! Produced only when the legacy flag is set. Digests are recognised by
//! their `sha256$` prefix; unprefixed values from other stores are not.
//! Identical passwords produce identical digests.

use sha2::Digest;
use sha2::Sha256;

/// Prefix marking a stored legacy digest.
pub const PREFIX: &str = "sha256$";

/// Compute the stored form of a legacy digest.
pub fn digest(password: &str) -> String {
    format!("{}{:x}", PREFIX, Sha256::digest(password.as_bytes()))
}

/// Returns `true` when `stored` was produced by [`digest`].
pub fn is_legacy(stored: &str) -> bool {
    stored.starts_with(PREFIX)
}

/// Compare a plaintext against a stored legacy digest.
pub fn verify(password: &str, stored: &str) -> bool {
    let expected = digest(password);

    // Compare every byte so mismatches take the same time regardless of position.
    expected.len() == stored.len()
        && expected
            .bytes()
            .zip(stored.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
