use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by an access token.
///
/// The token is the whole session: nothing about it is stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated username
    pub username: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for `username` issued at `now` and valid for `ttl`.
    pub fn for_user(username: impl Into<String>, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Expiry as a timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Time left before expiry, negative once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.expires_at() - now
    }

    /// Check if token is expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// # Errors
    /// * `TokenExpired` - `exp` is at or before `now`
    pub fn ensure_not_expired(&self, now: DateTime<Utc>) -> Result<(), JwtError> {
        if self.is_expired(now) {
            Err(JwtError::TokenExpired)
        } else {
            Ok(())
        }
    }

    /// Require the token to expire within `window` of `now`.
    ///
    /// # Errors
    /// * `NotExpiringSoon` - more than `window` remains
    pub fn ensure_expiring_within(
        &self,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), JwtError> {
        let remaining = self.remaining(now);
        if remaining > window {
            Err(JwtError::NotExpiringSoon {
                remaining_seconds: remaining.num_seconds(),
                window_seconds: window.num_seconds(),
            })
        } else {
            Ok(())
        }
    }
}
