//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names managed by the token service
///
/// Extra claims under these names are dropped when a token is issued.
pub const RESERVED_CLAIMS: [&str; 4] = ["sub", "iat", "exp", "exp_ms"];

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject
    pub sub: String,

    /// Issued at, seconds since the epoch
    pub iat: i64,

    /// Expiration, seconds since the epoch, rounded up
    pub exp: i64,

    /// Expiration, milliseconds since the epoch
    ///
    /// Tokens without it fall back to `exp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_ms: Option<i64>,

    /// Caller supplied claims
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Creates claims issued at `issued_at` and valid for `ttl_ms`
    ///
    /// # Arguments
    ///
    /// * `subject` - Token subject
    /// * `issued_at` - Issue instant, truncated to whole seconds
    /// * `ttl_ms` - Lifetime in milliseconds, measured from the exact issue instant
    /// * `extra` - Additional claims; reserved names are removed
    ///
    /// Deadlines past the representable range saturate instead of wrapping.
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl_ms: i64,
        mut extra: Map<String, Value>,
    ) -> Self {
        for name in RESERVED_CLAIMS {
            extra.remove(name);
        }
        let deadline_ms = issued_at.timestamp_millis().saturating_add(ttl_ms.max(0));
        let exp = deadline_ms
            .div_euclid(1000)
            .saturating_add(i64::from(deadline_ms.rem_euclid(1000) != 0));

        Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp,
            exp_ms: Some(deadline_ms),
            extra,
        }
    }

    /// Millisecond deadline, derived from `exp` when the claim is absent
    pub fn deadline_ms(&self) -> i64 {
        self.exp_ms.unwrap_or_else(|| self.exp.saturating_mul(1000))
    }

    /// A token expires at its deadline instant, not one unit after
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= self.deadline_ms()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Looks up an extra claim
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
