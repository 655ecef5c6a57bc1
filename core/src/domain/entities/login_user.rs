//! Authenticated principal handed to request handlers

use serde::{Deserialize, Serialize};

/// Logged-in user held for the lifetime of a token
///
/// Times are milliseconds since the epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub user_id: i64,
    pub username: String,
    pub token: String,
    pub login_time: i64,
    pub expire_time: i64,
}

impl LoginUser {
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expire_time
    }
}
