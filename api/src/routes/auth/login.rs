use actix_web::web;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use hse_core::domain::LoginUser;
use hse_core::errors::ServiceError;
use hse_core::services::TokenService;
use hse_shared::{ApiResponse, MessageCode};

use crate::handlers::{ApiError, ValidatedJson};

/// Demo accounts as `(user_id, username, password)`
///
/// Passwords are plaintext and compared directly. This table backs the demo
/// login only and is not a credential-storage pattern; a real user store
/// keeps salted password hashes and verifies with a constant-time check.
pub const DEMO_ACCOUNTS: [(i64, &str, &str); 2] = [
    (1, "admin", "admin123"),
    (2, "zhangsan", "123456"),
];

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "用户名不能为空"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "密码不能为空"))]
    pub password: String,
}

/// Handler for POST /api/auth/login
///
/// Returns the [`LoginUser`] with a freshly issued token, or `0103` when the
/// credentials do not match a demo account.
pub async fn login(
    tokens: web::Data<TokenService>,
    body: ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<LoginUser>, ApiError> {
    let request = body.into_inner();

    let (user_id, username, _) = DEMO_ACCOUNTS
        .iter()
        .find(|(_, username, password)| {
            *username == request.username && *password == request.password
        })
        .ok_or_else(|| ServiceError::from_code(MessageCode::UserPasswordError))?;

    let user = tokens.login(*user_id, username)?;
    info!(user_id = user.user_id, "User logged in: {}", user.username);

    Ok(ApiResponse::ok_with(user))
}
