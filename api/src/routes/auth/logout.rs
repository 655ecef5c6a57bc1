use tracing::info;

use hse_shared::{ApiResponse, MessageCode};

use crate::handlers::CurrentUser;

/// Handler for POST /api/auth/logout
///
/// Tokens are stateless, so logging out only confirms the caller held a
/// valid one; the envelope carries the localized `0205` text.
pub async fn logout(user: CurrentUser) -> ApiResponse<()> {
    info!(user_id = user.user_id, "User logged out: {}", user.username);
    ApiResponse::ok_code(MessageCode::LogoutSuccess, ())
}
