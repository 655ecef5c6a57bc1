use hse_core::domain::LoginUser;
use hse_shared::ApiResponse;

use crate::handlers::CurrentUser;

/// Handler for GET /api/auth/me
pub async fn me(user: CurrentUser) -> ApiResponse<LoginUser> {
    ApiResponse::ok_with(user.into_inner())
}
