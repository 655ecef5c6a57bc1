//! Bearer token extractor

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};

use hse_core::domain::LoginUser;
use hse_core::services::TokenService;
use hse_shared::MessageCode;

use super::ApiError;

/// Authenticated caller decoded from `Authorization: Bearer <token>`
///
/// Rejects with `0203` when the header is absent, `0202` when the token
/// has expired and `0201` for any other verification failure.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub LoginUser);

impl CurrentUser {
    pub fn into_inner(self) -> LoginUser {
        self.0
    }
}

impl Deref for CurrentUser {
    type Target = LoginUser;

    fn deref(&self) -> &LoginUser {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(CurrentUser))
    }
}

fn authenticate(req: &HttpRequest) -> Result<LoginUser, ApiError> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| anyhow::anyhow!("TokenService is not registered as app data"))?;

    let token = bearer_token(req).ok_or(MessageCode::TokenMissing)?;
    Ok(tokens.login_user(token)?)
}

/// Token of a `Bearer` authorization header, if present and non-empty
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def.ghi"));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer   "))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        assert_eq!(bearer_token(&TestRequest::default().to_http_request()), None);
    }
}
