//! Envelope and localized message demos
//!
//! Every response text is resolved in the request locale; add `?lang=en_US`
//! or an `Accept-Language` header to switch.

use actix_web::web;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use validator::Validate;

use hse_core::errors::ServiceError;
use hse_shared::i18n;
use hse_shared::{ApiResponse, MessageCode};

use crate::handlers::{ApiError, ValidatedJson, ValidatedQuery};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/success", web::get().to(success))
        .route("/success-with-code", web::get().to(success_with_code))
        .route("/error", web::get().to(error))
        .route("/error-with-params", web::get().to(error_with_params))
        .route("/legacy-error", web::get().to(legacy_error))
        .route("/internal-error", web::get().to(internal_error))
        .route("/panic", web::get().to(panicking))
        .route("/validate", web::post().to(validate))
        .route("/search", web::get().to(search))
        .route("/lang", web::get().to(lang))
        .route("/welcome", web::get().to(welcome))
        .route("/custom-message", web::get().to(custom_message))
        .route("/custom-message-with-params", web::get().to(custom_message_with_params));
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "用户名不能为空"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "密码不能为空"))]
    pub password: String,

    #[validate(email(message = "邮箱格式不正确"))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub username: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1, max = 50, message = "关键字长度必须在1到50之间"))]
    pub keyword: String,

    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "页码必须大于0"))]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub keyword: String,
    pub page: u32,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub locale: &'static str,
    pub language_tag: &'static str,
    pub name: &'static str,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct WelcomeQuery {
    pub name: Option<String>,
}

/// GET /api/example/success
pub async fn success() -> ApiResponse<&'static str> {
    ApiResponse::ok_with("Hello, HSE")
}

/// GET /api/example/success-with-code
pub async fn success_with_code() -> ApiResponse<&'static str> {
    ApiResponse::ok_code(MessageCode::Success, "Hello, HSE")
}

/// GET /api/example/error: `0401` data not found
pub async fn error() -> Result<ApiResponse<()>, ApiError> {
    Err(ServiceError::from_code(MessageCode::DataNotExist).into())
}

/// GET /api/example/error-with-params: `0007` with an interpolated reason
pub async fn error_with_params() -> Result<ApiResponse<()>, ApiError> {
    Err(ServiceError::with_args(MessageCode::ParamInvalid, ["用户名不能为空"]).into())
}

/// GET /api/example/legacy-error: free-text error with its own code
pub async fn legacy_error() -> Result<ApiResponse<()>, ApiError> {
    Err(ServiceError::with_code("9001", "库存不足").into())
}

/// GET /api/example/internal-error: unexpected failure, reported as `0006`
pub async fn internal_error() -> Result<ApiResponse<u16>, ApiError> {
    let port: u16 = "not-a-port".parse().context("Failed to parse upstream port")?;
    Ok(ApiResponse::ok_with(port))
}

/// GET /api/example/panic: a panicking handler, reported as `0006`
pub async fn panicking() -> ApiResponse<()> {
    panic!("handler panicked on purpose")
}

/// POST /api/example/validate
pub async fn validate(form: ValidatedJson<UserForm>) -> ApiResponse<RegisteredUser> {
    let form = form.into_inner();
    ApiResponse::ok_with(RegisteredUser {
        username: form.username,
        email: form.email,
    })
}

/// GET /api/example/search?keyword=..&page=..
pub async fn search(query: ValidatedQuery<SearchQuery>) -> ApiResponse<SearchResult> {
    let query = query.into_inner();
    let items = (1..=3)
        .map(|n| format!("{}-{}", query.keyword, (query.page - 1) * 3 + n))
        .collect();
    ApiResponse::ok_with(SearchResult {
        keyword: query.keyword,
        page: query.page,
        items,
    })
}

/// GET /api/example/lang: the negotiated locale
pub async fn lang() -> ApiResponse<LanguageInfo> {
    let locale = i18n::current_locale();
    ApiResponse::ok_with(LanguageInfo {
        locale: locale.locale(),
        language_tag: locale.language_tag(),
        name: locale.native_name(),
        message: i18n::message("demo.current.language", &[locale.native_name().to_string()]),
    })
}

/// GET /api/example/welcome?name=..
pub async fn welcome(query: web::Query<WelcomeQuery>) -> ApiResponse<String> {
    let name = query.into_inner().name.unwrap_or_else(|| "HSE".to_string());
    ApiResponse::ok_with(i18n::message("demo.welcome", &[name]))
}

/// GET /api/example/custom-message: a catalog key resolved directly
pub async fn custom_message() -> ApiResponse<String> {
    ApiResponse::ok_with(i18n::message(MessageCode::UserNotExist.key(), &[]))
}

/// GET /api/example/custom-message-with-params
pub async fn custom_message_with_params() -> ApiResponse<String> {
    ApiResponse::ok_with(i18n::message(
        MessageCode::ParamInvalid.key(),
        &["用户名".to_string()],
    ))
}
