//! Boundary error type and its mapping to the response envelope
//!
//! Handlers return `Result<ApiResponse<T>, ApiError>`. Whatever reaches
//! actix as an [`ApiError`] is logged once and rendered by [`map_error`];
//! the HTTP status is always 200 with the outcome carried in `code`.

use std::error::Error as StdError;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;
use validator::{ValidationErrors, ValidationErrorsKind};

use hse_core::errors::{BaseError, ServiceError, TokenError};
use hse_shared::i18n::{self, MessageResolver};
use hse_shared::{serialization, ApiResponse, Language, MessageCode};

/// Every failure a handler can hand to the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Base(#[from] BaseError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Field messages in a stable order
    #[error("Parameter validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Runtime(#[from] anyhow::Error),

    #[error("Handler panicked: {0}")]
    Panic(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(vec![message.into()])
    }

    fn domain(&self) -> Option<&BaseError> {
        match self {
            ApiError::Base(e) => Some(e),
            ApiError::Service(e) => Some(&**e),
            _ => None,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Base(_) | ApiError::Service(_) => {
                let domain = self.domain();
                error!(
                    code = domain.map(BaseError::code),
                    cause = ?self.source(),
                    "Business exception: {}",
                    self
                );
            }
            ApiError::Validation(messages) => {
                error!("Parameter validation failed: {}", messages.join(", "));
            }
            ApiError::Runtime(e) => error!("Runtime exception: {:?}", e),
            ApiError::Panic(message) => error!("Handler panicked: {}", message),
        }
    }
}

impl From<MessageCode> for ApiError {
    fn from(code: MessageCode) -> Self {
        ApiError::Service(ServiceError::from_code(code))
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::Service(error.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        ApiError::Validation(fields.into_iter().map(|(_, message)| message).collect())
    }
}

/// Flatten nested validation errors into `(path, message)` pairs
fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for field_error in field_errors {
                    let message = field_error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{}: {}", path, field_error.code));
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

/// Envelope for `error` in `locale`
///
/// First match wins:
/// 1. domain error with a message code: its code and localized text
/// 2. domain error without one: its code and free text
/// 3. validation failure: `0007` with the joined field messages
/// 4. runtime error or panic: `0006`, no detail
pub fn map_error(error: &ApiError, resolver: &MessageResolver, locale: Language) -> ApiResponse<()> {
    match error {
        ApiError::Base(_) | ApiError::Service(_) => match error.domain() {
            Some(domain) => match domain.message_code() {
                Some(code) => ApiResponse::fail_in(resolver, locale, code, domain.args()),
                None => ApiResponse::fail_raw(domain.code(), domain.message().unwrap_or_default()),
            },
            None => internal_error(resolver, locale),
        },
        ApiError::Validation(messages) => ApiResponse::fail_in(
            resolver,
            locale,
            MessageCode::ParamInvalid,
            &[messages.join(", ")],
        ),
        ApiError::Runtime(_) | ApiError::Panic(_) => internal_error(resolver, locale),
    }
}

fn internal_error(resolver: &MessageResolver, locale: Language) -> ApiResponse<()> {
    ApiResponse::fail_in(resolver, locale, MessageCode::InternalError, &[])
}

/// HTTP 200 response carrying `envelope` in the JSON policy
pub fn envelope_response(envelope: &ApiResponse<()>) -> HttpResponse {
    match serialization::to_vec_pretty(envelope) {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::json()).body(body),
        Err(e) => {
            error!("Failed to serialize error envelope: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        self.log();

        let envelope = match i18n::context::current() {
            Some(context) => map_error(self, &context.resolver, context.locale),
            None => map_error(self, &MessageResolver::unconfigured(), Language::default()),
        };
        envelope_response(&envelope)
    }
}
