//! API response envelope

use serde::{Deserialize, Serialize};

use crate::i18n::{self, MessageResolver};
use crate::types::message_code::{MessageCode, FAIL_CODE, SUCCESS_CODE};
use crate::types::Language;

/// Uniform response wrapper `{code, msg, data, timestamp}`
///
/// `code == "0000"` is the only success outcome. Messages of the
/// catalog-based constructors are resolved in the ambient request locale
/// (see [`i18n::context`]); the `*_in` variants take the resolver and
/// locale explicitly. `data` is omitted from the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Four digit outcome code
    pub code: String,

    /// Display text for the outcome
    pub msg: String,

    /// Payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Construction time in epoch milliseconds
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn new(code: impl Into<String>, msg: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code.into(),
            msg: msg.into(),
            data,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Success without payload
    pub fn ok() -> Self {
        Self::success_with(MessageCode::Success, &[], None)
    }

    /// Success carrying `data`
    pub fn ok_with(data: T) -> Self {
        Self::success_with(MessageCode::Success, &[], Some(data))
    }

    /// Success whose message is the text of `code`
    ///
    /// The wire code stays `"0000"`.
    pub fn ok_code(code: MessageCode, data: T) -> Self {
        Self::success_with(code, &[], Some(data))
    }

    /// Like [`ok_code`](Self::ok_code) with message arguments
    pub fn ok_code_args(code: MessageCode, args: &[String], data: T) -> Self {
        Self::success_with(code, args, Some(data))
    }

    /// Generic failure `0001`
    pub fn fail() -> Self {
        Self::fail_code(MessageCode::Fail)
    }

    /// Failure with the code and text of a catalog entry
    pub fn fail_code(code: MessageCode) -> Self {
        Self::fail_args(code, &[])
    }

    /// Failure with the code of a catalog entry and interpolated text
    pub fn fail_args(code: MessageCode, args: &[String]) -> Self {
        Self::new(code.code(), i18n::message(code.key(), args), None)
    }

    /// Success with caller supplied text
    #[deprecated(note = "use ok_code with a MessageCode")]
    pub fn ok_msg(msg: impl Into<String>, data: T) -> Self {
        Self::new(SUCCESS_CODE, msg, Some(data))
    }

    /// Failure `0001` with caller supplied text
    #[deprecated(note = "use fail_code with a MessageCode")]
    pub fn fail_msg(msg: impl Into<String>) -> Self {
        Self::new(FAIL_CODE, msg, None)
    }

    /// Failure with caller supplied code and text
    pub fn fail_raw(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(code, msg, None)
    }

    /// Success resolved through an explicit resolver and locale
    pub fn ok_in(
        resolver: &MessageResolver,
        locale: Language,
        code: MessageCode,
        args: &[String],
        data: Option<T>,
    ) -> Self {
        Self::new(SUCCESS_CODE, resolver.code_message(code, args, locale), data)
    }

    /// Failure resolved through an explicit resolver and locale
    pub fn fail_in(
        resolver: &MessageResolver,
        locale: Language,
        code: MessageCode,
        args: &[String],
    ) -> Self {
        Self::new(code.code(), resolver.code_message(code, args, locale), None)
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            code: self.code,
            msg: self.msg,
            data: self.data.map(f),
            timestamp: self.timestamp,
        }
    }

    fn success_with(code: MessageCode, args: &[String], data: Option<T>) -> Self {
        Self::new(SUCCESS_CODE, i18n::message(code.key(), args), data)
    }
}

impl<T: Serialize> std::fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match crate::serialization::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "[{}] {}", self.code, self.msg),
        }
    }
}

#[cfg(feature = "web")]
mod web {
    use actix_web::body::BoxBody;
    use actix_web::http::header::ContentType;
    use actix_web::{HttpRequest, HttpResponse, Responder};
    use serde::Serialize;
    use tracing::error;

    use super::ApiResponse;
    use crate::serialization;
    use crate::types::MessageCode;

    /// Envelopes always travel with HTTP 200; the outcome is in `code`
    impl<T: Serialize> Responder for ApiResponse<T> {
        type Body = BoxBody;

        fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
            match serialization::to_vec_pretty(&self) {
                Ok(body) => HttpResponse::Ok()
                    .content_type(ContentType::json())
                    .body(body),
                Err(e) => {
                    error!("Failed to serialize response envelope: {}", e);
                    let fallback = ApiResponse::<()>::fail_code(MessageCode::InternalError);
                    match serialization::to_vec(&fallback) {
                        Ok(body) => HttpResponse::Ok()
                            .content_type(ContentType::json())
                            .body(body),
                        Err(_) => HttpResponse::InternalServerError().finish(),
                    }
                }
            }
        }
    }
}
