//! Token-related error types

use hse_shared::MessageCode;
use thiserror::Error;

use super::ServiceError;

/// Token issuing and verification failures
///
/// Callers that only need validity use
/// [`TokenService::validate`](crate::services::token::TokenService::validate);
/// the variants exist for logging and for choosing between the expired and
/// invalid codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Signing secret too short: {len} bytes, at least 32 required")]
    WeakSecret { len: usize },

    #[error("Token generation failed: {0}")]
    Generation(String),
}

impl TokenError {
    /// Outcome code reported to clients
    pub fn message_code(&self) -> MessageCode {
        match self {
            TokenError::Expired => MessageCode::TokenExpired,
            TokenError::InvalidSignature
            | TokenError::Malformed(_)
            | TokenError::MissingClaim { .. } => MessageCode::TokenInvalid,
            TokenError::WeakSecret { .. } | TokenError::Generation(_) => MessageCode::InternalError,
        }
    }

    /// Whether the failure came from verifying a client supplied token
    pub fn is_verification_failure(&self) -> bool {
        !matches!(self, TokenError::WeakSecret { .. } | TokenError::Generation(_))
    }
}

impl From<TokenError> for ServiceError {
    fn from(error: TokenError) -> Self {
        ServiceError::from_code_with_cause(error.message_code(), error)
    }
}
