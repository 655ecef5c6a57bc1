//! Expected business failures

use std::error::Error as StdError;
use std::ops::Deref;

use hse_shared::MessageCode;
use thiserror::Error;

use super::BaseError;

/// Business failure raised by service code
///
/// Same capabilities and construction modes as [`BaseError`]; the separate
/// type lets callers tell an expected business outcome from a framework
/// level error. The HTTP boundary renders both identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error(transparent)]
pub struct ServiceError(BaseError);

impl ServiceError {
    pub fn from_code(message_code: MessageCode) -> Self {
        Self(BaseError::from_code(message_code))
    }

    pub fn with_args<I, S>(message_code: MessageCode, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self(BaseError::with_args(message_code, args))
    }

    pub fn new(message: impl Into<String>) -> Self {
        Self(BaseError::new(message))
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self(BaseError::with_code(code, message))
    }

    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(BaseError::with_cause(message, cause))
    }

    pub fn from_code_with_cause<E>(message_code: MessageCode, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(BaseError::from_code_with_cause(message_code, cause))
    }

    pub fn caused_by<E>(self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(self.0.caused_by(cause))
    }

    pub fn into_base(self) -> BaseError {
        self.0
    }
}

impl Deref for ServiceError {
    type Target = BaseError;

    fn deref(&self) -> &BaseError {
        &self.0
    }
}

impl From<MessageCode> for ServiceError {
    fn from(message_code: MessageCode) -> Self {
        Self::from_code(message_code)
    }
}

impl From<BaseError> for ServiceError {
    fn from(error: BaseError) -> Self {
        Self(error)
    }
}

impl From<ServiceError> for BaseError {
    fn from(error: ServiceError) -> Self {
        error.0
    }
}

/// Result of service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
