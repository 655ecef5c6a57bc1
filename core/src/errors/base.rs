//! Base domain error

use std::error::Error as StdError;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use hse_shared::types::message_code::FAIL_CODE;
use hse_shared::MessageCode;

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Application-raised failure carrying an outcome code
///
/// Two construction modes:
/// - localized: a [`MessageCode`] plus optional message arguments; the
///   display text is resolved from the bundles at the HTTP boundary
/// - legacy: free text with code `0001` or an explicit code
///
/// When a message code is present it takes precedence over the free text.
/// Equality and hashing cover code, message, message code and arguments;
/// the optional cause is ignored.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.display_message())]
pub struct BaseError {
    code: String,
    message: Option<String>,
    message_code: Option<MessageCode>,
    args: Option<Vec<String>>,
    #[source]
    cause: Option<Cause>,
}

impl BaseError {
    /// Localized error for a catalog entry
    pub fn from_code(message_code: MessageCode) -> Self {
        Self {
            code: message_code.code().to_string(),
            message: None,
            message_code: Some(message_code),
            args: None,
            cause: None,
        }
    }

    /// Localized error whose text interpolates `args`
    pub fn with_args<I, S>(message_code: MessageCode, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            args: Some(args.into_iter().map(|arg| arg.to_string()).collect()),
            ..Self::from_code(message_code)
        }
    }

    /// Free-text error with the generic failure code `0001`
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code(FAIL_CODE, message)
    }

    /// Free-text error with an explicit code
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: Some(message.into()),
            message_code: None,
            args: None,
            cause: None,
        }
    }

    /// Attach the underlying failure; exposed through [`StdError::source`]
    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Free-text `0001` error wrapping `cause`
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::new(message).caused_by(cause)
    }

    /// Localized error wrapping `cause`
    pub fn from_code_with_cause<E>(message_code: MessageCode, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_code(message_code).caused_by(cause)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Free text of a legacy error
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn message_code(&self) -> Option<MessageCode> {
        self.message_code
    }

    /// Message arguments, empty when none were supplied
    pub fn args(&self) -> &[String] {
        self.args.as_deref().unwrap_or_default()
    }

    pub fn is_localized(&self) -> bool {
        self.message_code.is_some()
    }

    /// Bundle key of a localized error, otherwise its free text
    pub fn display_message(&self) -> &str {
        match (self.message_code, &self.message) {
            (Some(message_code), _) => message_code.key(),
            (None, Some(message)) => message.as_str(),
            (None, None) => "",
        }
    }
}

impl PartialEq for BaseError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.message_code == other.message_code
            && self.args == other.args
    }
}

impl Eq for BaseError {}

impl Hash for BaseError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.message.hash(state);
        self.message_code.hash(state);
        self.args.hash(state);
    }
}

impl From<MessageCode> for BaseError {
    fn from(message_code: MessageCode) -> Self {
        Self::from_code(message_code)
    }
}
