//! Message code catalog
//!
//! Every business outcome is identified by a four digit code `MMNN`
//! (module, sequence) paired with the bundle key of its display text:
//! - `00` generic
//! - `01` user
//! - `02` authentication
//! - `03` permission
//! - `04` data

use serde::{Serialize, Serializer};

/// Code of the one and only success outcome
pub const SUCCESS_CODE: &str = "0000";

/// Code assigned to free-text failures that carry no explicit code
pub const FAIL_CODE: &str = "0001";

macro_rules! message_codes {
    ($($variant:ident => ($code:literal, $key:literal)),+ $(,)?) => {
        /// Closed set of message codes
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageCode {
            $($variant),+
        }

        impl MessageCode {
            /// Every catalog entry in declaration order
            pub const ALL: &'static [MessageCode] = &[$(MessageCode::$variant),+];

            /// Wire code, e.g. `"0401"`
            pub const fn code(&self) -> &'static str {
                match self {
                    $(MessageCode::$variant => $code),+
                }
            }

            /// Bundle key of the display text, e.g. `"message.data.not.exist"`
            pub const fn key(&self) -> &'static str {
                match self {
                    $(MessageCode::$variant => $key),+
                }
            }
        }
    };
}

message_codes! {
    Success => ("0000", "message.success"),
    Fail => ("0001", "message.fail"),
    BadRequest => ("0002", "message.bad.request"),
    Unauthorized => ("0003", "message.unauthorized"),
    Forbidden => ("0004", "message.forbidden"),
    NotFound => ("0005", "message.not.found"),
    InternalError => ("0006", "message.internal.error"),
    ParamInvalid => ("0007", "message.param.invalid"),
    ParamMissing => ("0008", "message.param.missing"),

    UserNotExist => ("0101", "message.user.not.exist"),
    UserDisabled => ("0102", "message.user.disabled"),
    UserPasswordError => ("0103", "message.user.password.error"),
    UserAlreadyExist => ("0104", "message.user.already.exist"),

    TokenInvalid => ("0201", "message.token.invalid"),
    TokenExpired => ("0202", "message.token.expired"),
    TokenMissing => ("0203", "message.token.missing"),
    LoginFail => ("0204", "message.login.fail"),
    LogoutSuccess => ("0205", "message.logout.success"),

    PermissionDenied => ("0301", "message.permission.denied"),
    RoleNotExist => ("0302", "message.role.not.exist"),

    DataNotExist => ("0401", "message.data.not.exist"),
    DataAlreadyExist => ("0402", "message.data.already.exist"),
    DataInUse => ("0403", "message.data.in.use"),
}

impl MessageCode {
    /// Look up the catalog entry for a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.code() == code)
    }

    /// Look up the catalog entry for a bundle key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.key() == key)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MessageCode::Success)
    }

    /// Two digit module prefix of the code
    pub fn module(&self) -> &'static str {
        &self.code()[..2]
    }
}

impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.key())
    }
}

impl Serialize for MessageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
