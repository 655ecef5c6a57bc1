//! Unit tests for the domain error hierarchy

use std::collections::HashSet;
use std::error::Error as StdError;

use hse_shared::MessageCode;

use crate::errors::{BaseError, ServiceError, TokenError};

#[test]
fn test_localized_error_takes_catalog_code() {
    let error = BaseError::from_code(MessageCode::DataNotExist);
    assert_eq!(error.code(), "0401");
    assert_eq!(error.message_code(), Some(MessageCode::DataNotExist));
    assert!(error.is_localized());
    assert!(error.args().is_empty());
    assert_eq!(error.message(), None);
    assert_eq!(error.to_string(), "message.data.not.exist");
}

#[test]
fn test_localized_error_keeps_arguments() {
    let error = ServiceError::with_args(MessageCode::ParamInvalid, ["用户名不能为空"]);
    assert_eq!(error.code(), "0007");
    assert_eq!(error.args(), ["用户名不能为空".to_string()]);

    let numeric = BaseError::with_args(MessageCode::DataInUse, [3, 4]);
    assert_eq!(numeric.args(), ["3".to_string(), "4".to_string()]);
}

#[test]
fn test_legacy_errors() {
    let generic = BaseError::new("something broke");
    assert_eq!(generic.code(), "0001");
    assert_eq!(generic.message(), Some("something broke"));
    assert_eq!(generic.message_code(), None);
    assert_eq!(generic.to_string(), "something broke");

    let coded = ServiceError::with_code("0999", "custom failure");
    assert_eq!(coded.code(), "0999");
    assert!(!coded.is_localized());
}

#[test]
fn test_equality_is_value_based_and_ignores_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
    let plain = BaseError::from_code(MessageCode::InternalError);
    let caused = BaseError::from_code_with_cause(MessageCode::InternalError, io);
    assert_eq!(plain, caused);

    assert_ne!(
        BaseError::with_args(MessageCode::ParamInvalid, ["a"]),
        BaseError::with_args(MessageCode::ParamInvalid, ["b"])
    );
    // No arguments and an empty argument list are distinct values
    assert_ne!(
        BaseError::from_code(MessageCode::ParamInvalid),
        BaseError::with_args(MessageCode::ParamInvalid, Vec::<String>::new())
    );

    let set: HashSet<_> = [
        ServiceError::from_code(MessageCode::DataNotExist),
        ServiceError::from_code(MessageCode::DataNotExist),
        ServiceError::new("x"),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_cause_is_exposed_as_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error = ServiceError::with_cause("load failed", io);
    assert_eq!(error.code(), "0001");
    let source = error.source().expect("cause should be the source");
    assert_eq!(source.to_string(), "missing file");

    assert!(BaseError::new("no cause").source().is_none());
}

#[test]
fn test_localized_cause_keeps_key_display_and_equality() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "redis timeout");
    let error = BaseError::from_code_with_cause(MessageCode::Fail, io);

    assert_eq!(error.to_string(), MessageCode::Fail.key());
    assert_eq!(error.source().map(|s| s.to_string()), Some("redis timeout".to_string()));
    assert_eq!(error, BaseError::from_code(MessageCode::Fail));
    assert!(error.clone().source().is_some());
}

#[test]
fn test_service_error_converts_to_base() {
    let service = ServiceError::with_args(MessageCode::DataInUse, ["order"]);
    let base: BaseError = service.clone().into();
    assert_eq!(base, service.into_base());
    assert_eq!(ServiceError::from(MessageCode::RoleNotExist).code(), "0302");
}

#[test]
fn test_token_error_codes() {
    assert_eq!(ServiceError::from(TokenError::Expired).code(), "0202");
    assert_eq!(ServiceError::from(TokenError::InvalidSignature).code(), "0201");
    assert_eq!(ServiceError::from(TokenError::Malformed("bad".into())).code(), "0201");
    assert_eq!(
        ServiceError::from(TokenError::MissingClaim { claim: "sub".into() }).code(),
        "0201"
    );
    assert_eq!(ServiceError::from(TokenError::WeakSecret { len: 4 }).code(), "0006");

    let error = ServiceError::from(TokenError::Expired);
    assert_eq!(error.source().map(|s| s.to_string()), Some("Token expired".to_string()));
    assert!(TokenError::Expired.is_verification_failure());
    assert!(!TokenError::Generation("x".into()).is_verification_failure());
}
