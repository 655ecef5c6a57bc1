//! Unit tests for token service

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map};

use hse_shared::JwtConfig;

use crate::errors::TokenError;
use crate::services::token::{TokenService, USER_ID_CLAIM};

const SECRET_64: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

fn create_service(ttl_ms: i64) -> TokenService {
    TokenService::new(&JwtConfig::new(SECRET_64).with_expiration_ms(ttl_ms)).unwrap()
}

#[test]
fn test_algorithm_follows_secret_length() {
    let hs256 = TokenService::new(&JwtConfig::new("a".repeat(32))).unwrap();
    let hs384 = TokenService::new(&JwtConfig::new("a".repeat(48))).unwrap();
    let hs512 = TokenService::new(&JwtConfig::new("a".repeat(64))).unwrap();
    let default = TokenService::new(&JwtConfig::default()).unwrap();

    assert_eq!(hs256.algorithm(), Algorithm::HS256);
    assert_eq!(hs384.algorithm(), Algorithm::HS384);
    assert_eq!(hs512.algorithm(), Algorithm::HS512);
    assert_eq!(default.algorithm(), Algorithm::HS384);
}

#[test]
fn test_short_secret_rejected() {
    let result = TokenService::new(&JwtConfig::new("too-short"));
    assert_eq!(result.unwrap_err(), TokenError::WeakSecret { len: 9 });
}

#[test]
fn test_issue_and_parse_round_trip() {
    let service = create_service(86_400_000);
    let token = service.issue("alice").unwrap();

    let claims = service.parse(&token).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.exp - claims.iat, 86_400);
    assert!(claims.extra.is_empty());

    assert_eq!(service.subject(&token).unwrap(), "alice");
    assert!(service.validate(&token));
}

#[test]
fn test_custom_claims_survive_and_reserved_are_ignored() {
    let service = create_service(60_000);
    let mut claims = Map::new();
    claims.insert("role".to_string(), json!("admin"));
    claims.insert("sub".to_string(), json!("mallory"));

    let token = service.issue_with_claims("alice", claims).unwrap();
    let parsed = service.parse(&token).unwrap();

    assert_eq!(parsed.sub, "alice");
    assert_eq!(parsed.claim("role"), Some(&json!("admin")));
    assert!(parsed.claim("sub").is_none());
}

#[test]
fn test_token_valid_until_expiry_instant() {
    let service = create_service(60_000);
    let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let token = service.issue_at("alice", Map::new(), issued).unwrap();

    assert!(service.parse_at(&token, issued).is_ok());
    assert!(service
        .parse_at(&token, issued + Duration::milliseconds(59_999))
        .is_ok());
    assert_eq!(
        service.parse_at(&token, issued + Duration::seconds(60)),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_sub_second_issue_keeps_full_lifetime() {
    let service = create_service(1_000);
    let second = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    let issued = second + Duration::milliseconds(900);
    let token = service.issue_at("alice", Map::new(), issued).unwrap();

    assert!(service
        .parse_at(&token, second + Duration::milliseconds(1_500))
        .is_ok());
    assert!(service
        .parse_at(&token, second + Duration::milliseconds(1_899))
        .is_ok());
    assert_eq!(
        service.parse_at(&token, second + Duration::milliseconds(1_900)),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_login_expire_time_is_millisecond_deadline() {
    let service = create_service(1_000);
    let issued = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap() + Duration::milliseconds(900);

    let user = service.login_at(7, "alice", issued).unwrap();
    assert_eq!(user.expire_time, issued.timestamp_millis() + 1_000);
    assert!(!user.is_expired_at(issued.timestamp_millis() + 999));
}

#[test]
fn test_huge_lifetime_does_not_overflow() {
    let service = create_service(i64::MAX);
    let token = service.issue("alice").unwrap();

    assert!(service.validate(&token));
}

#[test]
fn test_expired_token_fails_validation() {
    let service = create_service(1_000);
    let token = service
        .issue_at("alice", Map::new(), Utc::now() - Duration::hours(1))
        .unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::Expired));
    assert!(!service.validate(&token));
}

#[test]
fn test_tampered_token_rejected() {
    let service = create_service(60_000);
    let token = service.issue("alice").unwrap();

    let (head, signature) = token.rsplit_once('.').unwrap();
    let flipped = if signature.starts_with('A') { 'B' } else { 'A' };
    let tampered = format!("{}.{}{}", head, flipped, &signature[1..]);

    assert_eq!(service.parse(&tampered), Err(TokenError::InvalidSignature));
    assert!(!service.validate(&tampered));
}

#[test]
fn test_token_from_other_secret_rejected() {
    let service = create_service(60_000);
    let other = TokenService::new(&JwtConfig::new("z".repeat(64))).unwrap();
    let token = other.issue("alice").unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_malformed_token_rejected() {
    let service = create_service(60_000);

    let error = service.parse("not-a-token").unwrap_err();
    assert!(matches!(error, TokenError::Malformed(_)));
    assert!(!service.validate(""));
}

#[test]
fn test_weaker_hmac_with_same_secret_accepted() {
    let service = create_service(60_000);
    let exp = Utc::now().timestamp() + 60;
    let token = encode(
        &Header::new(Algorithm::HS256),
        &json!({ "sub": "alice", "iat": exp - 60, "exp": exp }),
        &EncodingKey::from_secret(SECRET_64.as_bytes()),
    )
    .unwrap();

    assert_eq!(service.subject(&token).unwrap(), "alice");
}

#[test]
fn test_missing_subject_rejected() {
    let service = create_service(60_000);
    let exp = Utc::now().timestamp() + 60;
    let token = encode(
        &Header::new(Algorithm::HS512),
        &json!({ "iat": exp - 60, "exp": exp }),
        &EncodingKey::from_secret(SECRET_64.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        service.parse(&token),
        Err(TokenError::MissingClaim {
            claim: "sub".to_string()
        })
    );
}

#[test]
fn test_login_round_trip() {
    let service = create_service(3_600_000);
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let user = service.login_at(1001, "alice", now).unwrap();
    assert_eq!(user.user_id, 1001);
    assert_eq!(user.username, "alice");
    assert_eq!(user.login_time, now.timestamp_millis());
    assert_eq!(user.expire_time - user.login_time, 3_600_000);

    let restored = service
        .login_user_at(&user.token, now + Duration::minutes(30))
        .unwrap();
    assert_eq!(restored, user);
}

#[test]
fn test_login_user_requires_user_id_claim() {
    let service = create_service(60_000);
    let token = service.issue("alice").unwrap();

    assert_eq!(
        service.login_user(&token),
        Err(TokenError::MissingClaim {
            claim: USER_ID_CLAIM.to_string()
        })
    );
}

#[test]
fn test_token_error_becomes_service_error() {
    let service = create_service(60_000);
    let error: crate::errors::ServiceError = service.parse("garbage").unwrap_err().into();

    assert_eq!(error.code(), "0201");
    assert!(std::error::Error::source(&error).is_some());
}
