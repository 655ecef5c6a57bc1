//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use hse_shared::JwtConfig;

use crate::domain::entities::{Claims, LoginUser};
use crate::errors::TokenError;

/// Extra claim carrying the numeric user id of a login token
pub const USER_ID_CLAIM: &str = "userId";

const MIN_SECRET_LEN: usize = 32;

/// Service for issuing and verifying JWT tokens
///
/// Built once at startup from [`JwtConfig`] and shared read-only
/// behind an `Arc`.
pub struct TokenService {
    algorithm: Algorithm,
    expiration_ms: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("expiration_ms", &self.expiration_ms)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret and token lifetime
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or [`TokenError::WeakSecret`] when the secret
    /// is shorter than 32 bytes
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        let secret = config.secret.as_bytes();
        let algorithm = algorithm_for(secret.len())?;

        if config.is_using_default_secret() {
            tracing::warn!(
                "JWT signing uses the built-in development secret; set JWT_SECRET before deploying"
            );
        }

        let mut validation = Validation::new(algorithm);
        validation.algorithms = accepted_algorithms(secret.len());
        // Expiry is compared by hand so that a token is rejected at its deadline
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        tracing::debug!(algorithm = ?algorithm, expiration_ms = config.expiration_ms, "Token service initialized");

        Ok(Self {
            algorithm,
            expiration_ms: config.expiration_ms,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn expiration_ms(&self) -> i64 {
        self.expiration_ms
    }

    /// Issues a token for `subject` valid for the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Map::new(), Utc::now())
    }

    /// Issues a token carrying additional claims
    ///
    /// Claims named `sub`, `iat`, `exp` or `exp_ms` are ignored.
    pub fn issue_with_claims(
        &self,
        subject: &str,
        claims: Map<String, Value>,
    ) -> Result<String, TokenError> {
        self.issue_at(subject, claims, Utc::now())
    }

    /// Issues a token as of `now`
    pub fn issue_at(
        &self,
        subject: &str,
        claims: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, now, self.expiration_ms, claims);
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Verifies signature then expiry and returns the claims
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        self.parse_at(token, Utc::now())
    }

    /// Verifies a token as of `now`
    pub fn parse_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(map_decode_error)?
            .claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Subject of a valid token
    pub fn subject(&self, token: &str) -> Result<String, TokenError> {
        self.parse(token).map(|claims| claims.sub)
    }

    /// Whether the token verifies; the failure cause is only logged
    pub fn validate(&self, token: &str) -> bool {
        match self.parse(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Token validation failed");
                false
            }
        }
    }

    /// Issues a login token for a user
    ///
    /// The username becomes the subject and the id travels in the
    /// [`USER_ID_CLAIM`] claim.
    pub fn login(&self, user_id: i64, username: &str) -> Result<LoginUser, TokenError> {
        self.login_at(user_id, username, Utc::now())
    }

    pub fn login_at(
        &self,
        user_id: i64,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<LoginUser, TokenError> {
        let mut extra = Map::new();
        extra.insert(USER_ID_CLAIM.to_string(), Value::from(user_id));

        let claims = Claims::new(username, now, self.expiration_ms, extra);
        let token = self.sign(&claims)?;

        Ok(LoginUser {
            user_id,
            username: claims.sub.clone(),
            token,
            login_time: claims.iat.saturating_mul(1000),
            expire_time: claims.deadline_ms(),
        })
    }

    /// Rebuilds the login user a valid login token was issued for
    pub fn login_user(&self, token: &str) -> Result<LoginUser, TokenError> {
        self.login_user_at(token, Utc::now())
    }

    pub fn login_user_at(&self, token: &str, now: DateTime<Utc>) -> Result<LoginUser, TokenError> {
        let claims = self.parse_at(token, now)?;
        let user_id = claims
            .claim(USER_ID_CLAIM)
            .and_then(Value::as_i64)
            .ok_or_else(|| TokenError::MissingClaim {
                claim: USER_ID_CLAIM.to_string(),
            })?;

        Ok(LoginUser {
            user_id,
            username: claims.sub.clone(),
            token: token.to_string(),
            login_time: claims.iat.saturating_mul(1000),
            expire_time: claims.deadline_ms(),
        })
    }
}

/// Strongest HMAC variant the secret length supports
fn algorithm_for(len: usize) -> Result<Algorithm, TokenError> {
    match len {
        n if n >= 64 => Ok(Algorithm::HS512),
        n if n >= 48 => Ok(Algorithm::HS384),
        n if n >= MIN_SECRET_LEN => Ok(Algorithm::HS256),
        n => Err(TokenError::WeakSecret { len: n }),
    }
}

/// Every HMAC variant whose minimum key length the secret meets
fn accepted_algorithms(len: usize) -> Vec<Algorithm> {
    [
        (Algorithm::HS256, MIN_SECRET_LEN),
        (Algorithm::HS384, 48),
        (Algorithm::HS512, 64),
    ]
    .into_iter()
    .filter(|(_, min)| len >= *min)
    .map(|(algorithm, _)| algorithm)
    .collect()
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
    match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
            claim: claim.clone(),
        },
        _ => TokenError::Malformed(e.to_string()),
    }
}
