//! Validating extractors and extractor error handlers
//!
//! Malformed bodies and query strings are reported as validation failures
//! (`0007`) instead of actix's plain-text 400 responses.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::ApiError;

/// JSON body that passed its `validator` rules
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Query string that passed its `validator` rules
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

/// URL-encoded form body that passed its `validator` rules
#[derive(Debug)]
pub struct ValidatedForm<T>(pub T);

macro_rules! validated_extractor {
    ($name:ident, $inner:ty) => {
        impl<T> $name<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> Deref for $name<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }

        impl<T> FromRequest for $name<T>
        where
            T: DeserializeOwned + Validate + 'static,
        {
            type Error = actix_web::Error;
            type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
                let extract = <$inner>::from_request(req, payload);
                Box::pin(async move {
                    let value = extract.await?.into_inner();
                    value.validate().map_err(ApiError::from)?;
                    Ok($name(value))
                })
            }
        }
    };
}

validated_extractor!(ValidatedJson, web::Json<T>);
validated_extractor!(ValidatedQuery, web::Query<T>);
validated_extractor!(ValidatedForm, web::Form<T>);

/// JSON extractor settings; body errors become `0007`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

/// Query extractor settings; parse errors become `0007`
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

/// Form extractor settings; body errors become `0007`
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

/// Path extractor settings; segment parse errors become `0007`
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}
