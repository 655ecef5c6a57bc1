//! Common test utilities

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use serde_json::Value;

use hse_api::AppState;
use hse_shared::AppConfig;

pub fn test_state() -> AppState {
    AppState::from_config(&AppConfig::default()).expect("default config builds app state")
}

/// Call the service and decode the envelope
pub async fn call<S, R, B>(app: &S, req: R) -> (StatusCode, HeaderMap, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body: Value = test::read_body_json(resp).await;
    (status, headers, body)
}
