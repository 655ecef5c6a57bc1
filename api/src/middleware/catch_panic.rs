//! Innermost guard that keeps every failure inside the envelope contract
//!
//! A panicking handler becomes a `0006` envelope, and an error that an
//! inner service returns instead of a response is rendered while the
//! request locale is still in scope. Errors that are not an [`ApiError`]
//! are rendered as a runtime failure.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::future::{ready, Ready};

use crate::handlers::ApiError;

/// Panic guard middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchPanic;

impl<S, B> Transform<S, ServiceRequest> for CatchPanic
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CatchPanicMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchPanicMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct CatchPanicMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CatchPanicMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request = req.request().clone();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let outcome = AssertUnwindSafe(service.call(req)).catch_unwind().await;

            let response = match outcome {
                Ok(Ok(res)) => return Ok(res.map_into_left_body()),
                Ok(Err(e)) => match e.as_error::<ApiError>() {
                    Some(api_error) => api_error.error_response(),
                    None => ApiError::Runtime(anyhow::anyhow!("{}", e)).error_response(),
                },
                Err(panic) => ApiError::Panic(panic_message(panic.as_ref())).error_response(),
            };

            Ok(ServiceResponse::new(request, response).map_into_right_body())
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_foreign_error_becomes_runtime_envelope() {
        let app = test::init_service(App::new().wrap(CatchPanic).route(
            "/fail",
            web::get().to(|| async {
                Err::<HttpResponse, _>(actix_web::error::ErrorBadRequest("plain text failure"))
            }),
        ))
        .await;

        let req = test::TestRequest::get().uri("/fail").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "0006");
        assert!(!body.to_string().contains("plain text failure"));
    }

    #[actix_web::test]
    async fn test_api_error_keeps_its_code() {
        let app = test::init_service(App::new().wrap(CatchPanic).route(
            "/missing",
            web::get().to(|| async {
                Err::<HttpResponse, _>(ApiError::from(hse_shared::MessageCode::DataNotExist))
            }),
        ))
        .await;

        let req = test::TestRequest::get().uri("/missing").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], "0401");
    }

    #[::std::prelude::v1::test]
    fn test_panic_message_from_payload() {
        let boxed: Box<dyn Any + Send> = Box::new("static text");
        assert_eq!(panic_message(boxed.as_ref()), "static text");

        let boxed: Box<dyn Any + Send> = Box::new(format!("formatted {}", 7));
        assert_eq!(panic_message(boxed.as_ref()), "formatted 7");

        let boxed: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}
