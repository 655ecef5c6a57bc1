use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use hse_shared::serialization::{self, datetime};
use hse_shared::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(with = "datetime")]
    pub timestamp: DateTime<FixedOffset>,
}

/// Handler for GET /health
pub async fn health_check() -> ApiResponse<HealthStatus> {
    ApiResponse::ok_with(HealthStatus {
        status: "UP",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: serialization::now_local(),
    })
}
