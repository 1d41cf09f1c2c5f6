use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness check
#[utoipa::path(
    get,
    path = "/api",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
