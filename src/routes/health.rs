use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::db::models::api::HealthResponse;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
