use crate::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::db::models::api::{SendLinkRequest, SendLinkResponse};
use crate::validation::ValidatedJson;

/// 生成推荐链接并记录
///
/// 200 `{success, link}`, 400 on missing fields, 500 with the store's message.
pub async fn send_link(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<SendLinkRequest>,
) -> impl IntoResponse {
    match state.issuer.issue(&payload).await {
        Ok(issued) => {
            let response = SendLinkResponse::issued(issued.link);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
