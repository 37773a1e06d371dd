use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// 请求ID头部名称
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const SLOW_REQUEST_MS: u128 = 1000;

/// 请求追踪中间件
/// Tags every request with an id (reused from the caller when present), echoes
/// it on the response and logs the outcome.
pub async fn request_tracking_middleware<B>(
    mut request: Request<B>,
    next: Next<B>,
) -> Response {
    let start_time = Instant::now();
    let request_id = get_or_generate_request_id(request.headers());
    let header_value =
        HeaderValue::from_str(&request_id).unwrap_or_else(|_| HeaderValue::from_static("invalid"));

    request
        .headers_mut()
        .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value.clone());

    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut response = next.run(request).await;

    let duration_ms = start_time.elapsed().as_millis();
    response
        .headers_mut()
        .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);

    let status = response.status();
    if status.is_server_error() || status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            duration_ms = %duration_ms,
            "Request completed with error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    if duration_ms > SLOW_REQUEST_MS {
        warn!(
            request_id = %request_id,
            uri = %uri,
            duration_ms = %duration_ms,
            "Slow request detected"
        );
    }

    response
}

fn get_or_generate_request_id(headers: &HeaderMap) -> String {
    extract_request_id(headers).unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// 从请求头中提取请求ID的辅助函数
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
