pub mod phone;
pub mod send_link;

use axum::{
    async_trait,
    body::Bytes,
    extract::FromRequest,
    http::Request,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// 验证的 JSON 提取器
///
/// Rejects with [`AppError::Validation`], so a bad body is answered with the
/// same `{success:false, error}` shape as every other failure. The body is
/// parsed as JSON whatever its `Content-Type` says.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid JSON format"))?;
        let value: T = serde_json::from_slice(&body)
            .map_err(|_| AppError::validation("Invalid JSON format"))?;

        value.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|field_errors| field_errors.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Validation failed".to_string());

            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}
