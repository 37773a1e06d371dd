use crate::db::models::api::SendLinkResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Format error: {message}")]
    Format { message: String },

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Format { .. } | AppError::Csv(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Network(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of a failed [`SendLinkResponse`].
    ///
    /// Store failures are surfaced verbatim so the operator sees what the
    /// database reported.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation { message } | AppError::Format { message } => message.clone(),
            AppError::Database(e) => e.to_string(),
            AppError::Pool(e) => e.to_string(),
            AppError::Network(_) => "Network error".to_string(),
            AppError::Csv(e) => e.to_string(),
            AppError::Config(message) | AppError::Internal(message) => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(SendLinkResponse::failure(self.client_message()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
