pub mod health;
pub mod send_link;

use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/send-link", post(send_link::send_link))
        .route("/health", get(health::health))
        .with_state(state)
}
