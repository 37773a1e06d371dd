pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod services;
pub mod submitter;
pub mod utils;
pub mod validation;

use crate::config::{Config, LoggingConfig, ServerConfig};
use crate::services::{LinkIssuerService, ReferralStore};
use axum::{Router, http::HeaderValue, middleware::from_fn};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub issuer: LinkIssuerService,
}

impl AppState {
    pub fn new(store: Arc<dyn ReferralStore>, config: &Config) -> Self {
        Self::with_code_length(store, config.referral_code_length)
    }

    pub fn with_code_length(store: Arc<dyn ReferralStore>, code_length: usize) -> Self {
        Self {
            issuer: LinkIssuerService::new(store, code_length),
        }
    }
}

/// Router with the CORS and request-tracking layers applied.
pub fn build_app(state: Arc<AppState>, server: &ServerConfig) -> Router {
    routes::create_router(state)
        .layer(cors_layer(&server.cors_origins))
        .layer(from_fn(middleware::request_tracking_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn init_tracing(config: &LoggingConfig) {
    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_max_level(level)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        }
    }
}
