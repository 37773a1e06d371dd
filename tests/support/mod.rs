// Shared fakes and a throwaway server for the test suite
#![allow(dead_code)]

use async_trait::async_trait;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use doctor_invite::{
    AppState, build_app,
    config::ServerConfig,
    db::models::{
        api::{SendLinkRequest, SendLinkResponse},
        sent_link::{NewSentLink, SentLink},
    },
    error::{AppError, AppResult},
    services::{ReferralStore, referral_code::DEFAULT_REFERRAL_CODE_LENGTH},
    submitter::LinkIssuer,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory stand-in for the `sent_links` table.
#[derive(Default)]
pub struct FakeStore {
    records: Mutex<Vec<NewSentLink>>,
    fail_with: Option<String>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        })
    }

    pub fn records(&self) -> Vec<NewSentLink> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReferralStore for FakeStore {
    async fn insert(&self, new_link: NewSentLink) -> AppResult<SentLink> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::Unknown,
                Box::new(message.clone()),
            )));
        }

        self.records.lock().unwrap().push(new_link.clone());
        Ok(SentLink {
            id: Uuid::new_v4(),
            doctor_name: new_link.doctor_name,
            phone_number: new_link.phone_number,
            referral_code: new_link.referral_code,
            created_at: chrono::Utc::now(),
        })
    }
}

/// Issuer that records every request and fails with a transport error for
/// the configured phone numbers.
#[derive(Default)]
pub struct RecordingIssuer {
    requests: Mutex<Vec<SendLinkRequest>>,
    unreachable_for: HashSet<String>,
}

impl RecordingIssuer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn unreachable_for(phones: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            unreachable_for: phones.iter().map(|p| p.to_string()).collect(),
        })
    }

    pub fn requested_phones(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.phone_number.clone())
            .collect()
    }
}

#[async_trait]
impl LinkIssuer for RecordingIssuer {
    async fn send_link(&self, req: &SendLinkRequest) -> AppResult<SendLinkResponse> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(req.clone());

        let phone = req.phone_number.clone().unwrap_or_default();
        if self.unreachable_for.contains(&phone) {
            return Err(AppError::network("connection refused"));
        }
        Ok(SendLinkResponse::issued(format!("/visit/test?ref=code{}", requests.len())))
    }
}

/// Starts the full app on an ephemeral port and returns its base URL.
pub async fn spawn_server(store: Arc<dyn ReferralStore>) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind test port");
    let addr = listener.local_addr().expect("Failed to read local address");

    let state = Arc::new(AppState::with_code_length(store, DEFAULT_REFERRAL_CODE_LENGTH));
    let server_config = ServerConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        cors_origins: vec!["*".to_string()],
    };
    let app = build_app(state, &server_config);

    let server = axum::Server::from_tcp(listener)
        .expect("Failed to create server")
        .serve(app.into_make_service());
    tokio::spawn(async move {
        server.await.expect("Server error");
    });

    format!("http://{}", addr)
}

pub fn is_referral_code(code: &str, length: usize) -> bool {
    code.len() == length && code.chars().all(|c| c.is_ascii_alphanumeric())
}
