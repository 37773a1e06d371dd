use async_trait::async_trait;
use tokio::task;

use crate::{
    db::{
        DbPool,
        models::sent_link::{NewSentLink, SentLink},
        repositories::SentLinksRepo,
    },
    error::{AppError, AppResult},
};

/// Insert-only sink for issued referral records.
#[async_trait]
pub trait ReferralStore: Send + Sync {
    async fn insert(&self, new_link: NewSentLink) -> AppResult<SentLink>;
}

/// Postgres-backed store. Diesel is blocking, so each insert runs on the
/// blocking pool with its own pooled connection.
#[derive(Clone)]
pub struct PgReferralStore {
    pool: DbPool,
}

impl PgReferralStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferralStore for PgReferralStore {
    async fn insert(&self, new_link: NewSentLink) -> AppResult<SentLink> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || -> AppResult<SentLink> {
            let mut conn = pool.get()?;
            let record = SentLinksRepo::insert(&mut conn, &new_link)?;
            Ok(record)
        })
        .await
        .map_err(|e| AppError::internal(format!("Insert task failed: {}", e)))?
    }
}
