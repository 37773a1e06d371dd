pub mod models;
pub mod repositories;

use diesel::PgConnection;
use diesel::r2d2::{self, ConnectionManager as DbConnectionManager};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::AppResult;

pub type DbPool = r2d2::Pool<DbConnectionManager<PgConnection>>;

pub fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let manager = DbConnectionManager::<PgConnection>::new(&config.url);
    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)?;
    Ok(pool)
}
