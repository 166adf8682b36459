//! Weather store - scoped database access
//!
//! One connection is acquired per fetch and released on every exit path,
//! success or failure. Acquisition failure is reported before any query
//! is attempted.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::WeatherRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Unavailable(String),

    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),
}

#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// Fetch the weather record for a city key, if one exists.
    async fn fetch(&self, city: &str) -> Result<Option<WeatherRecord>, StoreError>;
}

/// PostgreSQL-backed store.
pub struct PgWeatherStore {
    pool: PgPool,
}

impl PgWeatherStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeatherStore for PgWeatherStore {
    async fn fetch(&self, city: &str) -> Result<Option<WeatherRecord>, StoreError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let record = WeatherRecord::find_by_city(&mut conn, city).await?;
        Ok(record)
    }
}
