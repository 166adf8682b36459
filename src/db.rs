//! Database module - PostgreSQL connection pool
//!
//! The `weather` table itself is owned by an external ingestion process;
//! this service only reads from it, so no schema setup happens here.

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Create database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
