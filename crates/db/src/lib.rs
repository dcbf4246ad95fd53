//! Postgres access for SchoolSync: pool construction, schema bootstrap,
//! and one repository module per table.

pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Connects a small fixed-size pool. The service is single-operator, so
/// five connections is plenty.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    tracing::debug!("Connected to database");

    Ok(pool)
}
