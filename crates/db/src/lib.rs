//! PostgreSQL layer for term-keeper.
//!
//! Repositories and the term aggregation service take
//! `&mut sqlx::PgConnection` as their executor. Pass a pooled connection for
//! standalone statements or an open transaction to make a multi-step call
//! atomic; nothing in this crate begins or commits a transaction.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod term_query;

pub use error::RepoError;

pub type DbPool = sqlx::PgPool;

/// Executor handle accepted by every repository call.
pub type DbConn = sqlx::PgConnection;

/// Default pool size when `DB_MAX_CONNECTIONS` is not set.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
