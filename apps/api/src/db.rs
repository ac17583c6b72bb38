use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL pool that connects on first use, so an unreachable
/// database degrades individual requests instead of blocking startup.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool configured (max_connections: {max_connections})");
    Ok(pool)
}
