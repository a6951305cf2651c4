use crate::{config::DatabaseConfig, error::Result};
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;

    tracing::info!(
        "Database connection established to {}:{}/{} with {} max connections",
        config.host,
        config.port,
        config.name,
        config.max_connections
    );

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Creates the `users` and `products` tables when they are missing.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!().run(pool).await?;

    tracing::info!("All tables are ready");

    Ok(())
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
