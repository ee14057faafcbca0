use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Opens the shared pool and checks the server answers before any traffic is served.
pub async fn create_pool(dsn: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .connect(dsn)
        .await
        .context("failed to open database")?;

    ping(&pool).await?;

    tracing::info!("Database connection successful");
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("failed to ping database")?;

    Ok(())
}
