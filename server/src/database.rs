//! PostgreSQL connection pool and schema migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::settings::Settings;

/// Connect to the database and bring the schema up to date.
pub async fn connect(settings: &Settings) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database.url())
        .await?;

    sqlx::migrate!("../api/migrations").run(&pool).await?;

    Ok(pool)
}
