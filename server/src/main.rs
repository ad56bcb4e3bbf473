use std::sync::Arc;

use anyhow::Context;
use api::auth::TokenKeys;
use api::repository::{PgNoteRepository, PgUserRepository};
use tracing_subscriber::EnvFilter;

use server::routes::router;
use server::settings::Settings;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new().context("failed to load settings")?;

    let pool = server::database::connect(&settings)
        .await
        .context("failed to connect to database")?;

    let keys = TokenKeys::new(&settings.auth.secret, settings.auth.ttl);
    let state = AppState::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgNoteRepository::new(pool)),
        keys,
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
