use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use registrations::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use registrations::shell::config::AppConfig;
use registrations::shell::http::router;
use registrations::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryRegistrationStore::new());
    let app = router(AppState::new(config.minimum_age, store));

    tracing::info!(
        minimum_age = config.minimum_age,
        "Registration endpoint: http://{}/registration",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
