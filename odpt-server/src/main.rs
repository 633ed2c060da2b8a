use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use odpt_server::catalog::Catalog;
use odpt_server::config::AppConfig;
use odpt_server::odpt::OdptClient;
use odpt_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("odpt_server=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let client = OdptClient::new(config.odpt_config())?;

    // The pickers are unusable without a catalog, so fail fast.
    info!("fetching catalog...");
    let catalog = Catalog::load(&client).await?;

    let state = AppState::new(catalog, client);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("ODPT Train Delay Check listening on http://{}", config.bind_addr);
    info!("  GET  /                - Search page");
    info!("  GET  /search          - Search and render result");
    info!("  GET  /api/candidates  - Candidate stations and railways");
    info!("  POST /api/search      - Search (JSON)");
    info!("  GET  /health          - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
