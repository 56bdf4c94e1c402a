mod config;
mod routes;
mod state;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Router(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "asopadel host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = HostConfig::from_env()?;
    let state = state::HostState::new(&config)?;
    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api"),
        None => tracing::info!("API_UPSTREAM_URL unset; /api forwarding disabled"),
    }

    let app = routes::app(state).map_err(StartupError::Router)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "asopadel listening");
    axum::serve(listener, app).await?;
    Ok(())
}
