#![recursion_limit = "256"]

mod config;
mod inference;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("inference probe: {0}")]
    Probe(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    let state = state::AppState::new(config)?;
    tracing::info!(
        predict_url = %state.config.predict_url,
        health_url = %state.probe.health_url(),
        timeout_secs = state.config.inference_timeout.as_secs(),
        "inference endpoint configured"
    );

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "objectdetect listening");
    axum::serve(listener, app).await?;
    Ok(())
}
