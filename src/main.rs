mod config;
mod routes;

use config::{HostError, Settings};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pagbantay host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let settings = Settings::load()?;
    let app = routes::app(settings.leptos_options.clone());

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .map_err(|source| HostError::Bind { addr: settings.addr, source })?;

    tracing::info!(addr = %settings.addr, "pagbantay listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
