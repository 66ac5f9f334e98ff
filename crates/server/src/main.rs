mod config;
mod http;
mod state;

use adapter::{Console, HttpGateway, HttpGatewayConfig};
use anyhow::Context;
use domain::AdminSession;
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Settings;
use http::router::build_router;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new().context("Failed to load configuration")?;

    let gateway = HttpGateway::new(HttpGatewayConfig {
        base_url: settings.gateway.base_url.clone(),
        token: Some(settings.gateway.token.clone()).filter(|t| !t.is_empty()),
        timeout: Duration::from_secs(settings.gateway.timeout_secs),
    })
    .context("Failed to build backend gateway client")?;

    if settings.console.admin_user_id.is_empty() {
        warn!("console.admin_user_id is not set, admin avatar falls back to the default image");
    }
    let session = AdminSession::new(settings.console.admin_user_id.clone());

    let console = Arc::new(
        Console::new(Arc::new(gateway), session)
            .with_enrichment_concurrency(settings.console.enrichment_concurrency),
    );
    let load_error = Arc::new(RwLock::new(None));

    let console_for_load = console.clone();
    let load_error_for_load = load_error.clone();
    tokio::spawn(async move {
        info!("Loading console data from backend...");
        if let Err(e) = console_for_load.load().await {
            error!("Error fetching data: {}", e);
            *load_error_for_load.write().await = Some(e.to_string());
        }
    });

    let state = AppState {
        console,
        admin_token: settings.security.admin_token.clone(),
        load_error,
    };

    let app = build_router(state, &settings.server.cors_origins);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
