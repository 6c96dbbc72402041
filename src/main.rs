use std::sync::Arc;

use anyhow::Context;
use fc_webhook::app_state::build_app_state;
use fc_webhook::config::AppConfig;
use fc_webhook::core::client::fc_client::FcClient;
use fc_webhook::core::logging::init_tracing;
use fc_webhook::routes::app_router;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {e}");
        }
    }

    let cfg = AppConfig::from_env().context("not enough parameters")?;
    let _log_guard = init_tracing(cfg.log_dir.as_deref());

    info!(
        "Starting fc-webhook {} for region {} (image references: {:?})",
        fc_webhook::build_info::VERSION,
        cfg.provider.region,
        cfg.image_reference
    );

    let provider = Arc::new(FcClient::new(&cfg.provider).context("failed to build FC client")?);
    let state = build_app_state(&cfg, provider);
    let app = app_router(state, &cfg.mount_path);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    info!(
        "Listening on {} (mount path '{}')",
        cfg.bind_addr,
        if cfg.mount_path.is_empty() { "/" } else { &cfg.mount_path }
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
