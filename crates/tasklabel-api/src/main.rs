//! tasklabel-api binary entry point.

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasklabel_api::{router, AppState, LogConfig, LogFormat, ServerConfig};
use tasklabel_core::defaults;
use tasklabel_store::Stores;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    let _file_guard = init_tracing(&config.log);

    info!(
        log_format = config.log.format.as_str(),
        log_file = %config
            .log
            .file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(stdout)".to_string()),
        "Logging initialized"
    );

    if !config.paths.settings_file.exists() {
        warn!(
            path = %config.paths.settings_file.display(),
            "Settings file not found; dropdown and add-category requests will fail until it exists"
        );
    }
    if !config.paths.training_dir.is_dir() {
        warn!(
            path = %config.paths.training_dir.display(),
            "Training directory not found; summary requests will fail until it exists"
        );
    }

    let stores = Stores::open(&config.paths);
    let app = router(
        AppState::new(stores),
        &config.static_dir,
        config.max_body_bytes,
    );

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    info!(
        settings = %config.paths.settings_file.display(),
        classifications = %config.paths.classifications_file.display(),
        training_dir = %config.paths.training_dir.display(),
        static_dir = %config.static_dir.display(),
        "Starting server on http://{}",
        addr
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Install the global subscriber.
///
/// `RUST_LOG` drives the filter. The returned guard must stay alive for the
/// non-blocking file writer to flush.
fn init_tracing(log: &LogConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| defaults::LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(ref path) = log.file {
        let file_dir = path.parent().unwrap_or(std::path::Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(defaults::LOG_FILE_NAME);
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        match log.format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init(),
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(log.ansi.unwrap_or(false)),
                )
                .init(),
        }
        Some(guard)
    } else {
        match log.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .init(),
            LogFormat::Text => {
                let mut layer = tracing_subscriber::fmt::layer();
                if let Some(ansi) = log.ansi {
                    layer = layer.with_ansi(ansi);
                }
                registry.with(layer).init();
            }
        }
        None
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
