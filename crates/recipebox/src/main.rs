use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use recipebox::{app::create_app, config::Config, state::AppState, storage::InMemoryRepository};
use recipebox_core::storage::ProfileRepository;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "dynamodb")]
const DEFAULT_STORAGE: &str = "dynamodb";
#[cfg(not(feature = "dynamodb"))]
const DEFAULT_STORAGE: &str = "memory";

/// Where profile records are kept.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StorageBackend {
    /// Process-local map, lost on exit
    Memory,
    /// DynamoDB table named by DYNAMODB_TABLE_NAME
    Dynamodb,
}

/// Recipebox - Store cook profiles and the recipes they write and like
#[derive(Parser, Debug)]
#[command(name = "recipebox")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value = DEFAULT_STORAGE, env = "STORAGE")]
    storage: StorageBackend,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env();
    let repo = build_repository(cli.storage, &config).await?;
    let state = AppState::new(repo, &config);

    // Build the application router
    let app = create_app(state, config.request_timeout());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Human-readable logs by default, one JSON object per line with `LOG_FORMAT=json`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recipebox=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn build_repository(
    storage: StorageBackend,
    config: &Config,
) -> Result<Arc<dyn ProfileRepository>> {
    match storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(InMemoryRepository::new()))
        }
        #[cfg(feature = "dynamodb")]
        StorageBackend::Dynamodb => {
            let dynamodb = config.dynamodb_config();
            tracing::info!(
                table = %dynamodb.table_name,
                target = %dynamodb.target_display(),
                "Using DynamoDB storage"
            );
            let repo = recipebox::storage::DynamoDbRepository::connect(&dynamodb).await?;
            Ok(Arc::new(repo))
        }
        #[cfg(not(feature = "dynamodb"))]
        StorageBackend::Dynamodb => {
            let _ = config;
            anyhow::bail!("recipebox was built without the `dynamodb` feature")
        }
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
