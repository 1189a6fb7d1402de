//! clubsync API server binary.
//!
//! Serves the club content API over HTTP, backed by a JSON snapshot
//! file (or fully in memory with `--ephemeral`).

use clap::Parser;
use clubsync_server::{router, AppState, ServerConfig};
use clubsync_store::ClubStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Club content API server.
#[derive(Parser)]
#[command(name = "clubsync-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = clubsync_server::DEFAULT_PORT)]
    port: u16,

    /// Snapshot file backing the record store
    #[arg(short, long, env = "DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Keep all records in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ServerConfig {
        let mut config = ServerConfig::new(SocketAddr::from(([0, 0, 0, 0], self.port)));
        if self.ephemeral {
            config = config.ephemeral();
        } else if let Some(path) = &self.data_file {
            config = config.with_data_file(path);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.config();
    let store = match &config.data_file {
        Some(path) => {
            info!(path = %path.display(), "opening record store");
            ClubStore::open(path)?
        }
        None => {
            info!("running with an in-memory record store");
            ClubStore::open_in_memory()
        }
    };

    let state = AppState::new(store);
    let store = Arc::clone(&state.store);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "clubsync API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Flush the last snapshot before the process exits.
    store.persist()?;
    store.close();
    info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
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
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("shutdown signal received");
}
