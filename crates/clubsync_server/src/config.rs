//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listening port when neither flag nor environment sets one.
pub const DEFAULT_PORT: u16 = 3000;

/// Default snapshot file backing the record store.
pub const DEFAULT_DATA_FILE: &str = "club-data.json";

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Snapshot file for the record store; `None` runs fully in memory.
    pub data_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Creates a configuration listening on the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            data_file: Some(PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    /// Sets the snapshot file.
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Disables snapshot persistence; contents are lost on shutdown.
    #[must_use]
    pub fn ephemeral(mut self) -> Self {
        self.data_file = None;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }
}
