//! # clubsync Server
//!
//! HTTP resource router for the clubsync content backend.
//!
//! For each of the eight resource kinds the router exposes list, create,
//! update, and delete endpoints under `/api`, backed by the typed
//! collections in `clubsync_store`. Two extra endpoints report aggregate
//! dashboard figures and process/persistence health.
//!
//! Status mapping:
//! - success → 200 (201 for create)
//! - malformed or incomplete body → 400 `{error}`
//! - storage fault → 500 `{error}`
//! - update of a missing identifier → 200 `null` (non-fatal)
//!
//! The CRUD handlers are written once, generically over the record type,
//! and instantiated per kind when the router is built.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod routes;
mod state;

pub use config::{ServerConfig, DEFAULT_DATA_FILE, DEFAULT_PORT};
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
