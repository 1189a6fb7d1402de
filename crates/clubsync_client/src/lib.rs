//! # clubsync Client
//!
//! Sync client for the clubsync content backend.
//!
//! The client keeps a [`LocalState`] working copy of every resource
//! kind and reconciles it with the server in two passes: [`pull`]
//! replaces local slots with the server's lists, [`push`] replaces the
//! server's lists with the local slots. Between passes the individual
//! CRUD calls are available for targeted edits.
//!
//! Connectivity is probed through the server's health endpoint. While
//! the server is unreachable every request is skipped rather than
//! attempted, so a host application keeps working against local data
//! with no network stalls.
//!
//! The HTTP layer is behind the [`HttpClient`] trait; [`ReqwestClient`]
//! is the production transport and tests run against in-process doubles.
//!
//! [`pull`]: SyncClient::pull_all
//! [`push`]: SyncClient::push_all

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod http;
mod state;
mod status;
mod sync;

pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method, ReqwestClient};
pub use state::{LocalState, StateSlot};
pub use status::{ConnectionStatus, MessageSink, NullSink, Severity, StatusSink};
pub use sync::{Connectivity, SyncClient};
