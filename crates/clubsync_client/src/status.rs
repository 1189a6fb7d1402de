//! Observer hooks for connection state and user-facing messages.
//!
//! The sync client never draws UI itself. Hosts inject these sinks at
//! construction time and render however they like; the defaults do
//! nothing.

/// Connection state as it should be shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The server is reachable and its store is up.
    Connected,
    /// The server answered but reports its store down.
    Disconnected,
    /// The probe failed outright; local data is being served.
    Error,
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational.
    Info,
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
}

/// Receives connection state changes.
pub trait StatusSink: Send + Sync {
    /// Called whenever the observed connection state changes.
    fn connection_changed(&self, status: ConnectionStatus);
}

/// Receives short user-facing messages about sync outcomes.
pub trait MessageSink: Send + Sync {
    /// Called with a message the host may surface to the user.
    fn notify(&self, severity: Severity, message: &str);
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn connection_changed(&self, _status: ConnectionStatus) {}
}

impl MessageSink for NullSink {
    fn notify(&self, _severity: Severity, _message: &str) {}
}
