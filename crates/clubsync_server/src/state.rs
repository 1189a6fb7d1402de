//! Shared request-handler state.

use clubsync_store::ClubStore;
use std::sync::Arc;

/// State handed to every request handler.
///
/// Built once at the composition root and cloned per request; there are
/// no ambient singletons.
#[derive(Clone)]
pub struct AppState {
    /// The record store.
    pub store: Arc<ClubStore>,
}

impl AppState {
    /// Wraps a store for use by the router.
    #[must_use]
    pub fn new(store: ClubStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
