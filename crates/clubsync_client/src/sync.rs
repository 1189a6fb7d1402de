//! The sync client.
//!
//! Mirrors server data into a [`LocalState`] and pushes local edits
//! back, falling back to local data whenever the server is out of
//! reach. Connectivity is probed through the health endpoint before
//! each sync pass, and every request is gated on the last observed
//! state so an offline client never stalls on network calls.

use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, HttpRequest, Method};
use crate::state::{LocalState, StateSlot};
use crate::status::{ConnectionStatus, MessageSink, NullSink, Severity, StatusSink};
use clubsync_model::{
    Activity, DashboardStats, DeleteConfirmation, Donation, Expense, Experience, GalleryItem,
    HealthReport, HeroSlide, Member, RecordId, Stored, WeeklyFee,
};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Last observed server connectivity.
///
/// `Unknown` gates requests exactly like `Disconnected`; nothing is
/// sent until a probe has succeeded at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// No probe has completed yet.
    #[default]
    Unknown,
    /// The last probe reached the server.
    Connected,
    /// The last probe failed.
    Disconnected,
}

/// Client for the club content API.
///
/// Generic over its HTTP transport so tests can run without a network.
/// Status and message sinks are injected at construction; the defaults
/// discard everything.
pub struct SyncClient<H: HttpClient> {
    http: H,
    connectivity: RwLock<Connectivity>,
    status: Arc<dyn StatusSink>,
    messages: Arc<dyn MessageSink>,
}

impl<H: HttpClient> SyncClient<H> {
    /// Creates a client over the given transport with silent sinks.
    pub fn new(http: H) -> Self {
        Self {
            http,
            connectivity: RwLock::new(Connectivity::Unknown),
            status: Arc::new(NullSink),
            messages: Arc::new(NullSink),
        }
    }

    /// Sets the sink that receives connection state changes.
    #[must_use]
    pub fn with_status_sink(mut self, sink: Arc<dyn StatusSink>) -> Self {
        self.status = sink;
        self
    }

    /// Sets the sink that receives user-facing sync messages.
    #[must_use]
    pub fn with_message_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.messages = sink;
        self
    }

    /// The last observed connectivity.
    pub fn connectivity(&self) -> Connectivity {
        *self.connectivity.read()
    }

    /// Whether requests are currently allowed through.
    pub fn is_connected(&self) -> bool {
        self.connectivity() == Connectivity::Connected
    }

    fn set_connectivity(&self, next: Connectivity, display: ConnectionStatus) {
        *self.connectivity.write() = next;
        // The sink hears the outcome of every probe, not just transitions.
        self.status.connection_changed(display);
    }

    /// Probes the health endpoint and records the outcome.
    ///
    /// Never returns an error; an unreachable server is an expected
    /// state, not a failure.
    pub async fn check_connection(&self) -> bool {
        let request = HttpRequest::new(Method::Get, "/api/health");
        match self.http.send(request).await {
            Ok(response) if response.is_success() => {
                match serde_json::from_slice::<HealthReport>(&response.body) {
                    Ok(report) if report.database.is_connected() => {
                        debug!("health probe succeeded");
                        self.set_connectivity(Connectivity::Connected, ConnectionStatus::Connected);
                        true
                    }
                    Ok(report) => {
                        // Process is up but its store is not.
                        warn!(database = ?report.database, "server reports its store down");
                        self.set_connectivity(
                            Connectivity::Disconnected,
                            ConnectionStatus::Disconnected,
                        );
                        false
                    }
                    Err(e) => {
                        warn!(error = %e, "health probe returned an unreadable body");
                        self.set_connectivity(Connectivity::Disconnected, ConnectionStatus::Error);
                        false
                    }
                }
            }
            Ok(response) => {
                warn!(status = response.status, "health probe rejected");
                self.set_connectivity(Connectivity::Disconnected, ConnectionStatus::Error);
                false
            }
            Err(e) => {
                debug!(error = %e, "health probe unreachable");
                self.set_connectivity(Connectivity::Disconnected, ConnectionStatus::Error);
                false
            }
        }
    }

    /// Sends a request if connectivity allows it.
    ///
    /// `Ok(None)` means the request was never attempted; callers keep
    /// whatever local data they have. Failures propagate without
    /// touching the connectivity flag; only the probe moves it.
    async fn request<R: DeserializeOwned>(&self, request: HttpRequest) -> ClientResult<Option<R>> {
        if !self.is_connected() {
            debug!(method = %request.method, path = %request.path, "skipped while offline");
            return Ok(None);
        }

        let response = self
            .http
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
            });
        }

        Ok(Some(serde_json::from_slice(&response.body)?))
    }

    /// Fetches the full server-side list of one kind.
    pub async fn fetch_all<T: StateSlot>(&self) -> ClientResult<Option<Vec<Stored<T>>>> {
        let path = format!("/api/{}", T::KIND.path());
        self.request(HttpRequest::new(Method::Get, path)).await
    }

    /// Creates a record on the server and returns it with its new id.
    pub async fn create_record<T: StateSlot>(&self, fields: &T) -> ClientResult<Option<Stored<T>>> {
        let path = format!("/api/{}", T::KIND.path());
        let body = serde_json::to_value(fields)?;
        self.request(HttpRequest::new(Method::Post, path).with_body(body))
            .await
    }

    /// Replaces a record on the server.
    ///
    /// The inner option mirrors the server's answer: `None` when no
    /// record with that id exists.
    pub async fn update_record<T: StateSlot>(
        &self,
        id: RecordId,
        fields: &T,
    ) -> ClientResult<Option<Option<Stored<T>>>> {
        let path = format!("/api/{}/{id}", T::KIND.path());
        let body = serde_json::to_value(fields)?;
        self.request(HttpRequest::new(Method::Put, path).with_body(body))
            .await
    }

    /// Deletes a record on the server; absent ids are confirmed too.
    pub async fn delete_record<T: StateSlot>(
        &self,
        id: RecordId,
    ) -> ClientResult<Option<DeleteConfirmation>> {
        let path = format!("/api/{}/{id}", T::KIND.path());
        self.request(HttpRequest::new(Method::Delete, path)).await
    }

    /// Updates the record if the server knows its id, creates it otherwise.
    ///
    /// A created record comes back with a new server-issued id.
    pub async fn save_record<T: StateSlot>(
        &self,
        record: &Stored<T>,
    ) -> ClientResult<Option<Stored<T>>> {
        match self.update_record(record.id, &record.fields).await? {
            None => Ok(None),
            Some(Some(updated)) => Ok(Some(updated)),
            Some(None) => self.create_record(&record.fields).await,
        }
    }

    /// Fetches the aggregate dashboard figures.
    pub async fn dashboard_stats(&self) -> ClientResult<Option<DashboardStats>> {
        self.request(HttpRequest::new(Method::Get, "/api/dashboard-stats"))
            .await
    }

    /// Replaces the local state with the server's data.
    ///
    /// Probes connectivity first; when the server is unreachable the
    /// state is left untouched and `false` comes back. All eight kinds
    /// are fetched concurrently. A kind whose fetch was gated mid-pass
    /// keeps its local records.
    pub async fn pull_all(&self, state: &mut LocalState) -> bool {
        if !self.check_connection().await {
            self.messages
                .notify(Severity::Info, "Server unreachable, showing local data");
            return false;
        }

        let fetched = tokio::try_join!(
            self.fetch_all::<Member>(),
            self.fetch_all::<Activity>(),
            self.fetch_all::<Donation>(),
            self.fetch_all::<Expense>(),
            self.fetch_all::<Experience>(),
            self.fetch_all::<GalleryItem>(),
            self.fetch_all::<HeroSlide>(),
            self.fetch_all::<WeeklyFee>(),
        );

        match fetched {
            Ok((
                members,
                activities,
                donations,
                expenses,
                experiences,
                gallery,
                hero_slides,
                weekly_fees,
            )) => {
                if let Some(v) = members {
                    state.members = v;
                }
                if let Some(v) = activities {
                    state.activities = v;
                }
                if let Some(v) = donations {
                    state.donations = v;
                }
                if let Some(v) = expenses {
                    state.expenses = v;
                }
                if let Some(v) = experiences {
                    state.experiences = v;
                }
                if let Some(v) = gallery {
                    state.gallery = v;
                }
                if let Some(v) = hero_slides {
                    state.hero_slides = v;
                }
                if let Some(v) = weekly_fees {
                    state.weekly_fees = v;
                }
                info!(records = state.len(), "pulled server data");
                self.messages
                    .notify(Severity::Success, "Data loaded from server");
                true
            }
            Err(e) => {
                warn!(error = %e, "pull failed");
                self.messages
                    .notify(Severity::Error, "Loading data from server failed");
                false
            }
        }
    }

    /// Replaces the server's data with the local state.
    ///
    /// Kinds are reconciled concurrently; within a kind the existing
    /// server records are deleted one by one and the local records
    /// recreated in order. The replacement is not atomic: a failure
    /// partway leaves that kind partially written on the server.
    /// Recreated records receive new server ids, so a pull should
    /// follow a successful push.
    pub async fn push_all(&self, state: &LocalState) -> bool {
        if !self.check_connection().await {
            self.messages
                .notify(Severity::Info, "Server unreachable, changes kept locally");
            return false;
        }

        let pushed = tokio::try_join!(
            self.reconcile_kind(&state.members),
            self.reconcile_kind(&state.activities),
            self.reconcile_kind(&state.donations),
            self.reconcile_kind(&state.expenses),
            self.reconcile_kind(&state.experiences),
            self.reconcile_kind(&state.gallery),
            self.reconcile_kind(&state.hero_slides),
            self.reconcile_kind(&state.weekly_fees),
        );

        match pushed {
            Ok(_) => {
                info!(records = state.len(), "pushed local data");
                self.messages
                    .notify(Severity::Success, "Data synced to server");
                true
            }
            Err(e) => {
                warn!(error = %e, "push failed");
                self.messages
                    .notify(Severity::Error, "Syncing data to server failed");
                false
            }
        }
    }

    /// Full replacement of one kind: delete everything, recreate from
    /// the local list.
    async fn reconcile_kind<T: StateSlot>(&self, records: &[Stored<T>]) -> ClientResult<()> {
        let existing = self.fetch_all::<T>().await?.unwrap_or_default();
        for record in existing {
            self.delete_record::<T>(record.id).await?;
        }
        for record in records {
            self.create_record(&record.fields).await?;
        }
        debug!(kind = %T::KIND, count = records.len(), "kind reconciled");
        Ok(())
    }
}
