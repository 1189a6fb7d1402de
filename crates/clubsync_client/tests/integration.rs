//! End-to-end sync tests.
//!
//! The client runs against the real router through an in-process
//! loopback transport, so the full request path is exercised without
//! sockets.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::Router;
use clubsync_client::{HttpClient, HttpRequest, HttpResponse, LocalState, Method, SyncClient};
use clubsync_model::{Donation, Expense, Member, Stored, DEFAULT_MEMBER_IMAGE};
use clubsync_server::{router, AppState};
use clubsync_store::ClubStore;
use tower::ServiceExt;

/// Routes client requests straight into a router instance.
struct LoopbackHttp {
    router: Router,
}

impl LoopbackHttp {
    fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl HttpClient for LoopbackHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = Request::builder()
            .method(request.method.as_str())
            .uri(&request.path);
        let body = match &request.body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let req = builder.body(body).map_err(|e| e.to_string())?;

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| e.to_string())?;
        Ok(HttpResponse {
            status,
            body: bytes.to_vec(),
        })
    }
}

/// A transport with no server behind it.
struct DownHttp;

#[async_trait]
impl HttpClient for DownHttp {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, String> {
        Err("connection refused".into())
    }
}

fn live_pair() -> (SyncClient<LoopbackHttp>, AppState) {
    let state = AppState::new(ClubStore::open_in_memory());
    let client = SyncClient::new(LoopbackHttp::new(router(state.clone())));
    (client, state)
}

fn member(name: &str) -> Member {
    Member {
        name: name.into(),
        contact: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".into(),
        join_date: "2024-08-01".into(),
        role: "Player".into(),
        image: DEFAULT_MEMBER_IMAGE.into(),
    }
}

#[tokio::test]
async fn crud_round_trip_through_the_router() {
    let (client, _state) = live_pair();
    assert!(client.check_connection().await);

    let created = client
        .create_record(&member("Alice"))
        .await
        .unwrap()
        .expect("gate is open");

    let mut renamed = created.fields.clone();
    renamed.name = "Alicia".into();
    let updated = client
        .update_record(created.id, &renamed)
        .await
        .unwrap()
        .unwrap()
        .expect("record exists");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.fields.name, "Alicia");

    let confirmation = client
        .delete_record::<Member>(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(confirmation.message, "Member deleted successfully");

    let listed = client.fetch_all::<Member>().await.unwrap().unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn pull_mirrors_the_server() {
    let (client, state) = live_pair();
    state.store.members().create(member("Alice")).unwrap();
    state.store.members().create(member("Bob")).unwrap();

    let mut local = LocalState::new();
    local.upsert(Stored::new(member("Stale")));

    assert!(client.pull_all(&mut local).await);
    let names: Vec<_> = local.members.iter().map(|m| m.fields.name.clone()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn push_replaces_server_contents() {
    let (client, state) = live_pair();
    state.store.members().create(member("Old")).unwrap();

    let mut local = LocalState::new();
    local.upsert(Stored::new(member("New")));
    local.upsert(Stored::new(member("Newer")));

    assert!(client.push_all(&local).await);

    let on_server = state.store.members().list().unwrap();
    let names: Vec<_> = on_server.iter().map(|m| m.fields.name.clone()).collect();
    assert_eq!(names, vec!["New", "Newer"]);
}

#[tokio::test]
async fn push_then_pull_converges() {
    let (client, _state) = live_pair();

    let mut local = LocalState::new();
    local.upsert(Stored::new(member("Alice")));
    assert!(client.push_all(&local).await);

    // Recreated records carry new server ids; a pull re-aligns them.
    assert!(client.pull_all(&mut local).await);
    assert_eq!(local.members.len(), 1);

    let on_server = client.fetch_all::<Member>().await.unwrap().unwrap();
    assert_eq!(on_server, local.members);
}

#[tokio::test]
async fn dashboard_stats_through_the_router() {
    let (client, state) = live_pair();
    state
        .store
        .donations()
        .create(Donation {
            donor_name: "Anon".into(),
            amount: 900.0,
            date: "2025-02-01".into(),
            purpose: "Kits".into(),
        })
        .unwrap();
    state
        .store
        .expenses()
        .create(Expense {
            description: "Pitch hire".into(),
            amount: 250.0,
            date: "2025-02-10".into(),
            category: "Facilities".into(),
            vendor: "Council".into(),
            payment_method: "transfer".into(),
        })
        .unwrap();

    client.check_connection().await;
    let stats = client.dashboard_stats().await.unwrap().unwrap();
    assert_eq!(stats.total_donations, 900.0);
    assert_eq!(stats.total_expenses, 250.0);
    assert_eq!(stats.net_balance, 650.0);
}

#[tokio::test]
async fn offline_client_keeps_local_data_and_sends_nothing() {
    let client = SyncClient::new(DownHttp);

    let mut local = LocalState::new();
    local.upsert(Stored::new(member("Alice")));

    assert!(!client.check_connection().await);
    assert!(!client.pull_all(&mut local).await);
    assert!(!client.push_all(&local).await);
    assert_eq!(local.members.len(), 1);

    // Gated requests are skipped, not failed.
    let skipped = client.create_record(&member("Bob")).await.unwrap();
    assert!(skipped.is_none());
}

#[tokio::test]
async fn validation_errors_surface_with_status_400() {
    let state = AppState::new(ClubStore::open_in_memory());
    let transport = LoopbackHttp::new(router(state));

    // Bypass the typed API to send a body missing required fields.
    let bad = HttpRequest::new(Method::Post, "/api/members")
        .with_body(serde_json::json!({"name": "No Contact"}));
    let response = transport.send(bad).await.unwrap();
    assert_eq!(response.status, 400);
}
