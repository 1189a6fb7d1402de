//! Request handlers and router assembly.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use clubsync_model::{
    Activity, DashboardStats, DatabaseStatus, DeleteConfirmation, Donation, Expense, Experience,
    GalleryItem, HealthReport, HeroSlide, Member, RecordId, Stored, WeeklyFee,
};
use clubsync_store::StoreSlot;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the full API router.
///
/// Every resource kind gets the same four CRUD routes; the statistics
/// and health endpoints sit alongside them under `/api`.
pub fn router(state: AppState) -> Router {
    let mut api = Router::new()
        .route("/dashboard-stats", get(dashboard_stats))
        .route("/health", get(health));

    api = resource_routes::<Member>(api);
    api = resource_routes::<Activity>(api);
    api = resource_routes::<Donation>(api);
    api = resource_routes::<Expense>(api);
    api = resource_routes::<Experience>(api);
    api = resource_routes::<GalleryItem>(api);
    api = resource_routes::<HeroSlide>(api);
    api = resource_routes::<WeeklyFee>(api);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Registers list/create/update/delete for one resource kind.
fn resource_routes<T: StoreSlot>(router: Router<AppState>) -> Router<AppState> {
    let base = format!("/{}", T::KIND.path());
    router
        .route(&base, get(list::<T>).post(create::<T>))
        .route(
            &format!("{base}/{{id}}"),
            put(update::<T>).delete(remove::<T>),
        )
}

async fn list<T: StoreSlot>(State(state): State<AppState>) -> ApiResult<Json<Vec<Stored<T>>>> {
    Ok(Json(T::collection(&state.store).list()?))
}

async fn create<T: StoreSlot>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Stored<T>>)> {
    let Json(fields) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let stored = T::collection(&state.store).create(fields)?;
    state.store.persist()?;
    info!(kind = %T::KIND, id = %stored.id, "record created");
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update<T: StoreSlot>(
    State(state): State<AppState>,
    id: Result<Path<RecordId>, PathRejection>,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<Json<Option<Stored<T>>>> {
    let Path(id) = id.map_err(|e| ApiError::Validation(e.body_text()))?;
    let Json(fields) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    // Full-document replace; a missing id is answered with `null`,
    // not an error.
    let updated = T::collection(&state.store).update(id, fields)?;
    if updated.is_some() {
        state.store.persist()?;
    }
    Ok(Json(updated))
}

async fn remove<T: StoreSlot>(
    State(state): State<AppState>,
    id: Result<Path<RecordId>, PathRejection>,
) -> ApiResult<Json<DeleteConfirmation>> {
    let Path(id) = id.map_err(|e| ApiError::Validation(e.body_text()))?;

    // Deleting an absent id is not fatal; the confirmation is the same.
    let removed = T::collection(&state.store).delete(id)?;
    if removed {
        state.store.persist()?;
    }
    Ok(Json(DeleteConfirmation {
        message: format!("{} deleted successfully", T::KIND.label()),
    }))
}

async fn dashboard_stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let store = &state.store;
    let total_donations = store.donations().sum_of(|d| d.amount)?;
    let total_expenses = store.expenses().sum_of(|e| e.amount)?;

    Ok(Json(DashboardStats {
        total_members: store.members().count()?,
        total_activities: store.activities().count()?,
        total_donations,
        total_expenses,
        net_balance: total_donations - total_expenses,
    }))
}

/// Liveness endpoint.
///
/// Answers 200 whenever the process can answer at all; the `database`
/// field carries the persistence connectivity separately.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let database = if state.store.is_connected() {
        DatabaseStatus::Connected
    } else {
        DatabaseStatus::Disconnected
    };

    Json(HealthReport {
        status: "OK".into(),
        message: "clubsync API is running".into(),
        database,
        timestamp: Utc::now().to_rfc3339(),
    })
}
