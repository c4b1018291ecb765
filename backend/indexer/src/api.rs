//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::IndexerError;
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SubjectEventsResponse {
    pub subject: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for IndexerError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events`
///
/// Returns all indexed events across the followed registries.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Result<Json<AllEventsResponse>, IndexerError> {
    let events = db::get_all_events(&state.pool).await?;
    Ok(Json(AllEventsResponse {
        count: events.len(),
        events,
    }))
}

/// `GET /identities/:address/events`
///
/// Every event naming one address: its donor or recipient history, admin
/// transfers to or from it, and impact records or verifications it appears in.
pub async fn get_identity_events(
    State(state): State<Arc<ApiState>>,
    Path(address): Path<String>,
) -> Result<Json<SubjectEventsResponse>, IndexerError> {
    let events = db::get_events_for_identity(&state.pool, &address).await?;
    Ok(Json(SubjectEventsResponse {
        subject: address,
        count: events.len(),
        events,
    }))
}

/// `GET /impacts/:id/events`
///
/// Recording and verification history for one impact record.
pub async fn get_impact_events(
    State(state): State<Arc<ApiState>>,
    Path(impact_id): Path<u64>,
) -> Result<Json<SubjectEventsResponse>, IndexerError> {
    let subject = impact_id.to_string();
    let events = db::get_events_for_subject(&state.pool, &subject).await?;
    Ok(Json(SubjectEventsResponse {
        subject,
        count: events.len(),
        events,
    }))
}
