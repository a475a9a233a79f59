//! Transition event ingestion.

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, http::StatusCode};

use wanwatch_core::IngestOutcome;

use crate::state::AppState;

/// Handle one event. The caller always gets an empty 200, whatever happened.
pub async fn ingest_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> StatusCode {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("[Ingest] Could not read request body: {}", e);
            return StatusCode::OK;
        },
    };

    tracing::info!("[Ingest] Received event: {}", String::from_utf8_lossy(&body).trim());

    match state.monitor().handle_payload(&body).await {
        Ok(IngestOutcome::SwitchedToReserve { interface, .. }) => {
            tracing::info!(
                "[Ingest] Switched to backup ({})",
                interface.as_deref().unwrap_or("unknown interface")
            );
        },
        Ok(IngestOutcome::RecoveredToMain { duration_secs }) => {
            tracing::info!("[Ingest] Back on primary after {}s", duration_secs);
        },
        Ok(IngestOutcome::NotInOutage) => {
            tracing::debug!("[Ingest] to_main without an open outage, ignoring");
        },
        Err(e) if e.is_malformed() => {
            tracing::warn!("[Ingest] Dropped event: {}", e);
        },
        Err(e) => {
            tracing::error!("[Ingest] {}", e);
        },
    }

    StatusCode::OK
}
