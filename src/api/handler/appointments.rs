use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::models::{AppState, Appointment, StatusUpdate};

/// `PATCH /api/admin/appointments/{id}/status`: changes only the status.
pub async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = state.store.set_appointment_status(&id, update.status).await?;
    tracing::info!(id, status = %appointment.status, "appointment status changed");
    Ok(Json(appointment))
}
