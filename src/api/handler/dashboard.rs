use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::{AppState, DashboardStats};

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(state.store.stats().await)
}
