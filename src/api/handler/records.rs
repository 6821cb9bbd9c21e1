//! List/get/create/update handlers shared by every admin collection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::db::Stored;
use crate::error::ApiError;
use crate::models::{AppState, MessageResponse};

pub async fn list<T>(State(state): State<Arc<AppState>>) -> Json<Vec<T>>
where
    T: Stored + Serialize,
{
    Json(T::collection(&state.store).list().await)
}

pub async fn get<T>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError>
where
    T: Stored + Serialize,
{
    Ok(Json(T::collection(&state.store).get(&id).await?))
}

pub async fn create<T>(State(state): State<Arc<AppState>>, Json(record): Json<T>) -> Json<T>
where
    T: Stored + Serialize + DeserializeOwned,
{
    let created = T::collection(&state.store).create(record).await;
    tracing::info!(kind = T::KIND, id = created.id(), "record created");
    Json(created)
}

pub async fn update<T>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(record): Json<T>,
) -> Result<Json<MessageResponse>, ApiError>
where
    T: Stored + DeserializeOwned,
{
    T::collection(&state.store).update(&id, record).await?;
    tracing::info!(kind = T::KIND, id, "record updated");
    Ok(Json(MessageResponse {
        message: format!("{} updated", T::KIND),
    }))
}
