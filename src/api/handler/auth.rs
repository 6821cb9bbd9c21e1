use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::api::AdminSession;
use crate::error::ApiError;
use crate::models::{AppState, LoginRequest, TokenResponse, VerifyResponse};

/// `POST /api/admin/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let issued = state
        .issuer
        .login(&credentials.email, &credentials.password)?;
    Ok(Json(TokenResponse::bearer(issued.access_token, issued.expires_at)))
}

/// `GET /api/admin/verify`
pub async fn verify(Extension(session): Extension<AdminSession>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        user: session.email,
    })
}
