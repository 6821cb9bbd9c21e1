use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, AuthError};
use crate::models::AppState;

/// Verified caller, available to handlers behind [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::Unauthorized)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Unauthorized);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized);
    }
    Ok(token)
}

/// Rejects the request with 401 unless it carries a valid admin token.
/// Runs before any handler, so no collection is read on failure.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())?;
    let email = state.issuer.verify(token)?;

    req.extensions_mut().insert(AdminSession { email });
    Ok(next.run(req).await)
}
