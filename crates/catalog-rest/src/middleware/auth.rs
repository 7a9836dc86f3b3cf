//! Authentication middleware.

use crate::{responses::AppError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use catalog_core::CatalogError;
use tracing::debug;

/// Middleware that requires `Authorization: Bearer <api_token>`.
///
/// Returns 401 in the standard error envelope when the header is missing,
/// malformed or carries another token.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let rejection = match token {
        Some(token) if token == &*state.api_token => None,
        Some(_) => Some("Invalid token"),
        None => Some("Missing bearer token"),
    };

    if let Some(reason) = rejection {
        debug!(uri = %request.uri(), reason, "Rejected unauthenticated request");
        return Err(AppError(CatalogError::unauthorized(reason)));
    }

    Ok(next.run(request).await)
}
