use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};
use service::auth::{AccessGuard, LoginInput, LoginOutput};
use service::payload::{read_json, require_non_empty};
use tracing::{info, warn};

use crate::errors::ApiError;

/// `POST /api/login`: the single configured pair yields the static token.
pub async fn login(
    State(guard): State<Arc<AccessGuard>>,
    body: Bytes,
) -> Result<Json<LoginOutput>, ApiError> {
    let input = LoginInput::from_value(&require_non_empty(read_json(&body)?)?);
    let out = guard.login(&input)?;
    info!(username = ?input.username, "login succeeded");
    Ok(Json(out))
}

/// Middleware: require `Authorization: Bearer <token>` matching the configured token.
pub async fn require_bearer_token(
    State(guard): State<Arc<AccessGuard>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if let Err(e) = guard.authorize(header) {
        warn!(path = %req.uri().path(), has_header = header.is_some(), "bearer token rejected");
        return Err(e.into());
    }
    Ok(next.run(req).await)
}
