/*
 * Responsibility
 * - POST / handler: bearer extraction → response per ResponseMode
 * - ClaimsEcho: decoded payload as JSON; any failure → 404 "Unauthorized"
 * - CannedFile: file bytes read fresh per request; read failure → 500
 */
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use crate::config::ResponseMode;
use crate::error::AppError;
use crate::services::claims;
use crate::state::AppState;

pub async fn introspect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match state.mode.as_ref() {
        ResponseMode::ClaimsEcho => claims_echo(&headers),
        ResponseMode::CannedFile(path) => canned_file(path).await,
    }
}

fn claims_echo(headers: &HeaderMap) -> Result<Response, AppError> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

    // Decode failures are not logged and carry no detail back to the
    // client; they all become the same 404 via From<DecodeError>.
    let payload = claims::decode_unverified(token)?;

    Ok(Json(payload).into_response())
}

async fn canned_file(path: &std::path::Path) -> Result<Response, AppError> {
    // Read fresh on every request so the file can be swapped between
    // requests by the test harness.
    let body = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!(error = %e, path = %path.display(), "failed to read response file");
        AppError::Internal
    })?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
