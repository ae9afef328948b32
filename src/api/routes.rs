/*
 * Responsibility
 * - URL structure: POST / is the introspection endpoint
 * - other methods fall through to axum's default 405 handling
 */
use axum::{Router, routing::post};

use crate::api::handlers::introspect::introspect;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(introspect))
}
