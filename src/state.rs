/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - Clone is cheap (mode behind Arc); read-only after startup
 */
use std::sync::Arc;

use crate::config::ResponseMode;

#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: Arc<ResponseMode>,
}

impl AppState {
    pub fn new(mode: ResponseMode) -> Self {
        Self {
            mode: Arc::new(mode),
        }
    }
}
