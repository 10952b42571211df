//! `GET /config` endpoint handler.
//!
//! Serves the startup configuration snapshot so UI collaborators can read
//! titles, flags and endpoint URLs over HTTP instead of from their own
//! environment.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::config::AppConfig;
use crate::server::AppState;

pub async fn config_handler(State(state): State<Arc<AppState>>) -> Json<AppConfig> {
    Json(state.app_config.clone())
}
