//! Service landing endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// API greeting with the number of songs served
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub loaded_songs: usize,
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "🎵 Welcome to the playlist API!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        loaded_songs: state.snapshot.len(),
    })
}
