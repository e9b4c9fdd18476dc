//! chart-api library - read-only query service over the chart snapshot
//!
//! The snapshot is loaded once before the router is built and handed to
//! every handler through [`AppState`]. Nothing in the request path mutates it.

use axum::Router;
use chart_common::ChartSnapshot;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Chart loaded at startup (possibly empty)
    pub snapshot: Arc<ChartSnapshot>,
}

impl AppState {
    /// Create new application state
    pub fn new(snapshot: ChartSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let songs = Router::new()
        .route("/songs", get(api::list_songs))
        // Static segment takes precedence over the :rank capture
        .route("/songs/search", get(api::search_songs_by_artist))
        .route("/songs/:rank", get(api::get_song_by_rank));

    let public = Router::new()
        .route("/", get(api::root))
        .route("/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(songs)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
