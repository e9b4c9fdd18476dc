//! Artist search
//!
//! Case-insensitive substring match against each song's artist credit.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::songs::ChartResponse;
use crate::api::QueryError;
use crate::AppState;

/// Query parameters for artist search
#[derive(Debug, Deserialize)]
pub struct ArtistQuery {
    /// Substring to look for in the artist credit
    pub artist: String,
}

/// GET /songs/search?artist=...
///
/// With no chart loaded this is a 404 whatever the query says; a loaded
/// chart with no matching artist is a normal empty result.
pub async fn search_songs_by_artist(
    State(state): State<AppState>,
    query: Result<Query<ArtistQuery>, QueryRejection>,
) -> Result<Json<ChartResponse>, QueryError> {
    let Query(query) = query?;

    if state.snapshot.is_empty() {
        return Err(QueryError::NoChartData);
    }

    if query.artist.is_empty() {
        return Err(QueryError::EmptyArtist);
    }

    let matched = state.snapshot.search_artist(&query.artist);
    debug!("Artist search {:?}: {} matches", query.artist, matched.len());

    Ok(Json(ChartResponse::from_songs(matched)))
}
