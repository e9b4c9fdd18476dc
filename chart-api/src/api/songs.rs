//! Chart listing and rank lookup

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use chart_common::models::{is_valid_rank, MAX_RANK, MIN_RANK};
use chart_common::Song;
use serde::Serialize;
use tracing::debug;

use crate::api::QueryError;
use crate::AppState;

/// Songs with their count
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub total: usize,
    pub songs: Vec<Song>,
}

impl ChartResponse {
    pub fn from_songs<'a>(songs: impl IntoIterator<Item = &'a Song>) -> Self {
        let songs: Vec<Song> = songs.into_iter().cloned().collect();
        Self {
            total: songs.len(),
            songs,
        }
    }
}

/// Single-song lookup result
///
/// `success: false` is a domain-level failure and still travels with 200.
#[derive(Debug, Serialize)]
pub struct SongDetailResponse {
    pub success: bool,
    pub song: Option<Song>,
    pub message: String,
}

/// GET /songs
///
/// Full chart in file order. An empty snapshot is a normal empty chart.
pub async fn list_songs(State(state): State<AppState>) -> Json<ChartResponse> {
    Json(ChartResponse::from_songs(state.snapshot.songs()))
}

/// GET /songs/:rank
///
/// Out-of-range ranks are answered before the snapshot is consulted, so
/// they get a domain failure even when no chart is loaded.
pub async fn get_song_by_rank(
    State(state): State<AppState>,
    rank: Result<Path<i64>, PathRejection>,
) -> Result<Json<SongDetailResponse>, QueryError> {
    let Path(rank) = rank?;

    if !is_valid_rank(rank) {
        debug!("Rejected rank {} outside {}..={}", rank, MIN_RANK, MAX_RANK);
        return Ok(Json(SongDetailResponse {
            success: false,
            song: None,
            message: format!("rank must be between {} and {}: {}", MIN_RANK, MAX_RANK, rank),
        }));
    }

    if state.snapshot.is_empty() {
        return Err(QueryError::NoChartData);
    }

    let response = match state.snapshot.find_by_rank(rank) {
        Some(song) => SongDetailResponse {
            success: true,
            song: Some(song.clone()),
            message: format!("rank {} lookup succeeded", rank),
        },
        None => SongDetailResponse {
            success: false,
            song: None,
            message: format!("no song found at rank {}", rank),
        },
    };

    Ok(Json(response))
}
