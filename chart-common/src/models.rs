//! Chart models
//!
//! [`Song`] is the record shape shared by the dataset file, the scraper
//! output and the API responses. [`ChartSnapshot`] is the read-only
//! collection the API serves from.

use serde::{Deserialize, Serialize};

/// Lowest rank a chart entry can hold
pub const MIN_RANK: i64 = 1;

/// Highest rank a chart entry can hold
pub const MAX_RANK: i64 = 100;

/// One chart entry
///
/// All five fields are required when decoding; a missing or mistyped field
/// fails the record. Extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Source-provided song identifier
    pub id: i64,
    /// Chart position, expected within [1, 100]
    pub rank: i64,
    pub title: String,
    /// Credited artists, joined with ", " when there are several
    pub artist: String,
    pub album: String,
}

/// Immutable chart dataset held in memory for the lifetime of the process
///
/// Records keep file order. Rank uniqueness and range are assumed, not
/// checked: lookups on a duplicated rank return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSnapshot {
    songs: Vec<Song>,
}

impl ChartSnapshot {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Snapshot with no records (used when loading fails)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Songs whose artist contains `query`, ignoring case
    ///
    /// Both sides are lowercased with Unicode rules, so Hangul and other
    /// caseless scripts match as plain substrings.
    pub fn search_artist(&self, query: &str) -> Vec<&Song> {
        let needle = query.to_lowercase();
        self.songs
            .iter()
            .filter(|song| song.artist.to_lowercase().contains(&needle))
            .collect()
    }

    /// First song at `rank`, if any
    pub fn find_by_rank(&self, rank: i64) -> Option<&Song> {
        self.songs.iter().find(|song| song.rank == rank)
    }
}

impl From<Vec<Song>> for ChartSnapshot {
    fn from(songs: Vec<Song>) -> Self {
        Self::new(songs)
    }
}

/// Whether `rank` lies within the chart's [MIN_RANK, MAX_RANK] range
pub fn is_valid_rank(rank: i64) -> bool {
    (MIN_RANK..=MAX_RANK).contains(&rank)
}
