//! HTTP API handlers for chart-api

pub mod buildinfo;
pub mod error;
pub mod health;
pub mod root;
pub mod search;
pub mod songs;

pub use buildinfo::get_build_info;
pub use error::QueryError;
pub use health::health_routes;
pub use root::root;
pub use search::search_songs_by_artist;
pub use songs::{get_song_by_rank, list_songs};
