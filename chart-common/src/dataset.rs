//! Dataset file loading and writing
//!
//! The dataset is a UTF-8 JSON array of [`Song`] objects, pretty-printed
//! with two-space indentation. The scraper writes it, the API reads it once
//! at startup.
//!
//! Decoding is all-or-nothing: a single record that does not match the
//! schema rejects the whole file.

use crate::models::{ChartSnapshot, Song};
use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// File name used for the dataset when none is given
pub const DEFAULT_DATASET_FILE: &str = "melon_chart_top100.json";

/// Read and strictly decode the dataset at `path`
pub fn try_load(path: &Path) -> Result<Vec<Song>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::DatasetNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let songs: Vec<Song> = serde_json::from_str(&content)?;
    Ok(songs)
}

/// Load the chart snapshot, falling back to an empty one on any failure
///
/// A missing file is logged as a warning, unreadable or invalid content as
/// an error. Neither is returned to the caller: the service starts with an
/// empty snapshot instead.
pub fn load(path: &Path) -> ChartSnapshot {
    match try_load(path) {
        Ok(songs) => {
            info!("Loaded chart dataset: {} songs from {}", songs.len(), path.display());
            ChartSnapshot::new(songs)
        }
        Err(Error::DatasetNotFound(missing)) => {
            warn!(
                "Chart dataset not found at {} (serving empty chart)",
                missing.display()
            );
            ChartSnapshot::empty()
        }
        Err(e) => {
            error!(
                "Failed to load chart dataset from {}: {} (serving empty chart)",
                path.display(),
                e
            );
            ChartSnapshot::empty()
        }
    }
}

/// Write `songs` to `path` as pretty-printed JSON, replacing any existing file
///
/// Parent directories are created as needed. Content goes to a sibling
/// temporary file first and is renamed into place, so a failed write never
/// leaves a truncated dataset behind.
pub fn write(path: &Path, songs: &[Song]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(songs)?;

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, json.as_bytes())?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Io(e));
    }

    info!("Wrote {} songs to {}", songs.len(), path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_DATASET_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
