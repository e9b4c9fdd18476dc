//! Chart table extraction
//!
//! Turns each table row into a [`Song`]. Id and rank are mandatory: a row
//! without them fails the whole run. Title, artist and album fall back to
//! [`UNKNOWN`] when their element is absent.

use chart_common::Song;
use scraper::Html;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::query::{ChartNode, HtmlNode, NodeQuery, Predicate};

/// Placeholder for a missing title, artist or album ("no information")
pub const UNKNOWN: &str = "정보 없음";

/// Joins several credited artists into one field
pub const ARTIST_SEPARATOR: &str = ", ";

/// Where each field lives in the chart page
#[derive(Debug, Clone)]
pub struct ChartLayout {
    /// One match per chart entry
    pub rows: NodeQuery,
    /// Row attribute carrying the song id
    pub id_attr: String,
    pub rank: NodeQuery,
    pub title: NodeQuery,
    /// Every match is one credited artist
    pub artists: NodeQuery,
    pub album: NodeQuery,
}

impl ChartLayout {
    /// Layout of the Melon TOP 100 chart page
    pub fn melon() -> Self {
        Self {
            rows: NodeQuery::find(Predicate::tag("tbody")).descendant(Predicate::tag("tr")),
            id_attr: "data-song-no".to_string(),
            rank: NodeQuery::find(Predicate::class("rank")),
            title: NodeQuery::find(Predicate::class("ellipsis").and_class("rank01"))
                .descendant(Predicate::tag("a")),
            artists: NodeQuery::find(Predicate::class("ellipsis").and_class("rank02"))
                .child(Predicate::tag("a")),
            album: NodeQuery::find(Predicate::class("ellipsis").and_class("rank03"))
                .descendant(Predicate::tag("a")),
        }
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::melon()
    }
}

/// Parse a chart page into songs, in row order
pub fn parse_chart(html: &str, layout: &ChartLayout) -> Result<Vec<Song>> {
    let document = Html::parse_document(html);
    extract_rows(&HtmlNode::root(&document), layout)
}

/// Extract every row below `root`
pub fn extract_rows<N: ChartNode>(root: &N, layout: &ChartLayout) -> Result<Vec<Song>> {
    let rows = root.select(&layout.rows)?;
    debug!("Found {} chart rows", rows.len());

    rows.iter()
        .enumerate()
        .map(|(index, row)| extract_song(row, layout, index + 1))
        .collect()
}

/// Extract one row; `row_number` is 1-based and only used in errors
pub fn extract_song<N: ChartNode>(row: &N, layout: &ChartLayout, row_number: usize) -> Result<Song> {
    let id_text = row.attr(&layout.id_attr).ok_or(ScrapeError::MissingField {
        row: row_number,
        field: "song id",
    })?;
    let id = parse_number(&id_text, row_number, "song id")?;

    let rank_text = row
        .select_first(&layout.rank)?
        .map(|node| node.text())
        .ok_or(ScrapeError::MissingField {
            row: row_number,
            field: "rank",
        })?;
    let rank = parse_number(&rank_text, row_number, "rank")?;

    let title = first_text_or_unknown(row, &layout.title)?;

    let artist_names: Vec<String> = row
        .select(&layout.artists)?
        .iter()
        .map(|node| node.text())
        .collect();
    let artist = if artist_names.is_empty() {
        UNKNOWN.to_string()
    } else {
        artist_names.join(ARTIST_SEPARATOR)
    };

    let album = first_text_or_unknown(row, &layout.album)?;

    Ok(Song {
        id,
        rank,
        title,
        artist,
        album,
    })
}

fn first_text_or_unknown<N: ChartNode>(row: &N, query: &NodeQuery) -> Result<String> {
    Ok(row
        .select_first(query)?
        .map(|node| node.text())
        .unwrap_or_else(|| UNKNOWN.to_string()))
}

fn parse_number(text: &str, row: usize, field: &'static str) -> Result<i64> {
    text.trim().parse().map_err(|_| ScrapeError::InvalidNumber {
        row,
        field,
        value: text.to_string(),
    })
}
