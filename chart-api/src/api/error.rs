//! Transport-level errors for the query endpoints
//!
//! Domain failures (rank out of range, rank not found) are not errors here:
//! they are 200 responses with `success: false`. Only absence of any chart
//! data and malformed request parameters map to error statuses.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Query errors
#[derive(Debug)]
pub enum QueryError {
    /// Snapshot is empty, nothing to search or look up
    NoChartData,
    /// Search query parameter was empty
    EmptyArtist,
    /// Query string or path segment could not be extracted
    InvalidParameter { status: StatusCode, detail: String },
}

impl From<QueryRejection> for QueryError {
    fn from(rejection: QueryRejection) -> Self {
        QueryError::InvalidParameter {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for QueryError {
    fn from(rejection: PathRejection) -> Self {
        QueryError::InvalidParameter {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            QueryError::NoChartData => (StatusCode::NOT_FOUND, "no chart data loaded".to_string()),
            QueryError::EmptyArtist => (
                StatusCode::BAD_REQUEST,
                "artist query must not be empty".to_string(),
            ),
            QueryError::InvalidParameter { status, detail } => (status, detail),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
