//! Integration tests for chart-api endpoints
//!
//! Tests cover:
//! - Root and health endpoints
//! - Listing the chart (empty chart is a normal 200)
//! - Artist search (case-insensitive substring, 404 with no chart loaded)
//! - Rank lookup (domain failures travel with 200, 404 with no chart loaded)
//! - Parameter rejections answered with JSON bodies

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chart_api::{build_router, AppState};
use chart_common::{dataset, ChartSnapshot, Song};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

fn song(id: i64, rank: i64, title: &str, artist: &str, album: &str) -> Song {
    Song {
        id,
        rank,
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
    }
}

/// Test helper: two-song chart used by the scenario tests
fn scenario_snapshot() -> ChartSnapshot {
    ChartSnapshot::new(vec![
        song(1, 1, "A", "X", "M"),
        song(2, 2, "B", "Y, Z", "N"),
    ])
}

/// Test helper: Create app over the given snapshot
fn setup_app(snapshot: ChartSnapshot) -> axum::Router {
    build_router(AppState::new(snapshot))
}

/// Test helper: Create GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: send one request, return status and JSON body
async fn send(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(get(uri)).await.unwrap();
    let status = response.status();
    let body = extract_json(response.into_body()).await;
    (status, body)
}

// =============================================================================
// Root / Health
// =============================================================================

#[tokio::test]
async fn test_root_reports_loaded_songs() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["loaded_songs"], 2);
}

#[tokio::test]
async fn test_root_with_empty_chart() {
    let (status, body) = send(setup_app(ChartSnapshot::empty()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loaded_songs"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(setup_app(ChartSnapshot::empty()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "chart-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let (status, body) = send(setup_app(ChartSnapshot::empty()), "/buildinfo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}

// =============================================================================
// List all
// =============================================================================

#[tokio::test]
async fn test_list_songs() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let songs = body["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0]["id"], 1);
    assert_eq!(songs[0]["rank"], 1);
    assert_eq!(songs[0]["title"], "A");
    assert_eq!(songs[0]["artist"], "X");
    assert_eq!(songs[0]["album"], "M");
    assert_eq!(songs[1]["id"], 2);
}

#[tokio::test]
async fn test_list_songs_empty_chart_is_ok() {
    let (status, body) = send(setup_app(ChartSnapshot::empty()), "/songs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["songs"], serde_json::json!([]));
}

// =============================================================================
// Search by artist
// =============================================================================

#[tokio::test]
async fn test_search_scenario_matches_second_credit() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/search?artist=y").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    let songs = body["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["id"], 2);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let snapshot = ChartSnapshot::new(vec![
        song(10, 1, "Love wins all", "IU", "Love wins all"),
        song(11, 2, "Supernova", "aespa", "Armageddon"),
    ]);

    let (_, body) = send(setup_app(snapshot.clone()), "/songs/search?artist=iu").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["songs"][0]["id"], 10);

    let (_, body) = send(setup_app(snapshot.clone()), "/songs/search?artist=I").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["songs"][0]["artist"], "IU");

    let (_, body) = send(setup_app(snapshot), "/songs/search?artist=AESPA").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["songs"][0]["id"], 11);
}

#[tokio::test]
async fn test_search_percent_encoded_hangul() {
    let snapshot = ChartSnapshot::new(vec![song(20, 1, "밤양갱", "비비 (BIBI)", "밤양갱")]);

    // "비비"
    let (status, body) = send(setup_app(snapshot), "/songs/search?artist=%EB%B9%84%EB%B9%84").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_search_no_match_is_ok() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/search?artist=nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["songs"], serde_json::json!([]));
}

#[tokio::test]
async fn test_search_empty_chart_is_not_found() {
    for uri in ["/songs/search?artist=x", "/songs/search?artist=IU", "/songs/search?artist="] {
        let (status, body) = send(setup_app(ChartSnapshot::empty()), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {}", uri);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_search_missing_artist_is_rejected() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/search").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_search_empty_artist_is_rejected() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/search?artist=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "artist query must not be empty");
}

#[tokio::test]
async fn test_search_whitespace_artist_is_substring_match() {
    // " " only occurs inside the joined "Y, Z" credit
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/search?artist=%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["songs"][0]["artist"], "Y, Z");
}

// =============================================================================
// Get by rank
// =============================================================================

#[tokio::test]
async fn test_rank_found() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["song"]["rank"], 2);
    assert_eq!(body["song"]["title"], "B");
    assert_eq!(body["message"], "rank 2 lookup succeeded");
}

#[tokio::test]
async fn test_rank_absent_scenario() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["song"].is_null());
    assert!(body["message"].as_str().unwrap().contains('3'));
}

#[tokio::test]
async fn test_rank_out_of_range_is_domain_failure() {
    for rank in [0, 101, -5] {
        let uri = format!("/songs/{}", rank);
        let (status, body) = send(setup_app(scenario_snapshot()), &uri).await;

        assert_eq!(status, StatusCode::OK, "rank: {}", rank);
        assert_eq!(body["success"], false);
        assert!(body["song"].is_null());
        assert_eq!(
            body["message"],
            format!("rank must be between 1 and 100: {}", rank)
        );
    }
}

#[tokio::test]
async fn test_rank_out_of_range_checked_before_empty_chart() {
    let (status, body) = send(setup_app(ChartSnapshot::empty()), "/songs/101").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_rank_empty_chart_is_not_found() {
    let (status, body) = send(setup_app(ChartSnapshot::empty()), "/songs/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no chart data loaded");
}

#[tokio::test]
async fn test_rank_duplicate_returns_first_match() {
    let snapshot = ChartSnapshot::new(vec![
        song(1, 7, "First", "X", "M"),
        song(2, 7, "Second", "Y", "N"),
    ]);
    let (_, body) = send(setup_app(snapshot), "/songs/7").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["song"]["id"], 1);
}

#[tokio::test]
async fn test_rank_non_integer_is_rejected() {
    let (status, body) = send(setup_app(scenario_snapshot()), "/songs/abc").await;

    assert!(status.is_client_error());
    assert!(body["error"].is_string());
}

// =============================================================================
// Loader → router
// =============================================================================

#[tokio::test]
async fn test_router_over_loaded_dataset() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("chart.json");
    dataset::write(&path, scenario_snapshot().songs()).unwrap();

    let app = setup_app(dataset::load(&path));
    let (status, body) = send(app, "/songs/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["song"]["title"], "A");
}

#[tokio::test]
async fn test_router_over_missing_dataset_serves_empty_chart() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = setup_app(dataset::load(&dir.path().join("missing.json")));

    let (status, body) = send(app.clone(), "/songs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);

    let (status, _) = send(app, "/songs/search?artist=x").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
