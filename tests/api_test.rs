//! API integration tests.
//!
//! Exercises the HTTP routes in-process through `tower::ServiceExt::oneshot`
//! against the [`TestHarness`] fixture providers.

mod common;

use axum::http::StatusCode;
use common::{get, get_json, TestHarness, FAILING_PROVIDER, MATRIX_BYTES};
use serde_json::Value;

fn ids(json: &Value) -> Vec<&str> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Health and description
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_200() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn description_lists_available_libraries() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/description").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["movie_api"], 3);
    assert_eq!(json["available_movie_libraries"].as_array().unwrap().len(), 2);
    assert_eq!(json["available_movie_libraries"][1]["name"], "Archive");
    assert_eq!(json["available_picture_libraries"][0]["backend"], "pictures");
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn movie_list_applies_query_parameters() {
    let harness = TestHarness::new();

    let (status, json) = get_json(harness.router(), "/api/movies/1/basic?genre=Sci-Fi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), ["m2", "m1"]);
    assert!(json.as_array().unwrap().iter().all(|m| m["provider"] == 1));

    let (_, json) = get_json(
        harness.router(),
        "/api/movies/1/range/basic?start=0&end=2&sort=year&order=desc",
    )
    .await;
    assert_eq!(ids(&json), ["m1", "m3"]);
}

#[tokio::test]
async fn movie_count_with_filters() {
    let harness = TestHarness::new();
    let (status, json) =
        get_json(harness.router(), "/api/movies/1/count?genre=Action&category=c1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn unknown_sort_key_is_rejected() {
    let harness = TestHarness::new();
    let (status, _) = get(harness.router(), "/api/movies/1/basic?sort=popularity").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tv_routes_follow_show_and_season() {
    let harness = TestHarness::new();

    let (_, json) = get_json(harness.router(), "/api/tv/1/show/s1/seasons/count").await;
    assert_eq!(json["count"], 2);

    let (_, json) = get_json(
        harness.router(),
        "/api/tv/1/season/se1/episodes/basic?sort=episodenumber",
    )
    .await;
    assert_eq!(ids(&json), ["e1", "e2"]);

    let (status, json) = get_json(harness.router(), "/api/tv/1/episode/e4/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "The Target");
    assert_eq!(json["show_id"], "s2");
}

#[tokio::test]
async fn music_routes_follow_album_and_artist() {
    let harness = TestHarness::new();

    let (_, json) = get_json(harness.router(), "/api/music/1/album/al1/tracks/basic").await;
    assert_eq!(ids(&json), ["t1", "t2"]);

    let (_, json) = get_json(harness.router(), "/api/music/1/artist/ar1/albums/basic").await;
    assert_eq!(ids(&json), ["al2", "al1"]);

    let (_, json) = get_json(harness.router(), "/api/music/1/genres").await;
    assert_eq!(json[0]["name"], "Electronic");
    assert_eq!(json[0]["provider"], 1);
}

#[tokio::test]
async fn track_routes_ignore_category() {
    let harness = TestHarness::new();

    let (status, json) = get_json(
        harness.router(),
        "/api/music/1/tracks/basic?genre=Rock&category=c1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), ["t1", "t2"]);

    let (_, json) = get_json(
        harness.router(),
        "/api/music/1/album/al2/tracks/detailed?category=c1",
    )
    .await;
    assert_eq!(ids(&json), ["t3"]);
}

#[tokio::test]
async fn picture_and_filesystem_routes() {
    let harness = TestHarness::new();

    let (_, json) = get_json(harness.router(), "/api/pictures/1/count").await;
    assert_eq!(json["count"], 3);

    let (_, drives) = get_json(harness.router(), "/api/filesystem/1/drives").await;
    let drive = drives[0]["id"].as_str().unwrap().to_string();

    let (status, json) =
        get_json(harness.router(), &format!("/api/filesystem/1/folder/{drive}/files")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["title"], "video.mkv");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_provider_returns_404() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/movies/7/basic").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "provider_not_found");
}

#[tokio::test]
async fn unknown_entity_returns_404() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/movies/1/movie/nope/basic").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "not_found");
}

#[tokio::test]
async fn backend_failure_returns_502() {
    let harness = TestHarness::with_failing_movies();
    let (status, json) = get_json(
        harness.router(),
        &format!("/api/movies/{FAILING_PROVIDER}/detailed"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "backend_error");
    assert!(json["error"].as_str().unwrap().contains("database locked"));
}

// ---------------------------------------------------------------------------
// Search and items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_returns_tagged_results() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/search?q=matrix").await;

    assert_eq!(status, StatusCode::OK);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["type"], "movie");
    assert_eq!(results[0]["provider"], 1);
    assert_eq!(results[1]["title"], "Matrix Reloaded");
    assert_eq!(results[1]["provider"], 2);
}

#[tokio::test]
async fn media_item_carries_its_type() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/item/1/tvepisode/e1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "tvepisode");
    assert_eq!(json["title"], "Pilot");
}

#[tokio::test]
async fn media_item_with_unknown_type_returns_400() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/item/1/podcast/x").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_media_type");
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[tokio::test]
async fn path_list_route() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/paths/1/movie/content/m1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json[0],
        harness.path("movies/matrix.mkv").to_string_lossy().into_owned()
    );
}

#[tokio::test]
async fn file_info_route_reports_existence() {
    let harness = TestHarness::new();

    let (status, json) = get_json(harness.router(), "/api/files/1/movie/content/m1/0/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["exists"], true);
    assert_eq!(json["size"], MATRIX_BYTES.len());

    let (status, json) = get_json(harness.router(), "/api/files/1/movie/content/m1/1/info").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["exists"], false);

    let (_, json) = get_json(harness.router(), "/api/files/1/movie/content/m1/0/local").await;
    assert_eq!(json, true);
}

#[tokio::test]
async fn unknown_file_role_returns_400() {
    let harness = TestHarness::new();
    let (status, json) = get_json(harness.router(), "/api/files/1/movie/thumb/m1/0/info").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_media_type");
}

#[tokio::test]
async fn stream_route_serves_file_bytes() {
    let harness = TestHarness::new();
    let response = tower::ServiceExt::oneshot(
        harness.router(),
        axum::http::Request::builder()
            .uri("/api/files/1/movie/content/m1/0/stream")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[axum::http::header::CONTENT_TYPE],
        "video/x-matroska"
    );

    let (_, body) = get(harness.router(), "/api/files/1/movie/content/m1/0/stream").await;
    assert_eq!(body, MATRIX_BYTES);
}

#[tokio::test]
async fn stream_route_returns_404_for_missing_file() {
    let harness = TestHarness::new();
    let (status, body) = get(harness.router(), "/api/files/1/movie/cover/m1/0/stream").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}
