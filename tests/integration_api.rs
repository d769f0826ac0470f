//! API integration tests
//!
//! Tests for HTTP API endpoints using axum's test utilities.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use submarine::config::Config;
use submarine::server::{create_router, AppState};
use submarine_parser::{Language, QualitySource};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    AppState::new(&Config::default())
}

/// Helper to get response body as string
async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_string(response.into_body()).await)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(create_test_state());

    let (status, _) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_parse_torrent_release() {
    let app = create_router(create_test_state());

    let (status, body) = get(
        app,
        "/release?title=The.Show.S01E02.1080p.WEB-DL.x264-GROUP&protocol=BITTORRENT",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["title"], "The Show");
    assert_eq!(json["type"], "SERIES");
    assert_eq!(json["protocol"], "BITTORRENT");
    assert_eq!(json["release_group"], "GROUP");
    assert_eq!(json["series_release_data"]["seasons"], serde_json::json!([1]));
    assert_eq!(json["series_release_data"]["episodes"], serde_json::json!([2]));
    assert_eq!(json["quality"]["resolution"]["source"], "WEB_DL");
}

#[tokio::test]
async fn test_parse_usenet_release() {
    let app = create_router(create_test_state());

    let (status, body) = get(
        app,
        "/release?title=The.Matrix.1999.1080p.BluRay.x264-GROUP-xpost&protocol=usenet",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["title"], "The Matrix");
    assert_eq!(json["year"], 1999);
    assert_eq!(json["type"], "MOVIE");
    assert_eq!(json["protocol"], "USENET");
    assert_eq!(json["release_group"], "GROUP");
}

#[tokio::test]
async fn test_not_parsable_returns_422() {
    let app = create_router(create_test_state());

    let (status, body) = get(app, "/release?title=justoneword&protocol=BITTORRENT").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_xdcc_returns_501() {
    let app = create_router(create_test_state());

    let (status, body) = get(
        app,
        "/release?title=The.Show.S01E02.720p.HDTV.x264-GROUP&protocol=XDCC",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(body.contains("error"));
}

#[tokio::test]
async fn test_invalid_release_returns_400() {
    let app = create_router(create_test_state());

    let (status, body) = get(
        app,
        "/release?title=Show.S01E06-E05.720p.HDTV.x264-GRP&protocol=BITTORRENT",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_unknown_protocol_returns_400() {
    let app = create_router(create_test_state());

    let (status, body) = get(
        app,
        "/release?title=The.Show.S01E02.720p.HDTV.x264-GROUP&protocol=carrier-pigeon",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("unknown protocol"));
}

#[tokio::test]
async fn test_missing_query_returns_400() {
    let app = create_router(create_test_state());

    let (status, _) = get(app, "/release?protocol=BITTORRENT").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_configured_parser_is_used() {
    let mut config = Config::default();
    config.parser.default_language = Language::French;
    config
        .parser
        .release_group_sources
        .insert("MyGroup".to_string(), QualitySource::WebRip);
    let app = create_router(AppState::new(&config));

    let (status, body) = get(
        app,
        "/release?title=%5BMyGroup%5D%20Anime%20Title%20-%2003%20%281080p%29%20%5BABCD1234%5D&protocol=BITTORRENT",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["languages"], serde_json::json!(["FRENCH"]));
    assert_eq!(json["quality"]["resolution"]["source"], "WEB_RIP");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_router(create_test_state());

    let (status, _) = get(app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
