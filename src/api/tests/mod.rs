use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;


/// Helper: temp-file store plus a config with a usable signing secret
///
/// The returned temp file must outlive the database handle.
pub(crate) async fn test_state() -> (Arc<Database>, Arc<Config>, tempfile::NamedTempFile) {
    let file = tempfile::NamedTempFile::new().unwrap();
    let url = format!("sqlite://{}", file.path().display());
    let db = Database::connect(&url).await.unwrap();

    let mut config = Config::default();
    config.auth.jwt_secret = "test_secret".to_string();

    (Arc::new(db), Arc::new(config), file)
}

pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_check_reports_ok() {
    let (db, config, _file) = test_state().await;
    let app = create_router(db, config);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let (db, config, _file) = test_state().await;
    let app = create_router(db, config);

    let request = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"].get("/login").is_some());
}

#[tokio::test]
async fn cors_headers_present_when_enabled() {
    let (db, config, _file) = test_state().await;
    let app = create_router(db, config);

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn cors_headers_absent_when_disabled() {
    let (db, config, _file) = test_state().await;
    let mut config = (*config).clone();
    config.auth.cors_enabled = false;
    let app = create_router(db, Arc::new(config));

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn server_refuses_to_start_without_signing_secret() {
    let (db, _, _file) = test_state().await;
    let config = Arc::new(Config::default()); // jwt_secret left empty

    let result = start_api_server(db, config).await;
    assert!(matches!(
        result,
        Err(Error::Config { key: Some(ref k), .. }) if k == "jwt_secret"
    ));
}

#[tokio::test]
async fn api_server_spawns_on_ephemeral_port() {
    let (db, config, _file) = test_state().await;
    let mut config = (*config).clone();
    config.auth.bind_address = "127.0.0.1:0".parse().unwrap(); // OS assigns a free port
    let config = Arc::new(config);

    let handle = tokio::spawn(start_api_server(db, config));

    // Give it a moment to bind, then tear it down
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.abort();
}
