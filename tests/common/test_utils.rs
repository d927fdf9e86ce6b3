use super::mocks::StubPromptModel;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use std::{path::PathBuf, sync::Arc};
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`
use video2prompt::{
    gemini::PromptModel,
    server::{self, AppState},
};

/// Router backed by a stub model, as the credential-present case.
pub fn create_test_app(stub: Arc<StubPromptModel>) -> Router {
    server::router(AppState {
        model: Some(stub as Arc<dyn PromptModel>),
    })
}

/// Router with no model configured, as when no credential was found.
pub fn create_test_app_without_credential() -> Router {
    server::router(AppState { model: None })
}

/// Request body carrying the given bytes, base64 encoded.
pub fn video_body(bytes: &[u8], mime_type: &str) -> Value {
    json!({ "video": { "data": STANDARD.encode(bytes), "mimeType": mime_type } })
}

pub async fn post_json(app: Router, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generatePrompt")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn response_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn assert_status_and_text(response: Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    response_text(response).await
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a clip fixture with the given content into the directory.
pub async fn write_clip(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    tokio::fs::write(&path, bytes).await.unwrap();
    path
}
