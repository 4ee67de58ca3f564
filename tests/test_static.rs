use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{LOGIN_PAGE_BODY, TestApp};

#[tokio::test]
async fn root_serves_login_page() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, LOGIN_PAGE_BODY.as_bytes());
}

#[tokio::test]
async fn static_files_are_served_by_path() {
    let app = TestApp::new().await;
    std::fs::create_dir(app.static_dir.path().join("js")).unwrap();
    std::fs::write(app.static_dir.path().join("js/app.js"), "console.log(1);").unwrap();

    let (status, body) = app.get("/js/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log(1);".as_bytes());
}

#[tokio::test]
async fn missing_static_file_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/no-such-page.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_connected_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["database"], json!("connected"));
}
