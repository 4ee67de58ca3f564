#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;

use wina_bwangu_server::{AppState, LOGIN_PAGE, app, db, db::DbPool};

pub const LOGIN_PAGE_BODY: &str = "<html><body>login</body></html>";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Router over a fresh in-memory database and a temporary static directory.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub static_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> TestApp {
        init_tracing();

        let pool = db::create_memory_pool().await.unwrap();
        db::run_migrations(&pool).await.unwrap();

        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join(LOGIN_PAGE), LOGIN_PAGE_BODY).unwrap();

        let router = app(AppState::new(pool.clone()), static_dir.path());

        TestApp {
            router,
            pool,
            static_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn post_json(&self, uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let request = Request::post(uri).body(Body::from(body)).unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn count(&self, sql: &str) -> i64 {
        sqlx::query_scalar(sql).fetch_one(&self.pool).await.unwrap()
    }
}
