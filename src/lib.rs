//! Wina Bwangu kiosk backend.
//!
//! Records mobile-money kiosk transactions and authenticates operators over a
//! small JSON API, and serves the static login page and assets.
//!
//! # Routes
//!
//! - `GET /` - login page
//! - `GET /health` - store connectivity check
//! - `POST /api/register`, `POST /api/login` - operator accounts
//! - `GET /api/transactions`, `POST /api/transactions` - kiosk transactions
//! - `GET /<path>` - any other file under the static directory

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Mutex;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::db::DbPool;

/// Page served at `/`, relative to the static directory.
pub const LOGIN_PAGE: &str = "login-page.html";

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,

    /// Serializes transaction identifier allocation.
    pub id_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            id_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Build the HTTP router.
///
/// API routes take precedence; anything unmatched is looked up under `static_dir`
/// and answered with 404 if no such file exists.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    let api_routes = Router::new()
        .route("/api/register", post(handlers::users::register))
        .route("/api/login", post(handlers::users::login))
        .route(
            "/api/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction),
        );

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(LOGIN_PAGE)))
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
