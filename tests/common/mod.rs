//! Shared test harness: the production router and migrations on top of an
//! in-memory SQLite database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use tower::ServiceExt;

use garage_climate::common::AppState;
use garage_climate::config::{Config, Deployment};
use garage_climate::routes;
use garage_climate::services::ReadingStore;

pub async fn test_store() -> ReadingStore {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // One connection, so every query sees the same in-memory database
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    migration::Migrator::up(&db, None)
        .await
        .expect("run migrations");

    ReadingStore::new(db)
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        deployment: Deployment::Local,
    }
}

pub async fn test_app() -> (Router, ReadingStore) {
    let store = test_store().await;
    let app = routes::build_router(AppState::new(store.clone(), test_config()));
    (app, store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("utf-8 body")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("infallible router");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(app, request).await
}
