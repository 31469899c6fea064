#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, Router};
use carburis_api as api;
use http::{header, Request, Response, StatusCode};
use rust_decimal_macros::dec;
use serde_json::Value;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::ServiceExt;

const TEST_JWT_SECRET: &str =
    "integration_test_jwt_secret_that_is_definitely_long_enough_1234567890ab";

/// In-process application over a scratch SQLite file.
///
/// The temp dir must outlive the router, hence the struct.
pub struct TestApp {
    pub router: Router,
    _tmp: TempDir,
}

fn test_config(database_url: String) -> api::config::AppConfig {
    api::config::AppConfig {
        database_url,
        jwt_secret: TEST_JWT_SECRET.into(),
        jwt_expiration: 3600,
        refresh_token_expiration: 86_400,
        host: "127.0.0.1".into(),
        port: 0,
        environment: "development".into(),
        log_level: "info".into(),
        log_json: false,
        auto_migrate: true,
        cors_allowed_origins: None,
        cors_allow_any_origin: false,
        cors_allow_credentials: false,
        db_max_connections: 4,
        db_min_connections: 1,
        db_connect_timeout_secs: 30,
        db_idle_timeout_secs: 600,
        db_acquire_timeout_secs: 8,
        sales_tax_rate: 0.18,
        event_channel_capacity: 64,
        auth_issuer: "carburis-api".into(),
        auth_audience: "carburis-dashboard".into(),
    }
}

/// Builds a fully wired router backed by a fresh database
pub async fn spawn_app() -> TestApp {
    let tmp = TempDir::new().expect("scratch dir");
    let db_path = tmp.path().join("carburis-test.db");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let cfg = test_config(database_url);

    let db = api::db::establish_connection_from_app_config(&cfg)
        .await
        .expect("database connection");
    api::db::run_migrations(&db).await.expect("migrations");
    let db = Arc::new(db);

    let (event_tx, event_rx) = mpsc::channel(cfg.event_channel_capacity);
    let event_sender = api::events::EventSender::new(event_tx);
    tokio::spawn(api::events::process_events(event_rx));

    let services = api::handlers::AppServices::new(
        db.clone(),
        Arc::new(event_sender.clone()),
        dec!(0.18),
    );

    let state = api::AppState {
        db,
        config: cfg.clone(),
        event_sender,
        services,
    };

    let auth_service = Arc::new(api::auth::AuthService::new(api::auth::AuthConfig::new(
        cfg.jwt_secret.clone(),
        cfg.auth_issuer.clone(),
        cfg.auth_audience.clone(),
        Duration::from_secs(cfg.jwt_expiration as u64),
        Duration::from_secs(cfg.refresh_token_expiration as u64),
    )));

    TestApp {
        router: api::app_router(state, auth_service),
        _tmp: tmp,
    }
}

/// Issues one request against the in-process router
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.router.clone().oneshot(request).await.unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Logs in with the given credential pair and returns the response
pub async fn login(app: &TestApp, username: &str, password: &str) -> Response<Body> {
    send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await
}

/// Logs in and returns the access token, panicking on failure
pub async fn login_token(app: &TestApp, username: &str, password: &str) -> String {
    let response = login(app, username, password).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let body = body_json(response).await;
    body["access_token"]
        .as_str()
        .expect("access token in login response")
        .to_string()
}

/// Shorthand for the admin session most tests need
pub async fn admin_token(app: &TestApp) -> String {
    login_token(app, "admin", "admin@2024").await
}
