//! Carburis API Library
//!
//! This crate provides the backend for the Carburis fuel-station
//! management dashboard: role-scoped CRUD over tanks, pumps, products,
//! suppliers, restocking events, employees, clients, purchases and sales.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::auth::{AuthRouterExt, AuthService, Role};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

/// Common query parameters for list endpoints
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Case-insensitive substring over the entity's text columns
    pub search: Option<String>,
    pub sort_by: Option<String>,
    /// "asc" (default) or "desc"
    pub sort_order: Option<String>,
}

fn default_page() -> u64 {
    1
}

// The dashboard tables load whole collections, so the default page is large
fn default_per_page() -> u64 {
    100
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            search: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl ListQuery {
    /// Zero-based row offset for the current page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Non-empty search term, if one was provided
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn descending(&self) -> bool {
        self.sort_order
            .as_deref()
            .map(|o| o.eq_ignore_ascii_case("desc"))
            .unwrap_or(false)
    }
}

/// Shared response envelope. Every successful endpoint answers with the
/// same shape instead of per-screen ad hoc flags.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

/// Builds the versioned API: role-scoped entity groups plus probes.
///
/// Route prefixes mirror the dashboard's per-role API groups; each prefix
/// is gated on its role, and admins pass every gate.
pub fn api_v1_routes() -> Router<AppState> {
    let admin = Router::new()
        .nest("/stations", handlers::stations::station_routes())
        .nest("/cuves", handlers::tanks::tank_routes())
        .nest("/pompes", handlers::pumps::pump_routes())
        .nest("/produits", handlers::products::product_routes())
        .nest("/fournisseurs", handlers::suppliers::supplier_routes())
        .nest("/employes", handlers::employees::employee_routes())
        .nest("/approvisionnements", handlers::restocks::restock_routes())
        .with_role(Role::Admin);

    // The manager screens reuse the same restock handlers as the admin ones
    let gerant = Router::new()
        .nest("/clients", handlers::clients::client_routes())
        .nest("/achats", handlers::purchases::purchase_routes())
        .nest("/approvisionnements", handlers::restocks::restock_routes())
        .nest("/feedback", handlers::feedback::feedback_read_routes())
        .with_role(Role::Gerant);

    let pompistes = Router::new()
        .nest("/ventes", handlers::sales::sale_routes())
        .nest("/feedback", handlers::feedback::feedback_routes())
        .with_role(Role::Pompiste);

    let reports = handlers::reports::report_routes().with_auth();

    Router::new()
        // Status and health endpoints stay unauthenticated
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        .nest("/admin", admin)
        .nest("/gerant", gerant)
        .nest("/pompistes", pompistes)
        .nest("/reports", reports)
}

/// Assembles the full application router over the given state.
///
/// The auth service is injected into request extensions so the auth
/// middleware layered inside the role-scoped groups can reach it.
pub fn app_router(state: AppState, auth_service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/", get(|| async { "carburis-api up" }))
        .nest("/api/v1", api_v1_routes())
        .nest(
            "/auth",
            auth::auth_routes().with_state(auth_service.clone()),
        )
        .merge(openapi::swagger_ui())
        .layer(axum::middleware::from_fn_with_state(
            auth_service,
            |State(auth): State<Arc<AuthService>>,
             mut req: axum::http::Request<axum::body::Body>,
             next: axum::middleware::Next| async move {
                req.extensions_mut().insert(auth);
                next.run(req).await
            },
        ))
        .with_state(state)
}

async fn api_status() -> Json<ApiResponse<Value>> {
    let status_data = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "carburis-api",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
    });

    Json(ApiResponse::success(status_data))
}

async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<Value>> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let health_data = json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": Utc::now().to_rfc3339(),
    });

    Json(ApiResponse::success(health_data))
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn success_envelope_carries_data() {
        let response = ApiResponse::success("ok");
        assert!(response.success);
        assert_eq!(response.data, Some("ok"));
        assert!(response.message.is_none());
    }

    #[test]
    fn error_envelope_carries_message() {
        let response = ApiResponse::<()>::error("oops".into());
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("oops"));
    }

    #[test]
    fn list_query_offset_is_zero_based() {
        let query = ListQuery::default();
        assert_eq!(query.offset(), 0);

        let query = ListQuery {
            page: 3,
            per_page: 20,
            ..Default::default()
        };
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn blank_search_counts_as_absent() {
        let query = ListQuery {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert!(query.search_term().is_none());

        let query = ListQuery {
            search: Some(" Essence ".into()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), Some("Essence"));
    }
}
