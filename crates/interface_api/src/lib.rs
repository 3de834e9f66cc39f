//! HTTP API Layer
//!
//! REST API for the credit ledger using Axum.
//!
//! - **Handlers**: request handlers per resource
//! - **Middleware**: authentication, audit logging, tracing
//! - **DTOs**: request/response data transfer objects
//! - **Error handling**: consistent JSON error responses

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{customers, dashboard, health, payments, transactions, vehicles};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let customer_routes = Router::new()
        .route("/", post(customers::create_customer))
        .route("/", get(customers::list_customers))
        .route("/:id", get(customers::get_customer))
        .route("/:id", put(customers::update_customer))
        .route("/:id/statement", get(customers::get_statement))
        .route("/:id/reminder-link", get(customers::get_reminder_link));

    let transaction_routes = Router::new()
        .route("/", post(transactions::create_transaction))
        .route("/", get(transactions::list_recent))
        .route("/today", get(transactions::list_today))
        .route("/preview", post(transactions::preview_transaction))
        .route("/:id", delete(transactions::delete_transaction));

    let payment_routes = Router::new()
        .route("/", post(payments::create_payment))
        .route("/:id", delete(payments::delete_payment));

    let vehicle_routes = Router::new()
        .route("/", get(vehicles::list_vehicles))
        .route("/", post(vehicles::add_vehicle))
        .route("/search", get(vehicles::search_vehicles))
        .route("/:id", delete(vehicles::delete_vehicle));

    let dashboard_routes = Router::new()
        .route("/stats", get(dashboard::admin_stats))
        .route("/me", get(dashboard::my_today_stats));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/customers", customer_routes)
        .nest("/transactions", transaction_routes)
        .nest("/payments", payment_routes)
        .nest("/vehicles", vehicle_routes)
        .nest("/dashboard", dashboard_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
