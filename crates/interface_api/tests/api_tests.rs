//! Router-level tests
//!
//! These run against the real router with a lazy pool that never
//! connects, so they cover everything up to the database boundary:
//! health, authentication, and role checks.

use axum_test::TestServer;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use interface_api::auth::{create_token, Role};
use interface_api::config::ApiConfig;
use interface_api::create_router;

const JWT_SECRET: &str = "test-secret";

fn test_server() -> TestServer {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/bunkcredit_test")
        .expect("lazy pool");
    let config = ApiConfig {
        jwt_secret: JWT_SECRET.to_string(),
        ..ApiConfig::default()
    };
    TestServer::new(create_router(pool, config)).expect("test server")
}

fn token(role: Role) -> String {
    create_token("user-1", "Ravi", role, JWT_SECRET, 3600).expect("token")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn health_is_public() {
        let server = test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn protected_route_requires_token() {
        let server = test_server();
        let response = server.get("/api/v1/customers").await;
        assert_eq!(response.status_code(), 401);
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let server = test_server();
        let response = server
            .get("/api/v1/customers")
            .authorization_bearer("not-a-jwt")
            .await;
        assert_eq!(response.status_code(), 401);
    }

    #[tokio::test]
    async fn token_signed_with_wrong_secret_is_rejected() {
        let server = test_server();
        let bad = create_token("user-1", "Ravi", Role::Admin, "other-secret", 3600).unwrap();
        let response = server
            .get("/api/v1/customers")
            .authorization_bearer(&bad)
            .await;
        assert_eq!(response.status_code(), 401);
    }
}

mod authorization {
    use super::*;

    #[tokio::test]
    async fn staff_cannot_delete_payments() {
        let server = test_server();
        let response = server
            .delete(&format!("/api/v1/payments/{}", Uuid::new_v4()))
            .authorization_bearer(&token(Role::Staff))
            .await;
        assert_eq!(response.status_code(), 403);
    }

    #[tokio::test]
    async fn staff_cannot_delete_transactions() {
        let server = test_server();
        let response = server
            .delete(&format!("/api/v1/transactions/{}", Uuid::new_v4()))
            .authorization_bearer(&token(Role::Staff))
            .await;
        assert_eq!(response.status_code(), 403);
    }

    #[tokio::test]
    async fn staff_cannot_view_admin_dashboard() {
        let server = test_server();
        let response = server
            .get("/api/v1/dashboard/stats")
            .authorization_bearer(&token(Role::Staff))
            .await;
        assert_eq!(response.status_code(), 403);
    }

    #[tokio::test]
    async fn customer_accounts_cannot_be_deleted() {
        // No delete route exists for customers, not even for admins;
        // the ledger history under an account is permanent.
        let server = test_server();
        let response = server
            .delete(&format!("/api/v1/customers/{}", Uuid::new_v4()))
            .authorization_bearer(&token(Role::Admin))
            .await;
        assert_eq!(response.status_code(), 405);
    }
}
