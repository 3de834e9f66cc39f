//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::Claims;
use crate::AppState;

/// Authentication middleware
///
/// Validates the bearer token and stashes the claims in request
/// extensions for handlers to read.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            warn!("missing or malformed Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    match crate::auth::validate_token(token, &state.config.jwt_secret) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            warn!(error = %e, "token validation failed");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Audit logging middleware
///
/// Every ledger mutation is attributable; the log line carries who did
/// what and how long it took.
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user = request
        .extensions()
        .get::<Claims>()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();
    let response = next.run(request).await;
    let duration = Utc::now() - start;

    info!(
        method = %method,
        uri = %uri,
        user = %user,
        status = %response.status().as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
