//! Authentication and authorization
//!
//! Two roles exist: admins manage customers, limits, and deletions;
//! staff record entries and payments. The token carries the user's
//! display name, which is snapshotted onto rows they create.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User's display name, stamped onto rows they create
    pub name: String,
    /// User's role
    pub role: Role,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
}

/// Creates a new JWT token
pub fn create_token(
    user_id: &str,
    name: &str,
    role: Role,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        role,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token and returns its claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Rejects non-admin callers with 403
pub fn require_admin(claims: &Claims) -> Result<(), ApiError> {
    if claims.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Forbidden("admin role required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = create_token("user-1", "Ravi", Role::Staff, SECRET, 3600).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.name, "Ravi");
        assert_eq!(claims.role, Role::Staff);
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("user-1", "Ravi", Role::Admin, SECRET, 3600).unwrap();
        assert!(validate_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_require_admin() {
        let token = create_token("user-1", "Admin", Role::Admin, SECRET, 3600).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert!(require_admin(&claims).is_ok());

        let token = create_token("user-2", "Staff", Role::Staff, SECRET, 3600).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert!(require_admin(&claims).is_err());
    }
}
