//! Dashboard handlers

use axum::{extract::State, Extension, Json};
use chrono::Utc;

use domain_ledger::{DashboardStats, StaffTodayStats};
use infra_db::{CustomerRepository, PaymentRepository, TransactionRepository};

use crate::auth::{require_admin, Claims};
use crate::dto::dashboard::*;
use crate::error::ApiError;
use crate::AppState;

/// Station-wide figures. Admin only.
pub async fn admin_stats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DashboardResponse>, ApiError> {
    require_admin(&claims)?;

    let customers = CustomerRepository::new(state.pool.clone()).list_all().await?;
    let transactions = TransactionRepository::new(state.pool.clone()).list_all().await?;
    let payments = PaymentRepository::new(state.pool.clone()).list_all().await?;

    let stats = DashboardStats::compute(&customers, &transactions, &payments, Utc::now());
    Ok(Json(stats.into()))
}

/// The calling staff member's activity today
pub async fn my_today_stats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<StaffTodayResponse>, ApiError> {
    let transactions = TransactionRepository::new(state.pool.clone()).list_all().await?;
    let payments = PaymentRepository::new(state.pool.clone()).list_all().await?;

    let stats = StaffTodayStats::compute(&claims.name, &transactions, &payments, Utc::now());
    Ok(Json(stats.into()))
}
