//! Transaction handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use core_kernel::{CustomerId, Money, TransactionId};
use domain_ledger::{
    preview_impact, time::today_window, FuelTransaction, OutstandingBook, VehicleNumber,
};
use infra_db::{CustomerRepository, PaymentRepository, TransactionRepository};

use crate::auth::{require_admin, Claims};
use crate::dto::transactions::*;
use crate::error::ApiError;
use crate::AppState;

async fn outstanding_for(state: &AppState, id: CustomerId) -> Result<Money, ApiError> {
    let transactions = TransactionRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;
    let payments = PaymentRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;
    Ok(OutstandingBook::tally(&transactions, &payments).outstanding_for(id))
}

/// Records a fuel-on-credit entry
///
/// The response carries the post-entry standing and the advisory limit
/// warning, if any. The entry is recorded regardless of the warning.
pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<CreateTransactionResponse>, ApiError> {
    let customer_id = CustomerId::from_uuid(request.customer_id);
    let customer = CustomerRepository::new(state.pool.clone())
        .find_by_id(customer_id)
        .await?;

    let txn = FuelTransaction::new(
        customer_id,
        VehicleNumber::new(&request.vehicle_number)?,
        Money::new(request.amount),
        request.fuel_type,
        &claims.name,
    )?;
    let txn = match request.notes {
        Some(notes) if !notes.trim().is_empty() => txn.with_notes(notes.trim()),
        _ => txn,
    };

    let outstanding = outstanding_for(&state, customer_id).await?;
    let preview = preview_impact(&customer.name, customer.credit_limit, outstanding, txn.amount);

    TransactionRepository::new(state.pool.clone()).record(&txn).await?;

    Ok(Json(CreateTransactionResponse {
        transaction: txn.into(),
        preview: preview.into(),
    }))
}

/// Previews the limit impact of a proposed entry without recording it
pub async fn preview_transaction(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let customer_id = CustomerId::from_uuid(request.customer_id);
    let customer = CustomerRepository::new(state.pool.clone())
        .find_by_id(customer_id)
        .await?;

    let outstanding = outstanding_for(&state, customer_id).await?;
    let preview = preview_impact(
        &customer.name,
        customer.credit_limit,
        outstanding,
        Money::new(request.amount),
    );

    Ok(Json(preview.into()))
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// Most recent transactions across all customers
pub async fn list_recent(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let limit = query.limit.unwrap_or(20).clamp(1, 200);
    let transactions = TransactionRepository::new(state.pool.clone())
        .list_recent(limit)
        .await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// The calling staff member's entries for the current IST day
pub async fn list_today(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let today = today_window(Utc::now());
    let transactions = TransactionRepository::new(state.pool.clone()).list_all().await?;

    let mine: Vec<TransactionResponse> = transactions
        .into_iter()
        .filter(|t| t.staff_name == claims.name && today.contains(t.created_at))
        .map(Into::into)
        .collect();

    Ok(Json(mine))
}

/// Hard-deletes a transaction. Admin only.
pub async fn delete_transaction(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&claims)?;

    TransactionRepository::new(state.pool.clone())
        .delete(TransactionId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "deleted": id })))
}
