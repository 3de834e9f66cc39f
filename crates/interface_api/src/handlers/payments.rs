//! Payment handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use core_kernel::{CustomerId, Money, PaymentId};
use domain_ledger::Payment;
use infra_db::{CustomerRepository, PaymentRepository};

use crate::auth::{require_admin, Claims};
use crate::dto::payments::*;
use crate::error::ApiError;
use crate::AppState;

/// Records a payment against a customer's balance
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let customer_id = CustomerId::from_uuid(request.customer_id);
    // Reject payments against unknown customers up front
    CustomerRepository::new(state.pool.clone())
        .find_by_id(customer_id)
        .await?;

    let payment = Payment::new(
        customer_id,
        Money::new(request.amount),
        request.method,
        &claims.name,
    )?;
    let payment = match request.notes {
        Some(notes) if !notes.trim().is_empty() => payment.with_notes(notes.trim()),
        _ => payment,
    };

    PaymentRepository::new(state.pool.clone()).record(&payment).await?;

    Ok(Json(payment.into()))
}

/// Hard-deletes a payment. Admin only.
pub async fn delete_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&claims)?;

    PaymentRepository::new(state.pool.clone())
        .delete(PaymentId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "deleted": id })))
}
