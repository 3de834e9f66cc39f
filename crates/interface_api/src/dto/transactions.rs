//! Transaction DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::Money;
use domain_ledger::{FuelTransaction, FuelType, LimitPreview, Standing};

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub customer_id: Uuid,
    pub vehicle_number: String,
    pub amount: Decimal,
    pub fuel_type: FuelType,
    pub notes: Option<String>,
}

/// Pre-commit impact check for a proposed entry
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub customer_id: Uuid,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_number: String,
    pub amount: Money,
    pub fuel_type: FuelType,
    pub staff_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<FuelTransaction> for TransactionResponse {
    fn from(txn: FuelTransaction) -> Self {
        Self {
            id: *txn.id.as_uuid(),
            customer_id: *txn.customer_id.as_uuid(),
            vehicle_number: txn.vehicle_number.to_string(),
            amount: txn.amount,
            fuel_type: txn.fuel_type,
            staff_name: txn.staff_name,
            notes: txn.notes,
            created_at: txn.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub projected: Money,
    pub standing: Standing,
    pub exceeds_by: Option<Money>,
    pub warning: Option<String>,
}

impl From<LimitPreview> for PreviewResponse {
    fn from(preview: LimitPreview) -> Self {
        Self {
            projected: preview.projected,
            standing: preview.standing,
            exceeds_by: preview.exceeds_by,
            warning: preview.warning,
        }
    }
}

/// Created transaction together with the post-commit standing
#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    pub transaction: TransactionResponse,
    pub preview: PreviewResponse,
}
