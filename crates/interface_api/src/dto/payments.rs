//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::Money;
use domain_ledger::{Payment, PaymentMethod};

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub customer_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: Money,
    pub method: PaymentMethod,
    pub staff_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: *payment.id.as_uuid(),
            customer_id: *payment.customer_id.as_uuid(),
            amount: payment.amount,
            method: payment.method,
            staff_name: payment.staff_name,
            notes: payment.notes,
            created_at: payment.created_at,
        }
    }
}
