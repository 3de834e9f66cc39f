//! Customer DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::Money;
use domain_ledger::{AccountSummary, Customer, Standing};

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub credit_limit: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub credit_limit: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub credit_limit: Money,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: *customer.id.as_uuid(),
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
            credit_limit: customer.credit_limit,
            created_at: customer.created_at,
        }
    }
}

/// Customer row in the accounts list, with the derived balance
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub credit_limit: Money,
    pub outstanding: Money,
    pub outstanding_display: String,
    pub standing: Standing,
}

impl From<AccountSummary> for AccountResponse {
    fn from(summary: AccountSummary) -> Self {
        Self {
            id: *summary.customer.id.as_uuid(),
            name: summary.customer.name,
            phone: summary.customer.phone,
            credit_limit: summary.customer.credit_limit,
            outstanding: summary.outstanding,
            outstanding_display: summary.outstanding.to_string(),
            standing: summary.standing,
        }
    }
}

/// One customer with their full ledger
#[derive(Debug, Serialize)]
pub struct CustomerDetailResponse {
    pub customer: CustomerResponse,
    pub transactions: Vec<super::transactions::TransactionResponse>,
    pub payments: Vec<super::payments::PaymentResponse>,
    pub outstanding: Money,
    pub standing: Standing,
}

/// Reminder deep link for a customer's outstanding balance
#[derive(Debug, Serialize)]
pub struct ReminderLinkResponse {
    pub outstanding: Money,
    pub message: String,
    pub whatsapp_url: String,
}
