//! Statement DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_ledger::Statement;

use super::customers::CustomerResponse;
use super::payments::PaymentResponse;
use super::transactions::TransactionResponse;

/// Date range query; open ends default to "everything so far"
#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct StatementResponse {
    pub customer: CustomerResponse,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub transactions: Vec<TransactionResponse>,
    pub payments: Vec<PaymentResponse>,
    pub total_credited: Money,
    pub total_paid: Money,
    pub net_change: Money,
}

impl From<Statement> for StatementResponse {
    fn from(statement: Statement) -> Self {
        Self {
            customer: statement.customer.into(),
            start: statement.period.start,
            end: statement.period.end,
            transactions: statement.transactions.into_iter().map(Into::into).collect(),
            payments: statement.payments.into_iter().map(Into::into).collect(),
            total_credited: statement.total_credited,
            total_paid: statement.total_paid,
            net_change: statement.net_change,
        }
    }
}
