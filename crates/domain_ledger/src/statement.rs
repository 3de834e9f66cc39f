//! Customer statements over a date range
//!
//! A statement is the slice of one customer's ledger that falls inside
//! an IST calendar-date range, both endpoints inclusive. Open ends
//! default to "everything so far": the start falls back to the Unix
//! epoch, the end to the last instant of today.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::customer::Customer;
use crate::error::LedgerError;
use crate::payment::Payment;
use crate::time::{end_of_day, ist_date, start_of_day, UtcWindow};
use crate::transaction::FuelTransaction;

/// A statement date range as the caller supplied it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    /// First IST calendar date to include; `None` means "from the start"
    pub start: Option<NaiveDate>,
    /// Last IST calendar date to include; `None` means "up to today"
    pub end: Option<NaiveDate>,
}

impl StatementPeriod {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Resolves defaults and converts to an inclusive UTC window
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvertedPeriod` when start is after end.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<UtcWindow, LedgerError> {
        let start_date = self
            .start
            .unwrap_or(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default());
        let end_date = self.end.unwrap_or_else(|| ist_date(now));

        if start_date > end_date {
            return Err(LedgerError::InvertedPeriod);
        }

        Ok(UtcWindow {
            start: start_of_day(start_date),
            end: end_of_day(end_date),
        })
    }
}

/// Keeps only the rows whose timestamp falls inside the window.
///
/// Input order is preserved; the filter never reorders.
pub fn select_range<'a, T>(
    rows: &'a [T],
    window: UtcWindow,
    at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<&'a T> {
    rows.iter().filter(|row| window.contains(at(row))).collect()
}

/// One customer's statement for a resolved period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub customer: Customer,
    pub period: StatementPeriod,
    pub transactions: Vec<FuelTransaction>,
    pub payments: Vec<Payment>,
    /// Credit extended inside the period
    pub total_credited: Money,
    /// Payments received inside the period
    pub total_paid: Money,
    /// Net movement inside the period
    pub net_change: Money,
}

/// Builds a statement from the customer's full ledger.
///
/// # Errors
///
/// Returns `LedgerError::EmptyStatement` when the period contains no
/// rows at all, and `LedgerError::InvertedPeriod` for a backwards range.
pub fn build_statement(
    customer: Customer,
    transactions: &[FuelTransaction],
    payments: &[Payment],
    period: StatementPeriod,
    now: DateTime<Utc>,
) -> Result<Statement, LedgerError> {
    let window = period.resolve(now)?;

    let selected_txns: Vec<FuelTransaction> = select_range(transactions, window, |t| t.created_at)
        .into_iter()
        .cloned()
        .collect();
    let selected_payments: Vec<Payment> = select_range(payments, window, |p| p.created_at)
        .into_iter()
        .cloned()
        .collect();

    if selected_txns.is_empty() && selected_payments.is_empty() {
        tracing::debug!(customer_id = %customer.id, "statement period matched no rows");
        return Err(LedgerError::EmptyStatement);
    }

    let total_credited: Money = selected_txns.iter().map(|t| t.amount).sum();
    let total_paid: Money = selected_payments.iter().map(|p| p.amount).sum();

    Ok(Statement {
        customer,
        period,
        transactions: selected_txns,
        payments: selected_payments,
        total_credited,
        total_paid,
        net_change: total_credited - total_paid,
    })
}
