//! Payments against a customer's outstanding balance
//!
//! Payments are unallocated: they reduce the account balance as a whole
//! and are never matched to individual transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CustomerId, Money, PaymentId};

use crate::error::LedgerError;

/// How a payment was collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Upi,
    BankTransfer,
    Cheque,
}

impl PaymentMethod {
    pub fn all() -> [PaymentMethod; 4] {
        [
            PaymentMethod::Cash,
            PaymentMethod::Upi,
            PaymentMethod::BankTransfer,
            PaymentMethod::Cheque,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Upi => "upi",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Cheque => "cheque",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "upi" => Ok(PaymentMethod::Upi),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "cheque" => Ok(PaymentMethod::Cheque),
            other => Err(LedgerError::validation(
                "payment_method",
                format!("unknown payment method: {other}"),
            )),
        }
    }
}

/// A payment received against an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub customer_id: CustomerId,
    /// Amount received (positive)
    pub amount: Money,
    pub method: PaymentMethod,
    /// Display-name snapshot of the staff member who recorded the payment
    pub staff_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` for a non-positive amount.
    pub fn new(
        customer_id: CustomerId,
        amount: Money,
        method: PaymentMethod,
        staff_name: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::validation("amount", "amount must be positive"));
        }

        Ok(Self {
            id: PaymentId::new_v7(),
            customer_id,
            amount,
            method,
            staff_name: staff_name.into(),
            notes: None,
            created_at: Utc::now(),
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Overrides the creation time (used when rehydrating from storage)
    pub fn recorded_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_new() {
        let payment = Payment::new(
            CustomerId::new(),
            Money::from_rupees(5000),
            PaymentMethod::Upi,
            "Meena",
        )
        .unwrap();

        assert_eq!(payment.amount, Money::from_rupees(5000));
        assert_eq!(payment.method, PaymentMethod::Upi);
    }

    #[test]
    fn test_zero_payment_rejected() {
        let result = Payment::new(CustomerId::new(), Money::zero(), PaymentMethod::Cash, "Meena");
        assert!(matches!(result, Err(LedgerError::Validation { field, .. }) if field == "amount"));
    }

    #[test]
    fn test_method_round_trip() {
        for method in PaymentMethod::all() {
            let parsed: PaymentMethod = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("crypto".parse::<PaymentMethod>().is_err());
    }
}
