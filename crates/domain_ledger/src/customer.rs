//! Customer (khata) accounts
//!
//! A customer is a known credit account holder. The credit limit is
//! advisory: exceeding it is flagged, never blocked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money};

use crate::error::LedgerError;

/// A credit account holder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Advisory credit limit (non-negative)
    pub credit_limit: Money,
    /// User id of the creator
    pub created_by: Option<String>,
    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer account
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if the name is blank or the
    /// credit limit is negative.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        credit_limit: Money,
    ) -> Result<Self, LedgerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::Validation {
                field: "name".to_string(),
                message: "customer name required".to_string(),
            });
        }
        if credit_limit.is_negative() {
            return Err(LedgerError::Validation {
                field: "credit_limit".to_string(),
                message: "credit limit cannot be negative".to_string(),
            });
        }

        Ok(Self {
            id,
            name,
            phone: None,
            address: None,
            credit_limit,
            created_by: None,
            created_at: Utc::now(),
        })
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Records who created the account
    pub fn created_by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }

    /// Updates the credit limit
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` for a negative limit.
    pub fn update_credit_limit(&mut self, limit: Money) -> Result<(), LedgerError> {
        if limit.is_negative() {
            return Err(LedgerError::Validation {
                field: "credit_limit".to_string(),
                message: "credit limit cannot be negative".to_string(),
            });
        }
        self.credit_limit = limit;
        Ok(())
    }

    /// Updates contact details; `None` values leave the field unchanged
    pub fn update_contact(&mut self, phone: Option<String>, address: Option<String>) {
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let customer =
            Customer::new(CustomerId::new(), "ABC Transport", Money::from_rupees(50000)).unwrap();

        assert_eq!(customer.name, "ABC Transport");
        assert_eq!(customer.credit_limit, Money::from_rupees(50000));
        assert!(customer.phone.is_none());
    }

    #[test]
    fn test_customer_name_trimmed() {
        let customer =
            Customer::new(CustomerId::new(), "  Sharma Logistics  ", Money::zero()).unwrap();
        assert_eq!(customer.name, "Sharma Logistics");
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Customer::new(CustomerId::new(), "   ", Money::zero());
        assert!(matches!(result, Err(LedgerError::Validation { field, .. }) if field == "name"));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let result = Customer::new(CustomerId::new(), "Patel Brothers", Money::from_rupees(-1));
        assert!(
            matches!(result, Err(LedgerError::Validation { field, .. }) if field == "credit_limit")
        );
    }

    #[test]
    fn test_zero_limit_allowed() {
        // Zero limits exist in the wild; classification handles them explicitly
        let customer = Customer::new(CustomerId::new(), "Walk-in", Money::zero()).unwrap();
        assert!(customer.credit_limit.is_zero());
    }

    #[test]
    fn test_update_contact_partial() {
        let mut customer = Customer::new(CustomerId::new(), "ABC", Money::zero())
            .unwrap()
            .with_phone("9876543210");

        customer.update_contact(None, Some("MG Road, Pune".to_string()));

        assert_eq!(customer.phone.as_deref(), Some("9876543210"));
        assert_eq!(customer.address.as_deref(), Some("MG Road, Pune"));
    }
}
