//! Fuel credit transactions
//!
//! A transaction records fuel dispensed on credit. Rows are immutable
//! once created; the only mutation is an admin hard delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CustomerId, Money, TransactionId};

use crate::error::LedgerError;

/// Fuel dispensed on credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Petrol,
    Diesel,
    /// Engine oil
    Oil,
}

impl FuelType {
    /// All fuel types, in menu order
    pub fn all() -> [FuelType; 3] {
        [FuelType::Petrol, FuelType::Diesel, FuelType::Oil]
    }

    /// Storage/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Oil => "oil",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "oil" => Ok(FuelType::Oil),
            other => Err(LedgerError::Validation {
                field: "fuel_type".to_string(),
                message: format!("unknown fuel type: {other}"),
            }),
        }
    }
}

/// A vehicle registration number, normalized to uppercase
///
/// Free-text by design: registration formats vary and the original entry
/// flow never validated them, only uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleNumber(String);

impl VehicleNumber {
    /// Normalizes the input (trim + uppercase)
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` when the input is blank.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LedgerError> {
        let normalized = raw.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(LedgerError::Validation {
                field: "vehicle_number".to_string(),
                message: "vehicle number required".to_string(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fuel-on-credit ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelTransaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Owning customer
    pub customer_id: CustomerId,
    /// Vehicle that took the fuel
    pub vehicle_number: VehicleNumber,
    /// Credit amount (positive at entry time)
    pub amount: Money,
    /// What was dispensed
    pub fuel_type: FuelType,
    /// Display-name snapshot of the staff member who recorded the entry.
    /// Not a live reference; renames do not rewrite history.
    pub staff_name: String,
    /// Free-text notes
    pub notes: Option<String>,
    /// Server-assigned creation time
    pub created_at: DateTime<Utc>,
}

impl FuelTransaction {
    /// Creates a new transaction stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` for a non-positive amount.
    pub fn new(
        customer_id: CustomerId,
        vehicle_number: VehicleNumber,
        amount: Money,
        fuel_type: FuelType,
        staff_name: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation {
                field: "amount".to_string(),
                message: "amount must be positive".to_string(),
            });
        }

        Ok(Self {
            id: TransactionId::new_v7(),
            customer_id,
            vehicle_number,
            amount,
            fuel_type,
            staff_name: staff_name.into(),
            notes: None,
            created_at: Utc::now(),
        })
    }

    /// Attaches notes
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
    use rust_decimal_macros::dec;

    #[test]
    fn test_vehicle_number_normalized() {
        let v = VehicleNumber::new("  mh 12 ab 1234 ").unwrap();
        assert_eq!(v.as_str(), "MH 12 AB 1234");
    }

    #[test]
    fn test_blank_vehicle_number_rejected() {
        assert!(VehicleNumber::new("   ").is_err());
    }

    #[test]
    fn test_transaction_new() {
        let txn = FuelTransaction::new(
            CustomerId::new(),
            VehicleNumber::new("MH 12 AB 1234").unwrap(),
            Money::new(dec!(1500)),
            FuelType::Diesel,
            "Ravi",
        )
        .unwrap();

        assert_eq!(txn.amount.amount(), dec!(1500));
        assert_eq!(txn.fuel_type, FuelType::Diesel);
        assert_eq!(txn.staff_name, "Ravi");
        assert!(txn.notes.is_none());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let zero = FuelTransaction::new(
            CustomerId::new(),
            VehicleNumber::new("GJ 01 AB 1111").unwrap(),
            Money::zero(),
            FuelType::Petrol,
            "Ravi",
        );
        assert!(matches!(zero, Err(LedgerError::Validation { field, .. }) if field == "amount"));

        let negative = FuelTransaction::new(
            CustomerId::new(),
            VehicleNumber::new("GJ 01 AB 1111").unwrap(),
            Money::from_rupees(-10),
            FuelType::Petrol,
            "Ravi",
        );
        assert!(negative.is_err());
    }

    #[test]
    fn test_fuel_type_round_trip() {
        for fuel in FuelType::all() {
            let parsed: FuelType = fuel.as_str().parse().unwrap();
            assert_eq!(parsed, fuel);
        }
        assert!("kerosene".parse::<FuelType>().is_err());
    }
}
