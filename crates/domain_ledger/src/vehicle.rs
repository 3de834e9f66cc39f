//! The vehicle registry
//!
//! Vehicle numbers seen at entry time are remembered per customer so the
//! entry form can suggest them. The registry is keyed by the normalized
//! number; re-entering a known number refreshes its owning customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CustomerId, VehicleRecordId};

use crate::error::LedgerError;
use crate::transaction::VehicleNumber;

/// Broad vehicle category, used for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Truck,
    Car,
    Bike,
    Auto,
    Other,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Truck => "truck",
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
            VehicleType::Auto => "auto",
            VehicleType::Other => "other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truck" => Ok(VehicleType::Truck),
            "car" => Ok(VehicleType::Car),
            "bike" => Ok(VehicleType::Bike),
            "auto" => Ok(VehicleType::Auto),
            "other" => Ok(VehicleType::Other),
            other => Err(LedgerError::validation(
                "vehicle_type",
                format!("unknown vehicle type: {other}"),
            )),
        }
    }
}

/// A remembered vehicle number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleRecordId,
    pub vehicle_number: VehicleNumber,
    /// Customer the number was last seen with
    pub customer_id: Option<CustomerId>,
    pub vehicle_type: Option<VehicleType>,
    pub created_at: DateTime<Utc>,
}

impl VehicleRecord {
    pub fn new(vehicle_number: VehicleNumber) -> Self {
        Self {
            id: VehicleRecordId::new_v7(),
            vehicle_number,
            customer_id: None,
            vehicle_type: None,
            created_at: Utc::now(),
        }
    }

    pub fn for_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn of_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }
}

/// Minimum query length before suggestions are offered
pub const SUGGESTION_MIN_CHARS: usize = 2;

/// Filters records whose number contains the query, case-insensitively.
///
/// Queries shorter than [`SUGGESTION_MIN_CHARS`] yield nothing; the
/// entry form would otherwise suggest the whole registry on the first
/// keystroke.
pub fn suggest<'a>(records: &'a [VehicleRecord], query: &str) -> Vec<&'a VehicleRecord> {
    let query = query.trim().to_uppercase();
    if query.chars().count() < SUGGESTION_MIN_CHARS {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| r.vehicle_number.as_str().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<VehicleRecord> {
        ["MH 12 AB 1234", "MH 14 CD 5678", "GJ 01 XY 9999"]
            .into_iter()
            .map(|n| VehicleRecord::new(VehicleNumber::new(n).unwrap()))
            .collect()
    }

    #[test]
    fn test_suggest_matches_substring() {
        let records = registry();
        let hits = suggest(&records, "mh 1");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_suggest_requires_two_chars() {
        let records = registry();
        assert!(suggest(&records, "m").is_empty());
        assert!(suggest(&records, "").is_empty());
    }

    #[test]
    fn test_suggest_case_insensitive() {
        let records = registry();
        let hits = suggest(&records, "gj 01");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].vehicle_number.as_str(), "GJ 01 XY 9999");
    }

    #[test]
    fn test_vehicle_type_round_trip() {
        for s in ["truck", "car", "bike", "auto", "other"] {
            let t: VehicleType = s.parse().unwrap();
            assert_eq!(t.as_str(), s);
        }
        assert!("boat".parse::<VehicleType>().is_err());
    }
}
