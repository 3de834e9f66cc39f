//! Pre-built test data for common entities

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::Money;

/// Common rupee amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical diesel fill for a truck
    pub fn diesel_fill() -> Money {
        Money::from_rupees(4500)
    }

    /// A typical two-wheeler petrol top-up
    pub fn petrol_topup() -> Money {
        Money::from_rupees(300)
    }

    /// A typical fleet credit limit
    pub fn fleet_limit() -> Money {
        Money::from_rupees(50000)
    }

    /// A typical partial repayment
    pub fn partial_payment() -> Money {
        Money::from_rupees(10000)
    }
}

/// Fixed instants for deterministic window tests
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Noon IST on 15 March 2025
    pub fn mid_march() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 6, 30, 0).unwrap()
    }

    /// Noon IST on 1 January 2025
    pub fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 6, 30, 0).unwrap()
    }
}

/// Common string data
pub struct StringFixtures;

impl StringFixtures {
    pub fn vehicle_number() -> &'static str {
        "MH 12 AB 1234"
    }

    pub fn staff_name() -> &'static str {
        "Ravi"
    }

    pub fn phone_number() -> &'static str {
        "9876543210"
    }
}
