//! Custom test assertions for domain types

use core_kernel::Money;
use domain_ledger::Standing;

/// Asserts that a Money value equals the given rupee amount
pub fn assert_rupees(actual: Money, rupees: i64) {
    assert_eq!(
        actual,
        Money::from_rupees(rupees),
        "expected ₹{rupees}, got {actual}"
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: Money) {
    assert!(money.is_zero(), "expected zero, got {money}");
}

/// Asserts the expected standing with a readable failure message
pub fn assert_standing(actual: Standing, expected: Standing) {
    assert_eq!(
        actual, expected,
        "expected standing {:?}, got {:?}",
        expected, actual
    );
}
