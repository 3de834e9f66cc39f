//! Integration tests for the Money type

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn outstanding_stays_exact_over_many_small_entries() {
    // 1000 sequential two-decimal entries must sum without drift,
    // even when the running total has many significant digits.
    let mut total = Money::new(dec!(9_999_999_999_999.99));
    for _ in 0..1000 {
        total += Money::new(dec!(0.01));
    }
    assert_eq!(total.amount(), dec!(10_000_000_000_009.99));
}

#[test]
fn sum_of_credits_minus_payments_is_exact() {
    let credits: Money = (1..=1000).map(|i| Money::from_paise(i)).sum();
    let payments: Money = (1..=500).map(|i| Money::from_paise(i * 2)).sum();

    // sum(1..=1000) paise = 500500; sum of 500 even paise = 250500
    assert_eq!(credits.amount(), dec!(5005.00));
    assert_eq!((credits - payments).amount(), dec!(2500.00));
}

#[test]
fn construction_rounds_to_paise() {
    // round_dp uses banker's rounding; the midpoint goes to the even digit
    let m = Money::new(dec!(10.005));
    assert_eq!(m.amount(), dec!(10.00));
}

#[test]
fn ordering_follows_amount() {
    assert!(Money::from_rupees(100) > Money::from_rupees(50));
    assert!(Money::from_rupees(-1) < Money::zero());
}

#[test]
fn decimal_conversion() {
    let d: Decimal = dec!(42.42);
    let m: Money = d.into();
    assert_eq!(m.amount(), d);
}
