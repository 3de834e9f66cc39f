//! Property-based test data generators

use proptest::prelude::*;

use core_kernel::Money;
use domain_ledger::{FuelType, PaymentMethod};

/// Positive amounts in paise, up to one crore rupees
pub fn positive_paise_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Amounts in paise, positive or negative
pub fn paise_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_paise_strategy().prop_map(Money::from_paise)
}

/// Money values of either sign
pub fn money_strategy() -> impl Strategy<Value = Money> {
    paise_strategy().prop_map(Money::from_paise)
}

/// Any fuel type
pub fn fuel_type_strategy() -> impl Strategy<Value = FuelType> {
    prop_oneof![
        Just(FuelType::Petrol),
        Just(FuelType::Diesel),
        Just(FuelType::Oil),
    ]
}

/// Any payment method
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Upi),
        Just(PaymentMethod::BankTransfer),
        Just(PaymentMethod::Cheque),
    ]
}

/// Plausible vehicle registration numbers
pub fn vehicle_number_strategy() -> impl Strategy<Value = String> {
    ("[A-Z]{2}", 1u8..=99, "[A-Z]{2}", 1000u16..=9999)
        .prop_map(|(state, district, series, number)| {
            format!("{state} {district:02} {series} {number}")
        })
}
