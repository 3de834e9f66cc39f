//! Credit limit standing and entry-time impact previews
//!
//! Limits are advisory. Classification and previews inform staff; they
//! never block an entry from being recorded.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Fraction of the limit at which an account is flagged as near its limit
const NEAR_LIMIT_NUMERATOR: rust_decimal::Decimal = dec!(80);
const NEAR_LIMIT_DENOMINATOR: rust_decimal::Decimal = dec!(100);

/// Where an account stands relative to its credit limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Comfortably within the limit
    Ok,
    /// At or beyond 80% of the limit
    NearLimit,
    /// At or beyond the limit itself
    OverLimit,
}

impl Standing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Standing::Ok => "ok",
            Standing::NearLimit => "near_limit",
            Standing::OverLimit => "over_limit",
        }
    }
}

/// Classifies an outstanding balance against a credit limit.
///
/// Comparisons are cross-multiplied so no division (and no rounding)
/// happens. A non-positive limit cannot be "approached": any positive
/// outstanding is immediately over it, anything else is fine.
pub fn classify(outstanding: Money, limit: Money) -> Standing {
    if !limit.is_positive() {
        return if outstanding.is_positive() {
            Standing::OverLimit
        } else {
            Standing::Ok
        };
    }

    if outstanding >= limit {
        Standing::OverLimit
    } else if outstanding.amount() * NEAR_LIMIT_DENOMINATOR >= limit.amount() * NEAR_LIMIT_NUMERATOR
    {
        Standing::NearLimit
    } else {
        Standing::Ok
    }
}

/// What recording a proposed credit amount would do to an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitPreview {
    /// Outstanding after the proposed entry
    pub projected: Money,
    /// Standing after the proposed entry
    pub standing: Standing,
    /// How far past the limit the projection lands, when it does
    pub exceeds_by: Option<Money>,
    /// Staff-facing warning text, present only when the limit is exceeded
    pub warning: Option<String>,
}

/// Previews the impact of a proposed credit entry.
///
/// The warning text mirrors what staff see on the entry screen; it is
/// advisory and carries the shortfall in rupee formatting.
pub fn preview_impact(
    customer_name: &str,
    credit_limit: Money,
    outstanding: Money,
    proposed: Money,
) -> LimitPreview {
    let projected = outstanding + proposed;
    let standing = classify(projected, credit_limit);

    let exceeds_by = (projected > credit_limit).then(|| projected - credit_limit);
    let warning = exceeds_by.map(|excess| {
        format!(
            "Warning! This will exceed {}'s credit limit by ₹{}",
            customer_name,
            excess.to_inr_string()
        )
    });

    LimitPreview {
        projected,
        standing,
        exceeds_by,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_classify_thresholds() {
        let limit = Money::from_rupees(10000);

        assert_eq!(classify(Money::from_rupees(7999), limit), Standing::Ok);
        assert_eq!(classify(Money::from_rupees(8000), limit), Standing::NearLimit);
        assert_eq!(classify(Money::from_rupees(9999), limit), Standing::NearLimit);
        assert_eq!(classify(Money::from_rupees(10000), limit), Standing::OverLimit);
        assert_eq!(classify(Money::from_rupees(15000), limit), Standing::OverLimit);
    }

    #[test]
    fn test_classify_just_below_near_threshold() {
        // 79.999% must stay Ok; cross-multiplication keeps this exact
        let limit = Money::from_rupees(100000);
        assert_eq!(classify(Money::new(Decimal::new(7999999, 2)), limit), Standing::Ok);
    }

    #[test]
    fn test_zero_limit_is_deterministic() {
        let limit = Money::zero();
        assert_eq!(classify(Money::from_rupees(1), limit), Standing::OverLimit);
        assert_eq!(classify(Money::from_paise(1), limit), Standing::OverLimit);
        assert_eq!(classify(Money::zero(), limit), Standing::Ok);
        assert_eq!(classify(Money::from_rupees(-500), limit), Standing::Ok);
    }

    #[test]
    fn test_negative_outstanding_is_ok() {
        // Overpaid accounts are in credit, never flagged
        assert_eq!(
            classify(Money::from_rupees(-2000), Money::from_rupees(10000)),
            Standing::Ok
        );
    }

    #[test]
    fn test_preview_exceeding_limit() {
        let preview = preview_impact(
            "ABC Transport",
            Money::from_rupees(50000),
            Money::from_rupees(42000),
            Money::from_rupees(10000),
        );

        assert_eq!(preview.projected, Money::from_rupees(52000));
        assert_eq!(preview.standing, Standing::OverLimit);
        assert_eq!(preview.exceeds_by, Some(Money::from_rupees(2000)));
        let warning = preview.warning.unwrap();
        assert!(warning.contains("ABC Transport"));
        assert!(warning.contains("₹2,000"));
    }

    #[test]
    fn test_preview_within_limit_has_no_warning() {
        let preview = preview_impact(
            "ABC Transport",
            Money::from_rupees(50000),
            Money::from_rupees(10000),
            Money::from_rupees(5000),
        );

        assert_eq!(preview.standing, Standing::Ok);
        assert!(preview.exceeds_by.is_none());
        assert!(preview.warning.is_none());
    }

    #[test]
    fn test_preview_exactly_at_limit() {
        // Landing exactly on the limit is OverLimit but not an excess
        let preview = preview_impact(
            "ABC Transport",
            Money::from_rupees(50000),
            Money::from_rupees(45000),
            Money::from_rupees(5000),
        );

        assert_eq!(preview.standing, Standing::OverLimit);
        assert!(preview.exceeds_by.is_none());
        assert!(preview.warning.is_none());
    }

    proptest! {
        #[test]
        fn prop_standing_is_monotonic_in_outstanding(
            limit_paise in 1i64..=10_000_000,
            a_paise in -10_000_000i64..=20_000_000,
            b_paise in -10_000_000i64..=20_000_000,
        ) {
            let limit = Money::from_paise(limit_paise);
            let (lo, hi) = if a_paise <= b_paise {
                (a_paise, b_paise)
            } else {
                (b_paise, a_paise)
            };

            let rank = |s: Standing| match s {
                Standing::Ok => 0,
                Standing::NearLimit => 1,
                Standing::OverLimit => 2,
            };

            prop_assert!(
                rank(classify(Money::from_paise(lo), limit))
                    <= rank(classify(Money::from_paise(hi), limit))
            );
        }

        #[test]
        fn prop_projection_is_sum(
            outstanding in -1_000_000i64..=1_000_000,
            proposed in 1i64..=1_000_000,
        ) {
            let preview = preview_impact(
                "X",
                Money::from_rupees(10000),
                Money::from_paise(outstanding),
                Money::from_paise(proposed),
            );
            prop_assert_eq!(
                preview.projected,
                Money::from_paise(outstanding) + Money::from_paise(proposed)
            );
        }
    }
}
