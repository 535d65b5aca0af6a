//! Accrual engine - compounding index advance and balance derivation
//!
//! Balances are never stored post-interest; they are derived on demand as
//! `principal * current_index / entry_index`. The index itself only moves
//! forward: zero elapsed time is the exact identity, and a negative rate at
//! this point is an upstream bug, not a runtime case we tolerate.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// Outcome of advancing an account's accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// Index after the elapsed period. Never below the previous index.
    pub new_index: Decimal,
    /// `principal * new_index / entry_index`
    pub current_balance: Decimal,
    /// `current_balance - principal`
    pub interest_delta: Decimal,
}

/// Advance a compounding index over elapsed time:
/// `new_index = last_index * (1 + per_second_rate)^elapsed_seconds`.
///
/// `elapsed_seconds = 0` returns `last_index` unchanged, exactly.
pub fn accrue_index(
    last_index: Decimal,
    per_second_rate: Decimal,
    elapsed_seconds: u64,
) -> Result<Decimal, RateError> {
    if last_index <= Decimal::ZERO {
        return Err(RateError::invalid_input("last_index", last_index));
    }
    if per_second_rate < Decimal::ZERO {
        tracing::error!(rate = %per_second_rate, "negative effective rate reached accrual");
        return Err(RateError::InvalidRate {
            rate: per_second_rate,
        });
    }
    if elapsed_seconds == 0 {
        return Ok(last_index);
    }
    // The exponent must survive the i64 conversion; beyond that the cast
    // would flip negative and compute a reciprocal, shrinking the index
    if elapsed_seconds > i64::MAX as u64 {
        return Err(RateError::invalid_input(
            "elapsed_seconds",
            Decimal::from(elapsed_seconds),
        ));
    }

    let growth = (Decimal::ONE + per_second_rate)
        .checked_powi(elapsed_seconds as i64)
        .ok_or_else(|| {
            RateError::invalid_input("elapsed_seconds", Decimal::from(elapsed_seconds))
        })?;
    last_index.checked_mul(growth).ok_or_else(|| {
        RateError::invalid_input("elapsed_seconds", Decimal::from(elapsed_seconds))
    })
}

/// Derive a balance from the index ratio:
/// `principal * current_index / entry_index`.
pub fn current_balance(
    principal: Decimal,
    entry_index: Decimal,
    current_index: Decimal,
) -> Result<Decimal, RateError> {
    if principal < Decimal::ZERO {
        return Err(RateError::invalid_input("principal", principal));
    }
    if entry_index <= Decimal::ZERO {
        return Err(RateError::invalid_input("entry_index", entry_index));
    }
    if current_index < entry_index {
        // The index never decreases; a current index below the entry index
        // means an upstream accounting bug
        return Err(RateError::invalid_input("current_index", current_index));
    }
    Ok(principal * current_index / entry_index)
}

/// Advance the index and derive the account's balance in one step.
pub fn accrue_balance(
    principal: Decimal,
    entry_index: Decimal,
    last_index: Decimal,
    per_second_rate: Decimal,
    elapsed_seconds: u64,
) -> Result<AccrualResult, RateError> {
    let new_index = accrue_index(last_index, per_second_rate, elapsed_seconds)?;
    let balance = current_balance(principal, entry_index, new_index)?;
    Ok(AccrualResult {
        new_index,
        current_balance: balance,
        interest_delta: balance - principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::per_second_rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_elapsed_is_identity() {
        let index = dec!(1.0837261);
        let result = accrue_index(index, per_second_rate(dec!(0.07)), 0).unwrap();
        assert_eq!(result, index);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let index = dec!(1.05);
        let result = accrue_index(index, Decimal::ZERO, 86_400).unwrap();
        assert_eq!(result, index);
    }

    #[test]
    fn test_index_never_decreases() {
        let rate = per_second_rate(dec!(0.07));
        let mut index = Decimal::ONE;
        for _ in 0..10 {
            let next = accrue_index(index, rate, 3_600).unwrap();
            assert!(next >= index);
            index = next;
        }
        assert!(index > Decimal::ONE);
    }

    #[test]
    fn test_negative_rate_is_invariant_violation() {
        let result = accrue_index(Decimal::ONE, dec!(-0.000000001), 60);
        assert!(matches!(result, Err(RateError::InvalidRate { .. })));
    }

    #[test]
    fn test_elapsed_beyond_i64_rejected_not_shrunk() {
        // A cast of u64::MAX to i64 would go negative and compute the
        // reciprocal, returning a decreased index with no error
        let result = accrue_index(dec!(1.0), dec!(0.000000002), u64::MAX);
        assert!(matches!(result, Err(RateError::InvalidInput { .. })));
    }

    #[test]
    fn test_growth_overflow_is_an_error_not_a_panic() {
        // Absurd per-second rate: 2^1000 exceeds the Decimal range
        let result = accrue_index(dec!(1.0), Decimal::ONE, 1_000);
        assert!(matches!(result, Err(RateError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_positive_index_rejected() {
        assert!(accrue_index(Decimal::ZERO, Decimal::ZERO, 60).is_err());
        assert!(accrue_index(dec!(-1), Decimal::ZERO, 60).is_err());
    }

    #[test]
    fn test_one_year_of_seconds_approximates_apr() {
        // Per-second compounding of 5% APR over a full year lands slightly
        // above 5% (compounding) but below 5.2%
        let rate = per_second_rate(dec!(0.05));
        let index = accrue_index(Decimal::ONE, rate, crate::SECONDS_PER_YEAR as u64).unwrap();
        assert!(index > dec!(1.05));
        assert!(index < dec!(1.0513));
    }

    #[test]
    fn test_current_balance_from_index_ratio() {
        // Entered at index 1.00, index now 1.10: 1000 owes 1100
        let balance = current_balance(dec!(1000), dec!(1.00), dec!(1.10)).unwrap();
        assert_eq!(balance, dec!(1100));
    }

    #[test]
    fn test_current_balance_rejects_shrinking_index() {
        let result = current_balance(dec!(1000), dec!(1.10), dec!(1.05));
        assert!(matches!(result, Err(RateError::InvalidInput { .. })));
    }

    #[test]
    fn test_accrue_balance_zero_elapsed_has_zero_delta() {
        let result =
            accrue_balance(dec!(1000), Decimal::ONE, Decimal::ONE, per_second_rate(dec!(0.07)), 0)
                .unwrap();
        assert_eq!(result.new_index, Decimal::ONE);
        assert_eq!(result.current_balance, dec!(1000));
        assert_eq!(result.interest_delta, Decimal::ZERO);
    }

    #[test]
    fn test_accrue_balance_grows_with_time() {
        let rate = per_second_rate(dec!(0.10));
        let day = 86_400u64;
        let one_day = accrue_balance(dec!(1000), Decimal::ONE, Decimal::ONE, rate, day).unwrap();
        let two_days =
            accrue_balance(dec!(1000), Decimal::ONE, Decimal::ONE, rate, 2 * day).unwrap();

        assert!(one_day.interest_delta > Decimal::ZERO);
        assert!(two_days.interest_delta > one_day.interest_delta);
        // ~0.0274% per day on 1000: in the neighborhood of 0.27
        assert!(one_day.interest_delta > dec!(0.27));
        assert!(one_day.interest_delta < dec!(0.28));
    }
}
