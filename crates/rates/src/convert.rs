//! Rate conversion - simple annual rates to compounded effective yields
//!
//! Convention: a year is exactly 365 days (31,536,000 seconds). Every
//! per-second rate and every accrual downstream inherits this constant, so it
//! lives here and nowhere else.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::RateError;

/// Seconds in a 365-day year. The protocol-wide compounding convention.
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

/// Effective annual yield of a simple annual rate compounded `n` times per
/// year: `(1 + apr/n)^n - 1`.
///
/// Exactly 0 for `apr = 0`. For continuous (per-second) compounding pass
/// `n = SECONDS_PER_YEAR`.
pub fn apy_from_apr(apr: Decimal, periods_per_year: i64) -> Result<Decimal, RateError> {
    if apr < Decimal::ZERO {
        return Err(RateError::invalid_input("apr", apr));
    }
    if periods_per_year < 1 {
        return Err(RateError::invalid_input(
            "periods_per_year",
            Decimal::from(periods_per_year),
        ));
    }
    if apr.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let n = Decimal::from(periods_per_year);
    let per_period = Decimal::ONE + apr / n;
    let compounded = per_period
        .checked_powi(periods_per_year)
        .ok_or_else(|| RateError::invalid_input("apr", apr))?;
    Ok(compounded - Decimal::ONE)
}

/// Inverse of [`apy_from_apr`]: `n * ((1 + apy)^(1/n) - 1)`.
pub fn apr_from_apy(apy: Decimal, periods_per_year: i64) -> Result<Decimal, RateError> {
    if apy < Decimal::ZERO {
        return Err(RateError::invalid_input("apy", apy));
    }
    if periods_per_year < 1 {
        return Err(RateError::invalid_input(
            "periods_per_year",
            Decimal::from(periods_per_year),
        ));
    }
    if apy.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let n = Decimal::from(periods_per_year);
    let root = (Decimal::ONE + apy).powd(Decimal::ONE / n);
    Ok(n * (root - Decimal::ONE))
}

/// Per-second simple rate for continuous accrual: `annual_rate / SECONDS_PER_YEAR`.
pub fn per_second_rate(annual_rate: Decimal) -> Decimal {
    annual_rate / Decimal::from(SECONDS_PER_YEAR)
}
