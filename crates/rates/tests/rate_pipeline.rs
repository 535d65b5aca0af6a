//! Pool state -> curve -> per-second rate -> accrual, end to end

use anyhow::Result;
use creditline_core::{CreditTier, InterestRateModelConfig};
use creditline_rates::{
    accrue_balance, apr_from_apy, apy_from_apr, borrow_rate, per_second_rate, supply_rate,
    tier_adjusted_borrow_rate, utilization, DEFAULT_RATE_FLOOR, SECONDS_PER_YEAR,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn pool_state_to_accrued_borrow_balance() -> Result<()> {
    let model = InterestRateModelConfig::default();

    // 4.2M borrowed of a 6M pool
    let u = utilization(dec!(4200000), dec!(6000000))?;
    assert_eq!(u, dec!(0.7));

    // Below the 80% kink: 0.02 + 0.7 * 0.10 = 0.09
    let borrow = borrow_rate(&model, u)?;
    assert_eq!(borrow, dec!(0.09));

    // Depositors earn less than borrowers pay
    let supply = supply_rate(&model, u)?;
    assert!(supply < borrow);

    // 30 days of per-second compounding on a 50,000 principal
    let rate = per_second_rate(borrow);
    let result = accrue_balance(
        dec!(50000),
        Decimal::ONE,
        Decimal::ONE,
        rate,
        30 * 86_400,
    )?;

    // Simple interest would be 50,000 * 0.09 * 30/365 = 369.86; compounding
    // lands slightly above
    assert!(result.interest_delta > dec!(369.86));
    assert!(result.interest_delta < dec!(372));
    assert!(result.new_index > Decimal::ONE);
    Ok(())
}

#[test]
fn tier_discount_flows_through_accrual() -> Result<()> {
    let model = InterestRateModelConfig::default();
    let u = dec!(0.7);

    let standard = borrow_rate(&model, u)?;
    let discounted = tier_adjusted_borrow_rate(&model, u, CreditTier::Diamond, DEFAULT_RATE_FLOOR)?;
    assert_eq!(standard - discounted, dec!(0.0150));

    // A year of accrual at each rate: the discount compounds into a smaller debt
    let year = SECONDS_PER_YEAR as u64;
    let full = accrue_balance(
        dec!(10000),
        Decimal::ONE,
        Decimal::ONE,
        per_second_rate(standard),
        year,
    )?;
    let cheap = accrue_balance(
        dec!(10000),
        Decimal::ONE,
        Decimal::ONE,
        per_second_rate(discounted),
        year,
    )?;
    assert!(cheap.interest_delta < full.interest_delta);
    Ok(())
}

#[test]
fn quoted_apy_round_trips_to_apr() -> Result<()> {
    // The dashboard quotes APY from the curve's APR; the inverse recovers it
    let model = InterestRateModelConfig::default();
    let apr = borrow_rate(&model, dec!(0.5))?;

    let apy = apy_from_apr(apr, SECONDS_PER_YEAR)?;
    assert!(apy > apr);

    let back = apr_from_apy(apy, SECONDS_PER_YEAR)?;
    assert!((back - apr).abs() < dec!(0.000001));
    Ok(())
}
