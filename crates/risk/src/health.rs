//! Collateral valuation and health factor
//!
//! The health factor weights collateral by each asset's liquidation
//! threshold, not its LTV: it answers "can this position still be held",
//! where LTV answers "how much could be borrowed against it".
//!
//! A debt-free position has an infinite health factor and is never
//! liquidatable, regardless of collateral. `Decimal` has no infinity, so the
//! sentinel is `Decimal::MAX`; check with [`HealthFactorResult::is_infinite`].

use creditline_core::{CollateralPosition, DebtPosition};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Valuation summary for one collateral/debt snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFactorResult {
    /// `weighted_collateral_value_usd / borrow_value_usd`, or `Decimal::MAX`
    /// when there is no debt
    pub value: Decimal,
    /// Raw market value of the collateral basket
    pub collateral_value_usd: Decimal,
    /// Liquidation-threshold-weighted collateral value
    pub weighted_collateral_value_usd: Decimal,
    /// Market value of the debt basket
    pub borrow_value_usd: Decimal,
    /// `borrow_value_usd / collateral_value_usd`. 0 whenever the collateral
    /// basket is empty or worthless, even if debt is outstanding - check
    /// `borrow_value_usd` before reading 0 as "unlevered"
    pub weighted_ltv: Decimal,
}

impl HealthFactorResult {
    /// True when the position carries no debt (health factor is the
    /// `Decimal::MAX` sentinel).
    pub fn is_infinite(&self) -> bool {
        self.value == Decimal::MAX
    }

    /// True when the position is below the liquidation boundary.
    pub fn is_liquidatable(&self) -> bool {
        self.value < Decimal::ONE
    }
}

/// Price a basket of collateral against a basket of debts.
///
/// Total over all inputs, including empty baskets: both sums reduce to 0 and
/// the infinity sentinel governs when debt is 0.
pub fn compute_health_factor(
    collateral: &[CollateralPosition],
    debts: &[DebtPosition],
) -> HealthFactorResult {
    let collateral_value_usd: Decimal = collateral.iter().map(|c| c.value_usd()).sum();
    let weighted_collateral_value_usd: Decimal =
        collateral.iter().map(|c| c.weighted_value_usd()).sum();
    let borrow_value_usd: Decimal = debts.iter().map(|d| d.value_usd()).sum();

    let weighted_ltv = if collateral_value_usd.is_zero() {
        Decimal::ZERO
    } else {
        borrow_value_usd / collateral_value_usd
    };

    let value = if borrow_value_usd.is_zero() {
        Decimal::MAX
    } else {
        weighted_collateral_value_usd / borrow_value_usd
    };

    HealthFactorResult {
        value,
        collateral_value_usd,
        weighted_collateral_value_usd,
        borrow_value_usd,
        weighted_ltv,
    }
}
