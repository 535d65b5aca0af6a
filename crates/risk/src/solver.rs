//! Liquidation-price solver and what-if price simulation
//!
//! The health factor is linear in any single asset's price (others held
//! fixed), so the price at which it crosses 1.0 is a direct algebraic
//! inversion - no iterative search:
//!
//! `P* = (borrow_value - sum of other assets' weighted value) / (amount * threshold)`
//!
//! Positions carrying the target symbol reprice together; a basket may hold
//! the same asset in several tranches with different thresholds.

use creditline_core::{CollateralPosition, DebtPosition};
use rust_decimal::Decimal;

use crate::error::RiskError;
use crate::health::{compute_health_factor, HealthFactorResult};

/// Price of `symbol` at which the position's health factor equals 1.0.
///
/// Floored at 0: when the rest of the basket alone covers the debt, the
/// position stays safe even at a zero price.
pub fn liquidation_price(
    collateral: &[CollateralPosition],
    debts: &[DebtPosition],
    symbol: &str,
) -> Result<Decimal, RiskError> {
    let mut target_weight = Decimal::ZERO; // sum of amount * threshold over the target asset
    let mut others_weighted = Decimal::ZERO;

    for position in collateral {
        if position.symbol.eq_ignore_ascii_case(symbol) {
            target_weight += position.amount * position.liquidation_threshold;
        } else {
            others_weighted += position.weighted_value_usd();
        }
    }

    if target_weight.is_zero() {
        return Err(RiskError::invalid_input(
            &format!("weighted amount of {}", symbol),
            target_weight,
        ));
    }

    let borrow_value_usd: Decimal = debts.iter().map(|d| d.value_usd()).sum();
    let price = (borrow_value_usd - others_weighted) / target_weight;
    Ok(price.max(Decimal::ZERO))
}

/// Re-run the health-factor computation with one asset's price replaced by a
/// hypothetical value. Used for what-if previews; nothing is mutated.
pub fn simulate_price_impact(
    collateral: &[CollateralPosition],
    debts: &[DebtPosition],
    symbol: &str,
    hypothetical_price: Decimal,
) -> Result<HealthFactorResult, RiskError> {
    if hypothetical_price < Decimal::ZERO {
        return Err(RiskError::invalid_input(
            "hypothetical_price",
            hypothetical_price,
        ));
    }
    if !collateral
        .iter()
        .any(|c| c.symbol.eq_ignore_ascii_case(symbol))
    {
        return Err(RiskError::invalid_input(
            &format!("no collateral position for {}", symbol),
            Decimal::ZERO,
        ));
    }

    let repriced: Vec<CollateralPosition> = collateral
        .iter()
        .cloned()
        .map(|mut c| {
            if c.symbol.eq_ignore_ascii_case(symbol) {
                c.price_usd = hypothetical_price;
            }
            c
        })
        .collect();

    Ok(compute_health_factor(&repriced, debts))
}
