//! Borrow capacity - how much additional debt a position may take on
//!
//! Two independent guards protect a borrow, and both must pass:
//! 1. raw capacity - the LTV-weighted collateral must cover the request;
//! 2. safety floor - the projected health factor must stay above
//!    `MIN_HEALTH_FACTOR` even when raw capacity is sufficient.

use creditline_core::{CollateralPosition, CreditTier, DebtPosition};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RiskError;
use crate::health::compute_health_factor;

/// Minimum projected health factor for a new borrow.
pub const MIN_HEALTH_FACTOR: Decimal = Decimal::from_parts(120, 0, 0, false, 2); // 1.20

/// Successful borrow check outcome, returned so callers can surface headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowCapacity {
    pub max_borrowable_usd: Decimal,
    pub requested_usd: Decimal,
    /// Health factor after the requested borrow. `Decimal::MAX` when the
    /// projected position would still carry no debt (zero request, no debt).
    pub projected_health_factor: Decimal,
}

/// Maximum additional USD debt the basket supports:
/// `sum(amount * price * min(asset_ltv, tier_max_ltv)) - existing_debt`,
/// floored at 0.
///
/// The per-asset LTV and the tier cap combine via `min` - the more
/// conservative of the two always governs.
pub fn max_borrowable_usd(
    collateral: &[CollateralPosition],
    existing_debt_usd: Decimal,
    tier: CreditTier,
) -> Decimal {
    let tier_max_ltv = tier.params().max_ltv;
    let borrowable: Decimal = collateral
        .iter()
        .map(|c| c.value_usd() * c.loan_to_value.min(tier_max_ltv))
        .sum();

    (borrowable - existing_debt_usd).max(Decimal::ZERO)
}

/// Validate a requested USD borrow against capacity and the safety floor.
///
/// The projected health factor treats the new borrow as USD-priced debt
/// added to the existing basket.
pub fn check_borrow(
    collateral: &[CollateralPosition],
    debts: &[DebtPosition],
    requested_usd: Decimal,
    tier: CreditTier,
) -> Result<BorrowCapacity, RiskError> {
    if requested_usd < Decimal::ZERO {
        return Err(RiskError::invalid_input("requested_usd", requested_usd));
    }

    let existing_debt_usd: Decimal = debts.iter().map(|d| d.value_usd()).sum();
    let available = max_borrowable_usd(collateral, existing_debt_usd, tier);

    // Guard 1: raw capacity
    if requested_usd > available {
        tracing::debug!(
            requested = %requested_usd,
            available = %available,
            tier = %tier,
            "borrow rejected: insufficient collateral"
        );
        return Err(RiskError::InsufficientCollateral {
            requested: requested_usd,
            available,
        });
    }

    // Guard 2: projected health factor against the safety floor
    let projected = project_health_factor(collateral, debts, requested_usd);
    if projected < MIN_HEALTH_FACTOR {
        tracing::debug!(
            projected = %projected,
            minimum = %MIN_HEALTH_FACTOR,
            "borrow rejected: projected health factor below floor"
        );
        return Err(RiskError::HealthFactorTooLow {
            projected,
            minimum: MIN_HEALTH_FACTOR,
        });
    }

    Ok(BorrowCapacity {
        max_borrowable_usd: available,
        requested_usd,
        projected_health_factor: projected,
    })
}

/// Health factor with `additional_debt_usd` stacked onto the debt basket.
fn project_health_factor(
    collateral: &[CollateralPosition],
    debts: &[DebtPosition],
    additional_debt_usd: Decimal,
) -> Decimal {
    let current = compute_health_factor(collateral, debts);
    let total_debt = current.borrow_value_usd + additional_debt_usd;
    if total_debt.is_zero() {
        return Decimal::MAX;
    }
    current.weighted_collateral_value_usd / total_debt
}
