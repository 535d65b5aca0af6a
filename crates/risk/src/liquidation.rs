//! Liquidation engine - risk tiers, seizure, and penalty split
//!
//! Tier selection is a total, non-overlapping range table over health
//! factors in [0, 1). A position at or above 1.00 is not liquidatable and
//! the engine rejects the attempt outright - it never clamps into a tier.
//!
//! The seized value covers the repaid debt plus a penalty; the penalty is
//! split between the liquidator (larger share) and the protocol treasury.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::RiskError;

/// Liquidator's share of the penalty value; the protocol treasury keeps the
/// remainder.
pub const LIQUIDATOR_SHARE: Decimal = Decimal::from_parts(70, 0, 0, false, 2); // 0.70

const MARGIN_CALL_FLOOR: Decimal = Decimal::from_parts(95, 0, 0, false, 2); // 0.95
const SOFT_FLOOR: Decimal = Decimal::from_parts(90, 0, 0, false, 2); // 0.90
const FORCED_FLOOR: Decimal = Decimal::from_parts(85, 0, 0, false, 2); // 0.85

/// Risk tier by health-factor range, safest to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquidationTier {
    /// HF in [0.95, 1.00): warning only, no seizure
    MarginCall,
    /// HF in [0.90, 0.95): up to 25% of debt may be repaid
    SoftLiquidation,
    /// HF in [0.85, 0.90): up to 50% of debt may be repaid
    ForcedLiquidation,
    /// HF in [0, 0.85): the full debt may be repaid
    FullLiquidation,
}

impl LiquidationTier {
    /// Fraction of outstanding debt repayable in one liquidation action.
    pub fn close_factor(&self) -> Decimal {
        match self {
            LiquidationTier::MarginCall => Decimal::ZERO,
            LiquidationTier::SoftLiquidation => Decimal::from_parts(25, 0, 0, false, 2),
            LiquidationTier::ForcedLiquidation => Decimal::from_parts(50, 0, 0, false, 2),
            LiquidationTier::FullLiquidation => Decimal::ONE,
        }
    }
}

/// Outcome of a liquidation calculation, all values USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationCalcResult {
    pub tier: LiquidationTier,
    /// The tier's close factor
    pub liquidation_percent: Decimal,
    /// Debt covered plus penalty
    pub collateral_seized_usd: Decimal,
    pub liquidator_reward_usd: Decimal,
    pub protocol_fee_usd: Decimal,
    /// Collateral left to the borrower after seizure, floored at 0
    pub returned_to_borrower_usd: Decimal,
}

/// Select the risk tier for a health factor.
///
/// Rejects `hf >= 1.00` with `NotLiquidatable`; negative health factors are
/// invalid inputs (the health engine never produces them).
pub fn tier_for_health_factor(health_factor: Decimal) -> Result<LiquidationTier, RiskError> {
    if health_factor < Decimal::ZERO {
        return Err(RiskError::invalid_input("health_factor", health_factor));
    }
    if health_factor >= Decimal::ONE {
        return Err(RiskError::NotLiquidatable { health_factor });
    }
    let tier = if health_factor >= MARGIN_CALL_FLOOR {
        LiquidationTier::MarginCall
    } else if health_factor >= SOFT_FLOOR {
        LiquidationTier::SoftLiquidation
    } else if health_factor >= FORCED_FLOOR {
        LiquidationTier::ForcedLiquidation
    } else {
        LiquidationTier::FullLiquidation
    };
    Ok(tier)
}

/// Compute the seizure for a position at the given health factor.
///
/// `debt_to_cover = debt * close_factor`;
/// `collateral_seized = debt_to_cover * (1 + penalty)`;
/// the penalty value is split [`LIQUIDATOR_SHARE`] / remainder between
/// liquidator and protocol; whatever collateral is left goes back to the
/// borrower, floored at 0 (a shortfall never creates a claim on the
/// borrower here - bad debt is the insurance layer's problem).
pub fn calculate_liquidation(
    health_factor: Decimal,
    debt_usd: Decimal,
    collateral_usd: Decimal,
    liquidation_penalty: Decimal,
) -> Result<LiquidationCalcResult, RiskError> {
    if debt_usd < Decimal::ZERO {
        return Err(RiskError::invalid_input("debt_usd", debt_usd));
    }
    if collateral_usd < Decimal::ZERO {
        return Err(RiskError::invalid_input("collateral_usd", collateral_usd));
    }
    if liquidation_penalty < Decimal::ZERO {
        return Err(RiskError::invalid_input(
            "liquidation_penalty",
            liquidation_penalty,
        ));
    }

    let tier = tier_for_health_factor(health_factor)?;
    let close_factor = tier.close_factor();

    let debt_to_cover = debt_usd * close_factor;
    let penalty_value = debt_to_cover * liquidation_penalty;
    let collateral_seized_usd = debt_to_cover + penalty_value;

    let liquidator_reward_usd = penalty_value * LIQUIDATOR_SHARE;
    let protocol_fee_usd = penalty_value - liquidator_reward_usd;

    let returned_to_borrower_usd = (collateral_usd - collateral_seized_usd).max(Decimal::ZERO);

    tracing::debug!(
        tier = %tier,
        health_factor = %health_factor,
        seized = %collateral_seized_usd,
        "liquidation computed"
    );

    Ok(LiquidationCalcResult {
        tier,
        liquidation_percent: close_factor,
        collateral_seized_usd,
        liquidator_reward_usd,
        protocol_fee_usd,
        returned_to_borrower_usd,
    })
}
