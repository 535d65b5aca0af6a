//! Position inputs - validated collateral and debt records
//!
//! Each engine call receives fresh copies of these records and returns fresh
//! results; the engine retains nothing between calls. Validation happens here,
//! at the boundary, so the math crates never see negative amounts or an LTV
//! above its liquidation threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tier::CreditTier;

/// Position input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("{symbol}: amount cannot be negative: {amount}")]
    NegativeAmount { symbol: String, amount: Decimal },

    #[error("{symbol}: price cannot be negative: {price}")]
    NegativePrice { symbol: String, price: Decimal },

    #[error("{symbol}: invalid collateral params: {reason}")]
    InvalidCollateralParams { symbol: String, reason: String },
}

/// One collateral holding, priced in USD, with its per-asset risk parameters.
///
/// # Invariant
/// `loan_to_value <= liquidation_threshold < 1`; amount and price >= 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralPosition {
    pub symbol: String,
    pub amount: Decimal,
    pub price_usd: Decimal,
    pub loan_to_value: Decimal,
    pub liquidation_threshold: Decimal,
    pub liquidation_penalty: Decimal,
    pub tier: CreditTier,
}

impl CollateralPosition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        price_usd: Decimal,
        loan_to_value: Decimal,
        liquidation_threshold: Decimal,
        liquidation_penalty: Decimal,
        tier: CreditTier,
    ) -> Result<Self, PositionError> {
        let symbol = symbol.into();
        if amount < Decimal::ZERO {
            return Err(PositionError::NegativeAmount { symbol, amount });
        }
        if price_usd < Decimal::ZERO {
            return Err(PositionError::NegativePrice {
                symbol,
                price: price_usd,
            });
        }
        if loan_to_value < Decimal::ZERO || loan_to_value > liquidation_threshold {
            return Err(PositionError::InvalidCollateralParams {
                symbol,
                reason: format!(
                    "loan_to_value {} must be in [0, liquidation_threshold {}]",
                    loan_to_value, liquidation_threshold
                ),
            });
        }
        if liquidation_threshold >= Decimal::ONE {
            return Err(PositionError::InvalidCollateralParams {
                symbol,
                reason: format!(
                    "liquidation_threshold {} must be < 1",
                    liquidation_threshold
                ),
            });
        }
        if liquidation_penalty < Decimal::ZERO {
            return Err(PositionError::InvalidCollateralParams {
                symbol,
                reason: format!("liquidation_penalty {} must be >= 0", liquidation_penalty),
            });
        }
        Ok(Self {
            symbol,
            amount,
            price_usd,
            loan_to_value,
            liquidation_threshold,
            liquidation_penalty,
            tier,
        })
    }

    /// Market value of the holding: amount × price.
    pub fn value_usd(&self) -> Decimal {
        self.amount * self.price_usd
    }

    /// Liquidation-threshold-weighted value. This answers "can the position
    /// still be held", as opposed to the LTV-weighted "how much could be
    /// borrowed against it".
    pub fn weighted_value_usd(&self) -> Decimal {
        self.value_usd() * self.liquidation_threshold
    }

    /// LTV-weighted borrowable value.
    pub fn borrowable_value_usd(&self) -> Decimal {
        self.value_usd() * self.loan_to_value
    }
}

/// One debt holding, priced in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPosition {
    pub symbol: String,
    pub amount: Decimal,
    pub price_usd: Decimal,
}

impl DebtPosition {
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        price_usd: Decimal,
    ) -> Result<Self, PositionError> {
        let symbol = symbol.into();
        if amount < Decimal::ZERO {
            return Err(PositionError::NegativeAmount { symbol, amount });
        }
        if price_usd < Decimal::ZERO {
            return Err(PositionError::NegativePrice {
                symbol,
                price: price_usd,
            });
        }
        Ok(Self {
            symbol,
            amount,
            price_usd,
        })
    }

    /// Market value of the debt: amount × price.
    pub fn value_usd(&self) -> Decimal {
        self.amount * self.price_usd
    }
}
