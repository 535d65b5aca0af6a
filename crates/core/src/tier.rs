//! Credit tiers - Borrower classification and the canonical per-tier table
//!
//! Tier parameters are defined exactly once here. Every engine component
//! (rate discounting, borrow capacity, liquidation buffers) reads this table;
//! no call site carries its own copy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Borrower credit classification, best to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CreditTier {
    Diamond,
    Gold,
    Silver,
    Bronze,
    /// No attestation on file - most conservative parameters
    Unrated,
}

/// Per-tier risk parameters.
///
/// All values are annualized fractions or plain ratios:
/// - `max_ltv`: cap on loan-to-value for new borrows
/// - `rate_discount`: subtracted from the curve borrow rate (floored downstream)
/// - `min_collateral_ratio`: minimum collateral/debt ratio at origination
/// - `liquidation_buffer`: extra margin added to liquidation thresholds by
///   the calling service when scheduling margin calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTierParams {
    pub max_ltv: Decimal,
    pub rate_discount: Decimal,
    pub min_collateral_ratio: Decimal,
    pub liquidation_buffer: Decimal,
}

impl CreditTier {
    /// All tiers, best to worst.
    pub const ALL: [CreditTier; 5] = [
        CreditTier::Diamond,
        CreditTier::Gold,
        CreditTier::Silver,
        CreditTier::Bronze,
        CreditTier::Unrated,
    ];

    /// The canonical tier table. Read-only, looked up by tier, never mutated.
    pub fn params(&self) -> CreditTierParams {
        match self {
            CreditTier::Diamond => CreditTierParams {
                max_ltv: Decimal::from_parts(80, 0, 0, false, 2), // 0.80
                rate_discount: Decimal::from_parts(150, 0, 0, false, 4), // 0.0150
                min_collateral_ratio: Decimal::from_parts(120, 0, 0, false, 2), // 1.20
                liquidation_buffer: Decimal::from_parts(10, 0, 0, false, 2), // 0.10
            },
            CreditTier::Gold => CreditTierParams {
                max_ltv: Decimal::from_parts(75, 0, 0, false, 2), // 0.75
                rate_discount: Decimal::from_parts(100, 0, 0, false, 4), // 0.0100
                min_collateral_ratio: Decimal::from_parts(130, 0, 0, false, 2), // 1.30
                liquidation_buffer: Decimal::from_parts(8, 0, 0, false, 2), // 0.08
            },
            CreditTier::Silver => CreditTierParams {
                max_ltv: Decimal::from_parts(70, 0, 0, false, 2), // 0.70
                rate_discount: Decimal::from_parts(50, 0, 0, false, 4), // 0.0050
                min_collateral_ratio: Decimal::from_parts(140, 0, 0, false, 2), // 1.40
                liquidation_buffer: Decimal::from_parts(5, 0, 0, false, 2), // 0.05
            },
            CreditTier::Bronze => CreditTierParams {
                max_ltv: Decimal::from_parts(60, 0, 0, false, 2), // 0.60
                rate_discount: Decimal::from_parts(25, 0, 0, false, 4), // 0.0025
                min_collateral_ratio: Decimal::from_parts(150, 0, 0, false, 2), // 1.50
                liquidation_buffer: Decimal::from_parts(3, 0, 0, false, 2), // 0.03
            },
            CreditTier::Unrated => CreditTierParams {
                max_ltv: Decimal::from_parts(50, 0, 0, false, 2), // 0.50
                rate_discount: Decimal::ZERO,
                min_collateral_ratio: Decimal::from_parts(175, 0, 0, false, 2), // 1.75
                liquidation_buffer: Decimal::ZERO,
            },
        }
    }
}

impl Default for CreditTier {
    fn default() -> Self {
        CreditTier::Unrated
    }
}
