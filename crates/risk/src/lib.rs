//! Creditline Risk - Position risk math
//!
//! Pure functions over collateral/debt baskets:
//! - `health`: basket valuation and the threshold-weighted health factor
//! - `capacity`: maximum additional borrow and the dual borrow guards
//! - `liquidation`: health-factor tiers, seizure and penalty split
//! - `solver`: closed-form liquidation price and what-if price simulation
//!
//! Every operation is synchronous and side-effect-free; the caller supplies a
//! consistent price snapshot and receives fresh results.

pub mod capacity;
pub mod error;
pub mod health;
pub mod liquidation;
pub mod solver;

pub use capacity::{check_borrow, max_borrowable_usd, BorrowCapacity, MIN_HEALTH_FACTOR};
pub use error::RiskError;
pub use health::{compute_health_factor, HealthFactorResult};
pub use liquidation::{
    calculate_liquidation, tier_for_health_factor, LiquidationCalcResult, LiquidationTier,
    LIQUIDATOR_SHARE,
};
pub use solver::{liquidation_price, simulate_price_impact};
