//! Creditline Rates - Interest-rate math
//!
//! Pure functions for the interest side of the engine:
//! - `curve`: pool utilization -> borrow/supply rate (kinked linear model)
//! - `convert`: APR <-> APY and per-second rates (365-day convention)
//! - `accrual`: compounding index advance and balance derivation
//!
//! Everything here is synchronous and side-effect-free. Elapsed time is an
//! explicit input; this crate never reads the clock.

pub mod accrual;
pub mod convert;
pub mod curve;
pub mod error;

pub use accrual::{accrue_balance, accrue_index, current_balance, AccrualResult};
pub use convert::{apr_from_apy, apy_from_apr, per_second_rate, SECONDS_PER_YEAR};
pub use curve::{
    borrow_rate, supply_rate, tier_adjusted_borrow_rate, utilization, DEFAULT_RATE_FLOOR,
};
pub use error::RateError;
