//! Creditline Core - Domain types for the risk and interest-rate engine
//!
//! This crate contains the fundamental types shared by the math crates:
//! - `CreditTier`: Borrower classification with the canonical per-tier table
//! - `InterestRateModelConfig` / `CollateralParams` / `EngineConfig`: validated
//!   configuration consumed (never mutated) by the engine
//! - `CollateralPosition` / `DebtPosition`: validated engine inputs
//!
//! Validation lives in the constructors here, at the boundary: negative
//! amounts or prices and mis-ordered LTV/threshold pairs never reach the
//! math crates.

pub mod config;
pub mod position;
pub mod tier;

pub use config::{CollateralParams, ConfigError, EngineConfig, InterestRateModelConfig, RateModelKind};
pub use position::{CollateralPosition, DebtPosition, PositionError};
pub use tier::{CreditTier, CreditTierParams};
