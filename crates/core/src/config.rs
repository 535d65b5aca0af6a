//! Engine configuration - rate models and per-asset collateral parameters
//!
//! Configuration is supplied by external collaborators (governance, asset
//! listings) and consumed read-only. Unknown assets fall back to an explicit
//! default model chosen at construction time, never to an implicit lookup
//! deep inside a formula.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid rate model: {0}")]
    InvalidRateModel(String),

    #[error("Invalid collateral params: {0}")]
    InvalidCollateralParams(String),
}

/// How the borrow rate responds to pool utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateModelKind {
    /// Flat rate, utilization is ignored
    Fixed,
    /// Two-segment linear curve with a slope change at the kink
    VariableKinked,
    /// Kinked curve whose parameters are refreshed from an oracle upstream;
    /// evaluated identically to `VariableKinked` once parameters arrive here
    OracleLinked,
}

/// Interest rate model parameters. All rates are non-negative annualized
/// fractions (0.02 = 2% APR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRateModelConfig {
    pub kind: RateModelKind,
    /// Borrow rate at zero utilization
    pub base_rate: Decimal,
    /// Slope below the kink
    pub multiplier: Decimal,
    /// Utilization at which the slope changes, in [0, 1]
    pub kink: Decimal,
    /// Slope above the kink
    pub jump_multiplier: Decimal,
    /// Share of borrow interest retained by the protocol, in [0, 1)
    pub reserve_factor: Decimal,
}

impl InterestRateModelConfig {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kink < Decimal::ZERO || self.kink > Decimal::ONE {
            return Err(ConfigError::InvalidRateModel(format!(
                "kink must be in [0, 1], got {}",
                self.kink
            )));
        }
        for (name, rate) in [
            ("base_rate", self.base_rate),
            ("multiplier", self.multiplier),
            ("jump_multiplier", self.jump_multiplier),
            ("reserve_factor", self.reserve_factor),
        ] {
            if rate < Decimal::ZERO {
                return Err(ConfigError::InvalidRateModel(format!(
                    "{} must be non-negative, got {}",
                    name, rate
                )));
            }
        }
        if self.reserve_factor >= Decimal::ONE {
            return Err(ConfigError::InvalidRateModel(format!(
                "reserve_factor must be < 1, got {}",
                self.reserve_factor
            )));
        }
        Ok(())
    }
}

impl Default for InterestRateModelConfig {
    /// The documented default model used for unconfigured assets:
    /// 2% base, 10% slope to an 80% kink, 50% jump slope, 10% reserve factor.
    fn default() -> Self {
        Self {
            kind: RateModelKind::VariableKinked,
            base_rate: Decimal::from_parts(2, 0, 0, false, 2), // 0.02
            multiplier: Decimal::from_parts(10, 0, 0, false, 2), // 0.10
            kink: Decimal::from_parts(80, 0, 0, false, 2),     // 0.80
            jump_multiplier: Decimal::from_parts(50, 0, 0, false, 2), // 0.50
            reserve_factor: Decimal::from_parts(10, 0, 0, false, 2), // 0.10
        }
    }
}

/// Per-asset collateral parameters.
///
/// # Invariant
/// `loan_to_value <= liquidation_threshold < 1` - an asset can never be
/// borrowed against harder than it can be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralParams {
    pub loan_to_value: Decimal,
    pub liquidation_threshold: Decimal,
    pub liquidation_penalty: Decimal,
}

impl CollateralParams {
    pub fn new(
        loan_to_value: Decimal,
        liquidation_threshold: Decimal,
        liquidation_penalty: Decimal,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            loan_to_value,
            liquidation_threshold,
            liquidation_penalty,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loan_to_value < Decimal::ZERO {
            return Err(ConfigError::InvalidCollateralParams(format!(
                "loan_to_value must be non-negative, got {}",
                self.loan_to_value
            )));
        }
        if self.loan_to_value > self.liquidation_threshold {
            return Err(ConfigError::InvalidCollateralParams(format!(
                "loan_to_value {} exceeds liquidation_threshold {}",
                self.loan_to_value, self.liquidation_threshold
            )));
        }
        if self.liquidation_threshold >= Decimal::ONE {
            return Err(ConfigError::InvalidCollateralParams(format!(
                "liquidation_threshold must be < 1, got {}",
                self.liquidation_threshold
            )));
        }
        if self.liquidation_penalty < Decimal::ZERO {
            return Err(ConfigError::InvalidCollateralParams(format!(
                "liquidation_penalty must be non-negative, got {}",
                self.liquidation_penalty
            )));
        }
        Ok(())
    }
}

/// Read-only configuration registry handed to the engine's callers at
/// construction time.
///
/// The default rate model is explicit: an unconfigured asset gets
/// `default_rate_model`, not some other asset's configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    default_rate_model: InterestRateModelConfig,
    rate_models: HashMap<String, InterestRateModelConfig>,
    collateral_params: HashMap<String, CollateralParams>,
}

impl EngineConfig {
    /// Create a registry with the given default model for unconfigured assets.
    pub fn new(default_rate_model: InterestRateModelConfig) -> Result<Self, ConfigError> {
        default_rate_model.validate()?;
        Ok(Self {
            default_rate_model,
            rate_models: HashMap::new(),
            collateral_params: HashMap::new(),
        })
    }

    /// Register a rate model for an asset.
    pub fn with_rate_model(
        mut self,
        symbol: impl Into<String>,
        model: InterestRateModelConfig,
    ) -> Result<Self, ConfigError> {
        model.validate()?;
        self.rate_models.insert(symbol.into().to_uppercase(), model);
        Ok(self)
    }

    /// Register collateral parameters for an asset.
    pub fn with_collateral_params(
        mut self,
        symbol: impl Into<String>,
        params: CollateralParams,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        self.collateral_params
            .insert(symbol.into().to_uppercase(), params);
        Ok(self)
    }

    /// Rate model for an asset, falling back to the explicit default.
    pub fn rate_model(&self, symbol: &str) -> &InterestRateModelConfig {
        self.rate_models
            .get(&symbol.to_uppercase())
            .unwrap_or(&self.default_rate_model)
    }

    /// Collateral parameters for an asset, if configured. Callers supply
    /// their own documented fallback when absent.
    pub fn collateral_params(&self, symbol: &str) -> Option<&CollateralParams> {
        self.collateral_params.get(&symbol.to_uppercase())
    }

    /// The default model used for unconfigured assets.
    pub fn default_rate_model(&self) -> &InterestRateModelConfig {
        &self.default_rate_model
    }
}
