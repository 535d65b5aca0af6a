//! Risk engine errors

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("Invalid input: {what} = {value}")]
    InvalidInput { what: String, value: Decimal },

    #[error("Insufficient collateral: requested {requested}, available {available}")]
    InsufficientCollateral {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Health factor too low: projected {projected}, minimum {minimum}")]
    HealthFactorTooLow {
        projected: Decimal,
        minimum: Decimal,
    },

    #[error("Position is not liquidatable: health factor {health_factor} >= 1")]
    NotLiquidatable { health_factor: Decimal },
}

impl RiskError {
    pub(crate) fn invalid_input(what: &str, value: Decimal) -> Self {
        Self::InvalidInput {
            what: what.to_string(),
            value,
        }
    }
}
