//! Rate engine errors

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("Invalid input: {what} = {value}")]
    InvalidInput { what: String, value: Decimal },

    /// A negative effective rate reached the accrual step. Rates are
    /// validated non-negative upstream, so this is an invariant violation
    /// (a programming error), not a user error.
    #[error("Negative effective rate reached accrual: {rate}")]
    InvalidRate { rate: Decimal },
}

impl RateError {
    pub(crate) fn invalid_input(what: &str, value: Decimal) -> Self {
        Self::InvalidInput {
            what: what.to_string(),
            value,
        }
    }
}
