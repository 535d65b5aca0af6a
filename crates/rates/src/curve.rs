//! Rate curve evaluation - utilization to borrow/supply rate
//!
//! The variable model is a two-segment linear curve: a gentle slope up to the
//! kink, a steep jump slope beyond it. Utilization may transiently exceed 1
//! (withdrawals racing borrows), so the domain is [0, infinity).

use creditline_core::{CreditTier, InterestRateModelConfig, RateModelKind};
use rust_decimal::Decimal;

use crate::error::RateError;

/// Floor for tier-discounted borrow rates, annualized. A discount never
/// pushes financing cost to zero or below.
pub const DEFAULT_RATE_FLOOR: Decimal = Decimal::from_parts(2, 0, 0, false, 2); // 0.02

/// Pool utilization: borrows / deposits, 0 when the pool is empty.
pub fn utilization(total_borrows: Decimal, total_deposits: Decimal) -> Result<Decimal, RateError> {
    if total_borrows < Decimal::ZERO {
        return Err(RateError::invalid_input("total_borrows", total_borrows));
    }
    if total_deposits < Decimal::ZERO {
        return Err(RateError::invalid_input("total_deposits", total_deposits));
    }
    if total_deposits.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(total_borrows / total_deposits)
}

/// Annualized borrow rate at the given utilization.
///
/// - `Fixed`: the base rate, utilization ignored.
/// - `VariableKinked` / `OracleLinked`: `base + u * multiplier` up to the
///   kink, then `base + kink * multiplier + (u - kink) * jump_multiplier`.
///   The two segments agree exactly at `u = kink`.
pub fn borrow_rate(
    model: &InterestRateModelConfig,
    utilization: Decimal,
) -> Result<Decimal, RateError> {
    if utilization < Decimal::ZERO {
        return Err(RateError::invalid_input("utilization", utilization));
    }

    let rate = match model.kind {
        RateModelKind::Fixed => model.base_rate,
        RateModelKind::VariableKinked | RateModelKind::OracleLinked => {
            if utilization <= model.kink {
                model.base_rate + utilization * model.multiplier
            } else {
                model.base_rate
                    + model.kink * model.multiplier
                    + (utilization - model.kink) * model.jump_multiplier
            }
        }
    };
    Ok(rate)
}

/// Annualized supply rate: `borrow_rate * u * (1 - reserve_factor)`.
///
/// Exactly 0 at zero utilization - no depositor earns on an unborrowed pool.
pub fn supply_rate(
    model: &InterestRateModelConfig,
    utilization: Decimal,
) -> Result<Decimal, RateError> {
    let borrow = borrow_rate(model, utilization)?;
    Ok(borrow * utilization * (Decimal::ONE - model.reserve_factor))
}

/// Borrow rate after subtracting the tier's discount, clamped to `floor`.
pub fn tier_adjusted_borrow_rate(
    model: &InterestRateModelConfig,
    utilization: Decimal,
    tier: CreditTier,
    floor: Decimal,
) -> Result<Decimal, RateError> {
    let rate = borrow_rate(model, utilization)? - tier.params().rate_discount;
    Ok(rate.max(floor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn kinked_model() -> InterestRateModelConfig {
        InterestRateModelConfig {
            kind: RateModelKind::VariableKinked,
            base_rate: dec!(0.02),
            multiplier: dec!(0.1),
            kink: dec!(0.8),
            jump_multiplier: dec!(0.5),
            reserve_factor: dec!(0.10),
        }
    }

    #[test]
    fn test_borrow_rate_below_kink() {
        // 0.02 + 0.5 * 0.1 = 0.07, exactly
        let rate = borrow_rate(&kinked_model(), dec!(0.5)).unwrap();
        assert_eq!(rate, dec!(0.07));
    }

    #[test]
    fn test_borrow_rate_above_kink() {
        // 0.02 + 0.8 * 0.1 + 0.1 * 0.5 = 0.15, exactly
        let rate = borrow_rate(&kinked_model(), dec!(0.9)).unwrap();
        assert_eq!(rate, dec!(0.15));
    }

    #[test]
    fn test_borrow_rate_continuous_at_kink() {
        let model = kinked_model();
        // Left formula at the kink
        let left = model.base_rate + model.kink * model.multiplier;
        // Right formula with zero excess
        let right = model.base_rate + model.kink * model.multiplier
            + (model.kink - model.kink) * model.jump_multiplier;
        assert_eq!(left, right);
        assert_eq!(borrow_rate(&model, model.kink).unwrap(), left);
    }

    #[test]
    fn test_borrow_rate_monotone_in_utilization() {
        let model = kinked_model();
        let samples = [
            dec!(0), dec!(0.1), dec!(0.3), dec!(0.5), dec!(0.79), dec!(0.8),
            dec!(0.81), dec!(0.9), dec!(1.0), dec!(1.2),
        ];
        let mut last = Decimal::MIN;
        for u in samples {
            let rate = borrow_rate(&model, u).unwrap();
            assert!(rate >= last, "rate decreased at u={}", u);
            last = rate;
        }
    }

    #[test]
    fn test_utilization_above_one_allowed() {
        // Transient over-utilization is a defined input, not an error
        let rate = borrow_rate(&kinked_model(), dec!(1.1)).unwrap();
        assert_eq!(rate, dec!(0.02) + dec!(0.08) + dec!(0.3) * dec!(0.5));
    }

    #[test]
    fn test_negative_utilization_rejected() {
        let result = borrow_rate(&kinked_model(), dec!(-0.1));
        assert!(matches!(result, Err(RateError::InvalidInput { .. })));
    }

    #[test]
    fn test_fixed_model_ignores_utilization() {
        let model = InterestRateModelConfig {
            kind: RateModelKind::Fixed,
            ..kinked_model()
        };
        assert_eq!(borrow_rate(&model, dec!(0)).unwrap(), dec!(0.02));
        assert_eq!(borrow_rate(&model, dec!(0.95)).unwrap(), dec!(0.02));
    }

    #[test]
    fn test_supply_rate_zero_at_zero_utilization() {
        let rate = supply_rate(&kinked_model(), Decimal::ZERO).unwrap();
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_supply_rate_applies_reserve_factor() {
        // borrow = 0.07, supply = 0.07 * 0.5 * 0.9 = 0.0315
        let rate = supply_rate(&kinked_model(), dec!(0.5)).unwrap();
        assert_eq!(rate, dec!(0.0315));
    }

    #[test]
    fn test_tier_discount_applied() {
        // Gold discount is 0.0100: 0.07 - 0.01 = 0.06
        let rate =
            tier_adjusted_borrow_rate(&kinked_model(), dec!(0.5), CreditTier::Gold, DEFAULT_RATE_FLOOR)
                .unwrap();
        assert_eq!(rate, dec!(0.06));
    }

    #[test]
    fn test_tier_discount_respects_floor() {
        // At zero utilization the curve sits at 0.02; the Diamond discount
        // would push it to 0.005, but the floor holds at 0.02
        let rate = tier_adjusted_borrow_rate(
            &kinked_model(),
            Decimal::ZERO,
            CreditTier::Diamond,
            DEFAULT_RATE_FLOOR,
        )
        .unwrap();
        assert_eq!(rate, DEFAULT_RATE_FLOOR);
    }

    #[test]
    fn test_utilization_helper() {
        assert_eq!(utilization(dec!(50), dec!(100)).unwrap(), dec!(0.5));
        assert_eq!(utilization(dec!(0), dec!(0)).unwrap(), Decimal::ZERO);
        assert!(utilization(dec!(-1), dec!(100)).is_err());
    }
}
