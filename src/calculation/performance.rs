//! Performance bonus calculation.
//!
//! Fixed and mixed formulas grant a monthly bonus proportional to base
//! salary, scaled by the multiplier of the employee's performance level.
//! The proportion differs by kind: 20% of base for fixed formulas, 30%
//! for mixed.

use rust_decimal::Decimal;

use super::round_money;
use crate::models::PerformanceTier;

/// Returns the performance scaling factor for fixed formulas (0.20).
pub fn fixed_performance_factor() -> Decimal {
    Decimal::new(2, 1)
}

/// Returns the performance scaling factor for mixed formulas (0.30).
pub fn mixed_performance_factor() -> Decimal {
    Decimal::new(3, 1)
}

/// Computes the performance bonus for a calculation, if any.
///
/// Returns `round(base_salary * factor * multiplier)` when `level` is
/// supplied and matches a tier. An absent level or a level with no matching
/// tier yields `None` rather than an error; the caller simply omits the
/// bonus component.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{fixed_performance_factor, performance_bonus};
/// use salary_engine::models::PerformanceTier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tiers = vec![PerformanceTier {
///     level: "A".to_string(),
///     multiplier: Decimal::from_str("1.2").unwrap(),
/// }];
///
/// let bonus = performance_bonus(
///     Decimal::from(8000),
///     &tiers,
///     Some("A"),
///     fixed_performance_factor(),
/// );
/// assert_eq!(bonus, Some(Decimal::from(1920)));
/// ```
pub fn performance_bonus(
    base_salary: Decimal,
    tiers: &[PerformanceTier],
    level: Option<&str>,
    factor: Decimal,
) -> Option<Decimal> {
    let level = level?;
    let tier = tiers.iter().find(|t| t.level == level)?;
    Some(round_money(base_salary * factor * tier.multiplier))
}
