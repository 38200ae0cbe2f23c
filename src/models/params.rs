//! Monthly calculation parameters for one employee under one formula.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The monthly inputs for one employee under one formula.
///
/// Every field may be left at its default; absent numeric inputs degrade to
/// zero-valued pay components and an absent performance level simply skips
/// the performance bonus. Fields irrelevant to the formula's kind are
/// ignored.
///
/// # Example
///
/// ```
/// use salary_engine::models::CalculationParams;
/// use rust_decimal::Decimal;
///
/// let params = CalculationParams {
///     hours_worked: Decimal::from(176),
///     overtime_hours: Decimal::from(10),
///     ..CalculationParams::default()
/// };
/// assert_eq!(params.pieces_completed, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Regular hours worked this month (`Hourly`/`Mixed`).
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Overtime hours worked this month (`Hourly`/`Mixed`).
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Units completed this month (`Piece`).
    #[serde(default)]
    pub pieces_completed: Decimal,
    /// Sales amount for this month (`Commission`).
    #[serde(default)]
    pub sales_amount: Decimal,
    /// Performance level key into the formula's performance tiers
    /// (`Fixed`/`Mixed`).
    #[serde(default)]
    pub performance_level: Option<String>,
    /// Overrides the formula's base salary for this calculation only,
    /// letting an employee's personal base differ from the template.
    #[serde(default)]
    pub base_salary_override: Option<Decimal>,
}

impl CalculationParams {
    /// Returns the defaults the monthly parameter-collection form starts
    /// from: a standard 176-hour month at performance level "B".
    pub fn standard_month() -> Self {
        Self {
            hours_worked: Decimal::from(176),
            performance_level: Some("B".to_string()),
            ..Self::default()
        }
    }
}
