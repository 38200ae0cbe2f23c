//! Base salary resolution.
//!
//! The base salary for a calculation comes from the formula template unless
//! the monthly parameters carry a personal override, which lets an
//! employee's agreed base differ from the shared formula.

use rust_decimal::Decimal;

use crate::models::{CalculationParams, SalaryFormula};

/// Determines the base salary to use for one calculation.
///
/// The override in `params` takes precedence over the formula template's
/// `base_salary`; with no override the template value is used as-is.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_base_salary;
/// use salary_engine::models::{CalculationParams, FormulaKind, SalaryFormula};
/// use rust_decimal::Decimal;
///
/// let mut formula = SalaryFormula::empty("f1", FormulaKind::Fixed);
/// formula.base_salary = Decimal::from(8000);
///
/// let params = CalculationParams {
///     base_salary_override: Some(Decimal::from(9500)),
///     ..CalculationParams::default()
/// };
/// assert_eq!(resolve_base_salary(&formula, &params), Decimal::from(9500));
/// ```
pub fn resolve_base_salary(formula: &SalaryFormula, params: &CalculationParams) -> Decimal {
    params.base_salary_override.unwrap_or(formula.base_salary)
}
