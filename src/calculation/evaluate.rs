//! Gross pay evaluation.
//!
//! [`evaluate`] is the heart of the engine: it matches exhaustively on the
//! formula's [`FormulaKind`] and produces an ordered pay component breakdown,
//! the gross salary, and a narrative of the calculation. It is total over
//! its domain: every combination of kind and parameter values produces a
//! result, and parameters irrelevant to the kind are silently ignored.

use rust_decimal::Decimal;

use super::{
    commission_amount, fixed_performance_factor, match_commission_tier, mixed_performance_factor,
    performance_bonus, resolve_base_salary,
};
use crate::models::{CalculationParams, CalculationResult, FormulaKind, PayComponent, SalaryFormula};

/// Evaluates a formula against one employee's monthly parameters.
///
/// Pure and deterministic: identical inputs always produce identical
/// results, and nothing is read from or written to shared state. Inactive
/// formulas evaluate normally; deactivation only hides a formula from new
/// assignment, not from recalculation of historical data.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::evaluate;
/// use salary_engine::models::{CalculationParams, FormulaKind, SalaryFormula};
/// use rust_decimal::Decimal;
///
/// let mut formula = SalaryFormula::empty("f1", FormulaKind::Fixed);
/// formula.base_salary = Decimal::from(8000);
/// formula.position_allowance = Decimal::from(1000);
///
/// let result = evaluate(&formula, &CalculationParams::default());
/// assert_eq!(result.gross_salary, Decimal::from(9000));
/// ```
pub fn evaluate(formula: &SalaryFormula, params: &CalculationParams) -> CalculationResult {
    let mut components: Vec<PayComponent> = Vec::new();
    let narrative;

    match formula.kind {
        FormulaKind::Fixed => {
            let base = resolve_base_salary(formula, params);
            components.push(PayComponent::new("base salary", base));
            components.push(PayComponent::new(
                "position allowance",
                formula.position_allowance,
            ));
            if let Some(bonus) = performance_bonus(
                base,
                &formula.performance_tiers,
                params.performance_level.as_deref(),
                fixed_performance_factor(),
            ) {
                components.push(PayComponent::new("performance bonus", bonus));
            }
            narrative = format!(
                "fixed monthly: {} base + {} allowance",
                base, formula.position_allowance
            );
        }

        FormulaKind::Hourly => {
            let regular = params.hours_worked * formula.hourly_rate;
            let overtime =
                params.overtime_hours * formula.hourly_rate * formula.overtime_multiplier;
            components.push(PayComponent::new("regular hours", regular));
            components.push(PayComponent::new("overtime", overtime));
            narrative = format!(
                "{}h x {} + overtime {}h x {} x {}",
                params.hours_worked,
                formula.hourly_rate,
                params.overtime_hours,
                formula.hourly_rate,
                formula.overtime_multiplier
            );
        }

        FormulaKind::Piece => {
            let piece_pay = params.pieces_completed * formula.piece_rate;
            components.push(PayComponent::new("piece pay", piece_pay));
            narrative = format!(
                "{} pieces x {} per piece",
                params.pieces_completed, formula.piece_rate
            );
        }

        FormulaKind::Commission => {
            components.push(PayComponent::new("base floor", formula.commission_base));
            let commission = commission_amount(&formula.commission_tiers, params.sales_amount);
            components.push(PayComponent::new("commission", commission));
            let rate = match_commission_tier(&formula.commission_tiers, params.sales_amount)
                .map(|t| t.rate_percent)
                .unwrap_or(Decimal::ZERO);
            narrative = format!(
                "floor {} + sales {} at {}%",
                formula.commission_base, params.sales_amount, rate
            );
        }

        FormulaKind::Mixed => {
            let base = resolve_base_salary(formula, params);
            components.push(PayComponent::new("base salary", base));
            components.push(PayComponent::new(
                "position allowance",
                formula.position_allowance,
            ));
            if let Some(bonus) = performance_bonus(
                base,
                &formula.performance_tiers,
                params.performance_level.as_deref(),
                mixed_performance_factor(),
            ) {
                components.push(PayComponent::new("performance bonus", bonus));
            }
            if params.overtime_hours > Decimal::ZERO {
                let overtime =
                    params.overtime_hours * formula.hourly_rate * formula.overtime_multiplier;
                components.push(PayComponent::new("overtime", overtime));
            }
            narrative = format!("mixed: {} base + performance + overtime", base);
        }
    }

    let gross_salary = components.iter().map(|c| c.amount).sum();

    CalculationResult {
        gross_salary,
        components,
        narrative,
    }
}
