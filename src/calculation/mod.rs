//! Calculation logic for the Salary Formula Engine.
//!
//! This module contains the pure calculation functions: base salary
//! resolution, performance bonus lookup, commission tier matching, the
//! per-kind gross pay evaluation, and the statutory deduction pipeline.
//! Nothing in here performs I/O or logging; every function is a
//! deterministic function of its inputs.

mod base_salary;
mod commission;
mod deductions;
mod evaluate;
mod performance;

pub use base_salary::resolve_base_salary;
pub use commission::{commission_amount, match_commission_tier};
pub use deductions::{
    StatutoryDeductions, flat_tax_rate, monthly_tax_exemption, statutory_deductions,
};
pub use evaluate::evaluate;
pub use performance::{fixed_performance_factor, mixed_performance_factor, performance_bonus};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole currency units, halves away from zero.
///
/// All derived amounts (bonuses, commission, withholdings, net pay) are
/// rounded to whole units; directly tabulated amounts (hours x rate,
/// pieces x rate) are kept exact.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
