//! Salary formula model and related types.
//!
//! A [`SalaryFormula`] is a named, reusable compensation strategy. Its
//! [`FormulaKind`] selects which fields the calculation consults; fields for
//! other kinds are carried along but ignored, so a formula that switched
//! kinds may keep stale values without ever causing an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The calculation strategy a formula uses.
///
/// Exactly one kind applies per formula; `evaluate` matches on this
/// exhaustively, so adding a kind is a compile-time checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaKind {
    /// Fixed monthly salary plus position allowance and optional
    /// performance bonus.
    Fixed,
    /// Pay per hour worked, with an overtime multiplier.
    Hourly,
    /// Pay per completed unit.
    Piece,
    /// Fixed floor payment plus a tiered percentage of sales.
    Commission,
    /// Base salary, allowance and performance bonus plus overtime pay.
    Mixed,
}

/// A single commission tier: a half-open sales interval `[min, max)`
/// mapped to a commission percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTier {
    /// Inclusive lower bound of the sales interval.
    pub min: Decimal,
    /// Exclusive upper bound of the sales interval.
    pub max: Decimal,
    /// Commission rate as a percentage (e.g. `5` for 5%).
    pub rate_percent: Decimal,
}

/// A performance level mapped to a bonus multiplier (e.g. "A" x 1.2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceTier {
    /// The performance level key (e.g. "A", "B", "C").
    pub level: String,
    /// The multiplier applied to the performance bonus for this level.
    pub multiplier: Decimal,
}

/// A named, reusable compensation strategy.
///
/// Formulas are created and edited by an administrator and referenced by id
/// from each employee. Deactivation (`is_active = false`) only hides a
/// formula from new assignment; evaluation stays permitted so historical
/// payrolls can be recalculated.
///
/// # Example
///
/// ```
/// use salary_engine::models::{FormulaKind, SalaryFormula};
/// use rust_decimal::Decimal;
///
/// let formula = SalaryFormula {
///     id: "std_monthly".to_string(),
///     name: "Standard monthly".to_string(),
///     description: "Fixed salary roles".to_string(),
///     kind: FormulaKind::Fixed,
///     base_salary: Decimal::from(8000),
///     position_allowance: Decimal::from(1000),
///     ..SalaryFormula::empty("std_monthly", FormulaKind::Fixed)
/// };
/// assert!(formula.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryFormula {
    /// Unique identifier for the formula.
    pub id: String,
    /// Human-readable formula name.
    #[serde(default)]
    pub name: String,
    /// A description of which roles the formula suits.
    #[serde(default)]
    pub description: String,
    /// The calculation strategy.
    pub kind: FormulaKind,
    /// Fixed monthly base salary (`Fixed`/`Mixed`).
    #[serde(default)]
    pub base_salary: Decimal,
    /// Fixed monthly position allowance (`Fixed`/`Mixed`).
    #[serde(default)]
    pub position_allowance: Decimal,
    /// Pay per regular hour (`Hourly`/`Mixed`).
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours,
    /// typically 1.0 to 3.0 (`Hourly`/`Mixed`).
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Pay per completed unit (`Piece`).
    #[serde(default)]
    pub piece_rate: Decimal,
    /// Fixed floor payment for commission formulas (`Commission`).
    #[serde(default)]
    pub commission_base: Decimal,
    /// Ordered, non-overlapping half-open sales tiers (`Commission`).
    #[serde(default)]
    pub commission_tiers: Vec<CommissionTier>,
    /// Performance levels and their bonus multipliers (`Fixed`/`Mixed`).
    #[serde(default)]
    pub performance_tiers: Vec<PerformanceTier>,
    /// Social insurance withholding as a percentage of base salary.
    #[serde(default)]
    pub social_insurance_rate_percent: Decimal,
    /// Housing fund withholding as a percentage of base salary.
    #[serde(default)]
    pub housing_fund_rate_percent: Decimal,
    /// Whether the formula is offered for new assignment.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::ONE
}

fn default_is_active() -> bool {
    true
}

impl SalaryFormula {
    /// Creates a formula of the given kind with all monetary fields zeroed,
    /// an overtime multiplier of 1 and `is_active = true`.
    ///
    /// Useful as a struct-update base when only a few fields matter.
    pub fn empty(id: impl Into<String>, kind: FormulaKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            kind,
            base_salary: Decimal::ZERO,
            position_allowance: Decimal::ZERO,
            hourly_rate: Decimal::ZERO,
            overtime_multiplier: Decimal::ONE,
            piece_rate: Decimal::ZERO,
            commission_base: Decimal::ZERO,
            commission_tiers: Vec::new(),
            performance_tiers: Vec::new(),
            social_insurance_rate_percent: Decimal::ZERO,
            housing_fund_rate_percent: Decimal::ZERO,
            is_active: true,
        }
    }

    /// Reports authoring problems in the commission tier list.
    ///
    /// Evaluation deliberately keeps the silent-zero behavior for sales
    /// amounts no tier covers, so gaps, overlaps and inverted bounds are
    /// surfaced here for formula-authoring UIs instead. The warnings are
    /// advisory; a formula with warnings still evaluates.
    pub fn tier_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (i, tier) in self.commission_tiers.iter().enumerate() {
            if tier.min >= tier.max {
                warnings.push(format!(
                    "tier {}: empty interval [{}, {})",
                    i, tier.min, tier.max
                ));
            }
        }

        for window in self.commission_tiers.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            if next.min < prev.max {
                warnings.push(format!(
                    "tiers overlap: [{}, {}) and [{}, {})",
                    prev.min, prev.max, next.min, next.max
                ));
            } else if next.min > prev.max {
                warnings.push(format!(
                    "coverage gap between {} and {}: sales in this range earn no commission",
                    prev.max, next.min
                ));
            }
        }

        if let Some(first) = self.commission_tiers.first() {
            if first.min > Decimal::ZERO {
                warnings.push(format!(
                    "coverage gap below {}: sales in this range earn no commission",
                    first.min
                ));
            }
        }

        warnings
    }
}
