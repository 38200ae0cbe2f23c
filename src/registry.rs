//! Formula registry.
//!
//! CRUD over the list of salary formulas, behind the [`FormulaRepository`]
//! trait so the pure calculation functions never touch persistence. The
//! in-memory implementation is last-writer-wins; there is no concurrent
//! multi-writer scenario in this system, so no further coordination is
//! needed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CommissionTier, FormulaKind, PerformanceTier, SalaryFormula};

/// A partial update to a formula; `None` fields are left unchanged.
///
/// Mirrors the merge-by-id semantics of a form submitting only the fields
/// the administrator edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormulaPatch {
    /// New formula name.
    #[serde(default)]
    pub name: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New calculation strategy. Fields belonging to the old kind are kept
    /// but ignored by evaluation.
    #[serde(default)]
    pub kind: Option<FormulaKind>,
    /// New base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// New position allowance.
    #[serde(default)]
    pub position_allowance: Option<Decimal>,
    /// New hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// New overtime multiplier.
    #[serde(default)]
    pub overtime_multiplier: Option<Decimal>,
    /// New piece rate.
    #[serde(default)]
    pub piece_rate: Option<Decimal>,
    /// New commission floor.
    #[serde(default)]
    pub commission_base: Option<Decimal>,
    /// Replacement commission tier list.
    #[serde(default)]
    pub commission_tiers: Option<Vec<CommissionTier>>,
    /// Replacement performance tier list.
    #[serde(default)]
    pub performance_tiers: Option<Vec<PerformanceTier>>,
    /// New social insurance percentage.
    #[serde(default)]
    pub social_insurance_rate_percent: Option<Decimal>,
    /// New housing fund percentage.
    #[serde(default)]
    pub housing_fund_rate_percent: Option<Decimal>,
    /// New active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl FormulaPatch {
    fn apply(self, formula: &mut SalaryFormula) {
        if let Some(name) = self.name {
            formula.name = name;
        }
        if let Some(description) = self.description {
            formula.description = description;
        }
        if let Some(kind) = self.kind {
            formula.kind = kind;
        }
        if let Some(base_salary) = self.base_salary {
            formula.base_salary = base_salary;
        }
        if let Some(position_allowance) = self.position_allowance {
            formula.position_allowance = position_allowance;
        }
        if let Some(hourly_rate) = self.hourly_rate {
            formula.hourly_rate = hourly_rate;
        }
        if let Some(overtime_multiplier) = self.overtime_multiplier {
            formula.overtime_multiplier = overtime_multiplier;
        }
        if let Some(piece_rate) = self.piece_rate {
            formula.piece_rate = piece_rate;
        }
        if let Some(commission_base) = self.commission_base {
            formula.commission_base = commission_base;
        }
        if let Some(commission_tiers) = self.commission_tiers {
            formula.commission_tiers = commission_tiers;
        }
        if let Some(performance_tiers) = self.performance_tiers {
            formula.performance_tiers = performance_tiers;
        }
        if let Some(rate) = self.social_insurance_rate_percent {
            formula.social_insurance_rate_percent = rate;
        }
        if let Some(rate) = self.housing_fund_rate_percent {
            formula.housing_fund_rate_percent = rate;
        }
        if let Some(is_active) = self.is_active {
            formula.is_active = is_active;
        }
    }
}

/// Storage interface for salary formulas.
///
/// Payroll generation depends on this trait rather than a concrete store,
/// so hosts can back it with whatever persistence they have.
pub trait FormulaRepository {
    /// Looks up a formula by id.
    fn get(&self, id: &str) -> Option<&SalaryFormula>;

    /// Returns all formulas, active and inactive, in insertion order.
    fn list(&self) -> &[SalaryFormula];

    /// Returns the formulas currently offered for new assignment.
    fn list_active(&self) -> Vec<&SalaryFormula>;

    /// Inserts a formula, replacing any existing formula with the same id.
    fn upsert(&mut self, formula: SalaryFormula);

    /// Applies a partial update to the formula with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FormulaNotFound`] if no formula has that id.
    fn update(&mut self, id: &str, patch: FormulaPatch) -> EngineResult<()>;

    /// Soft-deletes a formula by clearing its active flag.
    ///
    /// The formula stays resolvable by id so historical payrolls can still
    /// be recalculated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FormulaNotFound`] if no formula has that id.
    fn deactivate(&mut self, id: &str) -> EngineResult<()>;

    /// Hard-deletes a formula. Returns true if a formula was removed.
    ///
    /// Employees may still reference the removed id; payroll generation
    /// skips such dangling assignments with a warning.
    fn remove(&mut self, id: &str) -> bool;
}

/// An insertion-ordered, in-memory formula store.
///
/// # Example
///
/// ```
/// use salary_engine::models::{FormulaKind, SalaryFormula};
/// use salary_engine::registry::{FormulaRepository, InMemoryFormulaRegistry};
///
/// let mut registry = InMemoryFormulaRegistry::new();
/// registry.upsert(SalaryFormula::empty("std_monthly", FormulaKind::Fixed));
/// assert!(registry.get("std_monthly").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormulaRegistry {
    formulas: Vec<SalaryFormula>,
}

impl InMemoryFormulaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the given formulas.
    pub fn from_formulas(formulas: Vec<SalaryFormula>) -> Self {
        Self { formulas }
    }
}

impl FormulaRepository for InMemoryFormulaRegistry {
    fn get(&self, id: &str) -> Option<&SalaryFormula> {
        self.formulas.iter().find(|f| f.id == id)
    }

    fn list(&self) -> &[SalaryFormula] {
        &self.formulas
    }

    fn list_active(&self) -> Vec<&SalaryFormula> {
        self.formulas.iter().filter(|f| f.is_active).collect()
    }

    fn upsert(&mut self, formula: SalaryFormula) {
        match self.formulas.iter_mut().find(|f| f.id == formula.id) {
            Some(existing) => *existing = formula,
            None => self.formulas.push(formula),
        }
    }

    fn update(&mut self, id: &str, patch: FormulaPatch) -> EngineResult<()> {
        let formula = self
            .formulas
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| EngineError::FormulaNotFound { id: id.to_string() })?;
        patch.apply(formula);
        Ok(())
    }

    fn deactivate(&mut self, id: &str) -> EngineResult<()> {
        self.update(
            id,
            FormulaPatch {
                is_active: Some(false),
                ..FormulaPatch::default()
            },
        )
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.formulas.len();
        self.formulas.retain(|f| f.id != id);
        self.formulas.len() < before
    }
}
