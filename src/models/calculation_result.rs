//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type capturing the pure
//! output of a formula evaluation: the ordered pay components, the gross
//! salary, and a human-readable narrative of how the figure was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single named pay component (e.g. "base salary", "overtime").
///
/// # Example
///
/// ```
/// use salary_engine::models::PayComponent;
/// use rust_decimal::Decimal;
///
/// let component = PayComponent::new("base salary", Decimal::from(8000));
/// assert_eq!(component.name, "base salary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Human-readable component name.
    pub name: String,
    /// The monetary value of this component.
    pub amount: Decimal,
}

impl PayComponent {
    /// Creates a pay component.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// The pure output of evaluating a formula against monthly parameters.
///
/// Components appear in the order they were computed, which is the order
/// they should be displayed in a pay slip breakdown. Results are ephemeral
/// and recomputed on demand; only the downstream [`super::Payroll`] snapshot
/// is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of all component amounts.
    pub gross_salary: Decimal,
    /// The computed pay components, in computation order.
    pub components: Vec<PayComponent>,
    /// A short human-readable description of how gross pay was derived.
    /// For display and audit only, never for further computation.
    pub narrative: String,
}

impl CalculationResult {
    /// Returns the amount of the named component, if it was computed.
    pub fn component(&self, name: &str) -> Option<Decimal> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.amount)
    }
}
