//! Employee model and related types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an employee is on the active roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed; included in payroll generation.
    Active,
    /// Left or suspended; skipped by payroll generation.
    Inactive,
}

/// An employee on the roster, optionally assigned a salary formula.
///
/// The assignment is by formula id; enforcing that the referenced formula
/// exists is the roster administrator's job, and generation skips dangling
/// references rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Company employee number (e.g. "EMP001").
    pub employee_no: String,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// The date the employee joined.
    pub entry_date: NaiveDate,
    /// Roster status.
    pub status: EmployeeStatus,
    /// The id of the assigned salary formula, if any.
    #[serde(default)]
    pub salary_formula_id: Option<String>,
    /// Personal base salary, superseding the formula template's base
    /// salary when set.
    #[serde(default)]
    pub base_salary_override: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee is on the active roster.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
