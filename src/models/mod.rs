//! Data models for the Salary Formula Engine.
//!
//! This module contains the core data shapes: formulas, monthly calculation
//! parameters, calculation results, payroll rows, employees, and pay months.

mod calculation_result;
mod employee;
mod formula;
mod params;
mod pay_month;
mod payroll;

pub use calculation_result::{CalculationResult, PayComponent};
pub use employee::{Employee, EmployeeStatus};
pub use formula::{CommissionTier, FormulaKind, PerformanceTier, SalaryFormula};
pub use params::CalculationParams;
pub use pay_month::PayMonth;
pub use payroll::{Payroll, PayrollStatus};
