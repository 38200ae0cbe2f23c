//! Salary Formula Engine
//!
//! This crate stores named compensation formulas (fixed monthly, hourly,
//! piece-rate, tiered sales commission, and mixed strategies) and evaluates
//! a formula against one employee's monthly work parameters to produce a
//! gross pay breakdown, statutory deductions, and a payroll line.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod registry;
