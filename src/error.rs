//! Error types for the Salary Formula Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that pay calculation itself ([`crate::calculation::evaluate`]) is a
//! total function and never returns an error; the variants here cover the
//! edges of the system: catalog loading, registry lookups, month parsing,
//! and payroll state transitions.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Salary Formula Engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/formulas.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Formula catalog not found: /missing/formulas.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Formula catalog file was not found at the specified path.
    #[error("Formula catalog not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Formula catalog file could not be parsed.
    #[error("Failed to parse formula catalog '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No formula with the given id exists in the registry.
    #[error("Formula not found: {id}")]
    FormulaNotFound {
        /// The formula id that was not found.
        id: String,
    },

    /// A payroll month string could not be parsed as `YYYY-MM`.
    #[error("Invalid payroll month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The text that failed to parse.
        value: String,
    },

    /// A payroll row was marked paid more than once.
    #[error("Payroll {payroll_id} has already been paid")]
    AlreadyPaid {
        /// The id of the payroll row.
        payroll_id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
