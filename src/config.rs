//! Formula catalog loading.
//!
//! This module provides the [`FormulaCatalog`] type for loading a set of
//! preset salary formulas from a YAML file, typically used to seed a
//! [`crate::registry::InMemoryFormulaRegistry`] on startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryFormula;
use crate::registry::InMemoryFormulaRegistry;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    formulas: Vec<SalaryFormula>,
}

/// A set of salary formulas loaded from a YAML catalog file.
///
/// # File format
///
/// ```yaml
/// formulas:
///   - id: std_monthly
///     name: Standard monthly
///     kind: fixed
///     base_salary: 8000
///     position_allowance: 1000
///     performance_tiers:
///       - { level: A, multiplier: 1.2 }
///     social_insurance_rate_percent: 10
///     housing_fund_rate_percent: 8
/// ```
///
/// Fields a formula's kind does not consume may simply be omitted.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::FormulaCatalog;
///
/// let catalog = FormulaCatalog::load("./config/formulas.yaml")?;
/// let registry = catalog.into_registry();
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FormulaCatalog {
    formulas: Vec<SalaryFormula>,
}

impl FormulaCatalog {
    /// Loads a catalog from the given YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// or [`EngineError::ConfigParseError`] if it is not valid catalog YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: CatalogFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            formulas: file.formulas,
        })
    }

    /// Returns the loaded formulas in file order.
    pub fn formulas(&self) -> &[SalaryFormula] {
        &self.formulas
    }

    /// Seeds an in-memory registry with the loaded formulas.
    pub fn into_registry(self) -> InMemoryFormulaRegistry {
        InMemoryFormulaRegistry::from_formulas(self.formulas)
    }
}
