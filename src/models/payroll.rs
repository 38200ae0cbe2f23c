//! Payroll row model.
//!
//! A [`Payroll`] is the persisted snapshot of one employee's finalized pay
//! for one month: the gross calculation breakdown plus statutory deductions
//! and the resulting net salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FormulaKind, PayComponent, PayMonth};
use crate::error::{EngineError, EngineResult};

/// Payment status of a payroll row.
///
/// The only transition is `Pending` to `Paid`, triggered externally when
/// payment is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Generated but not yet paid out.
    Pending,
    /// Payment has been recorded.
    Paid,
}

/// One employee's finalized pay for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    /// Unique identifier for this payroll row.
    pub id: Uuid,
    /// The employee this row pays.
    pub employee_id: String,
    /// Employee display name, denormalized for pay slip rendering.
    pub employee_name: String,
    /// Department, denormalized for pay slip rendering.
    pub department: String,
    /// The month this row covers.
    pub month: PayMonth,
    /// The kind of formula that produced the gross calculation.
    pub formula_kind: FormulaKind,
    /// The gross pay components, in computation order.
    pub components: Vec<PayComponent>,
    /// Sum of all gross components.
    pub gross_salary: Decimal,
    /// Human-readable description of the gross calculation.
    pub narrative: String,
    /// Social insurance withheld.
    pub social_insurance: Decimal,
    /// Housing fund withheld.
    pub housing_fund: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Gross salary minus all withholdings.
    pub net_salary: Decimal,
    /// Payment status.
    pub status: PayrollStatus,
    /// The date payment was recorded, once paid.
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
}

impl Payroll {
    /// Records payment of this row, transitioning `Pending` to `Paid`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyPaid`] if the row was already paid;
    /// the transition is one-way and not repeatable.
    pub fn mark_paid(&mut self, paid_date: NaiveDate) -> EngineResult<()> {
        if self.status == PayrollStatus::Paid {
            return Err(EngineError::AlreadyPaid {
                payroll_id: self.id,
            });
        }
        self.status = PayrollStatus::Paid;
        self.paid_date = Some(paid_date);
        Ok(())
    }
}
