//! Statutory deduction pipeline.
//!
//! Social insurance and housing fund are withheld as formula-defined
//! percentages of the (override-resolved) base salary. Income tax is a flat
//! 10% of gross pay above a fixed 5000 monthly exemption, a deliberate
//! simplification of the real progressive brackets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_money;
use crate::models::SalaryFormula;

/// Returns the fixed monthly income-tax exemption threshold (5000).
pub fn monthly_tax_exemption() -> Decimal {
    Decimal::from(5000)
}

/// Returns the flat tax rate applied above the exemption (0.10).
pub fn flat_tax_rate() -> Decimal {
    Decimal::new(1, 1)
}

/// The statutory withholdings for one payroll line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// Social insurance withheld against base salary.
    pub social_insurance: Decimal,
    /// Housing fund withheld against base salary.
    pub housing_fund: Decimal,
    /// Income tax on gross pay above the exemption.
    pub income_tax: Decimal,
    /// Gross salary minus all withholdings.
    pub net_salary: Decimal,
}

/// Computes statutory deductions and net pay for one payroll line.
///
/// `base_salary` must be the override-resolved base used by the gross
/// calculation; the insurance and housing-fund percentages apply to it, not
/// to gross pay. Negative taxable income clamps to zero tax. Total over its
/// domain, like [`super::evaluate`].
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::statutory_deductions;
/// use salary_engine::models::{FormulaKind, SalaryFormula};
/// use rust_decimal::Decimal;
///
/// let mut formula = SalaryFormula::empty("f1", FormulaKind::Fixed);
/// formula.social_insurance_rate_percent = Decimal::from(10);
/// formula.housing_fund_rate_percent = Decimal::from(10);
///
/// let d = statutory_deductions(
///     Decimal::from(20500),
///     Decimal::from(15000),
///     &formula,
/// );
/// assert_eq!(d.social_insurance, Decimal::from(1500));
/// assert_eq!(d.income_tax, Decimal::from(1250));
/// assert_eq!(d.net_salary, Decimal::from(16250));
/// ```
pub fn statutory_deductions(
    gross_salary: Decimal,
    base_salary: Decimal,
    formula: &SalaryFormula,
) -> StatutoryDeductions {
    let social_insurance =
        round_money(base_salary * formula.social_insurance_rate_percent / Decimal::ONE_HUNDRED);
    let housing_fund =
        round_money(base_salary * formula.housing_fund_rate_percent / Decimal::ONE_HUNDRED);

    let taxable_income = gross_salary - social_insurance - housing_fund - monthly_tax_exemption();
    let income_tax = round_money(taxable_income.max(Decimal::ZERO) * flat_tax_rate());

    let net_salary = round_money(gross_salary - social_insurance - housing_fund - income_tax);

    StatutoryDeductions {
        social_insurance,
        housing_fund,
        income_tax,
        net_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormulaKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn formula_with_rates(si: &str, hf: &str) -> SalaryFormula {
        let mut formula = SalaryFormula::empty("f1", FormulaKind::Fixed);
        formula.social_insurance_rate_percent = dec(si);
        formula.housing_fund_rate_percent = dec(hf);
        formula
    }

    /// DD-001: the reference deduction scenario
    #[test]
    fn test_reference_scenario() {
        let d = statutory_deductions(dec("20500"), dec("15000"), &formula_with_rates("10", "10"));

        assert_eq!(d.social_insurance, dec("1500"));
        assert_eq!(d.housing_fund, dec("1500"));
        // taxable: 20500 - 1500 - 1500 - 5000 = 12500; tax: 1250
        assert_eq!(d.income_tax, dec("1250"));
        assert_eq!(d.net_salary, dec("16250"));
    }

    /// DD-002: gross below the exemption pays no tax
    #[test]
    fn test_no_tax_below_exemption() {
        let d = statutory_deductions(dec("4000"), dec("4000"), &formula_with_rates("10", "8"));

        assert_eq!(d.social_insurance, dec("400"));
        assert_eq!(d.housing_fund, dec("320"));
        assert_eq!(d.income_tax, Decimal::ZERO);
        assert_eq!(d.net_salary, dec("3280"));
    }

    /// DD-003: zero rates withhold nothing
    #[test]
    fn test_zero_rates() {
        let d = statutory_deductions(dec("3000"), dec("0"), &formula_with_rates("0", "0"));

        assert_eq!(d.social_insurance, Decimal::ZERO);
        assert_eq!(d.housing_fund, Decimal::ZERO);
        assert_eq!(d.income_tax, Decimal::ZERO);
        assert_eq!(d.net_salary, dec("3000"));
    }

    /// DD-004: withholdings apply to base salary, not gross
    #[test]
    fn test_withholdings_use_base_not_gross() {
        // Same gross, different bases
        let low = statutory_deductions(dec("20000"), dec("5000"), &formula_with_rates("10", "10"));
        let high = statutory_deductions(dec("20000"), dec("15000"), &formula_with_rates("10", "10"));

        assert_eq!(low.social_insurance, dec("500"));
        assert_eq!(high.social_insurance, dec("1500"));
    }

    /// DD-005: fractional withholdings are rounded
    #[test]
    fn test_fractional_withholdings_rounded() {
        // 7777 * 10.5% = 816.585 -> 817
        let d = statutory_deductions(dec("7777"), dec("7777"), &formula_with_rates("10.5", "0"));
        assert_eq!(d.social_insurance, dec("817"));
    }

    /// DD-006: zero gross yields zero net, never negative tax
    #[test]
    fn test_zero_gross() {
        let d = statutory_deductions(Decimal::ZERO, Decimal::ZERO, &formula_with_rates("10", "10"));
        assert_eq!(d.income_tax, Decimal::ZERO);
        assert_eq!(d.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_constants_are_exact() {
        assert_eq!(monthly_tax_exemption(), dec("5000"));
        assert_eq!(flat_tax_rate(), dec("0.1"));
    }
}
