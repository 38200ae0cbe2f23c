//! Batch payroll generation.
//!
//! For a given month, generates one pending payroll row per active employee
//! that does not already have one: the employee's assigned formula is
//! resolved from the registry, evaluated against that employee's monthly
//! parameters, and the statutory deduction pipeline is applied.

use std::collections::{HashMap, HashSet};

use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{evaluate, resolve_base_salary, statutory_deductions};
use crate::models::{CalculationParams, Employee, PayMonth, Payroll, PayrollStatus};
use crate::registry::FormulaRepository;

/// Generates pending payroll rows for a month.
///
/// Employees are skipped, never errored on, when they are inactive, already
/// have a row for `month` in `existing`, have no formula assigned, or
/// reference a formula id the registry cannot resolve (a dangling reference
/// left by a hard delete; logged as a warning). An employee missing from
/// `params` is calculated with all-zero parameters.
///
/// The employee's personal base salary override is folded into the
/// parameters unless the parameters already carry one.
///
/// Deterministic apart from the generated row ids; nothing is mutated, so a
/// host may safely partition a batch across threads.
pub fn generate_payrolls(
    month: PayMonth,
    employees: &[Employee],
    existing: &[Payroll],
    formulas: &impl FormulaRepository,
    params: &HashMap<String, CalculationParams>,
) -> Vec<Payroll> {
    let already_generated: HashSet<&str> = existing
        .iter()
        .filter(|p| p.month == month)
        .map(|p| p.employee_id.as_str())
        .collect();

    let mut payrolls = Vec::new();
    let mut skipped_unassigned = 0usize;

    for employee in employees.iter().filter(|e| e.is_active()) {
        if already_generated.contains(employee.id.as_str()) {
            continue;
        }

        let Some(formula_id) = employee.salary_formula_id.as_deref() else {
            skipped_unassigned += 1;
            continue;
        };
        let Some(formula) = formulas.get(formula_id) else {
            warn!(
                employee_id = %employee.id,
                formula_id,
                "skipping employee: assigned formula not in registry"
            );
            continue;
        };

        let mut employee_params = params.get(&employee.id).cloned().unwrap_or_default();
        if employee_params.base_salary_override.is_none() {
            employee_params.base_salary_override = employee.base_salary_override;
        }

        let result = evaluate(formula, &employee_params);
        let base_salary = resolve_base_salary(formula, &employee_params);
        let deductions = statutory_deductions(result.gross_salary, base_salary, formula);

        payrolls.push(Payroll {
            id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            department: employee.department.clone(),
            month,
            formula_kind: formula.kind,
            components: result.components,
            gross_salary: result.gross_salary,
            narrative: result.narrative,
            social_insurance: deductions.social_insurance,
            housing_fund: deductions.housing_fund,
            income_tax: deductions.income_tax,
            net_salary: deductions.net_salary,
            status: PayrollStatus::Pending,
            paid_date: None,
        });
    }

    info!(
        month = %month,
        generated = payrolls.len(),
        skipped_unassigned,
        "generated payroll batch"
    );

    payrolls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CommissionTier, EmployeeStatus, FormulaKind, PerformanceTier, SalaryFormula,
    };
    use crate::registry::InMemoryFormulaRegistry;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn month() -> PayMonth {
        PayMonth::new(2024, 1).unwrap()
    }

    fn employee(id: &str, formula_id: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            employee_no: format!("EMP{id}"),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
            status: EmployeeStatus::Active,
            salary_formula_id: formula_id.map(str::to_string),
            base_salary_override: None,
        }
    }

    fn test_registry() -> InMemoryFormulaRegistry {
        let mut fixed = SalaryFormula::empty("std_monthly", FormulaKind::Fixed);
        fixed.base_salary = dec("8000");
        fixed.position_allowance = dec("1000");
        fixed.performance_tiers = vec![PerformanceTier {
            level: "A".to_string(),
            multiplier: dec("1.2"),
        }];
        fixed.social_insurance_rate_percent = dec("10");
        fixed.housing_fund_rate_percent = dec("8");

        let mut sales = SalaryFormula::empty("sales", FormulaKind::Commission);
        sales.commission_base = dec("5000");
        sales.commission_tiers = vec![CommissionTier {
            min: dec("0"),
            max: dec("100000"),
            rate_percent: dec("5"),
        }];
        sales.social_insurance_rate_percent = dec("10");

        InMemoryFormulaRegistry::from_formulas(vec![fixed, sales])
    }

    /// GN-001: generates one pending row per eligible employee
    #[test]
    fn test_generates_pending_rows() {
        let employees = vec![
            employee("1", Some("std_monthly")),
            employee("2", Some("sales")),
        ];
        let mut params = HashMap::new();
        params.insert(
            "2".to_string(),
            CalculationParams {
                sales_amount: dec("80000"),
                ..CalculationParams::default()
            },
        );

        let payrolls = generate_payrolls(month(), &employees, &[], &test_registry(), &params);

        assert_eq!(payrolls.len(), 2);
        assert!(payrolls.iter().all(|p| p.status == PayrollStatus::Pending));
        assert!(payrolls.iter().all(|p| p.paid_date.is_none()));
        assert!(payrolls.iter().all(|p| p.month == month()));

        let sales_row = payrolls.iter().find(|p| p.employee_id == "2").unwrap();
        assert_eq!(sales_row.gross_salary, dec("9000"));
        assert_eq!(sales_row.formula_kind, FormulaKind::Commission);
    }

    /// GN-002: deduction pipeline flows into the row
    #[test]
    fn test_deductions_applied() {
        let employees = vec![employee("1", Some("std_monthly"))];
        let payrolls = generate_payrolls(
            month(),
            &employees,
            &[],
            &test_registry(),
            &HashMap::new(),
        );

        let row = &payrolls[0];
        // gross 9000; si 800; hf 640; taxable 9000-800-640-5000 = 2560; tax 256
        assert_eq!(row.gross_salary, dec("9000"));
        assert_eq!(row.social_insurance, dec("800"));
        assert_eq!(row.housing_fund, dec("640"));
        assert_eq!(row.income_tax, dec("256"));
        assert_eq!(row.net_salary, dec("7304"));
    }

    /// GN-003: inactive employees are skipped
    #[test]
    fn test_skips_inactive_employees() {
        let mut inactive = employee("1", Some("std_monthly"));
        inactive.status = EmployeeStatus::Inactive;

        let payrolls = generate_payrolls(
            month(),
            &[inactive],
            &[],
            &test_registry(),
            &HashMap::new(),
        );
        assert!(payrolls.is_empty());
    }

    /// GN-004: unassigned employees are skipped, not errored
    #[test]
    fn test_skips_unassigned_employees() {
        let employees = vec![employee("1", None), employee("2", Some("std_monthly"))];
        let payrolls = generate_payrolls(
            month(),
            &employees,
            &[],
            &test_registry(),
            &HashMap::new(),
        );

        assert_eq!(payrolls.len(), 1);
        assert_eq!(payrolls[0].employee_id, "2");
    }

    /// GN-005: dangling formula references are skipped with a warning
    #[test]
    fn test_skips_dangling_formula_reference() {
        let employees = vec![employee("1", Some("deleted_formula"))];
        let payrolls = generate_payrolls(
            month(),
            &employees,
            &[],
            &test_registry(),
            &HashMap::new(),
        );
        assert!(payrolls.is_empty());
    }

    /// GN-006: employees with an existing row for the month are skipped
    #[test]
    fn test_skips_already_generated() {
        let employees = vec![
            employee("1", Some("std_monthly")),
            employee("2", Some("std_monthly")),
        ];
        let first_run = generate_payrolls(
            month(),
            &employees[..1],
            &[],
            &test_registry(),
            &HashMap::new(),
        );

        let second_run = generate_payrolls(
            month(),
            &employees,
            &first_run,
            &test_registry(),
            &HashMap::new(),
        );

        assert_eq!(second_run.len(), 1);
        assert_eq!(second_run[0].employee_id, "2");
    }

    /// GN-007: an existing row for a different month does not block generation
    #[test]
    fn test_existing_row_other_month_does_not_block() {
        let employees = vec![employee("1", Some("std_monthly"))];
        let january = generate_payrolls(
            month(),
            &employees,
            &[],
            &test_registry(),
            &HashMap::new(),
        );

        let february = generate_payrolls(
            PayMonth::new(2024, 2).unwrap(),
            &employees,
            &january,
            &test_registry(),
            &HashMap::new(),
        );

        assert_eq!(february.len(), 1);
    }

    /// GN-008: the personal base salary override flows into the calculation
    #[test]
    fn test_employee_override_flows_through() {
        let mut emp = employee("1", Some("std_monthly"));
        emp.base_salary_override = Some(dec("12000"));

        let payrolls =
            generate_payrolls(month(), &[emp], &[], &test_registry(), &HashMap::new());

        let row = &payrolls[0];
        // gross: 12000 + 1000 allowance
        assert_eq!(row.gross_salary, dec("13000"));
        // withholdings follow the overridden base: 1200 + 960
        assert_eq!(row.social_insurance, dec("1200"));
        assert_eq!(row.housing_fund, dec("960"));
    }

    /// GN-009: params-supplied override beats the employee's
    #[test]
    fn test_params_override_beats_employee_override() {
        let mut emp = employee("1", Some("std_monthly"));
        emp.base_salary_override = Some(dec("12000"));

        let mut params = HashMap::new();
        params.insert(
            "1".to_string(),
            CalculationParams {
                base_salary_override: Some(dec("9000")),
                ..CalculationParams::default()
            },
        );

        let payrolls = generate_payrolls(month(), &[emp], &[], &test_registry(), &params);
        assert_eq!(payrolls[0].gross_salary, dec("10000"));
    }

    /// GN-010: missing params degrade to all-zero inputs
    #[test]
    fn test_missing_params_degrade_to_zero() {
        let employees = vec![employee("1", Some("sales"))];
        let payrolls = generate_payrolls(
            month(),
            &employees,
            &[],
            &test_registry(),
            &HashMap::new(),
        );

        // Zero sales still pays the commission floor
        assert_eq!(payrolls[0].gross_salary, dec("5000"));
    }

    #[test]
    fn test_rows_get_distinct_ids() {
        let employees = vec![
            employee("1", Some("std_monthly")),
            employee("2", Some("std_monthly")),
        ];
        let payrolls = generate_payrolls(
            month(),
            &employees,
            &[],
            &test_registry(),
            &HashMap::new(),
        );
        assert_ne!(payrolls[0].id, payrolls[1].id);
    }
}
