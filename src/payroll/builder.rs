//! Builds one employee's [`PayrollRecord`] for a run.
//!
//! The builder validates the employee and period inputs, then applies the
//! statutory rules in a fixed order, numbering each audit step:
//!
//! 1. Regular salary, pro-rated by employed days
//! 2. Overtime, night-shift and rest-day lines, plus cap warnings
//! 3. Caller-supplied earnings, in input order
//! 4. 13th-month payment, when due
//! 5. Social security on the contributive base
//! 6. Withholding tax on gross pay
//! 7. Unpaid absence and unpaid sick leave
//! 8. Caller-supplied deductions, in input order
//! 9. Totals

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    check_overtime_caps, compute_overtime_pay, compute_regular_salary, compute_sick_leave,
    compute_social_security, compute_thirteenth_month, compute_unpaid_absence,
    compute_withholding_tax, contributive_base, daily_rate, hourly_rate,
};
use crate::config::{SalaryRules, StatutoryRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, Deduction, DeductionType, Earning, EarningType, Employee, EmployerCost,
    EmployerCostType, PayrollRecord, PayrollRun, PeriodInputs, Warning,
};
use crate::money::Money;

/// Earning types the builder computes itself and will not accept from callers.
const COMPUTED_EARNING_TYPES: [EarningType; 3] = [
    EarningType::Regular,
    EarningType::Overtime,
    EarningType::ThirteenthMonth,
];

/// Deduction types the builder computes itself and will not accept from callers.
const COMPUTED_DEDUCTION_TYPES: [DeductionType; 2] =
    [DeductionType::IncomeTax, DeductionType::SocialSecurity];

/// Returns the deterministic record id for an employee in a run.
///
/// ```
/// use payroll_engine::payroll::record_id;
/// use uuid::Uuid;
///
/// let run_id = Uuid::nil();
/// assert_eq!(record_id(run_id, "emp_001"), record_id(run_id, "emp_001"));
/// assert_ne!(record_id(run_id, "emp_001"), record_id(run_id, "emp_002"));
/// ```
pub fn record_id(run_id: Uuid, employee_id: &str) -> Uuid {
    Uuid::new_v5(&run_id, employee_id.as_bytes())
}

/// The outcome of building records for a batch of employees.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Records built successfully, in input order.
    pub records: Vec<PayrollRecord>,
    /// Employees whose record could not be built, with the reason.
    pub failures: Vec<(String, EngineError)>,
}

/// Builds payroll records from statutory rules.
///
/// The builder holds no state besides the rule tables, so one instance can be
/// shared across a whole run.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryRules;
/// use payroll_engine::models::{Compensation, Employee, PayrollRun, PeriodInputs, Residency};
/// use payroll_engine::payroll::PayrollRecordBuilder;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let rules = StatutoryRules::default();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employee_number: None,
///     full_name: "Ana da Costa".to_string(),
///     residency: Residency::Resident,
///     compensation: Some(Compensation::Monthly(Decimal::new(600, 0))),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     termination_date: None,
///     bank: None,
///     allocation: None,
/// };
/// let run = PayrollRun::new(
///     Uuid::nil(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
///
/// let record = PayrollRecordBuilder::new(&rules)
///     .build(&employee, &PeriodInputs::default(), &run)
///     .unwrap();
///
/// // WIT 10.00 + INSS 24.00
/// assert_eq!(record.net_pay.to_string(), "566.00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PayrollRecordBuilder<'a> {
    rules: &'a StatutoryRules,
}

impl<'a> PayrollRecordBuilder<'a> {
    /// Creates a builder over the given rule tables.
    pub fn new(rules: &'a StatutoryRules) -> Self {
        Self { rules }
    }

    /// Builds the record for one employee.
    ///
    /// Fails with [`EngineError::Validation`] when the employee or inputs are
    /// unusable; no partial record is produced.
    pub fn build(
        &self,
        employee: &Employee,
        inputs: &PeriodInputs,
        run: &PayrollRun,
    ) -> EngineResult<PayrollRecord> {
        let monthly_salary = validate(employee, inputs, run)?;
        let rules = self.rules;
        check_salary_rules(&rules.salary)?;

        let mut earnings: Vec<Earning> = Vec::new();
        let mut deductions: Vec<Deduction> = Vec::new();
        let mut audit_trace: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<Warning> = Vec::new();
        let mut step_number: u32 = 1;

        let daily = daily_rate(monthly_salary, &rules.salary);
        let hourly = hourly_rate(monthly_salary, &rules.salary);

        // Regular salary
        let regular = compute_regular_salary(
            monthly_salary,
            employee.hire_date,
            employee.termination_date,
            run.period_start,
            run.period_end,
            step_number,
        );
        earnings.push(regular.earning);
        audit_trace.push(regular.audit_step);
        step_number += 1;

        // Overtime
        for entry in &inputs.overtime {
            let overtime = compute_overtime_pay(entry, hourly, &rules.overtime, step_number);
            earnings.push(overtime.earning);
            audit_trace.push(overtime.audit_step);
            step_number += 1;
        }

        let cap_warnings = check_overtime_caps(&employee.id, &inputs.overtime, &rules.overtime);
        if !cap_warnings.is_empty() {
            warn!(
                employee_id = %employee.id,
                count = cap_warnings.len(),
                "Overtime exceeds statutory cap"
            );
        }
        warnings.extend(cap_warnings);

        // Caller earnings
        earnings.extend(inputs.earnings.iter().map(|input| Earning {
            earning_type: input.earning_type,
            description: describe(&input.description, input.earning_type.as_str()),
            quantity: None,
            rate: None,
            amount: input.amount,
        }));

        // 13th month
        if let Some(months) = inputs.thirteenth_month_months {
            let thirteenth = compute_thirteenth_month(months, monthly_salary, step_number);
            earnings.push(thirteenth.earning);
            audit_trace.push(thirteenth.audit_step);
            step_number += 1;
        }

        let total_gross_pay: Money = earnings.iter().map(|e| e.amount).sum();

        // Social security
        let social_security = compute_social_security(
            contributive_base(&earnings),
            &rules.social_security,
            step_number,
        );
        audit_trace.push(social_security.audit_step);
        step_number += 1;

        // Withholding tax
        let withholding = compute_withholding_tax(
            total_gross_pay,
            employee.residency,
            &rules.withholding_tax,
            step_number,
        );
        audit_trace.push(withholding.audit_step);
        step_number += 1;

        deductions.push(Deduction {
            deduction_type: DeductionType::IncomeTax,
            description: "Withholding income tax".to_string(),
            amount: withholding.tax,
        });
        deductions.push(Deduction {
            deduction_type: DeductionType::SocialSecurity,
            description: "Social security (employee)".to_string(),
            amount: social_security.employee_contribution,
        });

        // Absence
        if inputs.unpaid_absence_days > Decimal::ZERO {
            let absence = compute_unpaid_absence(inputs.unpaid_absence_days, daily, step_number);
            audit_trace.push(absence.audit_step);
            step_number += 1;
            if absence.deduction.is_positive() {
                deductions.push(Deduction {
                    deduction_type: DeductionType::Absence,
                    description: format!(
                        "Unpaid absence ({} days)",
                        inputs.unpaid_absence_days.normalize()
                    ),
                    amount: absence.deduction,
                });
            }
        }

        if inputs.sick_days_taken > 0 {
            let sick = compute_sick_leave(
                inputs.sick_days_taken,
                inputs.sick_days_used_before,
                daily,
                &rules.sick_leave,
                step_number,
            );
            audit_trace.push(sick.audit_step);
            step_number += 1;
            if sick.deduction.is_positive() {
                deductions.push(Deduction {
                    deduction_type: DeductionType::Absence,
                    description: format!(
                        "Unpaid sick leave ({} day-equivalents)",
                        sick.unpaid_days.normalize()
                    ),
                    amount: sick.deduction,
                });
            }
        }

        // Caller deductions
        deductions.extend(inputs.deductions.iter().map(|input| Deduction {
            deduction_type: input.deduction_type,
            description: describe(&input.description, input.deduction_type.as_str()),
            amount: input.amount,
        }));

        let employer_costs = vec![EmployerCost {
            cost_type: EmployerCostType::SocialSecurity,
            description: "Social security (employer)".to_string(),
            amount: social_security.employer_contribution,
        }];

        // Totals
        let total_deductions: Money = deductions.iter().map(|d| d.amount).sum();
        let total_employer_taxes: Money = employer_costs.iter().map(|c| c.amount).sum();
        let net_pay = total_gross_pay - total_deductions;
        let total_employer_cost = total_gross_pay + total_employer_taxes;

        if net_pay.is_negative() {
            warn!(
                employee_id = %employee.id,
                net_pay = %net_pay,
                "Deductions exceed gross pay"
            );
            warnings.push(Warning::NegativeNetPay {
                employee_id: employee.id.clone(),
                net_pay,
            });
        }

        debug!(
            employee_id = %employee.id,
            run_id = %run.id,
            gross_pay = %total_gross_pay,
            net_pay = %net_pay,
            audit_steps = step_number - 1,
            "Built payroll record"
        );

        Ok(PayrollRecord {
            id: record_id(run.id, &employee.id),
            run_id: run.id,
            employee_id: employee.id.clone(),
            employee_number: employee.employee_number.clone(),
            employee_name: employee.full_name.clone(),
            residency: employee.residency,
            allocation: employee.allocation.clone(),
            period_start: run.period_start,
            period_end: run.period_end,
            pay_date: run.pay_date,
            earnings,
            deductions,
            employer_costs,
            contributive_base: social_security.contributive_base,
            taxable_income: total_gross_pay,
            total_gross_pay,
            total_deductions,
            total_employer_taxes,
            net_pay,
            total_employer_cost,
            warnings,
            audit_trace,
        })
    }

    /// Builds records for every employee in a run.
    ///
    /// Employees without an entry in `inputs` are paid with
    /// [`PeriodInputs::default`]. A validation failure for one employee does
    /// not stop the others; it is reported in [`BatchOutcome::failures`].
    pub fn build_all(
        &self,
        employees: &[Employee],
        inputs: &BTreeMap<String, PeriodInputs>,
        run: &PayrollRun,
    ) -> BatchOutcome {
        let empty = PeriodInputs::default();
        let mut outcome = BatchOutcome::default();

        for employee in employees {
            let period_inputs = inputs.get(&employee.id).unwrap_or(&empty);
            match self.build(employee, period_inputs, run) {
                Ok(record) => outcome.records.push(record),
                Err(err) => {
                    warn!(
                        employee_id = %employee.id,
                        run_id = %run.id,
                        error = %err,
                        "Skipping employee"
                    );
                    outcome.failures.push((employee.id.clone(), err));
                }
            }
        }

        info!(
            run_id = %run.id,
            period = %run.period_label(),
            records = outcome.records.len(),
            failures = outcome.failures.len(),
            "Built payroll records"
        );

        outcome
    }
}

fn describe(description: &str, fallback: &str) -> String {
    if description.trim().is_empty() {
        fallback.to_string()
    } else {
        description.to_string()
    }
}

/// Rate divisors must be positive, or every rate would silently be zero.
fn check_salary_rules(rules: &SalaryRules) -> EngineResult<()> {
    let divisors = [
        ("days_per_month", rules.days_per_month),
        ("standard_weekly_hours", rules.standard_weekly_hours),
        ("weeks_per_year", rules.weeks_per_year),
    ];
    match divisors.iter().find(|(_, value)| *value <= Decimal::ZERO) {
        Some((name, value)) => Err(EngineError::CalculationError {
            message: format!("salary rule {} must be positive, got {}", name, value),
        }),
        None => Ok(()),
    }
}

/// Checks everything that would make a record meaningless and returns the
/// monthly salary.
fn validate(employee: &Employee, inputs: &PeriodInputs, run: &PayrollRun) -> EngineResult<Decimal> {
    let id = employee.id.as_str();

    if id.trim().is_empty() {
        return Err(EngineError::validation(id, "id", "employee id is empty"));
    }

    if run.period_end < run.period_start {
        return Err(EngineError::validation(
            id,
            "period_end",
            format!(
                "period ends {} before it starts {}",
                run.period_end, run.period_start
            ),
        ));
    }

    let monthly_salary = employee
        .monthly_salary()
        .ok_or_else(|| EngineError::validation(id, "compensation", "compensation is missing"))?;
    if monthly_salary <= Decimal::ZERO {
        return Err(EngineError::validation(
            id,
            "compensation",
            format!("salary must be positive, got {}", monthly_salary),
        ));
    }

    if let Some(termination) = employee.termination_date {
        if termination < employee.hire_date {
            return Err(EngineError::validation(
                id,
                "termination_date",
                "termination date is before hire date",
            ));
        }
    }

    if employee.hire_date > run.period_end
        || employee
            .termination_date
            .is_some_and(|end| end < run.period_start)
    {
        return Err(EngineError::validation(
            id,
            "hire_date",
            format!(
                "employee is not employed between {} and {}",
                run.period_start, run.period_end
            ),
        ));
    }

    if let Some(entry) = inputs.overtime.iter().find(|e| e.hours < Decimal::ZERO) {
        return Err(EngineError::validation(
            id,
            "overtime.hours",
            format!("negative hours on {}", entry.date),
        ));
    }

    for entry in &inputs.overtime {
        if !run.contains_date(entry.date) {
            return Err(EngineError::validation(
                id,
                "overtime.date",
                format!(
                    "{} is outside the period {} to {}",
                    entry.date, run.period_start, run.period_end
                ),
            ));
        }
        if !employee.is_employed_on(entry.date) {
            return Err(EngineError::validation(
                id,
                "overtime.date",
                format!("{} is outside the employment dates", entry.date),
            ));
        }
    }

    if inputs.unpaid_absence_days < Decimal::ZERO {
        return Err(EngineError::validation(
            id,
            "unpaid_absence_days",
            "unpaid absence days cannot be negative",
        ));
    }

    let employed_days = employee.employed_days_between(run.period_start, run.period_end);
    let days_off = inputs.unpaid_absence_days + Decimal::from(inputs.sick_days_taken);
    if days_off > Decimal::from(employed_days) {
        return Err(EngineError::validation(
            id,
            "unpaid_absence_days",
            format!(
                "{} absence and sick days exceed the {} days employed in the period",
                days_off.normalize(),
                employed_days
            ),
        ));
    }

    for earning in &inputs.earnings {
        if earning.amount.is_negative() {
            return Err(EngineError::validation(
                id,
                "earnings.amount",
                format!("negative {} amount", earning.earning_type.as_str()),
            ));
        }
        if COMPUTED_EARNING_TYPES.contains(&earning.earning_type) {
            return Err(EngineError::validation(
                id,
                "earnings.earning_type",
                format!("{} is computed, not supplied", earning.earning_type.as_str()),
            ));
        }
    }

    for deduction in &inputs.deductions {
        if deduction.amount.is_negative() {
            return Err(EngineError::validation(
                id,
                "deductions.amount",
                format!("negative {} amount", deduction.deduction_type.as_str()),
            ));
        }
        if COMPUTED_DEDUCTION_TYPES.contains(&deduction.deduction_type) {
            return Err(EngineError::validation(
                id,
                "deductions.deduction_type",
                format!("{} is computed, not supplied", deduction.deduction_type.as_str()),
            ));
        }
    }

    Ok(monthly_salary)
}
