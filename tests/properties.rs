//! Property tests for money arithmetic, record invariants, aggregation,
//! routing and bank file totals.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use payroll_engine::calculation::{compute_social_security, compute_withholding_tax};
use payroll_engine::codec::{ANZ_RECORD_LENGTH, generate_bank_file};
use payroll_engine::config::StatutoryRules;
use payroll_engine::disbursement::{BANK_ALIASES, classify_bank};
use payroll_engine::models::{
    AllocationTag, BankCode, BankTransferLine, BankTransferSummary, Compensation, DeductionInput,
    DeductionType, EarningInput, EarningType, Employee, OvertimeEntry, Originator, PayrollRecord,
    PayrollRun, PeriodInputs, Residency, ShiftType,
};
use payroll_engine::money::Money;
use payroll_engine::payroll::{
    AllocationKey, PayrollRecordBuilder, RunTotals, group_by_allocation, verify_record,
};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn half_cent() -> Decimal {
    Decimal::new(5, 3)
}

fn january_run() -> PayrollRun {
    PayrollRun::new(
        Uuid::nil(),
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
    )
}

/// Money between 0.00 and 100,000.00.
fn arb_money() -> impl Strategy<Value = Money> {
    (0i64..10_000_000).prop_map(Money::from_cents)
}

fn arb_residency() -> impl Strategy<Value = Residency> {
    prop_oneof![Just(Residency::Resident), Just(Residency::NonResident)]
}

fn arb_shift_type() -> impl Strategy<Value = ShiftType> {
    prop_oneof![
        Just(ShiftType::Standard),
        Just(ShiftType::NightShift),
        Just(ShiftType::RestDayOrHoliday),
        Just(ShiftType::NightOvertime),
    ]
}

fn arb_overtime_entry() -> impl Strategy<Value = OvertimeEntry> {
    (1u32..=31, 0i64..=40, arb_shift_type()).prop_map(|(day, quarters, shift_type)| {
        OvertimeEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            hours: Decimal::new(quarters * 25, 2),
            shift_type,
        }
    })
}

fn arb_earning_input() -> impl Strategy<Value = EarningInput> {
    (
        prop_oneof![
            Just(EarningType::Bonus),
            Just(EarningType::FoodAllowance),
            Just(EarningType::HousingAllowance),
            Just(EarningType::OtherAllowance),
            Just(EarningType::Reimbursement),
        ],
        0i64..50_000,
    )
        .prop_map(|(earning_type, cents)| EarningInput {
            earning_type,
            description: String::new(),
            amount: Money::from_cents(cents),
        })
}

fn arb_deduction_input() -> impl Strategy<Value = DeductionInput> {
    (
        prop_oneof![
            Just(DeductionType::Insurance),
            Just(DeductionType::LoanRepayment),
            Just(DeductionType::CourtOrder),
        ],
        0i64..100_000,
    )
        .prop_map(|(deduction_type, cents)| DeductionInput {
            deduction_type,
            description: String::new(),
            amount: Money::from_cents(cents),
        })
}

fn arb_inputs() -> impl Strategy<Value = PeriodInputs> {
    (
        prop::collection::vec(arb_overtime_entry(), 0..6),
        0i64..=10,
        0u32..=8,
        0u32..=14,
        prop::collection::vec(arb_earning_input(), 0..3),
        prop::collection::vec(arb_deduction_input(), 0..3),
        prop::option::of(0u32..=14),
    )
        .prop_map(
            |(overtime, absence, sick_taken, sick_used, earnings, deductions, months)| {
                PeriodInputs {
                    overtime,
                    unpaid_absence_days: Decimal::from(absence),
                    sick_days_taken: sick_taken,
                    sick_days_used_before: sick_used,
                    earnings,
                    deductions,
                    thirteenth_month_months: months,
                }
            },
        )
}

fn arb_employee() -> impl Strategy<Value = Employee> {
    (
        "[a-z]{3,8}",
        arb_residency(),
        1i64..2_000_000,
        any::<bool>(),
        prop::option::of(prop_oneof![Just("P1"), Just("P2"), Just(" ")]),
    )
        .prop_map(|(id, residency, cents, annual, project)| {
            let amount = Decimal::new(cents, 2);
            Employee {
                id: format!("emp_{}", id),
                employee_number: None,
                full_name: id,
                residency,
                compensation: Some(if annual {
                    Compensation::Annual(amount * Decimal::from(12))
                } else {
                    Compensation::Monthly(amount)
                }),
                hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                termination_date: None,
                bank: None,
                allocation: project.map(|code| AllocationTag {
                    project_code: Some(code.to_string()),
                    funding_source: None,
                }),
            }
        })
}

fn build(employee: &Employee, inputs: &PeriodInputs) -> PayrollRecord {
    let rules = StatutoryRules::default();
    PayrollRecordBuilder::new(&rules)
        .build(employee, inputs, &january_run())
        .unwrap()
}

fn arb_line() -> impl Strategy<Value = BankTransferLine> {
    (
        "[0-9 -]{0,24}",
        "\\PC{0,50}",
        0i64..10_000_000,
        "[a-z0-9_]{1,10}",
    )
        .prop_map(|(account_number, account_name, cents, id)| BankTransferLine {
            account_number,
            account_name,
            amount: Money::from_cents(cents),
            reference: format!("SALARY-2026-01-{}", id),
            employee_id: id,
        })
}

fn originator() -> Originator {
    Originator {
        name: "Example Organisation".to_string(),
        debit_account: "0100200300".to_string(),
        currency: "USD".to_string(),
    }
}

fn alias_table() -> Vec<(BankCode, &'static str)> {
    BANK_ALIASES
        .iter()
        .flat_map(|(code, aliases)| aliases.iter().map(move |alias| (*code, *alias)))
        .collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Scalar multiplication stays within half a cent of the exact product.
    #[test]
    fn multiply_is_within_half_a_cent(amount in arb_money(), factor in 0i64..1_000_000) {
        let factor = Decimal::new(factor, 4);
        let exact = amount.amount() * factor;
        let rounded = amount.multiply(factor);
        prop_assert!((rounded.amount() - exact).abs() <= half_cent());
        prop_assert_eq!(rounded.amount().scale(), 2);
    }

    /// Every record satisfies the net pay and employer cost identities.
    #[test]
    fn record_totals_are_exact(employee in arb_employee(), inputs in arb_inputs()) {
        let record = build(&employee, &inputs);

        let deductions: Money = record.deductions.iter().map(|d| d.amount).sum();
        let employer: Money = record.employer_costs.iter().map(|c| c.amount).sum();
        prop_assert_eq!(record.net_pay, record.total_gross_pay - deductions);
        prop_assert_eq!(record.total_employer_cost, record.total_gross_pay + employer);
        prop_assert!(verify_record(&record).is_empty());
        let flagged = record.warnings.iter().any(|w| w.code() == "NEGATIVE_NET_PAY");
        prop_assert_eq!(record.net_pay.is_negative(), flagged);
    }

    /// Building twice from the same inputs gives the same record.
    #[test]
    fn records_are_deterministic(employee in arb_employee(), inputs in arb_inputs()) {
        prop_assert_eq!(build(&employee, &inputs), build(&employee, &inputs));
    }

    /// Residents pay nothing at or below the threshold; tax never decreases with income.
    #[test]
    fn withholding_tax_is_monotone(a in arb_money(), b in arb_money(), residency in arb_residency()) {
        let rules = StatutoryRules::default().withholding_tax;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let tax_low = compute_withholding_tax(low, residency, &rules, 1).tax;
        let tax_high = compute_withholding_tax(high, residency, &rules, 1).tax;
        prop_assert!(tax_low <= tax_high);
        prop_assert!(!tax_low.is_negative());

        if residency == Residency::Resident && low.amount() <= rules.resident_threshold {
            prop_assert!(tax_low.is_zero());
        }
    }

    /// The two social security shares together are 10% of the base, to within a cent.
    #[test]
    fn social_security_shares_sum_to_combined_rate(base in arb_money()) {
        let rules = StatutoryRules::default().social_security;
        let result = compute_social_security(base, &rules, 1);

        let combined = result.employee_contribution + result.employer_contribution;
        let exact = base.amount() * (rules.employee_rate + rules.employer_rate);
        prop_assert!((combined.amount() - exact).abs() <= Decimal::new(1, 2));
    }

    /// Aggregated and grouped totals do not depend on record order.
    #[test]
    fn aggregation_is_order_independent(
        pairs in prop::collection::vec((arb_employee(), arb_inputs()), 1..6),
        seed in any::<u64>(),
    ) {
        let records: Vec<PayrollRecord> = pairs.iter().map(|(e, i)| build(e, i)).collect();
        let mut shuffled = records.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        prop_assert_eq!(RunTotals::from_records(&records), RunTotals::from_records(&shuffled));
        prop_assert_eq!(
            group_by_allocation(&records, AllocationKey::Project),
            group_by_allocation(&shuffled, AllocationKey::Project)
        );

        let groups = group_by_allocation(&records, AllocationKey::Project);
        let merged = groups.values().fold(RunTotals::default(), |acc, g| acc.merge(g));
        prop_assert_eq!(merged, RunTotals::from_records(&records));
    }

    /// Any casing of a known alias, surrounded by noise, routes to its bank.
    #[test]
    fn aliases_classify_case_insensitively(
        (code, alias) in prop::sample::select(alias_table()),
        casing in prop::collection::vec(any::<bool>(), 32),
        prefix in "[0-9 ]{0,4}",
        suffix in "[0-9 ]{0,4}",
    ) {
        let mixed: String = alias
            .chars()
            .zip(casing.iter().cycle())
            .flat_map(|(c, lower)| {
                if *lower {
                    c.to_lowercase().collect::<Vec<_>>()
                } else {
                    vec![c]
                }
            })
            .collect();
        let name = format!("{}{}{}", prefix, mixed, suffix);
        prop_assert_eq!(classify_bank(&name), Some(code));
    }

    /// Files print the exact line count and total, and generation is repeatable.
    #[test]
    fn bank_files_carry_exact_totals(lines in prop::collection::vec(arb_line(), 0..12)) {
        let originator = originator();
        for bank_code in [BankCode::Bnu, BankCode::Bnctl, BankCode::Mandiri, BankCode::Anz] {
            let summary = BankTransferSummary::new(
                bank_code,
                NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
                "2026-01".to_string(),
                lines.clone(),
            );
            let file = generate_bank_file(&summary, &originator).unwrap();
            prop_assert_eq!(&file, &generate_bank_file(&summary, &originator).unwrap());

            let exact: Money = lines.iter().map(|l| l.amount).sum();
            if bank_code == BankCode::Anz {
                let records: Vec<&str> = file.content.split_terminator("\r\n").collect();
                prop_assert_eq!(records.len(), lines.len() + 2);
                prop_assert!(records.iter().all(|r| r.len() == ANZ_RECORD_LENGTH));

                let trailer = records[records.len() - 1];
                prop_assert_eq!(trailer[1..7].parse::<usize>().unwrap(), lines.len());
                prop_assert_eq!(trailer[7..25].parse::<i128>().unwrap(), exact.to_cents());
            } else {
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(file.content.as_bytes());
                let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

                prop_assert_eq!(rows.len(), 6 + 1 + lines.len() + 2);
                let expected_count = lines.len().to_string();
                let expected_total = exact.to_string();
                prop_assert_eq!(&rows[4][1], expected_count.as_str());
                prop_assert_eq!(&rows[5][1], expected_total.as_str());
                let footer_total = &rows[rows.len() - 1][1];
                prop_assert_eq!(footer_total, expected_total.as_str());
            }
        }
    }
}
