//! Run-level totals and allocation reporting.
//!
//! [`RunTotals`] sums records field by field. Because money addition is exact,
//! totals are independent of record order and merging partial totals gives the
//! same result as summing all records at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{DeductionType, PayrollRecord};
use crate::money::Money;

/// Group name for records without the requested allocation tag.
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// Totals for a run or a group of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    /// Number of records.
    pub employee_count: usize,
    /// Sum of gross pay.
    pub total_gross_pay: Money,
    /// Deductions summed per type.
    pub deductions_by_type: BTreeMap<DeductionType, Money>,
    /// Sum of all deductions.
    pub total_deductions: Money,
    /// Sum of net pay.
    pub total_net_pay: Money,
    /// Sum of employer costs (taxes and contributions).
    pub total_employer_taxes: Money,
    /// Sum of gross pay plus employer costs.
    pub total_employer_cost: Money,
}

impl RunTotals {
    /// Adds one record.
    pub fn add_record(&mut self, record: &PayrollRecord) {
        self.employee_count += 1;
        self.total_gross_pay += record.total_gross_pay;
        for deduction in &record.deductions {
            *self
                .deductions_by_type
                .entry(deduction.deduction_type)
                .or_default() += deduction.amount;
        }
        self.total_deductions += record.total_deductions;
        self.total_net_pay += record.net_pay;
        self.total_employer_taxes += record.total_employer_taxes;
        self.total_employer_cost += record.total_employer_cost;
    }

    /// Sums a set of records.
    ///
    /// ```
    /// use payroll_engine::models::PayrollRecord;
    /// use payroll_engine::payroll::RunTotals;
    ///
    /// let records: Vec<PayrollRecord> = Vec::new();
    /// let totals = RunTotals::from_records(&records);
    /// assert_eq!(totals.employee_count, 0);
    /// assert!(totals.total_net_pay.is_zero());
    /// ```
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PayrollRecord>,
    {
        let mut totals = RunTotals::default();
        for record in records {
            totals.add_record(record);
        }
        totals
    }

    /// Combines two totals. Associative and commutative.
    pub fn merge(mut self, other: &RunTotals) -> RunTotals {
        self.employee_count += other.employee_count;
        self.total_gross_pay += other.total_gross_pay;
        for (deduction_type, amount) in &other.deductions_by_type {
            *self.deductions_by_type.entry(*deduction_type).or_default() += *amount;
        }
        self.total_deductions += other.total_deductions;
        self.total_net_pay += other.total_net_pay;
        self.total_employer_taxes += other.total_employer_taxes;
        self.total_employer_cost += other.total_employer_cost;
        self
    }

    /// Total of one deduction type.
    pub fn deductions_of(&self, deduction_type: DeductionType) -> Money {
        self.deductions_by_type
            .get(&deduction_type)
            .copied()
            .unwrap_or_default()
    }
}

/// The allocation dimension to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKey {
    /// Group by project code.
    Project,
    /// Group by funding source.
    FundingSource,
}

impl AllocationKey {
    /// Returns the group a record falls into.
    pub fn group_of(&self, record: &PayrollRecord) -> String {
        let tag = record.allocation.as_ref();
        let value = match self {
            AllocationKey::Project => tag.and_then(|t| t.project_code.as_deref()),
            AllocationKey::FundingSource => tag.and_then(|t| t.funding_source.as_deref()),
        };
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(UNASSIGNED_GROUP)
            .to_string()
    }
}

/// Groups records by project or funding source and totals each group.
///
/// Records with a missing or blank tag go to [`UNASSIGNED_GROUP`]. The result
/// is ordered by group name and does not depend on record order.
pub fn group_by_allocation<'a, I>(records: I, key: AllocationKey) -> BTreeMap<String, RunTotals>
where
    I: IntoIterator<Item = &'a PayrollRecord>,
{
    let mut groups: BTreeMap<String, RunTotals> = BTreeMap::new();
    for record in records {
        groups
            .entry(key.group_of(record))
            .or_default()
            .add_record(record);
    }
    groups
}
