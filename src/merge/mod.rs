//! Period merge and placeholder synthesis.
//!
//! Given the staff roster and the canonical payroll records for a selected
//! period, produces one row per staff member: the real record when one
//! exists, otherwise a synthesized "pending" placeholder. The history view
//! ("All") passes existing records through without synthesis.

use serde::{Deserialize, Serialize};

use crate::models::{GHOST_ID_PREFIX, Payroll, PayrollStatus, Staff};

/// Month component of a period selection.
///
/// Serialized as a plain string: the sentinel `"All"` selects every month,
/// anything else names a specific month. This mirrors the upstream filter
/// bar contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MonthFilter {
    /// Every month (history view).
    All,
    /// A specific month by name (e.g. "February").
    Month(String),
}

impl From<String> for MonthFilter {
    fn from(value: String) -> Self {
        if value == "All" {
            MonthFilter::All
        } else {
            MonthFilter::Month(value)
        }
    }
}

impl From<MonthFilter> for String {
    fn from(value: MonthFilter) -> Self {
        match value {
            MonthFilter::All => "All".to_string(),
            MonthFilter::Month(month) => month,
        }
    }
}

/// Year component of a period selection.
///
/// Serialized as a plain string with the same `"All"` sentinel as
/// [`MonthFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum YearFilter {
    /// Every year (history view).
    All,
    /// A specific year (e.g. "2024").
    Year(String),
}

impl From<String> for YearFilter {
    fn from(value: String) -> Self {
        if value == "All" {
            YearFilter::All
        } else {
            YearFilter::Year(value)
        }
    }
}

impl From<YearFilter> for String {
    fn from(value: YearFilter) -> Self {
        match value {
            YearFilter::All => "All".to_string(),
            YearFilter::Year(year) => year,
        }
    }
}

/// One output row of a period merge.
///
/// The variant makes the create-vs-update dispatch a type-level decision:
/// edits to a [`PayrollRow::Ghost`] must be submitted as a "create"
/// operation, edits to a [`PayrollRow::Existing`] as an "update". The ghost
/// payroll still carries a `temp_`-prefixed id for downstream exporters that
/// key off the prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayrollRow {
    /// A real payroll record found for the staff member and period.
    Existing(Payroll),
    /// A synthesized placeholder for a staff member with no record yet.
    Ghost(Payroll),
}

impl PayrollRow {
    /// Returns the payroll record of this row.
    pub fn payroll(&self) -> &Payroll {
        match self {
            PayrollRow::Existing(payroll) | PayrollRow::Ghost(payroll) => payroll,
        }
    }

    /// Consumes the row, returning its payroll record.
    pub fn into_payroll(self) -> Payroll {
        match self {
            PayrollRow::Existing(payroll) | PayrollRow::Ghost(payroll) => payroll,
        }
    }

    /// Returns true if this row is a synthesized placeholder.
    pub fn is_ghost(&self) -> bool {
        matches!(self, PayrollRow::Ghost(_))
    }
}

/// Merges the staff roster with the payroll records of a selected period.
///
/// With a specific month and year, the output holds exactly one row per
/// roster entry, in roster order: the matching record when one exists,
/// otherwise a ghost placeholder seeded with the staff member's basic
/// salary, pending status, and zeroed day counts and amounts.
///
/// When either filter is [`MonthFilter::All`] / [`YearFilter::All`], the
/// output is the input records filtered by whichever component is concrete,
/// order preserved, with no synthesis.
pub fn merge(
    roster: &[Staff],
    payrolls: &[Payroll],
    month: &MonthFilter,
    year: &YearFilter,
) -> Vec<PayrollRow> {
    let (month_name, year_value) = match (month, year) {
        (MonthFilter::Month(m), YearFilter::Year(y)) => (m, y),
        _ => {
            // History view: filter by the concrete component only.
            return payrolls
                .iter()
                .filter(|p| match month {
                    MonthFilter::All => true,
                    MonthFilter::Month(m) => &p.month == m,
                })
                .filter(|p| match year {
                    YearFilter::All => true,
                    YearFilter::Year(y) => &p.year == y,
                })
                .cloned()
                .map(PayrollRow::Existing)
                .collect();
        }
    };

    roster
        .iter()
        .map(|staff| {
            let existing = payrolls.iter().find(|p| {
                p.staff_id == staff.id && &p.month == month_name && &p.year == year_value
            });
            match existing {
                Some(payroll) => PayrollRow::Existing(payroll.clone()),
                None => PayrollRow::Ghost(ghost_payroll(staff, month_name, year_value)),
            }
        })
        .collect()
}

/// Synthesizes a placeholder payroll for a staff member with no generated
/// record in the selected period.
fn ghost_payroll(staff: &Staff, month: &str, year: &str) -> Payroll {
    Payroll {
        id: format!("{}{}", GHOST_ID_PREFIX, staff.id),
        staff_id: staff.id.clone(),
        staff_name: staff.name.clone(),
        month: month.to_string(),
        year: year.to_string(),
        basic_salary: staff.salary,
        days_worked: 0,
        total_days: 0,
        paid_leaves: Default::default(),
        unpaid_days: Default::default(),
        deductions: Default::default(),
        net_salary: Default::default(),
        status: PayrollStatus::Pending,
        branch_id: staff.branch_id.clone(),
        branch_name: staff.branch_name.clone(),
        designation: staff.designation.clone(),
        remarks: String::new(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}
