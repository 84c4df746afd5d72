//! Canonical payroll entity and related types.
//!
//! A [`Payroll`] is the hand-off object between this engine and the table
//! rendering, export, and edit-form collaborators. It is produced by the
//! normalizer from an arbitrary upstream shape, or synthesized by the period
//! merger as a placeholder for staff without a generated record yet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier prefix for synthesized placeholder records.
///
/// Downstream exporters and the submission handler key off this prefix to
/// dispatch edits of a placeholder to a "create" operation instead of an
/// "update".
pub const GHOST_ID_PREFIX: &str = "temp_";

/// English month names indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Maps a numeric month (1-12) to its English name.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::month_name;
///
/// assert_eq!(month_name(2), Some("February"));
/// assert_eq!(month_name(13), None);
/// ```
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Processing state of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayrollStatus {
    /// Not yet paid; also the status of every synthesized placeholder.
    #[default]
    Pending,
    /// Payment has been made.
    Paid,
    /// Payment is in flight.
    Processing,
}

impl PayrollStatus {
    /// Lenient parse of upstream status strings; unknown values degrade to
    /// [`PayrollStatus::Pending`].
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "paid" => PayrollStatus::Paid,
            "processing" => PayrollStatus::Processing,
            _ => PayrollStatus::Pending,
        }
    }
}

/// The canonical payroll entity for one staff member and period.
///
/// Invariants for well-formed records with `basic_salary > 0`:
/// `net_salary + deductions == basic_salary` within 0.01, and both amounts
/// are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    /// Record identifier. Placeholders carry a [`GHOST_ID_PREFIX`] id.
    pub id: String,
    /// Identifier of the staff member the record belongs to.
    pub staff_id: String,
    /// Display name of the staff member.
    #[serde(default)]
    pub staff_name: String,
    /// Month name (e.g. "February"); upstream sends names, not numbers.
    pub month: String,
    /// Year as a string literal (upstream shape).
    pub year: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Days the staff member worked in the period.
    #[serde(default)]
    pub days_worked: u32,
    /// Calendar day count of the period.
    #[serde(default)]
    pub total_days: u32,
    /// Paid leave days in the period; fractional under exact rounding.
    #[serde(default)]
    pub paid_leaves: Decimal,
    /// Unpaid days in the period.
    #[serde(default)]
    pub unpaid_days: Decimal,
    /// Amount withheld from the basic salary.
    #[serde(default)]
    pub deductions: Decimal,
    /// Amount payable after deductions.
    #[serde(default)]
    pub net_salary: Decimal,
    /// Processing state.
    #[serde(default)]
    pub status: PayrollStatus,
    /// Identifier of the branch the record belongs to.
    #[serde(default)]
    pub branch_id: String,
    /// Display name of the branch.
    #[serde(default)]
    pub branch_name: String,
    /// Job title of the staff member.
    #[serde(default)]
    pub designation: String,
    /// Free-form remarks carried from the upstream record.
    #[serde(default)]
    pub remarks: String,
    /// Creation timestamp string, passed through from upstream.
    #[serde(default)]
    pub created_at: String,
    /// Last-update timestamp string, passed through from upstream.
    #[serde(default)]
    pub updated_at: String,
}

impl Payroll {
    /// Returns true if the record is a synthesized placeholder.
    pub fn is_ghost(&self) -> bool {
        self.id.starts_with(GHOST_ID_PREFIX)
    }
}
