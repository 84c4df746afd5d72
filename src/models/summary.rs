//! Derived attendance summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated attendance for one staff member, month, and year.
///
/// Ephemeral: recomputed on demand, never persisted by this engine.
///
/// Invariant: `days_worked + paid_leaves + unpaid_days <= total_days` after
/// rounding, with `unpaid_days = max(0, total_days - days_worked - paid_leaves)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// Month number (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Calendar day count of the month.
    pub total_days: u32,
    /// Days classified as worked.
    pub days_worked: u32,
    /// Paid leave days; fractional under exact rounding policy.
    pub paid_leaves: Decimal,
    /// Days neither worked nor covered by paid leave.
    pub unpaid_days: Decimal,
}

impl AttendanceSummary {
    /// Payable days: the basis for proportional salary calculation.
    pub fn payable_days(&self) -> Decimal {
        Decimal::from(self.days_worked) + self.paid_leaves
    }
}
