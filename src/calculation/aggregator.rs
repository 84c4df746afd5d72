//! Attendance aggregation.
//!
//! Orchestrates the worked-day classifier and the paid-leave overlap
//! calculation to produce an [`AttendanceSummary`] for one staff member,
//! month, and year.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::calculation::classifier::counts_as_worked;
use crate::calculation::date_window::days_in_month;
use crate::calculation::leave_overlap::paid_leave_days;
use crate::config::{EngineConfig, LeaveRounding};
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceSummary, LeaveRequest};

/// Aggregates attendance and leave feeds into a monthly summary.
///
/// Read-only and idempotent: identical inputs always yield an identical
/// summary. Fetching the feeds (and retrying failed fetches) belongs to the
/// external data layer; this function only consumes already-fetched
/// collections.
///
/// The paid-leave sum is rounded according to the configured
/// [`LeaveRounding`] policy; unpaid days are the non-negative remainder of
/// the month.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidMonth`] when `month` is
/// outside 1-12.
pub fn aggregate(
    staff_id: &str,
    month: u32,
    year: i32,
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRequest],
    config: &EngineConfig,
) -> EngineResult<AttendanceSummary> {
    let total_days = days_in_month(month, year)?;

    let days_worked = attendance
        .iter()
        .filter(|r| r.employee_id == staff_id)
        .filter(|r| r.date.month() == month && r.date.year() == year)
        .filter(|r| counts_as_worked(r))
        .count() as u32;

    let leave_sum = paid_leave_days(leaves, staff_id, month, year)?;
    let paid_leaves = match config.leave_rounding {
        LeaveRounding::CeilMonthly => leave_sum.ceil(),
        LeaveRounding::Exact => leave_sum,
    };

    let remainder = Decimal::from(total_days) - Decimal::from(days_worked) - paid_leaves;
    let unpaid_days = remainder.max(Decimal::ZERO);

    Ok(AttendanceSummary {
        staff_id: staff_id.to_string(),
        month,
        year,
        total_days,
        days_worked,
        paid_leaves,
        unpaid_days,
    })
}
