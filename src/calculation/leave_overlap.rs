//! Paid-leave overlap calculation.
//!
//! Computes how many paid-leave days of an employee's approved leave
//! requests fall inside a target month, honoring half-day leaves.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::date_window::{inclusive_day_span, month_bounds};
use crate::error::EngineResult;
use crate::models::LeaveRequest;

/// Computes the paid-leave days of `employee_id` that overlap a month.
///
/// Only approved, paid leaves participate. Each surviving leave contributes
/// `0.5` when it is a half-day leave, otherwise the inclusive day span of its
/// overlap with the month (leave intervals are clamped to the month bounds).
/// The fractional sum is returned unrounded; the rounding policy belongs to
/// the aggregator.
///
/// A leave whose end date precedes its start date is logged and skipped
/// rather than failing the whole aggregation.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidMonth`] when `month` is
/// outside 1-12.
pub fn paid_leave_days(
    leaves: &[LeaveRequest],
    employee_id: &str,
    month: u32,
    year: i32,
) -> EngineResult<Decimal> {
    let (month_start, month_end) = month_bounds(month, year)?;

    let mut total = Decimal::ZERO;
    for leave in leaves {
        if !leave.is_approved() || leave.employee_id != employee_id || !leave.is_paid {
            continue;
        }
        // Interval intersection with the month, inclusive on both sides.
        if leave.end_date < month_start || leave.start_date > month_end {
            continue;
        }

        if leave.is_half_day {
            total += Decimal::new(5, 1); // 0.5
            continue;
        }

        let overlap_start = leave.start_date.max(month_start);
        let overlap_end = leave.end_date.min(month_end);
        match inclusive_day_span(overlap_start, overlap_end) {
            Ok(days) => total += Decimal::from(days),
            Err(err) => {
                warn!(
                    employee_id = %leave.employee_id,
                    start_date = %leave.start_date,
                    end_date = %leave.end_date,
                    error = %err,
                    "Skipping leave with invalid date range"
                );
            }
        }
    }

    Ok(total)
}
