//! Calendar window helpers.
//!
//! Pure date arithmetic used by the aggregation pipeline: the day count of a
//! month, the inclusive span between two dates, and the first/last day of a
//! month.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Returns the calendar day count of a month, leap-year aware.
///
/// # Arguments
///
/// * `month` - Month number, 1 through 12
/// * `year` - Calendar year
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(2, 2023).unwrap(), 28);
/// assert_eq!(days_in_month(12, 2024).unwrap(), 31);
/// ```
pub fn days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let (first, last) = month_bounds(month, year)?;
    Ok(((last - first).num_days() + 1) as u32)
}

/// Returns the first and last day of a month as an inclusive pair.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12.
pub fn month_bounds(month: u32, year: i32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidMonth { month })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidMonth { month })?;
    let last = next_first.pred_opt().ok_or(EngineError::InvalidMonth { month })?;
    Ok((first, last))
}

/// Returns the inclusive day count between two dates.
///
/// Both endpoints count, so a span from a date to itself is 1 day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::inclusive_day_span;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// assert_eq!(inclusive_day_span(start, end).unwrap(), 3);
/// assert_eq!(inclusive_day_span(start, start).unwrap(), 1);
/// ```
pub fn inclusive_day_span(start: NaiveDate, end: NaiveDate) -> EngineResult<i64> {
    if end < start {
        return Err(EngineError::InvalidRange { start, end });
    }
    Ok((end - start).num_days() + 1)
}
