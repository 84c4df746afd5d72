//! Worked-day classification.
//!
//! Decides whether a raw attendance record counts as a worked day for
//! payroll purposes.

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Returns true if the record counts as a worked day.
///
/// A record counts as worked when both a clock-in and a clock-out are
/// present, or when its status string canonicalises to
/// [`AttendanceStatus::Present`] (trimmed, case-insensitive, against the
/// fixed synonym set).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::counts_as_worked;
/// use payroll_engine::models::AttendanceRecord;
///
/// let record = AttendanceRecord {
///     employee_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
///     status: "Checked-In".to_string(),
///     clock_in: None,
///     clock_out: None,
/// };
/// assert!(counts_as_worked(&record));
/// ```
pub fn counts_as_worked(record: &AttendanceRecord) -> bool {
    if record.clock_in.is_some() && record.clock_out.is_some() {
        return true;
    }
    record.canonical_status() == AttendanceStatus::Present
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_record(status: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "staff_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            status: status.to_string(),
            clock_in: None,
            clock_out: None,
        }
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    /// CL-001: each synonym counts as worked
    #[test]
    fn test_cl_001_synonyms_count_as_worked() {
        for status in [
            "present",
            "p",
            "attended",
            "checked-in",
            "active",
            "completed",
            "worked",
            "on-time",
            "checked in",
        ] {
            assert!(
                counts_as_worked(&make_record(status)),
                "status '{}' should count as worked",
                status
            );
        }
    }

    /// CL-002: matching is case-insensitive and trimmed
    #[test]
    fn test_cl_002_case_and_whitespace_tolerant() {
        assert!(counts_as_worked(&make_record("  PRESENT ")));
        assert!(counts_as_worked(&make_record("On-Time")));
    }

    /// CL-003: clock pair counts as worked regardless of status
    #[test]
    fn test_cl_003_clock_pair_counts() {
        let mut record = make_record("absent");
        record.clock_in = Some(make_datetime("2024-02-05 09:00:00"));
        record.clock_out = Some(make_datetime("2024-02-05 17:00:00"));
        assert!(counts_as_worked(&record));
    }

    /// CL-004: clock-in alone is not enough
    #[test]
    fn test_cl_004_clock_in_alone_does_not_count() {
        let mut record = make_record("absent");
        record.clock_in = Some(make_datetime("2024-02-05 09:00:00"));
        assert!(!counts_as_worked(&record));
    }

    /// CL-005: non-worked statuses do not count
    #[test]
    fn test_cl_005_non_worked_statuses() {
        for status in ["absent", "late", "half-day", "on-leave", "holiday", "no-show", ""] {
            assert!(
                !counts_as_worked(&make_record(status)),
                "status '{}' should not count as worked",
                status
            );
        }
    }
}
