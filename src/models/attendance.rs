//! Attendance record model and status canonicalisation.
//!
//! Attendance records arrive from several upstream producers that do not
//! agree on status vocabulary, so the record keeps the raw status string and
//! [`AttendanceStatus::from_raw`] maps it onto the canonical enum.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Canonical attendance outcome for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Employee was present and counts as a worked day.
    Present,
    /// Employee was absent for the entire day.
    Absent,
    /// Employee arrived late relative to the producer's threshold.
    Late,
    /// Employee was present for only part of the day.
    HalfDay,
    /// Employee was on an approved leave.
    OnLeave,
    /// The day was a holiday.
    Holiday,
    /// Employee did not show up and the producer recorded nothing usable.
    NoShow,
}

/// Status strings that canonicalise to [`AttendanceStatus::Present`].
///
/// This permissive synonym set tolerates the vocabulary of multiple upstream
/// attendance producers. It is fixed configuration, not runtime-extensible.
pub(crate) const WORKED_STATUS_SYNONYMS: [&str; 9] = [
    "present",
    "p",
    "attended",
    "checked-in",
    "active",
    "completed",
    "worked",
    "on-time",
    "checked in",
];

impl AttendanceStatus {
    /// Canonicalises a raw upstream status string.
    ///
    /// Matching is trimmed and case-insensitive. Any string the engine does
    /// not recognise maps to [`AttendanceStatus::NoShow`], which never counts
    /// as a worked day.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceStatus;
    ///
    /// assert_eq!(AttendanceStatus::from_raw("  Checked-In "), AttendanceStatus::Present);
    /// assert_eq!(AttendanceStatus::from_raw("half_day"), AttendanceStatus::HalfDay);
    /// assert_eq!(AttendanceStatus::from_raw("???"), AttendanceStatus::NoShow);
    /// ```
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if WORKED_STATUS_SYNONYMS.contains(&normalized.as_str()) {
            return AttendanceStatus::Present;
        }
        match normalized.as_str() {
            "absent" | "a" => AttendanceStatus::Absent,
            "late" => AttendanceStatus::Late,
            "half-day" | "half_day" | "halfday" => AttendanceStatus::HalfDay,
            "on-leave" | "on_leave" | "leave" => AttendanceStatus::OnLeave,
            "holiday" => AttendanceStatus::Holiday,
            _ => AttendanceStatus::NoShow,
        }
    }
}

/// A single day's attendance for one employee, as supplied by an upstream
/// attendance subsystem. Read-only input from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee the record belongs to.
    pub employee_id: String,
    /// Calendar day the record tracks.
    pub date: NaiveDate,
    /// Raw status string as supplied by the producer.
    pub status: String,
    /// Timestamp when the employee clocked in, if any.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Timestamp when the employee clocked out, if any.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    /// Returns the canonical status for this record's raw status string.
    pub fn canonical_status(&self) -> AttendanceStatus {
        AttendanceStatus::from_raw(&self.status)
    }
}
