//! Leave request model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a manager decision. Does not participate in aggregation.
    Pending,
    /// Approved; the only status that participates in aggregation.
    Approved,
    /// Rejected. Does not participate in aggregation.
    Rejected,
}

/// An employee's leave request as supplied by the leave subsystem.
///
/// Invariant: `start_date <= end_date` for well-formed data. Requests that
/// violate it are logged and skipped during aggregation rather than aborting
/// the whole month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Identifier of the employee the request belongs to.
    pub employee_id: String,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval state of the request.
    pub status: LeaveStatus,
    /// Whether the leave is paid. Upstream omits this for paid leaves, so it
    /// defaults to true unless explicitly false.
    #[serde(default = "default_is_paid")]
    pub is_paid: bool,
    /// Whether the leave covers half a day instead of whole days.
    #[serde(default)]
    pub is_half_day: bool,
}

fn default_is_paid() -> bool {
    true
}

impl LeaveRequest {
    /// Returns true if the request is approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}
