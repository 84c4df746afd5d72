//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structures for the engine endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::merge::{MonthFilter, YearFilter};
use crate::models::{AttendanceRecord, LeaveRequest, Staff};

/// Request body for the `/aggregate` endpoint.
///
/// The attendance and leave feeds are fetched by the caller; an absent feed
/// means the upstream fetch failed and the aggregation must not silently
/// report a zeroed summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// Identifier of the staff member to aggregate.
    pub staff_id: String,
    /// Month number (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// The attendance feed, if the upstream fetch succeeded.
    #[serde(default)]
    pub attendance: Option<Vec<AttendanceRecord>>,
    /// The leave feed, if the upstream fetch succeeded. Global, not
    /// staff-scoped; filtered internally.
    #[serde(default)]
    pub leaves: Option<Vec<LeaveRequest>>,
}

/// Request body for the `/salary` endpoint.
///
/// Invoked reactively by the edit form as the user changes day counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Calendar day count of the month.
    pub total_days: u32,
    /// Days worked in the month.
    pub days_worked: u32,
    /// Paid leave days; may be fractional.
    #[serde(default)]
    pub paid_leaves: Decimal,
}

/// Request body for the `/merge` endpoint.
///
/// Payroll records arrive in their raw upstream shape and are normalized
/// before merging, so the endpoint covers the full ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    /// The full staff roster.
    pub staff: Vec<Staff>,
    /// Raw payroll records, arbitrary upstream shape.
    pub payrolls: Vec<Value>,
    /// Month selection; `"All"` for the history view.
    pub month: MonthFilter,
    /// Year selection; `"All"` for the history view.
    pub year: YearFilter,
}
