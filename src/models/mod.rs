//! Core data models for the Payroll Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod leave;
mod payroll;
mod staff;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use leave::{LeaveRequest, LeaveStatus};
pub use payroll::{GHOST_ID_PREFIX, MONTH_NAMES, Payroll, PayrollStatus, month_name};
pub use staff::Staff;
pub use summary::AttendanceSummary;
