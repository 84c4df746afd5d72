//! Calculation logic for the Payroll Computation Engine.
//!
//! This module contains the pure calculation functions: calendar day counts
//! and inclusive date spans, worked-day classification, paid-leave overlap
//! against a target month, the attendance aggregation that combines them,
//! and the proportional salary split.

mod aggregator;
mod classifier;
mod date_window;
mod leave_overlap;
mod salary;

pub use aggregator::aggregate;
pub use classifier::counts_as_worked;
pub use date_window::{days_in_month, inclusive_day_span, month_bounds};
pub use leave_overlap::paid_leave_days;
pub use salary::{SalaryBreakdown, compute_salary};
