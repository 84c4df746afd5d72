//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the JSON endpoints through which the admin console
//! invokes the four engine operations: attendance aggregation, salary
//! computation, payroll normalization, and period merge.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AggregateRequest, MergeRequest, SalaryRequest};
pub use response::ApiError;
pub use state::AppState;
