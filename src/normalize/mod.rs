//! Payroll record normalization.
//!
//! Upstream payroll producers do not agree on field names, nesting, or even
//! which of the net-salary and deduction columns holds which value. This
//! module ingests an arbitrary JSON object and produces a fully-typed
//! canonical [`crate::models::Payroll`], repairing transposed amounts with a
//! best-effort heuristic.

mod normalizer;
mod resolver;

pub use normalizer::{ResolvedAmounts, normalize, resolve_amounts};
pub use resolver::{resolve_decimal, resolve_nested_string, resolve_string, resolve_u32};
