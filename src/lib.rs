//! Payroll Computation & Reconciliation Engine.
//!
//! This crate aggregates attendance and leave records into payable day counts
//! for a staff member in a given month, derives net salary and deductions from
//! those counts, normalizes payroll records arriving from inconsistent
//! upstream producers, and reconciles payroll records with the staff roster
//! for a selected pay period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod normalize;
