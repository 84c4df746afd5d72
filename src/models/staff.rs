//! Staff roster model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A staff roster entry, as supplied by the staff subsystem.
///
/// The roster is the source of truth for who must appear in a pay period:
/// the period merger emits exactly one payroll row per roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Monthly basic salary, used to seed synthesized payroll rows.
    pub salary: Decimal,
    /// Identifier of the branch the staff member belongs to.
    #[serde(default)]
    pub branch_id: String,
    /// Display name of the branch.
    #[serde(default)]
    pub branch_name: String,
    /// Job title.
    #[serde(default)]
    pub designation: String,
}
