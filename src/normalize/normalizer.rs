//! Raw payroll record normalization and swap repair.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

use crate::models::{Payroll, PayrollStatus, month_name};
use crate::normalize::resolver::{
    resolve_decimal, resolve_nested_string, resolve_string, resolve_u32,
};

/// Resolved net-salary and deduction amounts after swap repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAmounts {
    /// The resolved net salary.
    pub net_salary: Decimal,
    /// The resolved deductions.
    pub deductions: Decimal,
    /// True when the heuristic decided the upstream values were transposed.
    pub swapped: bool,
}

/// Resolves net salary and deductions, detecting transposed values.
///
/// Upstream producers have been observed to populate the net-salary and
/// deduction columns in either order. The amounts are treated as swapped
/// when either raw value exceeds the basic salary, or when the sum
/// reconstructed assuming a swap lands closer to the basic salary than the
/// unswapped sum (beyond a 0.01 tolerance). This is a best-effort repair of
/// an upstream data-quality defect, not a guarantee.
///
/// When the raw net salary is absent entirely, the deduction is taken as-is
/// and the net salary is derived as `max(0, basic - deductions)`.
pub fn resolve_amounts(
    basic_salary: Decimal,
    raw_net: Option<Decimal>,
    raw_deduction: Option<Decimal>,
) -> ResolvedAmounts {
    let tolerance = Decimal::new(1, 2); // 0.01

    let Some(net) = raw_net else {
        let deductions = raw_deduction.unwrap_or(Decimal::ZERO);
        return ResolvedAmounts {
            net_salary: (basic_salary - deductions).max(Decimal::ZERO),
            deductions,
            swapped: false,
        };
    };

    let deduction = raw_deduction.unwrap_or(Decimal::ZERO);
    let current_sum = net + deduction;
    // Same value either way; named for clarity of the decision below.
    let swapped_sum = deduction + net;

    let swap_reconstructs_better =
        (basic_salary - swapped_sum).abs() + tolerance < (basic_salary - current_sum).abs();
    let swapped = net > basic_salary || deduction > basic_salary || swap_reconstructs_better;

    if swapped {
        ResolvedAmounts {
            net_salary: deduction,
            deductions: net,
            swapped: true,
        }
    } else {
        ResolvedAmounts {
            net_salary: net,
            deductions: deduction,
            swapped: false,
        }
    }
}

/// Normalizes an arbitrary upstream payroll object into a canonical
/// [`Payroll`].
///
/// Total: this function never fails. Malformed or missing fields degrade to
/// zero/empty defaults, since a partially-known record is still more useful
/// than an omitted one. Every applied swap correction is logged so the
/// upstream defect can eventually be fixed at the source.
pub fn normalize(raw: &Value) -> Payroll {
    let id = resolve_string(raw, &["id", "_id", "payrollId", "payroll_id"]).unwrap_or_default();
    let staff_id = resolve_nested_string(
        raw,
        &[
            &["staffId"],
            &["staff_id"],
            &["employeeId"],
            &["employee_id"],
            &["employee", "id"],
            &["employee", "_id"],
            &["user", "id"],
        ],
    )
    .unwrap_or_default();

    let basic_salary =
        resolve_decimal(raw, &["baseSalary", "basicSalary", "salary", "base_salary"])
            .unwrap_or(Decimal::ZERO);
    let raw_net = resolve_decimal(raw, &["netSalary", "totalSalary", "net_salary"]);
    let raw_deduction = resolve_decimal(raw, &["deduction", "deductions"]);

    let amounts = resolve_amounts(basic_salary, raw_net, raw_deduction);
    if amounts.swapped {
        warn!(
            staff_id = %staff_id,
            basic_salary = %basic_salary,
            raw_net = %raw_net.unwrap_or(Decimal::ZERO),
            raw_deduction = %raw_deduction.unwrap_or(Decimal::ZERO),
            "Applied swap correction to transposed net-salary/deduction values"
        );
    }
    // Repaired amounts can still be negative with degenerate input; the
    // entity invariant requires non-negative money fields.
    let net_salary = amounts.net_salary.max(Decimal::ZERO);
    let deductions = amounts.deductions.max(Decimal::ZERO);

    let month = resolve_month(raw);
    let year = resolve_string(raw, &["year"]).unwrap_or_default();

    let status = resolve_string(raw, &["status", "paymentStatus", "payment_status"])
        .map(|s| PayrollStatus::from_raw(&s))
        .unwrap_or_default();

    let staff_name = resolve_nested_string(
        raw,
        &[
            &["staffName"],
            &["staff_name"],
            &["employeeName"],
            &["employee", "name"],
            &["employee", "fullName"],
            &["user", "name"],
        ],
    )
    .unwrap_or_default();
    let branch_id = resolve_nested_string(
        raw,
        &[&["branchId"], &["branch_id"], &["store", "id"]],
    )
    .unwrap_or_default();
    let branch_name = resolve_nested_string(
        raw,
        &[&["branchName"], &["branch_name"], &["store", "name"]],
    )
    .unwrap_or_default();
    let designation = resolve_nested_string(
        raw,
        &[
            &["designation"],
            &["role"],
            &["position"],
            &["employee", "designation"],
        ],
    )
    .unwrap_or_default();

    Payroll {
        id,
        staff_id,
        staff_name,
        month,
        year,
        basic_salary,
        days_worked: resolve_u32(raw, &["daysWorked", "days_worked", "presentDays"])
            .unwrap_or(0),
        total_days: resolve_u32(raw, &["totalDays", "total_days", "workingDays"]).unwrap_or(0),
        paid_leaves: resolve_decimal(raw, &["paidLeaves", "paid_leaves"])
            .unwrap_or(Decimal::ZERO),
        unpaid_days: resolve_decimal(raw, &["unpaidDays", "unpaid_days", "absentDays"])
            .unwrap_or(Decimal::ZERO),
        deductions,
        net_salary,
        status,
        branch_id,
        branch_name,
        designation,
        remarks: resolve_string(raw, &["remarks", "notes", "comment"]).unwrap_or_default(),
        created_at: resolve_string(raw, &["createdAt", "created_at"]).unwrap_or_default(),
        updated_at: resolve_string(raw, &["updatedAt", "updated_at"]).unwrap_or_default(),
    }
}

/// Resolves the month field: numeric months 1-12 map to an English month
/// name, string month names pass through unchanged.
fn resolve_month(raw: &Value) -> String {
    match raw.get("month") {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|m| u32::try_from(m).ok())
            .and_then(month_name)
            .unwrap_or_default()
            .to_string(),
        Some(Value::String(s)) => match s.trim().parse::<u32>() {
            Ok(m) => month_name(m).unwrap_or_default().to_string(),
            Err(_) => s.trim().to_string(),
        },
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// NM-001: fully-populated canonical-ish record
    #[test]
    fn test_nm_001_canonical_record() {
        let raw = json!({
            "id": "pr_001",
            "staffId": "staff_001",
            "staffName": "Asha Verma",
            "month": "February",
            "year": "2024",
            "basicSalary": "3000",
            "daysWorked": 25,
            "totalDays": 29,
            "paidLeaves": 2,
            "unpaidDays": 2,
            "netSalary": "2793.10",
            "deductions": "206.90",
            "status": "paid",
            "branchId": "branch_01",
            "branchName": "Downtown",
            "designation": "Cashier",
            "remarks": "on time"
        });

        let payroll = normalize(&raw);
        assert_eq!(payroll.id, "pr_001");
        assert_eq!(payroll.staff_id, "staff_001");
        assert_eq!(payroll.month, "February");
        assert_eq!(payroll.year, "2024");
        assert_eq!(payroll.net_salary, dec("2793.10"));
        assert_eq!(payroll.deductions, dec("206.90"));
        assert_eq!(payroll.status, PayrollStatus::Paid);
        assert_eq!(payroll.days_worked, 25);
        assert_eq!(payroll.remarks, "on time");
    }

    /// NM-002: normalize is total, even for an empty object
    #[test]
    fn test_nm_002_empty_object() {
        let payroll = normalize(&json!({}));

        assert!(payroll.id.is_empty());
        assert!(payroll.staff_id.is_empty());
        assert!(payroll.month.is_empty());
        assert_eq!(payroll.basic_salary, Decimal::ZERO);
        assert_eq!(payroll.net_salary, Decimal::ZERO);
        assert_eq!(payroll.deductions, Decimal::ZERO);
        assert_eq!(payroll.status, PayrollStatus::Pending);
    }

    /// NM-003: normalize is total for non-object input too
    #[test]
    fn test_nm_003_non_object_input() {
        let payroll = normalize(&json!("not a record"));
        assert_eq!(payroll.basic_salary, Decimal::ZERO);
        assert!(payroll.staff_id.is_empty());
    }

    /// NM-004: field synonyms resolve in priority order
    #[test]
    fn test_nm_004_synonym_priority() {
        let raw = json!({
            "baseSalary": 2000,
            "basicSalary": 9999,
            "days_worked": 20,
            "totalSalary": 1800
        });

        let payroll = normalize(&raw);
        assert_eq!(payroll.basic_salary, dec("2000"));
        assert_eq!(payroll.days_worked, 20);
        assert_eq!(payroll.net_salary, dec("1800"));
        assert_eq!(payroll.deductions, Decimal::ZERO); // deduction column absent
    }

    /// NM-005: numeric month maps to its name, string month passes through
    #[test]
    fn test_nm_005_month_mapping() {
        assert_eq!(normalize(&json!({"month": 2})).month, "February");
        assert_eq!(normalize(&json!({"month": "2"})).month, "February");
        assert_eq!(normalize(&json!({"month": "March"})).month, "March");
        assert_eq!(normalize(&json!({"month": 13})).month, "");
    }

    /// NM-006: nested employee/store fallbacks populate display fields
    #[test]
    fn test_nm_006_nested_display_fields() {
        let raw = json!({
            "employee": {"id": "staff_007", "name": "Ravi Nair", "designation": "Manager"},
            "store": {"id": "branch_02", "name": "Uptown"}
        });

        let payroll = normalize(&raw);
        assert_eq!(payroll.staff_id, "staff_007");
        assert_eq!(payroll.staff_name, "Ravi Nair");
        assert_eq!(payroll.branch_id, "branch_02");
        assert_eq!(payroll.branch_name, "Uptown");
        assert_eq!(payroll.designation, "Manager");
    }

    /// NM-007: unswapped amounts whose sum matches the base are kept
    #[test]
    fn test_nm_007_swap_keeps_consistent_amounts() {
        let amounts = resolve_amounts(dec("1000"), Some(dec("200")), Some(dec("800")));
        assert!(!amounts.swapped);
        assert_eq!(amounts.net_salary, dec("200"));
        assert_eq!(amounts.deductions, dec("800"));
    }

    /// NM-008: raw net above the basic salary triggers the swap
    #[test]
    fn test_nm_008_swap_on_net_above_base() {
        let amounts = resolve_amounts(dec("500"), Some(dec("600")), Some(dec("-100")));
        assert!(amounts.swapped);
        assert_eq!(amounts.net_salary, dec("-100"));
        assert_eq!(amounts.deductions, dec("600"));
    }

    /// NM-009: raw deduction above the basic salary triggers the swap
    #[test]
    fn test_nm_009_swap_on_deduction_above_base() {
        let amounts = resolve_amounts(dec("1000"), Some(dec("100")), Some(dec("1100")));
        assert!(amounts.swapped);
        assert_eq!(amounts.net_salary, dec("1100"));
        assert_eq!(amounts.deductions, dec("100"));
    }

    /// NM-010: absent net salary derives it from the deduction
    #[test]
    fn test_nm_010_absent_net_derives_from_deduction() {
        let amounts = resolve_amounts(dec("1000"), None, Some(dec("150")));
        assert!(!amounts.swapped);
        assert_eq!(amounts.net_salary, dec("850"));
        assert_eq!(amounts.deductions, dec("150"));

        // Deduction beyond the base never yields a negative net.
        let amounts = resolve_amounts(dec("1000"), None, Some(dec("1200")));
        assert_eq!(amounts.net_salary, Decimal::ZERO);
        assert_eq!(amounts.deductions, dec("1200"));
    }

    /// NM-011: a repaired negative amount is clamped on the entity
    #[test]
    fn test_nm_011_negative_amounts_clamped_on_entity() {
        let raw = json!({
            "basicSalary": 500,
            "netSalary": 600,
            "deduction": -100
        });

        let payroll = normalize(&raw);
        // Swap applied: net would be -100, clamped to the entity invariant.
        assert_eq!(payroll.net_salary, Decimal::ZERO);
        assert_eq!(payroll.deductions, dec("600"));
    }

    /// NM-012: no numeric field is ever missing or non-finite
    #[test]
    fn test_nm_012_degenerate_values_degrade_to_zero() {
        let raw = json!({
            "basicSalary": "not-a-number",
            "daysWorked": null,
            "paidLeaves": {"nested": true}
        });

        let payroll = normalize(&raw);
        assert_eq!(payroll.basic_salary, Decimal::ZERO);
        assert_eq!(payroll.days_worked, 0);
        assert_eq!(payroll.paid_leaves, Decimal::ZERO);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// NM-P01: resolve_amounts never produces amounts that both
            /// exceed the base when the base is positive and inputs are sane
            #[test]
            fn prop_amounts_total(
                base_cents in 0i64..=1_000_000,
                net_cents in proptest::option::of(-1_000_000i64..=2_000_000),
                ded_cents in proptest::option::of(-1_000_000i64..=2_000_000),
            ) {
                let base = Decimal::new(base_cents, 2);
                let net = net_cents.map(|c| Decimal::new(c, 2));
                let ded = ded_cents.map(|c| Decimal::new(c, 2));

                // Must never panic, and unswapped resolution preserves sums.
                let amounts = resolve_amounts(base, net, ded);
                if let (Some(n), Some(d)) = (net, ded) {
                    prop_assert_eq!(amounts.net_salary + amounts.deductions, n + d);
                }
            }
        }
    }
}
