//! Proportional salary calculation.
//!
//! Splits a monthly basic salary into a net amount and deductions based on
//! payable days over the calendar day count of the month.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The result of a salary computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Amount payable after deductions, rounded to 2 decimal places.
    pub net_salary: Decimal,
    /// Amount withheld, rounded to 2 decimal places.
    pub deductions: Decimal,
}

/// Computes the net salary and deductions for a month.
///
/// `payable_days = days_worked + paid_leaves`; the net salary is the basic
/// salary prorated by payable days over total days, rounded half-away-from-
/// zero to 2 decimal places, and the deduction is the remainder. When the
/// basic salary or the day count is not positive, both amounts are zero.
///
/// Invariant: `net_salary + deductions == basic_salary` within 0.01 whenever
/// `basic_salary > 0`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use payroll_engine::calculation::compute_salary;
///
/// let breakdown = compute_salary(
///     Decimal::from_str("3000").unwrap(),
///     29,
///     25,
///     Decimal::from(2),
/// );
/// assert_eq!(breakdown.net_salary, Decimal::from_str("2793.10").unwrap());
/// assert_eq!(breakdown.deductions, Decimal::from_str("206.90").unwrap());
/// ```
pub fn compute_salary(
    basic_salary: Decimal,
    total_days: u32,
    days_worked: u32,
    paid_leaves: Decimal,
) -> SalaryBreakdown {
    if basic_salary <= Decimal::ZERO || total_days == 0 {
        return SalaryBreakdown {
            net_salary: Decimal::ZERO,
            deductions: Decimal::ZERO,
        };
    }

    let payable_days = Decimal::from(days_worked) + paid_leaves;
    let net_salary = round2(basic_salary * payable_days / Decimal::from(total_days));
    let deductions = round2(basic_salary - net_salary);

    SalaryBreakdown {
        net_salary,
        deductions,
    }
}

/// Rounds to 2 decimal places, half away from zero.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SC-001: the February 2024 acceptance scenario
    #[test]
    fn test_sc_001_february_2024_scenario() {
        let breakdown = compute_salary(dec("3000"), 29, 25, Decimal::from(2));

        assert_eq!(breakdown.net_salary, dec("2793.10"));
        assert_eq!(breakdown.deductions, dec("206.90"));
    }

    /// SC-002: full attendance pays the full salary
    #[test]
    fn test_sc_002_full_attendance() {
        let breakdown = compute_salary(dec("2500"), 31, 31, Decimal::ZERO);

        assert_eq!(breakdown.net_salary, dec("2500"));
        assert_eq!(breakdown.deductions, dec("0.00"));
    }

    /// SC-003: zero payable days pays nothing
    #[test]
    fn test_sc_003_zero_payable_days() {
        let breakdown = compute_salary(dec("2500"), 31, 0, Decimal::ZERO);

        assert_eq!(breakdown.net_salary, dec("0.00"));
        assert_eq!(breakdown.deductions, dec("2500"));
    }

    /// SC-004: non-positive basic salary yields zeros
    #[test]
    fn test_sc_004_non_positive_basic_salary() {
        let zero = compute_salary(Decimal::ZERO, 30, 20, Decimal::ZERO);
        assert_eq!(zero.net_salary, Decimal::ZERO);
        assert_eq!(zero.deductions, Decimal::ZERO);

        let negative = compute_salary(dec("-100"), 30, 20, Decimal::ZERO);
        assert_eq!(negative.net_salary, Decimal::ZERO);
        assert_eq!(negative.deductions, Decimal::ZERO);
    }

    /// SC-005: zero total days yields zeros
    #[test]
    fn test_sc_005_zero_total_days() {
        let breakdown = compute_salary(dec("2500"), 0, 20, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
        assert_eq!(breakdown.deductions, Decimal::ZERO);
    }

    /// SC-006: fractional paid leaves participate in proration
    #[test]
    fn test_sc_006_fractional_paid_leaves() {
        // 3100 * 28.5 / 31 = 2850.00
        let breakdown = compute_salary(dec("3100"), 31, 28, Decimal::new(5, 1));

        assert_eq!(breakdown.net_salary, dec("2850.00"));
        assert_eq!(breakdown.deductions, dec("250.00"));
    }

    /// SC-007: net + deductions reconstructs the basic salary
    #[test]
    fn test_sc_007_invariant_holds_for_awkward_division() {
        // 1000 * 17 / 31 = 548.3870... -> 548.39 / 451.61
        let breakdown = compute_salary(dec("1000"), 31, 17, Decimal::ZERO);

        assert_eq!(breakdown.net_salary + breakdown.deductions, dec("1000.00"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// SC-P01: invariant over arbitrary non-negative inputs
            #[test]
            fn prop_net_plus_deductions_equals_basic(
                basic_cents in 1u64..=10_000_000u64,
                total_days in 1u32..=31,
                days_worked in 0u32..=31,
                paid_leave_halves in 0u32..=62,
            ) {
                let basic = Decimal::new(basic_cents as i64, 2);
                let paid_leaves = Decimal::from(paid_leave_halves) / Decimal::from(2);
                let breakdown = compute_salary(basic, total_days, days_worked, paid_leaves);

                let diff = (breakdown.net_salary + breakdown.deductions - basic).abs();
                prop_assert!(diff <= Decimal::new(1, 2));
            }

            /// SC-P02: non-positive salary always yields zeros
            #[test]
            fn prop_non_positive_salary_yields_zeros(
                basic_cents in -10_000_000i64..=0,
                total_days in 0u32..=31,
                days_worked in 0u32..=31,
            ) {
                let basic = Decimal::new(basic_cents, 2);
                let breakdown = compute_salary(basic, total_days, days_worked, Decimal::ZERO);

                prop_assert_eq!(breakdown.net_salary, Decimal::ZERO);
                prop_assert_eq!(breakdown.deductions, Decimal::ZERO);
            }
        }
    }
}
