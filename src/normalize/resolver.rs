//! Ordered fallback-chain field resolution over raw JSON.
//!
//! Each canonical field of the payroll entity is resolved from a priority
//! list of synonym keys (e.g. `baseSalary` > `basicSalary` > `salary`),
//! rather than probing properties at arbitrary depth. Numbers are accepted
//! both as JSON numbers and as numeric strings, since upstream producers mix
//! the two.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde_json::Value;
use std::str::FromStr;

/// Coerces a single JSON value to a `Decimal`, if possible.
fn decimal_of(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Coerces a single JSON value to a string.
///
/// Numbers become their decimal string form so that fields like `year` keep
/// working whether the producer sends `2024` or `"2024"`.
fn string_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolves the first key in `keys` that holds a usable decimal value.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use serde_json::json;
/// use payroll_engine::normalize::resolve_decimal;
///
/// let raw = json!({"basicSalary": "3000.00"});
/// let value = resolve_decimal(&raw, &["baseSalary", "basicSalary", "salary"]);
/// assert_eq!(value, Some(Decimal::new(300000, 2)));
/// ```
pub fn resolve_decimal(raw: &Value, keys: &[&str]) -> Option<Decimal> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find_map(decimal_of)
}

/// Resolves the first key in `keys` that holds a usable string value.
pub fn resolve_string(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find_map(string_of)
}

/// Resolves the first key in `keys` that holds a non-negative integer.
///
/// Fractional and negative values are rejected; day counts cannot be either.
pub fn resolve_u32(raw: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter().filter_map(|key| raw.get(key)).find_map(|v| {
        decimal_of(v)
            .filter(|d| d.fract().is_zero() && !d.is_sign_negative())
            .and_then(|d| d.to_u32())
    })
}

/// Resolves the first nested path in `paths` that holds a usable string.
///
/// Used to descend through `employee`/`user`/`store` sub-objects for display
/// fields like the staff name.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use payroll_engine::normalize::resolve_nested_string;
///
/// let raw = json!({"employee": {"name": "Asha Verma"}});
/// let name = resolve_nested_string(&raw, &[&["staffName"], &["employee", "name"]]);
/// assert_eq!(name.as_deref(), Some("Asha Verma"));
/// ```
pub fn resolve_nested_string(raw: &Value, paths: &[&[&str]]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| {
            path.iter()
                .try_fold(raw, |value, segment| value.get(segment))
        })
        .find_map(string_of)
}
