//! Engine configuration types.

use serde::{Deserialize, Serialize};

/// Rounding policy for the fractional paid-leave sum of a month.
///
/// The upstream system rounds the per-month sum up, which double-counts a
/// half-day leave that spans a month boundary (0.5 reported as 1 in both
/// months). Deployments that prefer exact accounting can select
/// [`LeaveRounding::Exact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveRounding {
    /// Round the monthly paid-leave sum up to a whole day count.
    #[default]
    CeilMonthly,
    /// Report the fractional sum unrounded.
    Exact,
}

/// Engine policy configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rounding policy for fractional paid-leave days.
    #[serde(default)]
    pub leave_rounding: LeaveRounding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rounding_is_ceil_monthly() {
        let config = EngineConfig::default();
        assert_eq!(config.leave_rounding, LeaveRounding::CeilMonthly);
    }

    #[test]
    fn test_deserialize_empty_mapping_uses_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_deserialize_exact_policy() {
        let config: EngineConfig = serde_yaml::from_str("leave_rounding: exact").unwrap();
        assert_eq!(config.leave_rounding, LeaveRounding::Exact);
    }
}
