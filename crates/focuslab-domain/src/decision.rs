//! Decision rule - turns lift, interval and adherence into a verdict

use crate::stats::ConfidenceInterval;
use serde::{Deserialize, Serialize};

/// Minimum lift (focus blocks/day) required to keep a habit
pub const KEEP_MIN_LIFT: f64 = 0.3;

/// Minimum adherence fraction required to keep a habit
pub const KEEP_MIN_ADHERENCE: f64 = 0.7;

/// A CI upper bound below this means the effect is too small to trust
pub const DROP_MAX_CI_UPPER: f64 = 0.1;

/// Verdict for an experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The habit helped; keep it
    Keep,

    /// The habit did not help, or the effect is too small
    Drop,

    /// Inconclusive; run the experiment again
    Retest,
}

impl Decision {
    /// Get the decision name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Keep => "keep",
            Decision::Drop => "drop",
            Decision::Retest => "retest",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(Decision::Keep),
            "drop" => Ok(Decision::Drop),
            "retest" => Ok(Decision::Retest),
            _ => Err(format!("Invalid decision: {}", s)),
        }
    }
}

/// Thresholds for the decision rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Lift must be at least this to keep
    #[serde(default = "default_keep_min_lift")]
    pub keep_min_lift: f64,

    /// Adherence fraction must be at least this to keep
    #[serde(default = "default_keep_min_adherence")]
    pub keep_min_adherence: f64,

    /// Drop when the CI upper bound falls below this
    #[serde(default = "default_drop_max_ci_upper")]
    pub drop_max_ci_upper: f64,
}

fn default_keep_min_lift() -> f64 {
    KEEP_MIN_LIFT
}

fn default_keep_min_adherence() -> f64 {
    KEEP_MIN_ADHERENCE
}

fn default_drop_max_ci_upper() -> f64 {
    DROP_MAX_CI_UPPER
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            keep_min_lift: KEEP_MIN_LIFT,
            keep_min_adherence: KEEP_MIN_ADHERENCE,
            drop_max_ci_upper: DROP_MAX_CI_UPPER,
        }
    }
}

impl DecisionThresholds {
    /// Apply the decision rule; first match wins
    ///
    /// 1. Keep: `lift >= keep_min_lift`, `ci.lower > 0` and
    ///    `adherence >= keep_min_adherence`
    /// 2. Drop: `lift <= 0` or `ci.upper < drop_max_ci_upper`
    /// 3. Retest otherwise
    ///
    /// Inputs are the unrounded statistics; `adherence` is a fraction.
    pub fn decide(&self, lift: f64, ci: ConfidenceInterval, adherence: f64) -> Decision {
        if lift >= self.keep_min_lift && ci.lower > 0.0 && adherence >= self.keep_min_adherence {
            Decision::Keep
        } else if lift <= 0.0 || ci.upper < self.drop_max_ci_upper {
            Decision::Drop
        } else {
            Decision::Retest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(lower: f64, upper: f64) -> ConfidenceInterval {
        ConfidenceInterval::new(lower, upper)
    }

    #[test]
    fn test_keep() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(1.0, ci(0.5, 1.5), 1.0), Decision::Keep);
        assert_eq!(rule.decide(0.3, ci(0.01, 0.6), 0.7), Decision::Keep);
    }

    #[test]
    fn test_keep_requires_positive_lower_bound() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(1.0, ci(0.0, 2.0), 1.0), Decision::Retest);
    }

    #[test]
    fn test_keep_requires_adherence() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(1.0, ci(0.5, 1.5), 0.69), Decision::Retest);
    }

    #[test]
    fn test_drop_on_non_positive_lift() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(0.0, ci(-0.5, 0.5), 1.0), Decision::Drop);
        assert_eq!(rule.decide(-1.0, ci(-1.0, -1.0), 1.0), Decision::Drop);
    }

    #[test]
    fn test_drop_on_small_upper_bound() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(0.05, ci(0.0, 0.09), 1.0), Decision::Drop);
    }

    #[test]
    fn test_upper_bound_at_threshold_is_not_drop() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(0.05, ci(0.0, 0.1), 1.0), Decision::Retest);
    }

    #[test]
    fn test_retest() {
        let rule = DecisionThresholds::default();
        assert_eq!(rule.decide(0.2, ci(-0.1, 0.6), 1.0), Decision::Retest);
    }

    #[test]
    fn test_keep_takes_priority_over_drop() {
        // Keep is evaluated first even with a tight drop threshold
        let rule = DecisionThresholds {
            drop_max_ci_upper: 10.0,
            ..DecisionThresholds::default()
        };
        assert_eq!(rule.decide(1.0, ci(0.5, 1.5), 1.0), Decision::Keep);
    }

    #[test]
    fn test_decision_strings() {
        assert_eq!(Decision::Retest.as_str(), "retest");
        assert_eq!("KEEP".parse::<Decision>(), Ok(Decision::Keep));
        assert!("maybe".parse::<Decision>().is_err());
        assert_eq!(Decision::Drop.to_string(), "drop");
    }
}
