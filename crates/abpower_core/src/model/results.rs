//! Result records returned by the formula engine.
//!
//! Each call produces a fresh, immutable value; nothing is stored or shared
//! between calls.

use serde::{Deserialize, Serialize};

use super::design::ADEQUATE_POWER;

/// Treatment and control group sizes implied by a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSizes {
    /// Observations assigned to the treatment arm
    pub treatment: u64,
    /// Observations assigned to the control arm
    pub control: u64,
}

impl GroupSizes {
    /// Split a fixed total by treatment percentage, truncating the treatment
    /// group downward. The control group absorbs the remainder, so
    /// `treatment + control == n_total` always holds.
    pub(crate) fn split(n_total: u64, treatment_pct: f64) -> Self {
        let treatment = (n_total as f64 * treatment_pct / 100.0).floor() as u64;
        Self {
            treatment,
            control: n_total - treatment,
        }
    }

    /// Total observations across both arms
    #[must_use]
    pub fn total(&self) -> u64 {
        self.treatment + self.control
    }

    /// True when truncation left either arm empty.
    ///
    /// A degenerate split marks the design as infeasible; the accompanying
    /// power (0) or MDE (sentinel 1.0) is a signal, not a computed answer,
    /// and callers should present it distinctly from genuine low-power or
    /// high-MDE results.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.treatment == 0 || self.control == 0
    }
}

/// Achieved power for a fully specified design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerResult {
    /// Probability of detecting the design effect, in [0, 1]
    pub power: f64,
    /// Group sizes the calculation used
    pub groups: GroupSizes,
}

impl PowerResult {
    /// Whether the design meets the conventional 80% power bar
    #[must_use]
    pub fn is_adequate(&self) -> bool {
        self.power >= ADEQUATE_POWER
    }
}

/// Minimum detectable effect for a fully specified design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MdeResult {
    /// Smallest detectable difference in proportion units (sentinel 1.0 when
    /// the split is degenerate)
    pub mde: f64,
    /// Group sizes the calculation used
    pub groups: GroupSizes,
}

/// Required sample size for a target effect and power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    /// Required total observations, re-summed from the rounded groups
    pub total: u64,
    /// Per-arm requirement
    pub groups: GroupSizes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_truncates_treatment() {
        let groups = GroupSizes::split(2000, 50.0);
        assert_eq!(groups.treatment, 1000);
        assert_eq!(groups.control, 1000);

        // 33% of 100 truncates to 33, control takes the rest
        let groups = GroupSizes::split(100, 33.0);
        assert_eq!(groups.treatment, 33);
        assert_eq!(groups.control, 67);
        assert_eq!(groups.total(), 100);
    }

    #[test]
    fn test_split_degenerate_at_extreme_pct() {
        let groups = GroupSizes::split(20, 1.0);
        assert_eq!(groups.treatment, 0);
        assert_eq!(groups.control, 20);
        assert!(groups.is_degenerate());
    }

    #[test]
    fn test_adequate_power_threshold() {
        let groups = GroupSizes::split(100, 50.0);
        assert!(PowerResult { power: 0.8, groups }.is_adequate());
        assert!(!PowerResult { power: 0.79, groups }.is_adequate());
    }
}
