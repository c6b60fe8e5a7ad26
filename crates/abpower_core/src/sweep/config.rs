//! Sweep configuration types.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::model::DEFAULT_ALPHA;

/// Which design quantity the sweep solves for at each allocation split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SweepMode {
    /// Fixed effect and power; the swept output is the required total sample size
    SampleSize {
        /// Difference to detect, as a proportion
        mde: f64,
        /// Target power in (0, 1)
        power: f64,
    },

    /// Fixed total and power; the swept output is the minimum detectable effect
    Mde {
        /// Total observations across both arms
        n_total: u64,
        /// Target power in (0, 1)
        power: f64,
    },
}

/// Discrete grid of treatment percentages to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationGrid {
    /// First treatment percentage, exclusive bounds (0, 100)
    #[serde(default = "default_start_pct")]
    pub start_pct: f64,

    /// Last treatment percentage (inclusive when the step lands on it)
    #[serde(default = "default_end_pct")]
    pub end_pct: f64,

    /// Spacing between consecutive percentages
    #[serde(default = "default_step_pct")]
    pub step_pct: f64,
}

fn default_start_pct() -> f64 {
    5.0
}

fn default_end_pct() -> f64 {
    95.0
}

fn default_step_pct() -> f64 {
    5.0
}

impl Default for AllocationGrid {
    fn default() -> Self {
        Self {
            start_pct: default_start_pct(),
            end_pct: default_end_pct(),
            step_pct: default_step_pct(),
        }
    }
}

impl AllocationGrid {
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: &'static str| DomainError::InvalidGrid {
            start_pct: self.start_pct,
            end_pct: self.end_pct,
            step_pct: self.step_pct,
            reason,
        };

        if !(self.start_pct.is_finite() && self.end_pct.is_finite() && self.step_pct.is_finite()) {
            return Err(invalid("bounds and step must be finite"));
        }
        if self.step_pct <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        if self.start_pct > self.end_pct {
            return Err(invalid("start must not exceed end"));
        }
        if self.start_pct <= 0.0 || self.end_pct >= 100.0 {
            return Err(invalid("bounds must lie inside (0, 100)"));
        }
        Ok(())
    }

    /// Grid points in ascending order, generated by integer index so no
    /// floating-point error accumulates across steps.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        // Small tolerance so an endpoint an ulp short of exact is kept
        let steps = ((self.end_pct - self.start_pct) / self.step_pct + 1e-9).floor() as usize;
        (0..=steps)
            .map(|i| self.start_pct + i as f64 * self.step_pct)
            .collect()
    }
}

/// Complete configuration for an allocation sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// What the sweep solves for, with that mode's fixed inputs
    pub mode: SweepMode,

    /// Two-sided significance level in (0, 1)
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Treatment percentages to evaluate
    #[serde(default)]
    pub grid: AllocationGrid,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl SweepConfig {
    /// Sweep required sample size at the default alpha over the default grid
    #[must_use]
    pub fn sample_size(mde: f64, power: f64) -> Self {
        Self {
            mode: SweepMode::SampleSize { mde, power },
            alpha: DEFAULT_ALPHA,
            grid: AllocationGrid::default(),
        }
    }

    /// Sweep minimum detectable effect at the default alpha over the default grid
    #[must_use]
    pub fn mde(n_total: u64, power: f64) -> Self {
        Self {
            mode: SweepMode::Mde { n_total, power },
            alpha: DEFAULT_ALPHA,
            grid: AllocationGrid::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_19_points() {
        let points = AllocationGrid::default().points();
        assert_eq!(points.len(), 19);
        assert_eq!(points[0], 5.0);
        assert_eq!(points[18], 95.0);
        for pair in points.windows(2) {
            assert!((pair[1] - pair[0] - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_grid_endpoint_inclusive_only_on_step() {
        let grid = AllocationGrid {
            start_pct: 10.0,
            end_pct: 24.0,
            step_pct: 10.0,
        };
        assert_eq!(grid.points(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_grid_single_point() {
        let grid = AllocationGrid {
            start_pct: 50.0,
            end_pct: 50.0,
            step_pct: 5.0,
        };
        assert!(grid.validate().is_ok());
        assert_eq!(grid.points(), vec![50.0]);
    }

    #[test]
    fn test_grid_validation_rejects_bad_grids() {
        let bad = [
            AllocationGrid {
                start_pct: 5.0,
                end_pct: 95.0,
                step_pct: 0.0,
            },
            AllocationGrid {
                start_pct: 95.0,
                end_pct: 5.0,
                step_pct: 5.0,
            },
            AllocationGrid {
                start_pct: 0.0,
                end_pct: 95.0,
                step_pct: 5.0,
            },
            AllocationGrid {
                start_pct: 5.0,
                end_pct: 100.0,
                step_pct: 5.0,
            },
        ];
        for grid in bad {
            assert!(grid.validate().is_err(), "expected {grid:?} to be rejected");
        }
    }
}
