//! Sweep result types.

use serde::{Deserialize, Serialize};

use crate::model::GroupSizes;

/// A single evaluated allocation split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Treatment percentage this point was evaluated at
    pub treatment_pct: f64,

    /// The swept quantity: required total sample size, or MDE in proportion
    /// units, depending on the sweep mode
    pub value: f64,

    /// Group sizes implied at this split
    pub groups: GroupSizes,
}

/// Full result of an allocation sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Every evaluated split, ascending by treatment percentage
    pub points: Vec<SweepPoint>,

    /// The split minimizing the swept quantity (first minimum on ties)
    pub optimal: SweepPoint,
}

impl SweepResult {
    /// The optimal treatment percentage
    #[must_use]
    pub fn optimal_treatment_pct(&self) -> f64 {
        self.optimal.treatment_pct
    }
}
