//! Sweep evaluation over the allocation grid.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::DomainError;
use crate::power::{compute_mde, compute_sample_size};

use super::config::{SweepConfig, SweepMode};
use super::result::{SweepPoint, SweepResult};

/// Evaluate the configured quantity at every allocation split on the grid.
///
/// Points come back in ascending treatment-percentage order; the optimal
/// point is the stable argmin of the swept value (the first minimum wins on
/// ties). Grid points are independent, so with the `parallel` feature they
/// are evaluated on the rayon pool — relevant only for grids far larger than
/// the 19-point default, since each evaluation is a handful of closed-form
/// expressions.
pub fn sweep_by_allocation(config: &SweepConfig) -> Result<SweepResult, DomainError> {
    config.grid.validate()?;
    let pcts = config.grid.points();

    #[cfg(feature = "parallel")]
    let evaluated: Result<Vec<SweepPoint>, DomainError> = pcts
        .par_iter()
        .map(|&pct| evaluate_point(config, pct))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let evaluated: Result<Vec<SweepPoint>, DomainError> = pcts
        .iter()
        .map(|&pct| evaluate_point(config, pct))
        .collect();

    let points = evaluated?;

    // Strict inequality keeps the first minimum on ties
    let mut optimal = points[0];
    for point in &points[1..] {
        if point.value < optimal.value {
            optimal = *point;
        }
    }

    Ok(SweepResult { points, optimal })
}

fn evaluate_point(config: &SweepConfig, pct: f64) -> Result<SweepPoint, DomainError> {
    match config.mode {
        SweepMode::SampleSize { mde, power } => {
            let result = compute_sample_size(mde, power, pct, config.alpha)?;
            Ok(SweepPoint {
                treatment_pct: pct,
                value: result.total as f64,
                groups: result.groups,
            })
        }
        SweepMode::Mde { n_total, power } => {
            let result = compute_mde(n_total, pct, power, config.alpha)?;
            Ok(SweepPoint {
                treatment_pct: pct,
                value: result.mde,
                groups: result.groups,
            })
        }
    }
}
