//! Allocation sweep analysis.
//!
//! This module varies the treatment/control split over a discrete grid while
//! holding the other design inputs fixed, and reports the swept quantity at
//! every split along with the split that minimizes it. Two modes:
//!
//! - `SweepMode::SampleSize`: fix MDE and power, sweep the required total
//! - `SweepMode::Mde`: fix the total and power, sweep the detectable effect
//!
//! ```
//! use abpower_core::sweep::{SweepConfig, sweep_by_allocation};
//!
//! let config = SweepConfig::mde(2000, 0.8);
//! let result = sweep_by_allocation(&config).unwrap();
//!
//! // p(1-p) is symmetric, so the balanced split detects the smallest effect
//! assert_eq!(result.optimal_treatment_pct(), 50.0);
//! ```
//!
//! Every sweep is a pure function of its inputs, recomputed on each call.
//! The default grid runs 5% to 95% in 5% steps; callers may substitute any
//! grid inside (0, 100).

mod config;
mod evaluator;
mod result;

pub use config::{AllocationGrid, SweepConfig, SweepMode};
pub use evaluator::sweep_by_allocation;
pub use result::{SweepPoint, SweepResult};
