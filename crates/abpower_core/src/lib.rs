//! Two-proportion A/B test design library
//!
//! This crate computes statistical design parameters for two-proportion A/B
//! tests: given any two of {total sample size, treatment allocation, minimum
//! detectable effect, statistical power} at a fixed significance level, it
//! solves for the third. It supports:
//! - Closed-form power, MDE, and sample-size calculations under the normal
//!   approximation with a conservative pooled proportion of 0.5
//! - Allocation sweeps that vary the treatment/control split over a grid and
//!   report the split minimizing required sample size or MDE
//! - Explicit domain errors for invalid inputs, and flagged degenerate
//!   designs (empty groups) that are results, not failures
//!
//! # Quick Start
//!
//! ```
//! use abpower_core::{compute_power, compute_sample_size};
//!
//! // How many users do we need to detect a 5 point lift at 80% power?
//! let design = compute_sample_size(0.05, 0.8, 50.0, 0.05).unwrap();
//!
//! // And what power does that design actually deliver?
//! let check = compute_power(design.total, 50.0, 0.05, 0.05).unwrap();
//! assert!((check.power - 0.8).abs() < 0.01);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod power;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::DomainError;
pub use model::{GroupSizes, MdeResult, PowerResult, SampleSizeResult};
pub use power::{compute_mde, compute_power, compute_sample_size};
pub use sweep::{AllocationGrid, SweepConfig, SweepMode, SweepPoint, SweepResult, sweep_by_allocation};
