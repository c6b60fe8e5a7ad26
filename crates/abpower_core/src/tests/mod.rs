//! Integration tests for the A/B test design engine
//!
//! Tests are organized by topic:
//! - `consistency` - Round-trip agreement between the three formulas,
//!   monotonicity, and allocation symmetry
//! - `sweep` - Allocation sweep shape, optimum, and degenerate splits
//! - `monte_carlo` - Simulated Bernoulli outcomes versus the closed-form power
//! - `serialization` - serde round-trips of the public records

mod serialization;
