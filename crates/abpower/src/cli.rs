//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "abpower")]
#[command(about = "Power, MDE, and sample-size calculator for two-proportion A/B tests")]
pub struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Emit the raw result record as JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the power a fully specified design achieves
    Power {
        /// Total sample size across both groups
        #[arg(short, long, default_value_t = 2000)]
        n_total: u64,

        /// Treatment group percentage, in (0, 100)
        #[arg(short, long, default_value_t = 50.0)]
        treatment_pct: f64,

        /// Minimum detectable effect, in percentage points
        #[arg(short, long, conflicts_with_all = ["control_rate", "treatment_rate"])]
        mde: Option<f64>,

        /// Derive the effect from an expected control conversion rate (%)
        #[arg(long, requires = "treatment_rate")]
        control_rate: Option<f64>,

        /// Derive the effect from an expected treatment conversion rate (%)
        #[arg(long, requires = "control_rate")]
        treatment_rate: Option<f64>,

        /// Two-sided significance level
        #[arg(short, long, default_value_t = 0.05)]
        alpha: f64,
    },

    /// Compute the smallest effect a design can detect
    Mde {
        /// Total sample size across both groups
        #[arg(short, long, default_value_t = 2000)]
        n_total: u64,

        /// Treatment group percentage, in (0, 100)
        #[arg(short, long, default_value_t = 50.0)]
        treatment_pct: f64,

        /// Target statistical power, in (0, 1)
        #[arg(short, long, default_value_t = 0.8)]
        power: f64,

        /// Two-sided significance level
        #[arg(short, long, default_value_t = 0.05)]
        alpha: f64,
    },

    /// Compute the sample size a target effect and power require
    SampleSize {
        /// Minimum detectable effect, in percentage points
        #[arg(short, long, conflicts_with_all = ["control_rate", "treatment_rate"])]
        mde: Option<f64>,

        /// Derive the effect from an expected control conversion rate (%)
        #[arg(long, requires = "treatment_rate")]
        control_rate: Option<f64>,

        /// Derive the effect from an expected treatment conversion rate (%)
        #[arg(long, requires = "control_rate")]
        treatment_rate: Option<f64>,

        /// Target statistical power, in (0, 1)
        #[arg(short, long, default_value_t = 0.8)]
        power: f64,

        /// Treatment group percentage, in (0, 100)
        #[arg(short, long, default_value_t = 50.0)]
        treatment_pct: f64,

        /// Two-sided significance level
        #[arg(short, long, default_value_t = 0.05)]
        alpha: f64,
    },

    /// Sweep the treatment split and report the optimal allocation
    Sweep {
        #[command(subcommand)]
        target: SweepTarget,
    },
}

#[derive(Subcommand, Debug)]
pub enum SweepTarget {
    /// Sweep the required total sample size at fixed effect and power
    SampleSize {
        /// Minimum detectable effect, in percentage points
        #[arg(short, long)]
        mde: f64,

        /// Target statistical power, in (0, 1)
        #[arg(short, long, default_value_t = 0.8)]
        power: f64,

        /// Two-sided significance level
        #[arg(short, long, default_value_t = 0.05)]
        alpha: f64,

        /// First treatment percentage of the grid
        #[arg(long, default_value_t = 5.0)]
        grid_start: f64,

        /// Last treatment percentage of the grid
        #[arg(long, default_value_t = 95.0)]
        grid_end: f64,

        /// Grid spacing in percentage points
        #[arg(long, default_value_t = 5.0)]
        grid_step: f64,
    },

    /// Sweep the minimum detectable effect at fixed total and power
    Mde {
        /// Total sample size across both groups
        #[arg(short, long, default_value_t = 2000)]
        n_total: u64,

        /// Target statistical power, in (0, 1)
        #[arg(short, long, default_value_t = 0.8)]
        power: f64,

        /// Two-sided significance level
        #[arg(short, long, default_value_t = 0.05)]
        alpha: f64,

        /// First treatment percentage of the grid
        #[arg(long, default_value_t = 5.0)]
        grid_start: f64,

        /// Last treatment percentage of the grid
        #[arg(long, default_value_t = 95.0)]
        grid_end: f64,

        /// Grid spacing in percentage points
        #[arg(long, default_value_t = 5.0)]
        grid_step: f64,
    },
}
