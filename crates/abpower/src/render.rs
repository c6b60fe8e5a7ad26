//! Plain-text rendering of core results.
//!
//! Mirrors the summary block of the calculator: every mode prints the full
//! set of design parameters, with the solved-for quantity called out first.
//! Degenerate designs (an empty group after truncation) are reported as
//! infeasible rather than as a computed answer.

use abpower_core::sweep::{SweepMode, SweepResult};
use abpower_core::{GroupSizes, MdeResult, PowerResult, SampleSizeResult};

fn degenerate_notice(treatment_pct: f64, groups: &GroupSizes) {
    println!(
        "Infeasible design: a {treatment_pct:.1}% split of {} leaves a group empty \
         (treatment={}, control={}). Increase the sample size or move the split inward.",
        groups.total(),
        groups.treatment,
        groups.control,
    );
}

fn summary(groups: &GroupSizes, treatment_pct: f64, mde_pp: f64, power: f64, alpha: f64) {
    let control_pct = 100.0 - treatment_pct;
    println!("Total sample size          {}", groups.total());
    println!(
        "Treatment group            {} ({treatment_pct:.1}%)",
        groups.treatment
    );
    println!(
        "Control group              {} ({control_pct:.1}%)",
        groups.control
    );
    println!("Minimum detectable effect  {mde_pp:.2} percentage points");
    println!("Statistical power          {power:.4}");
    println!("Significance level (α)     {alpha}");
}

pub fn power_summary(treatment_pct: f64, mde_pp: f64, alpha: f64, result: &PowerResult) {
    if result.groups.is_degenerate() {
        degenerate_notice(treatment_pct, &result.groups);
        return;
    }

    let verdict = if result.is_adequate() {
        "adequately powered"
    } else {
        "underpowered"
    };
    println!("Power: {:.4} ({verdict})", result.power);
    println!();
    summary(&result.groups, treatment_pct, mde_pp, result.power, alpha);
}

pub fn mde_summary(treatment_pct: f64, power: f64, alpha: f64, result: &MdeResult) {
    if result.groups.is_degenerate() {
        degenerate_notice(treatment_pct, &result.groups);
        return;
    }

    let mde_pp = result.mde * 100.0;
    println!("Minimum detectable effect: {mde_pp:.2} percentage points");
    println!();
    summary(&result.groups, treatment_pct, mde_pp, power, alpha);
}

pub fn sample_size_summary(
    treatment_pct: f64,
    mde_pp: f64,
    power: f64,
    alpha: f64,
    result: &SampleSizeResult,
) {
    println!("Required total sample size: {}", result.total);
    println!();
    summary(&result.groups, treatment_pct, mde_pp, power, alpha);
}

pub fn sweep_table(mode: &SweepMode, result: &SweepResult) {
    let value_header = match mode {
        SweepMode::SampleSize { .. } => "Required total",
        SweepMode::Mde { .. } => "MDE (pp)",
    };

    println!(
        "{:>11}  {:>14}  {:>9}  {:>9}",
        "Treatment %", value_header, "Treatment", "Control"
    );
    for point in &result.points {
        let value = match mode {
            SweepMode::SampleSize { .. } => format!("{}", point.value as u64),
            SweepMode::Mde { .. } => format!("{:.4}", point.value * 100.0),
        };
        let flag = if point.groups.is_degenerate() {
            "  (infeasible)"
        } else {
            ""
        };
        println!(
            "{:>11.1}  {:>14}  {:>9}  {:>9}{flag}",
            point.treatment_pct, value, point.groups.treatment, point.groups.control
        );
    }

    println!();
    match mode {
        SweepMode::SampleSize { .. } => println!(
            "Optimal treatment percentage: {:.1}%, requiring a minimum total sample size of {}.",
            result.optimal_treatment_pct(),
            result.optimal.value as u64
        ),
        SweepMode::Mde { .. } => println!(
            "Optimal treatment percentage: {:.1}%, giving a minimum MDE of {:.4} percentage points.",
            result.optimal_treatment_pct(),
            result.optimal.value * 100.0
        ),
    }
}
