use clap::Parser;
use color_eyre::eyre::eyre;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use abpower_core::model::mde_between;
use abpower_core::sweep::{AllocationGrid, SweepConfig, SweepMode, sweep_by_allocation};
use abpower_core::{compute_mde, compute_power, compute_sample_size};

mod cli;
mod render;

use cli::{Args, Command, SweepTarget};

/// Initialize logging to stderr.
///
/// The log level can be controlled via the `--log-level` flag or the
/// `RUST_LOG` environment variable.
fn init_logging(level: &str) {
    let default_filter = format!("abpower={level},abpower_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Power {
            n_total,
            treatment_pct,
            mde,
            control_rate,
            treatment_rate,
            alpha,
        } => {
            let mde = resolve_mde_pp(mde, control_rate, treatment_rate)?;
            tracing::debug!(n_total, treatment_pct, mde, alpha, "computing power");
            // Effect sizes travel as percentage points on the CLI, proportions in the core
            let result = compute_power(n_total, treatment_pct, mde / 100.0, alpha)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render::power_summary(treatment_pct, mde, alpha, &result);
            }
        }
        Command::Mde {
            n_total,
            treatment_pct,
            power,
            alpha,
        } => {
            tracing::debug!(n_total, treatment_pct, power, alpha, "computing MDE");
            let result = compute_mde(n_total, treatment_pct, power, alpha)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render::mde_summary(treatment_pct, power, alpha, &result);
            }
        }
        Command::SampleSize {
            mde,
            control_rate,
            treatment_rate,
            power,
            treatment_pct,
            alpha,
        } => {
            let mde = resolve_mde_pp(mde, control_rate, treatment_rate)?;
            tracing::debug!(mde, power, treatment_pct, alpha, "computing sample size");
            let result = compute_sample_size(mde / 100.0, power, treatment_pct, alpha)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render::sample_size_summary(treatment_pct, mde, power, alpha, &result);
            }
        }
        Command::Sweep { target } => {
            let config = sweep_config(&target);
            tracing::debug!(?config, "sweeping allocation grid");
            let result = sweep_by_allocation(&config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render::sweep_table(&config.mode, &result);
            }
        }
    }

    Ok(())
}

/// The effect size comes in either directly (`--mde`) or as the gap between
/// two expected conversion rates. Either way it stays in percentage points.
fn resolve_mde_pp(
    mde: Option<f64>,
    control_rate: Option<f64>,
    treatment_rate: Option<f64>,
) -> color_eyre::Result<f64> {
    match (mde, control_rate, treatment_rate) {
        (Some(pp), _, _) => Ok(pp),
        (None, Some(control), Some(treatment)) => Ok(mde_between(control, treatment)),
        _ => Err(eyre!(
            "provide --mde, or both --control-rate and --treatment-rate"
        )),
    }
}

fn sweep_config(target: &SweepTarget) -> SweepConfig {
    match *target {
        SweepTarget::SampleSize {
            mde,
            power,
            alpha,
            grid_start,
            grid_end,
            grid_step,
        } => SweepConfig {
            mode: SweepMode::SampleSize {
                mde: mde / 100.0,
                power,
            },
            alpha,
            grid: AllocationGrid {
                start_pct: grid_start,
                end_pct: grid_end,
                step_pct: grid_step,
            },
        },
        SweepTarget::Mde {
            n_total,
            power,
            alpha,
            grid_start,
            grid_end,
            grid_step,
        } => SweepConfig {
            mode: SweepMode::Mde { n_total, power },
            alpha,
            grid: AllocationGrid {
                start_pct: grid_start,
                end_pct: grid_end,
                step_pct: grid_step,
            },
        },
    }
}
