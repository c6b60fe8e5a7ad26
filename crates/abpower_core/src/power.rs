//! Closed-form power, MDE, and sample-size formulas.
//!
//! Models a two-sided z-test comparing two proportions under the normal
//! approximation, with the pooled proportion fixed at 0.5 (maximum variance,
//! so every design produced here is conservative). The three formulas share
//! one standard-error model and are exact algebraic inverses of each other,
//! up to the rounding that integer group sizes force:
//!
//! - `compute_power`: power achieved by a given total, split, and effect
//! - `compute_mde`: smallest effect detectable at a given total, split, and power
//! - `compute_sample_size`: total required for a given effect, split, and power
//!
//! Treatment allocation is a percent in (0, 100); effect sizes are
//! proportions. Converting percentage-point effect sizes to proportions is
//! the caller's job.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::DomainError;
use crate::model::{GroupSizes, MdeResult, P_POOLED, PowerResult, SampleSizeResult};

/// MDE reported when truncation empties a group. A sentinel, not a solution.
const DEGENERATE_MDE: f64 = 1.0;

fn std_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

/// Pooled standard error of the difference in proportions.
///
/// `sqrt(p(1-p) * (1/n1 + 1/n2))` with p fixed at 0.5. Requires both groups
/// non-empty.
fn pooled_standard_error(groups: &GroupSizes) -> f64 {
    let n1 = groups.treatment as f64;
    let n2 = groups.control as f64;
    (P_POOLED * (1.0 - P_POOLED) * (1.0 / n1 + 1.0 / n2)).sqrt()
}

fn validate_alpha(alpha: f64) -> Result<(), DomainError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(DomainError::AlphaOutOfRange(alpha))
    }
}

fn validate_power(power: f64) -> Result<(), DomainError> {
    if power > 0.0 && power < 1.0 {
        Ok(())
    } else {
        Err(DomainError::PowerOutOfRange(power))
    }
}

fn validate_mde(mde: f64) -> Result<(), DomainError> {
    if mde.is_finite() && mde > 0.0 {
        Ok(())
    } else {
        Err(DomainError::MdeNotPositive(mde))
    }
}

fn validate_treatment_pct(treatment_pct: f64) -> Result<(), DomainError> {
    if treatment_pct > 0.0 && treatment_pct < 100.0 {
        Ok(())
    } else {
        Err(DomainError::AllocationOutOfRange(treatment_pct))
    }
}

fn validate_n_total(n_total: u64) -> Result<(), DomainError> {
    if n_total > 0 {
        Ok(())
    } else {
        Err(DomainError::ZeroSampleSize)
    }
}

/// Compute the power of a two-proportion test.
///
/// `power = 1 - Φ(z_alpha - mde/se) + Φ(-z_alpha - mde/se)`: the probability
/// the test statistic lands in either rejection tail when the true difference
/// is `mde`.
///
/// If the split truncates a group to zero the design is infeasible and the
/// result carries power 0 with the (possibly zero) group sizes, flagged via
/// `GroupSizes::is_degenerate`.
///
/// # Arguments
///
/// * `n_total` - Total observations across both arms (> 0)
/// * `treatment_pct` - Treatment allocation as a percent in (0, 100)
/// * `mde` - True difference to detect, as a proportion (> 0)
/// * `alpha` - Two-sided significance level in (0, 1)
pub fn compute_power(
    n_total: u64,
    treatment_pct: f64,
    mde: f64,
    alpha: f64,
) -> Result<PowerResult, DomainError> {
    validate_n_total(n_total)?;
    validate_treatment_pct(treatment_pct)?;
    validate_mde(mde)?;
    validate_alpha(alpha)?;

    let groups = GroupSizes::split(n_total, treatment_pct);
    if groups.is_degenerate() {
        return Ok(PowerResult { power: 0.0, groups });
    }

    let se = pooled_standard_error(&groups);
    let normal = std_normal();
    let z_alpha = normal.inverse_cdf(1.0 - alpha / 2.0);
    let shift = mde / se;
    let power = 1.0 - normal.cdf(z_alpha - shift) + normal.cdf(-z_alpha - shift);

    Ok(PowerResult { power, groups })
}

/// Compute the minimum detectable effect of a two-proportion test.
///
/// `mde = (z_alpha + z_beta) * se`, the algebraic inverse of the power
/// formula (`z_beta` enters one-sided: power is the probability of detection
/// in the hypothesized direction).
///
/// Degenerate splits return the sentinel MDE of 1.0 with the group sizes,
/// flagged via `GroupSizes::is_degenerate`.
///
/// # Arguments
///
/// * `n_total` - Total observations across both arms (> 0)
/// * `treatment_pct` - Treatment allocation as a percent in (0, 100)
/// * `power` - Target power in (0, 1)
/// * `alpha` - Two-sided significance level in (0, 1)
pub fn compute_mde(
    n_total: u64,
    treatment_pct: f64,
    power: f64,
    alpha: f64,
) -> Result<MdeResult, DomainError> {
    validate_n_total(n_total)?;
    validate_treatment_pct(treatment_pct)?;
    validate_power(power)?;
    validate_alpha(alpha)?;

    let groups = GroupSizes::split(n_total, treatment_pct);
    if groups.is_degenerate() {
        return Ok(MdeResult {
            mde: DEGENERATE_MDE,
            groups,
        });
    }

    let se = pooled_standard_error(&groups);
    let normal = std_normal();
    let z_alpha = normal.inverse_cdf(1.0 - alpha / 2.0);
    let z_beta = normal.inverse_cdf(power);
    let mde = (z_alpha + z_beta) * se;

    Ok(MdeResult { mde, groups })
}

/// Compute the total sample size required by a two-proportion test.
///
/// Solves the power equation for n:
/// `n = (z_alpha + z_beta)^2 * p(1-p) / (frac * (1-frac)) / mde^2`.
///
/// Each group is rounded independently and the returned total is their sum,
/// never `round(n)` itself. This keeps `treatment + control == total` exact,
/// at the cost of the total drifting ±1 from the literal closed form.
///
/// # Arguments
///
/// * `mde` - Difference to detect, as a proportion (> 0)
/// * `power` - Target power in (0, 1)
/// * `treatment_pct` - Treatment allocation as a percent in (0, 100)
/// * `alpha` - Two-sided significance level in (0, 1)
pub fn compute_sample_size(
    mde: f64,
    power: f64,
    treatment_pct: f64,
    alpha: f64,
) -> Result<SampleSizeResult, DomainError> {
    validate_mde(mde)?;
    validate_power(power)?;
    validate_treatment_pct(treatment_pct)?;
    validate_alpha(alpha)?;

    let normal = std_normal();
    let z_alpha = normal.inverse_cdf(1.0 - alpha / 2.0);
    let z_beta = normal.inverse_cdf(power);

    let frac = treatment_pct / 100.0;
    let n_raw =
        (z_alpha + z_beta).powi(2) * P_POOLED * (1.0 - P_POOLED) / (frac * (1.0 - frac)) / (mde * mde);

    let groups = GroupSizes {
        treatment: (n_raw * frac).round() as u64,
        control: (n_raw * (1.0 - frac)).round() as u64,
    };

    Ok(SampleSizeResult {
        total: groups.total(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_degenerate_split_is_zero() {
        // floor(20 * 1%) = 0: treatment arm empties out
        let result = compute_power(20, 1.0, 0.1, 0.05).unwrap();
        assert_eq!(result.power, 0.0);
        assert_eq!(result.groups.treatment, 0);
        assert_eq!(result.groups.control, 20);
        assert!(result.groups.is_degenerate());
    }

    #[test]
    fn test_mde_degenerate_split_is_sentinel() {
        let result = compute_mde(20, 1.0, 0.8, 0.05).unwrap();
        assert_eq!(result.mde, 1.0);
        assert!(result.groups.is_degenerate());
    }

    #[test]
    fn test_power_matches_reference_scenario() {
        // Classical hand calculation: n=2000 split 50/50, se = sqrt(0.0005),
        // z_alpha = 1.95996, mde/se = 0.89443
        let result = compute_power(2000, 50.0, 0.02, 0.05).unwrap();

        let normal = Normal::new(0.0, 1.0).unwrap();
        let se = (0.25_f64 * (1.0 / 1000.0 + 1.0 / 1000.0)).sqrt();
        let z_alpha = normal.inverse_cdf(0.975);
        let expected = 1.0 - normal.cdf(z_alpha - 0.02 / se) + normal.cdf(-z_alpha - 0.02 / se);

        assert!((result.power - expected).abs() < 1e-6);
        assert!((result.power - 0.1455).abs() < 1e-3);
        assert!(!result.is_adequate());
    }

    #[test]
    fn test_power_in_unit_interval() {
        for &mde in &[0.001, 0.01, 0.05, 0.2, 0.5] {
            let result = compute_power(500, 30.0, mde, 0.05).unwrap();
            assert!(
                (0.0..=1.0).contains(&result.power),
                "power {} out of [0,1] for mde {}",
                result.power,
                mde
            );
        }
    }

    #[test]
    fn test_sample_size_total_is_group_sum() {
        let result = compute_sample_size(0.02, 0.8, 37.0, 0.05).unwrap();
        assert_eq!(result.total, result.groups.total());
        assert!(result.total > 0);
    }

    #[test]
    fn test_sample_size_balanced_split() {
        // mde=5pp, 80% power, 50/50: (1.95996+0.84162)^2 / 0.0025 * 0.25 / 0.25
        // = 3139.6 raw, 1570 per arm after rounding
        let result = compute_sample_size(0.05, 0.8, 50.0, 0.05).unwrap();
        assert_eq!(result.groups.treatment, 1570);
        assert_eq!(result.groups.control, 1570);
        assert_eq!(result.total, 3140);
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            compute_power(0, 50.0, 0.1, 0.05),
            Err(DomainError::ZeroSampleSize)
        );
        assert_eq!(
            compute_power(100, 100.0, 0.1, 0.05),
            Err(DomainError::AllocationOutOfRange(100.0))
        );
        assert_eq!(
            compute_power(100, 50.0, 0.0, 0.05),
            Err(DomainError::MdeNotPositive(0.0))
        );
        assert_eq!(
            compute_power(100, 50.0, 0.1, 1.0),
            Err(DomainError::AlphaOutOfRange(1.0))
        );
        assert_eq!(
            compute_mde(100, 50.0, 1.0, 0.05),
            Err(DomainError::PowerOutOfRange(1.0))
        );
        assert_eq!(
            compute_sample_size(-0.1, 0.8, 50.0, 0.05),
            Err(DomainError::MdeNotPositive(-0.1))
        );
    }

    #[test]
    fn test_nan_inputs_are_domain_errors() {
        assert!(compute_power(100, f64::NAN, 0.1, 0.05).is_err());
        assert!(compute_power(100, 50.0, f64::NAN, 0.05).is_err());
        assert!(compute_sample_size(0.1, f64::NAN, 50.0, 0.05).is_err());
        assert!(compute_mde(100, 50.0, 0.8, f64::NAN).is_err());
    }
}
