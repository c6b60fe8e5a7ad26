use std::fmt;

/// Errors for inputs outside their valid mathematical domain.
///
/// The engine never clamps or repairs inputs; a domain violation is reported
/// back to the caller as-is. Degenerate designs (a truncated group of zero)
/// are deliberately *not* errors — see `GroupSizes::is_degenerate`.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Significance level outside (0, 1)
    AlphaOutOfRange(f64),
    /// Target power outside (0, 1)
    PowerOutOfRange(f64),
    /// Minimum detectable effect not a positive finite proportion
    MdeNotPositive(f64),
    /// Treatment percentage outside (0, 100)
    AllocationOutOfRange(f64),
    /// Total sample size of zero
    ZeroSampleSize,
    /// Sweep grid that cannot produce any evaluation points
    InvalidGrid {
        start_pct: f64,
        end_pct: f64,
        step_pct: f64,
        reason: &'static str,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::AlphaOutOfRange(alpha) => {
                write!(f, "significance level {alpha} is outside (0, 1)")
            }
            DomainError::PowerOutOfRange(power) => {
                write!(f, "target power {power} is outside (0, 1)")
            }
            DomainError::MdeNotPositive(mde) => {
                write!(f, "minimum detectable effect {mde} is not a positive proportion")
            }
            DomainError::AllocationOutOfRange(pct) => {
                write!(f, "treatment percentage {pct} is outside (0, 100)")
            }
            DomainError::ZeroSampleSize => write!(f, "total sample size must be positive"),
            DomainError::InvalidGrid {
                start_pct,
                end_pct,
                step_pct,
                reason,
            } => {
                write!(
                    f,
                    "invalid allocation grid (start={start_pct}, end={end_pct}, step={step_pct}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
