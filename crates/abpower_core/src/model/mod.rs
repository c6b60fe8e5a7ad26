mod design;
mod results;

pub use design::{ADEQUATE_POWER, DEFAULT_ALPHA, DEFAULT_POWER, P_POOLED, mde_between};
pub use results::{GroupSizes, MdeResult, PowerResult, SampleSizeResult};
