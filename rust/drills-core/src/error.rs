//! Error taxonomy shared by every drill.

use thiserror::Error;

// ── Errors ──────────────────────────────────────────────────────────

/// Input rejected before any work starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrillError {
    /// Circle size outside `[2, max]`.
    #[error("Invalid number. Please enter a number between 2 and {max}.")]
    InvalidInputSize { n: i128, max: usize },
    /// A step count (`k`, `k1` or `k2`) that is zero or negative.
    #[error("invalid step count {name} = {value}: step counts must be positive")]
    InvalidStepCount { name: &'static str, value: i64 },
    /// Random datasets need a non-empty `0..max_value` range.
    #[error("invalid value range 0..{max_value}: the upper bound must be positive")]
    EmptyValueRange { max_value: i32 },
}
