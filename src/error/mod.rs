use thiserror::Error;

/// Failures reported by array operations.
///
/// Each precondition gets its own variant so callers can branch on what went wrong.
/// NaN/Infinity produced by IEEE math and the zero-divisor policy are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrayError {
    #[error("could not allocate storage for {requested} elements")]
    Allocation { requested: usize },

    #[error("{op}: array lengths not equal ({left}, {right})")]
    ShapeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("{op}: array is empty")]
    Empty { op: &'static str },

    #[error("range: step must be finite and non-zero, got {step}")]
    InvalidStep { step: f64 },

    #[error("range: element count is not finite for start={start}, stop={stop}, step={step}")]
    InvalidRange { start: f64, stop: f64, step: f64 },

    #[error("clip: lower bound {lo} is not <= upper bound {hi}")]
    InvalidBounds { lo: f64, hi: f64 },
}

pub type Result<T> = std::result::Result<T, ArrayError>;
