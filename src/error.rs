use thiserror::Error;

/// Errors raised by the special functions and hypothesis tests.
///
/// Numerical saturation is not an error: an out-of-range `x` in
/// [`beta_inc`](crate::special::beta_inc) clamps to 0 or 1, and a zero
/// variance produces an infinite or NaN statistic that is returned as-is.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StatsError {
    /// A sample or group set is smaller than the test requires.
    #[error("insufficient data: {what} needs at least {required}, got {found}")]
    InsufficientData {
        what: &'static str,
        required: usize,
        found: usize,
    },

    /// A shape or degrees-of-freedom parameter is outside its domain.
    #[error("domain error: {parameter} must be positive, got {value}")]
    Domain { parameter: &'static str, value: f64 },
}

impl StatsError {
    pub(crate) fn insufficient(what: &'static str, required: usize, found: usize) -> Self {
        StatsError::InsufficientData {
            what,
            required,
            found,
        }
    }

    /// Fails with [`StatsError::Domain`] unless `value` is strictly positive.
    ///
    /// NaN is rejected as well.
    pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(StatsError::Domain { parameter, value })
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
