use crate::error::{Result, StatsError};
use crate::testing::CorrelationResult;
use crate::testing::utils::{mean, to_f64};

/// Pearson product-moment correlation of two paired samples.
///
/// The samples are paired by index and truncated to the shorter length `n`.
/// If either truncated sample is constant the denominator is zero and `r` is
/// NaN; that is returned as-is.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] if fewer than 2 pairs remain after
/// truncation.
///
/// # Example
///
/// ```
/// use single_hypothesis::correlate;
///
/// let result = correlate(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.5]).unwrap();
/// assert!(result.r > 0.99);
/// ```
pub fn correlate<T>(a: &[T], b: &[T]) -> Result<CorrelationResult>
where
    T: Copy + Into<f64>,
{
    let n = a.len().min(b.len());
    if n < 2 {
        return Err(StatsError::insufficient("paired observations", 2, n));
    }

    let (a, b) = (&a[..n], &b[..n]);
    let mean1 = mean(a);
    let mean2 = mean(b);

    let (sum_cross, sum_sq1, sum_sq2) = a
        .iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(cross, sq1, sq2), (&x, &y)| {
            let d1 = to_f64(x) - mean1;
            let d2 = to_f64(y) - mean2;
            (cross + d1 * d2, sq1 + d1 * d1, sq2 + d2 * d2)
        });

    let r = sum_cross / (sum_sq1 * sum_sq2).sqrt();
    if r.is_nan() {
        log::debug!("correlation undefined: one of the series has zero variance");
    }

    Ok(CorrelationResult {
        r,
        n,
        mean1,
        mean2,
        sum_cross,
        sum_sq1,
        sum_sq2,
    })
}
