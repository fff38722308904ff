//! Small numeric helpers shared by the hypothesis tests.

#[inline]
pub(crate) fn to_f64<T: Into<f64>>(value: T) -> f64 {
    value.into()
}

pub(crate) fn sum<T>(values: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    values.iter().map(|&v| to_f64(v)).sum()
}

pub(crate) fn mean<T>(values: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    sum(values) / values.len() as f64
}

/// Sum of squared deviations from `center`.
pub(crate) fn sum_sq_dev<T>(values: &[T], center: f64) -> f64
where
    T: Copy + Into<f64>,
{
    values
        .iter()
        .map(|&v| {
            let d = to_f64(v) - center;
            d * d
        })
        .sum()
}

/// Bessel-corrected sample variance around a precomputed mean.
pub(crate) fn sample_variance<T>(values: &[T], mean: f64) -> f64
where
    T: Copy + Into<f64>,
{
    sum_sq_dev(values, mean) / (values.len() - 1) as f64
}
