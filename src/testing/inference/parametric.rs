//! Parametric tests: the pooled two-sample t-test and one-way ANOVA.
//!
//! Both tests assume normally distributed groups with a common variance.
//! Degenerate data (a zero standard error, a zero within-group mean square)
//! is not special-cased: the statistic comes out as ±∞ or NaN and the
//! p-value follows it.

use crate::distribution::{f_test_p_value, t_test_p_value};
use crate::error::{Result, StatsError};
use crate::testing::utils::{mean, sample_variance, sum, sum_sq_dev};
use crate::testing::{AnovaResult, TTestResult};

/// Perform Student's two-sample t-test (equal-variance assumption).
///
/// Each group's variance is Bessel-corrected; the two are pooled, weighted by
/// their degrees of freedom:
///
/// ```text
/// s²ₚ = ((n₁−1)s₁² + (n₂−1)s₂²) / (n₁+n₂−2)
/// se  = √(s²ₚ (1/n₁ + 1/n₂))
/// t   = (x̄₁ − x̄₂) / se,  df = n₁+n₂−2
/// ```
///
/// The returned p-value is two-tailed; use
/// [`TTestResult::p_value_for`] for a one-sided alternative.
///
/// # Arguments
///
/// * `x` - First sample
/// * `y` - Second sample
///
/// # Errors
///
/// [`StatsError::InsufficientData`] if either sample has fewer than 2
/// observations.
///
/// # Example
///
/// ```
/// use single_hypothesis::t_test;
///
/// let result = t_test(&[10.0, 12.0, 9.0, 11.0, 10.0], &[15.0, 14.0, 16.0, 13.0, 15.0]).unwrap();
/// assert_eq!(result.df, 8.0);
/// assert!(result.t < 0.0 && result.p_value < 0.01);
/// ```
pub fn t_test<T>(x: &[T], y: &[T]) -> Result<TTestResult>
where
    T: Copy + Into<f64>,
{
    let (n1, n2) = (x.len(), y.len());
    if n1 < 2 {
        return Err(StatsError::insufficient("first group", 2, n1));
    }
    if n2 < 2 {
        return Err(StatsError::insufficient("second group", 2, n2));
    }

    let mean1 = mean(x);
    let mean2 = mean(y);
    let var1 = sample_variance(x, mean1);
    let var2 = sample_variance(y, mean2);

    let (n1_f, n2_f) = (n1 as f64, n2 as f64);
    let df = n1_f + n2_f - 2.0;
    let pooled_var = ((n1_f - 1.0) * var1 + (n2_f - 1.0) * var2) / df;
    let se = (pooled_var * (1.0 / n1_f + 1.0 / n2_f)).sqrt();
    if se == 0.0 {
        log::debug!("t-test on two constant groups: standard error is zero");
    }

    let t = (mean1 - mean2) / se;
    let p_value = t_test_p_value(t, df)?;

    Ok(TTestResult {
        t,
        df,
        mean1,
        mean2,
        var1,
        var2,
        n1,
        n2,
        se,
        p_value,
    })
}

/// Perform a one-way analysis of variance across `k >= 2` groups.
///
/// ```text
/// SSB = Σᵢ nᵢ (x̄ᵢ − x̄)²        dfb = k − 1
/// SSW = Σᵢ Σⱼ (xᵢⱼ − x̄ᵢ)²      dfw = N − k
/// F   = (SSB/dfb) / (SSW/dfw)
/// ```
///
/// The p-value is the upper tail of F(dfb, dfw). When every group holds a
/// single observation `dfw` is zero, `msw` and `f` are NaN, and so is the
/// p-value.
///
/// Groups may be any slice-like container, e.g. `Vec<Vec<f64>>` or
/// `&[&[f32]]`.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] if fewer than 2 groups are given or any
/// group is empty.
pub fn anova<S, T>(groups: &[S]) -> Result<AnovaResult>
where
    S: AsRef<[T]>,
    T: Copy + Into<f64>,
{
    let k = groups.len();
    if k < 2 {
        return Err(StatsError::insufficient("groups", 2, k));
    }
    if groups.iter().any(|g| g.as_ref().is_empty()) {
        return Err(StatsError::insufficient("observations per group", 1, 0));
    }

    let (total_sum, total_n) = groups.iter().fold((0.0, 0usize), |(s, n), g| {
        let g = g.as_ref();
        (s + sum(g), n + g.len())
    });
    let grand_mean = total_sum / total_n as f64;

    let group_means: Vec<f64> = groups.iter().map(|g| mean(g.as_ref())).collect();

    let ssb: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &m)| g.as_ref().len() as f64 * (m - grand_mean).powi(2))
        .sum();

    let ssw: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &m)| sum_sq_dev(g.as_ref(), m))
        .sum();

    let dfb = k - 1;
    let dfw = total_n - k;
    let msb = ssb / dfb as f64;
    let msw = ssw / dfw as f64;
    let f = msb / msw;

    let p_value = if dfw == 0 {
        log::debug!("ANOVA with one observation per group has no within-group degrees of freedom");
        f64::NAN
    } else {
        if msw == 0.0 {
            log::debug!("ANOVA groups are internally constant: within-group mean square is zero");
        }
        f_test_p_value(f, dfb as f64, dfw as f64)?
    };

    Ok(AnovaResult {
        f,
        dfb,
        dfw,
        ssb,
        ssw,
        msb,
        msw,
        grand_mean,
        group_means,
        p_value,
    })
}
