use crate::error::{Result, StatsError};

use super::{CONVERGENCE_EPS, MAX_ITERATIONS, TINY, ln_gamma};

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// This is the CDF of the Beta(a, b) distribution evaluated at `x`, and the
/// building block of the Student's t and F CDFs.
///
/// `x` saturates: anything `<= 0` returns exactly 0 and anything `>= 1`
/// returns exactly 1, which also absorbs round-off such as
/// `1.0000000000000002`. A NaN `x` yields NaN.
///
/// The continued fraction is evaluated on whichever side of
/// `(a + 1) / (a + b + 2)` converges fastest, using the identity
/// `I_x(a, b) = 1 − I_{1−x}(b, a)`.
///
/// # Errors
///
/// [`StatsError::Domain`] if `a <= 0` or `b <= 0` (or either is NaN).
///
/// # Example
///
/// ```
/// use single_hypothesis::beta_inc;
///
/// // Beta(1, 1) is the uniform distribution
/// assert!((beta_inc(0.5, 1.0, 1.0).unwrap() - 0.5).abs() < 1e-12);
/// assert_eq!(beta_inc(1.0, 2.0, 3.0).unwrap(), 1.0);
/// ```
pub fn beta_inc(x: f64, a: f64, b: f64) -> Result<f64> {
    StatsError::ensure_positive("a", a)?;
    StatsError::ensure_positive("b", b)?;

    if x <= 0.0 {
        return Ok(0.0);
    }
    if x >= 1.0 {
        return Ok(1.0);
    }

    let bt = (ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln()).exp();

    if x < (a + 1.0) / (a + b + 2.0) {
        Ok(bt * beta_cf(x, a, b) / a)
    } else {
        Ok(1.0 - bt * beta_cf(1.0 - x, b, a) / b)
    }
}

/// Continued fraction for `I_x(a, b)` by the modified Lentz method.
///
/// Returns the best value reached if the fraction has not converged after
/// [`MAX_ITERATIONS`] terms.
fn beta_cf(x: f64, a: f64, b: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = floor_tiny(1.0 - qab * x / qap).recip();
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m = m as f64;
        let m2 = 2.0 * m;

        // even step
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = floor_tiny(1.0 + aa * d).recip();
        c = floor_tiny(1.0 + aa / c);
        h *= d * c;

        // odd step
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = floor_tiny(1.0 + aa * d).recip();
        c = floor_tiny(1.0 + aa / c);
        let del = d * c;
        h *= del;

        if (del - 1.0).abs() < CONVERGENCE_EPS {
            return h;
        }
    }

    log::debug!(
        "incomplete beta continued fraction did not converge after {MAX_ITERATIONS} terms (x={x}, a={a}, b={b})"
    );
    h
}

#[inline]
fn floor_tiny(v: f64) -> f64 {
    if v.abs() < TINY { TINY } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SHAPES: [(f64, f64); 6] = [
        (0.5, 0.5),
        (1.0, 1.0),
        (2.0, 3.0),
        (5.0, 0.5),
        (0.5, 12.0),
        (30.0, 40.0),
    ];

    #[test]
    fn test_boundaries_are_exact() {
        for &(a, b) in &SHAPES {
            assert_eq!(beta_inc(0.0, a, b).unwrap(), 0.0);
            assert_eq!(beta_inc(1.0, a, b).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_saturates_outside_unit_interval() {
        assert_eq!(beta_inc(-0.3, 2.0, 2.0).unwrap(), 0.0);
        assert_eq!(beta_inc(1.0000000000000002, 2.0, 2.0).unwrap(), 1.0);
        assert_eq!(beta_inc(7.0, 2.0, 2.0).unwrap(), 1.0);
    }

    #[test]
    fn test_nan_x_propagates() {
        assert!(beta_inc(f64::NAN, 2.0, 2.0).unwrap().is_nan());
    }

    #[test]
    fn test_uniform_case() {
        assert_abs_diff_eq!(beta_inc(0.5, 1.0, 1.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(beta_inc(0.2, 1.0, 1.0).unwrap(), 0.2, epsilon = 1e-10);
    }

    #[test]
    fn test_closed_forms() {
        // I_x(a, 1) = x^a and I_x(1, b) = 1 - (1 - x)^b
        let x: f64 = 0.3;
        assert_abs_diff_eq!(beta_inc(x, 3.0, 1.0).unwrap(), x.powi(3), epsilon = 1e-10);
        assert_abs_diff_eq!(
            beta_inc(x, 1.0, 4.0).unwrap(),
            1.0 - (1.0 - x).powi(4),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_symmetry_identity() {
        for &(a, b) in &SHAPES {
            for i in 1..20 {
                let x = i as f64 / 20.0;
                let sum = beta_inc(x, a, b).unwrap() + beta_inc(1.0 - x, b, a).unwrap();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_monotone_in_x() {
        let mut prev = 0.0;
        for i in 1..100 {
            let v = beta_inc(i as f64 / 100.0, 2.5, 4.0).unwrap();
            assert!(v >= prev);
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            beta_inc(0.5, 0.0, 1.0),
            Err(StatsError::Domain { parameter: "a", .. })
        ));
        assert!(matches!(
            beta_inc(0.5, 1.0, -2.0),
            Err(StatsError::Domain { parameter: "b", .. })
        ));
        assert!(beta_inc(0.5, f64::NAN, 1.0).is_err());
        // parameters are validated before the boundary shortcut
        assert!(beta_inc(0.0, -1.0, 1.0).is_err());
    }
}
