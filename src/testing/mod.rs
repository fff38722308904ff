//! Hypothesis tests and their result records.
//!
//! Every test is a pure function of its input samples: it reduces the data to
//! a statistic, converts that statistic into a p-value through
//! [`distribution`](crate::distribution), and returns a plain record with the
//! intermediate quantities a report needs to show its work.

use crate::distribution::t_test_p_value_one_sided;
use crate::error::Result;

pub mod inference;

pub(crate) mod utils;

/// Conventional significance level.
pub const ALPHA_SIGNIFICANT: f64 = 0.05;

/// Significance level for "highly significant" results.
pub const ALPHA_HIGHLY_SIGNIFICANT: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alternative {
    TwoSided,
    Less,    // μ₁ < μ₂
    Greater, // μ₁ > μ₂
}

/// Coarse reading of a p-value against the 0.05 and 0.01 levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Significance {
    /// `p > 0.05`, or the p-value is NaN.
    NotSignificant,
    /// `0.01 < p <= 0.05`
    Significant,
    /// `p <= 0.01`
    HighlySignificant,
}

impl Significance {
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value.is_nan() || p_value > ALPHA_SIGNIFICANT {
            Significance::NotSignificant
        } else if p_value > ALPHA_HIGHLY_SIGNIFICANT {
            Significance::Significant
        } else {
            Significance::HighlySignificant
        }
    }

    pub fn is_significant(self) -> bool {
        self != Significance::NotSignificant
    }
}

/// Pearson correlation between two paired samples.
///
/// Only the first `n = min(len(a), len(b))` pairs take part. No p-value is
/// attached. `r` is NaN when either sample is constant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CorrelationResult {
    pub r: f64,
    pub n: usize,
    pub mean1: f64,
    pub mean2: f64,
    /// Σ(aᵢ − ā)(bᵢ − b̄)
    pub sum_cross: f64,
    /// Σ(aᵢ − ā)²
    pub sum_sq1: f64,
    /// Σ(bᵢ − b̄)²
    pub sum_sq2: f64,
}

impl CorrelationResult {
    /// Sample covariance (divisor `n − 1`).
    pub fn covariance(&self) -> f64 {
        self.sum_cross / (self.n as f64 - 1.0)
    }

    /// Sample standard deviation of the first series.
    pub fn std_dev1(&self) -> f64 {
        (self.sum_sq1 / (self.n as f64 - 1.0)).sqrt()
    }

    /// Sample standard deviation of the second series.
    pub fn std_dev2(&self) -> f64 {
        (self.sum_sq2 / (self.n as f64 - 1.0)).sqrt()
    }

    /// Coefficient of determination, `r²`.
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }
}

/// Two-sample Student's t-test with pooled variance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TTestResult {
    /// The t statistic, `(mean1 − mean2) / se`
    pub t: f64,
    /// Degrees of freedom, `n1 + n2 − 2`
    pub df: f64,
    pub mean1: f64,
    pub mean2: f64,
    /// Bessel-corrected sample variances
    pub var1: f64,
    pub var2: f64,
    pub n1: usize,
    pub n2: usize,
    /// Standard error of the mean difference
    pub se: f64,
    /// Two-tailed p-value
    pub p_value: f64,
}

impl TTestResult {
    pub fn pooled_variance(&self) -> f64 {
        let (n1, n2) = (self.n1 as f64, self.n2 as f64);
        ((n1 - 1.0) * self.var1 + (n2 - 1.0) * self.var2) / (n1 + n2 - 2.0)
    }

    /// Recompute the p-value for a one- or two-sided alternative.
    pub fn p_value_for(&self, alternative: Alternative) -> Result<f64> {
        t_test_p_value_one_sided(self.t, self.df, alternative)
    }

    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value)
    }

    /// Check if the result is statistically significant at the given threshold
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }
}

/// One-way analysis of variance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AnovaResult {
    /// `msb / msw`
    pub f: f64,
    /// Between-group degrees of freedom, `k − 1`
    pub dfb: usize,
    /// Within-group degrees of freedom, `N − k`
    pub dfw: usize,
    pub ssb: f64,
    pub ssw: f64,
    pub msb: f64,
    pub msw: f64,
    pub grand_mean: f64,
    pub group_means: Vec<f64>,
    /// Upper-tail p-value of the F statistic
    pub p_value: f64,
}

impl AnovaResult {
    /// Number of groups.
    pub fn k(&self) -> usize {
        self.group_means.len()
    }

    /// Total number of observations across all groups.
    pub fn n_total(&self) -> usize {
        self.dfw + self.k()
    }

    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value)
    }

    /// Check if the result is statistically significant at the given threshold
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significance_thresholds() {
        assert_eq!(Significance::from_p_value(0.2), Significance::NotSignificant);
        assert_eq!(Significance::from_p_value(0.0500001), Significance::NotSignificant);
        assert_eq!(Significance::from_p_value(0.05), Significance::Significant);
        assert_eq!(Significance::from_p_value(0.03), Significance::Significant);
        assert_eq!(Significance::from_p_value(0.01), Significance::HighlySignificant);
        assert_eq!(Significance::from_p_value(0.0), Significance::HighlySignificant);
        assert_eq!(Significance::from_p_value(f64::NAN), Significance::NotSignificant);

        assert!(!Significance::NotSignificant.is_significant());
        assert!(Significance::Significant.is_significant());
        assert!(Significance::HighlySignificant.is_significant());
    }

    #[test]
    fn test_correlation_derived_quantities() {
        let result = CorrelationResult {
            r: 0.5,
            n: 5,
            mean1: 0.0,
            mean2: 0.0,
            sum_cross: 8.0,
            sum_sq1: 16.0,
            sum_sq2: 36.0,
        };
        assert_eq!(result.covariance(), 2.0);
        assert_eq!(result.std_dev1(), 2.0);
        assert_eq!(result.std_dev2(), 3.0);
        assert_eq!(result.r_squared(), 0.25);
    }

    #[test]
    fn test_anova_counts() {
        let result = AnovaResult {
            f: 1.0,
            dfb: 2,
            dfw: 9,
            ssb: 0.0,
            ssw: 0.0,
            msb: 0.0,
            msw: 0.0,
            grand_mean: 0.0,
            group_means: vec![0.0; 3],
            p_value: 0.4,
        };
        assert_eq!(result.k(), 3);
        assert_eq!(result.n_total(), 12);
        assert!(!result.is_significant(0.05));
    }

    fn anova_with_p_value(p_value: f64) -> AnovaResult {
        AnovaResult {
            f: 4.0,
            dfb: 2,
            dfw: 6,
            ssb: 8.0,
            ssw: 6.0,
            msb: 4.0,
            msw: 1.0,
            grand_mean: 5.0,
            group_means: vec![4.0, 5.0, 6.0],
            p_value,
        }
    }

    #[test]
    fn test_is_significant_agrees_with_classification_at_alpha() {
        for &p in &[ALPHA_SIGNIFICANT, ALPHA_HIGHLY_SIGNIFICANT, 0.03, 0.2] {
            let anova = anova_with_p_value(p);
            assert_eq!(
                anova.is_significant(ALPHA_SIGNIFICANT),
                anova.significance().is_significant(),
                "p = {p}"
            );
        }
        assert!(anova_with_p_value(ALPHA_SIGNIFICANT).is_significant(ALPHA_SIGNIFICANT));

        let t_test = TTestResult {
            t: 2.306,
            df: 8.0,
            mean1: 0.0,
            mean2: 0.0,
            var1: 1.0,
            var2: 1.0,
            n1: 5,
            n2: 5,
            se: 1.0,
            p_value: ALPHA_SIGNIFICANT,
        };
        assert_eq!(t_test.significance(), Significance::Significant);
        assert!(t_test.is_significant(ALPHA_SIGNIFICANT));
        assert!(!t_test.is_significant(ALPHA_HIGHLY_SIGNIFICANT));
    }

    #[test]
    fn test_correlation_accessors_on_empty_record() {
        let result = CorrelationResult {
            r: f64::NAN,
            n: 0,
            mean1: 0.0,
            mean2: 0.0,
            sum_cross: 0.0,
            sum_sq1: 0.0,
            sum_sq2: 0.0,
        };
        // divisor is -1 in f64; no usize underflow
        assert_eq!(result.covariance(), 0.0);
        assert!(result.std_dev1().is_finite());
        assert!(result.std_dev2().is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_records_serialize_with_camel_case_keys() {
        let value = serde_json::to_value(anova_with_p_value(0.04)).unwrap();
        for key in ["f", "dfb", "dfw", "ssb", "ssw", "msb", "msw", "grandMean", "groupMeans", "pValue"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert!(value.get("grand_mean").is_none());
        assert_eq!(value["groupMeans"], serde_json::json!([4.0, 5.0, 6.0]));

        let t_test = TTestResult {
            t: -5.5,
            df: 8.0,
            mean1: 10.5,
            mean2: 14.5,
            var1: 1.25,
            var2: 1.75,
            n1: 5,
            n2: 5,
            se: 0.75,
            p_value: 0.0009765625,
        };
        let value = serde_json::to_value(t_test).unwrap();
        for key in ["t", "df", "mean1", "mean2", "var1", "var2", "n1", "n2", "se", "pValue"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["n1"], serde_json::json!(5));

        let back: TTestResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, t_test);
    }
}
