//! # single-hypothesis
//!
//! Classical hypothesis tests for small tabular samples, part of the single-rust ecosystem.
//!
//! This crate computes p-values for Pearson correlation, Student's two-sample t-test and
//! one-way ANOVA without pulling in a statistics library: the Student's t and F
//! distributions are evaluated from the log-gamma function (Lanczos approximation) and the
//! regularized incomplete beta function (Lentz's continued fraction).
//!
//! ## Core Features
//!
//! - **Hypothesis Tests**: Pearson correlation, pooled two-sample t-test, one-way ANOVA
//! - **Distributions**: Student's t and F CDFs, densities and p-values
//! - **Special Functions**: `ln Γ(z)` and `I_x(a, b)`
//! - **Significance**: classification of p-values against the 0.05 / 0.01 levels
//!
//! ## Quick Start
//!
//! ```
//! use single_hypothesis::{anova, t_test, Significance};
//!
//! let result = t_test(&[10.0, 12.0, 9.0, 11.0, 10.0], &[15.0, 14.0, 16.0, 13.0, 15.0])?;
//! assert_eq!(result.significance(), Significance::HighlySignificant);
//!
//! let groups = vec![vec![4.1, 5.0, 4.6], vec![6.2, 5.9, 6.8], vec![5.1, 5.3, 4.9]];
//! let result = anova(&groups)?;
//! assert_eq!((result.dfb, result.dfw), (2, 6));
//! # Ok::<(), single_hypothesis::StatsError>(())
//! ```
//!
//! All functions are pure; nothing is cached between calls and everything is safe to call
//! from multiple threads.
//!
//! ## Module Organization
//!
//! - **[`special`]**: Log-gamma and regularized incomplete beta functions
//! - **[`distribution`]**: Student's t and F distributions, p-value helpers
//! - **[`testing`]**: Hypothesis tests and their result records

pub mod distribution;
pub mod error;
pub mod special;
pub mod testing;

pub use distribution::{
    f_cdf, f_pdf, f_test_p_value, t_cdf, t_pdf, t_test_p_value, t_test_p_value_one_sided,
};
pub use error::{Result, StatsError};
pub use special::{beta_inc, ln_gamma};
pub use testing::inference::{anova, correlate, t_test};
pub use testing::{AnovaResult, Alternative, CorrelationResult, Significance, TTestResult};
