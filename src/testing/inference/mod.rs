//! Entry points for the hypothesis tests.
//!
//! Samples are plain slices of anything convertible to `f64`, so `&[f64]`,
//! `&[f32]` and integer slices all work without copying into a new buffer.

pub mod correlation;
pub mod parametric;

pub use correlation::correlate;
pub use parametric::{anova, t_test};
