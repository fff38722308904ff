//! Special functions underlying the t and F distributions.
//!
//! Both functions are evaluated from scratch: [`ln_gamma`] with the Lanczos
//! approximation (plus the reflection formula below 0.5), and [`beta_inc`]
//! with Lentz's continued fraction. The constants below belong to those
//! approximation schemes and are deliberately not configurable at runtime.

mod beta;
mod gamma;

pub use beta::beta_inc;
pub use gamma::ln_gamma;

/// Lanczos parameter g.
pub const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients for g = 7, n = 9.
pub const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Maximum number of continued-fraction terms evaluated by [`beta_inc`].
pub const MAX_ITERATIONS: usize = 200;

/// Early-exit tolerance on the per-step multiplicative correction.
pub const CONVERGENCE_EPS: f64 = 1e-10;

/// Floor applied to near-zero Lentz denominators.
pub const TINY: f64 = 1e-30;
