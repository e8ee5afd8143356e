//! Noise distribution primitives.
//!
//! The noise added by an encryption is drawn from a centered gaussian distribution, described by
//! its [`Variance`]. The variance is expressed on the torus, i.e. relative to the modulus $2^q$ of
//! the integers the noise is added to: a variance of $2^{-50}$ on 64 bits words gives a standard
//! deviation of $2^{39}$ once scaled to the integers.

use serde::{Deserialize, Serialize};

/// A trait for types representing the parameters of a noise distribution.
pub trait DispersionParameter: Copy {
    /// Return the standard deviation of the distribution.
    fn get_standard_dev(&self) -> f64;
    /// Return the variance of the distribution.
    fn get_variance(&self) -> f64;
    /// Whether the parameter describes a proper distribution: finite and non-negative.
    fn is_valid(&self) -> bool {
        let variance = self.get_variance();
        variance.is_finite() && variance >= 0.
    }
}

/// A distribution parameter that uses the variance as representation
///
/// # Example:
///
/// ```rust
/// use lwe_core::commons::dispersion::{DispersionParameter, Variance};
/// let params = Variance(2_f64.powi(-50));
/// assert_eq!(params.get_standard_dev(), 2_f64.powf(-25.));
/// assert!(params.is_valid());
/// assert!(!Variance(-1.).is_valid());
/// assert!(!Variance(f64::NAN).is_valid());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Variance(pub f64);

impl DispersionParameter for Variance {
    fn get_standard_dev(&self) -> f64 {
        self.0.sqrt()
    }
    fn get_variance(&self) -> f64 {
        self.0
    }
}
