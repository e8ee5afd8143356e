use super::{ArithmeticNumeric, CastFrom, CastInto, Numeric};
use std::ops::Neg;

/// The floating point types the noise and the float encodings are computed with.
pub trait FloatingPoint:
    ArithmeticNumeric + Neg<Output = Self> + CastFrom<f64> + CastInto<f64>
{
}

impl Numeric for f64 {
    const BITS: usize = 64;
    const ZERO: Self = 0.;
    const ONE: Self = 1.;
    const MAX: Self = f64::MAX;
}

impl FloatingPoint for f64 {}
