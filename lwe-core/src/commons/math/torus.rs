//! Conversions between unsigned integers and the real torus.
//!
//! An unsigned integer of `q` bits is identified with the real number `x / 2^q` of the torus
//! `[0, 1)`. Arithmetic modulo `2^q` on the integers matches the arithmetic modulo 1 on the torus.

use crate::commons::math::random::{Gaussian, RandomGenerable, Uniform, UniformBinary};
use crate::commons::numeric::{CastFrom, CastInto, Numeric, UnsignedInteger};

/// A trait that converts a torus element in floating point representation into the closest
/// torus element in unsigned integer representation.
pub trait FromTorus<F>: Sized {
    fn from_torus(input: F) -> Self;
}

/// A trait that converts a torus element in unsigned integer representation to the closest
/// torus element in floating point representation.
pub trait IntoTorus<F>: Sized {
    fn into_torus(self) -> F;
}

/// A trait for unsigned integers that can be used as torus elements, and sampled as such.
pub trait UnsignedTorus:
    UnsignedInteger
    + FromTorus<f64>
    + IntoTorus<f64>
    + RandomGenerable<Uniform>
    + RandomGenerable<UniformBinary>
    + RandomGenerable<Gaussian<f64>>
{
}

impl<T> UnsignedTorus for T where
    T: UnsignedInteger
        + FromTorus<f64>
        + IntoTorus<f64>
        + RandomGenerable<Uniform>
        + RandomGenerable<UniformBinary>
        + RandomGenerable<Gaussian<f64>>
{
}

macro_rules! implement {
    ($Type: tt) => {
        impl FromTorus<f64> for $Type {
            #[inline]
            fn from_torus(input: f64) -> $Type {
                let fract = input - input.floor();
                // The rounded value may land exactly on 2^q, going through u128 makes it wrap
                // to zero instead of saturating.
                let scaled: u128 = (fract * 2_f64.powi(<$Type as Numeric>::BITS as i32))
                    .round()
                    .cast_into();
                <$Type>::cast_from(scaled)
            }
        }

        impl IntoTorus<f64> for $Type {
            #[inline]
            fn into_torus(self) -> f64 {
                let value: f64 = self.cast_into();
                value / 2_f64.powi(<$Type as Numeric>::BITS as i32)
            }
        }
    };
}

implement!(u32);
implement!(u64);
