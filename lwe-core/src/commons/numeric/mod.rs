//! Traits abstracting over the scalar types of the library.
//!
//! Ciphertexts are generic over their [`UnsignedInteger`] word, and cleartexts may also hold a
//! [`FloatingPoint`] value.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

pub use float::*;
pub use unsigned::*;

mod float;
mod unsigned;

/// A scalar type of the library.
pub trait Numeric:
    Sized + Copy + PartialEq + PartialOrd + std::fmt::Debug + Send + Sync + 'static
{
    /// The size of the type in bits.
    const BITS: usize;

    const ZERO: Self;

    const ONE: Self;

    /// The largest representable value.
    const MAX: Self;
}

/// A lossy conversion, performed with `as`.
pub trait CastFrom<Input> {
    fn cast_from(input: Input) -> Self;
}

/// The counterpart of [`CastFrom`], like [`Into`] is the counterpart of [`From`].
pub trait CastInto<Output> {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

macro_rules! implement_cast {
    ($Input:ty, {$($Output:ty),*}) => {
        $(
        impl CastFrom<$Input> for $Output {
            #[inline]
            fn cast_from(input: $Input) -> $Output {
                input as $Output
            }
        }
        )*
    };
    ($Input: ty) => {
        implement_cast!($Input, {f64, u8, u32, u64, u128, usize, i32, i64, i128});
    };
    ($($Input: ty),*) => {
        $(
        implement_cast!($Input);
        )*
    }
}

implement_cast!(f64, u8, u32, u64, u128, usize, i32, i64, i128);

/// A trait shared by the arithmetic types, signed or not.
pub trait ArithmeticNumeric:
    Numeric
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Div<Self, Output = Self>
    + DivAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Rem<Self, Output = Self>
    + RemAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
{
}

impl<T> ArithmeticNumeric for T where
    T: Numeric
        + Add<Self, Output = Self>
        + AddAssign<Self>
        + Div<Self, Output = Self>
        + DivAssign<Self>
        + Mul<Self, Output = Self>
        + MulAssign<Self>
        + Rem<Self, Output = Self>
        + RemAssign<Self>
        + Sub<Self, Output = Self>
        + SubAssign<Self>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_wraps_like_as() {
        assert_eq!(<u32 as CastFrom<u64>>::cast_from(u64::MAX), u32::MAX);
        assert_eq!(<u64 as CastFrom<i64>>::cast_from(-1), u64::MAX);
        assert_eq!(<i32 as CastFrom<u32>>::cast_from(u32::MAX), -1);
        let as_float: f64 = 3u64.cast_into();
        assert_eq!(as_float, 3.0);
    }
}
