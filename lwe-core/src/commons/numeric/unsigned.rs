use super::{ArithmeticNumeric, CastFrom, CastInto, Numeric};
use std::ops::{BitAnd, BitOr, Not, Shl, ShlAssign, Shr, ShrAssign};

/// The machine words ciphertexts are made of. Arithmetic on them is modular.
pub trait UnsignedInteger:
    ArithmeticNumeric
    + Ord
    + Eq
    + BitAnd<Self, Output = Self>
    + BitOr<Self, Output = Self>
    + Not<Output = Self>
    + Shl<usize, Output = Self>
    + ShlAssign<usize>
    + Shr<usize, Output = Self>
    + ShrAssign<usize>
    + CastFrom<f64>
    + CastInto<f64>
    + CastFrom<u128>
    + CastInto<u128>
{
    /// Size of the little endian representation.
    const BYTES: usize;

    #[must_use]
    fn wrapping_add(self, other: Self) -> Self;

    #[must_use]
    fn wrapping_sub(self, other: Self) -> Self;

    #[must_use]
    fn wrapping_mul(self, other: Self) -> Self;
}

macro_rules! implement_unsigned {
    ($($Type:ty),+) => {
        $(
            impl Numeric for $Type {
                const BITS: usize = <$Type>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$Type>::MAX;
            }

            impl UnsignedInteger for $Type {
                const BYTES: usize = std::mem::size_of::<$Type>();

                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    <$Type>::wrapping_add(self, other)
                }

                #[inline]
                fn wrapping_sub(self, other: Self) -> Self {
                    <$Type>::wrapping_sub(self, other)
                }

                #[inline]
                fn wrapping_mul(self, other: Self) -> Self {
                    <$Type>::wrapping_mul(self, other)
                }
            }
        )+
    };
}

implement_unsigned!(u32, u64, u128);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_wrap_around() {
        assert_eq!(UnsignedInteger::wrapping_add(u64::MAX, 2_u64), 1);
        assert_eq!(UnsignedInteger::wrapping_sub(0_u32, 1_u32), u32::MAX);
        assert_eq!(UnsignedInteger::wrapping_mul(1_u32 << 31, 2_u32), 0);
        assert_eq!(<u128 as UnsignedInteger>::BYTES, 16);
    }
}
