use super::*;
use crate::commons::numeric::UnsignedInteger;

/// A distribution type representing uniform sampling for unsigned integer types. The value is
/// uniformly sampled in `[0, 2^n[` where `n` is the size of the integer type.
#[derive(Copy, Clone, Debug)]
pub struct Uniform;

macro_rules! implement_uniform {
    ($T:ty) => {
        impl RandomGenerable<Uniform> for $T {
            #[inline]
            fn generate_one<G: ByteRandomGenerator>(
                generator: &mut RandomGenerator<G>,
                _distribution: Uniform,
            ) -> Self {
                let mut buf = [0; <$T as UnsignedInteger>::BYTES];
                buf.iter_mut().for_each(|a| *a = generator.generate_next());
                <$T>::from_le_bytes(buf)
            }
        }
    };
}

implement_uniform!(u32);
implement_uniform!(u64);
implement_uniform!(u128);
