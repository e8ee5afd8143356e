use super::*;
use crate::commons::numeric::{Numeric, UnsignedInteger};

/// A distribution type representing uniform sampling for binary type.
#[derive(Clone, Copy, Debug)]
pub struct UniformBinary;

impl<T: UnsignedInteger> RandomGenerable<UniformBinary> for T {
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        _distribution: UniformBinary,
    ) -> Self {
        if generator.generate_next() & 1 == 1 {
            Self::ONE
        } else {
            Self::ZERO
        }
    }
}
