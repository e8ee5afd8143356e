use crate::generators::aes_ctr::{AesCtrGenerator, AesKey, ChildrenIterator};
use crate::generators::implem::soft::block_cipher::SoftwareBlockCipher;
use crate::generators::{ByteCount, BytesPerChild, ChildrenCount, ForkError, RandomGenerator};
use crate::seeders::Seed;

/// A random number generator using a software implementation.
#[derive(Clone)]
pub struct SoftwareRandomGenerator(pub(super) AesCtrGenerator<SoftwareBlockCipher>);

/// The children iterator used by [`SoftwareRandomGenerator`].
///
/// Outputs children generators one by one.
pub struct SoftwareChildrenIterator(ChildrenIterator<SoftwareBlockCipher>);

impl Iterator for SoftwareChildrenIterator {
    type Item = SoftwareRandomGenerator;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(SoftwareRandomGenerator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for SoftwareChildrenIterator {}

impl RandomGenerator for SoftwareRandomGenerator {
    type ChildrenIter = SoftwareChildrenIterator;

    fn new(seed: Seed) -> Self {
        SoftwareRandomGenerator(AesCtrGenerator::new(AesKey(seed.0), None, None))
    }

    fn remaining_bytes(&self) -> ByteCount {
        self.0.remaining_bytes()
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.0.next_byte()
    }

    fn try_fork(
        &mut self,
        n_children: ChildrenCount,
        n_bytes: BytesPerChild,
    ) -> Result<Self::ChildrenIter, ForkError> {
        self.0
            .try_fork(n_children, n_bytes)
            .map(SoftwareChildrenIterator)
    }
}

impl Iterator for SoftwareRandomGenerator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_byte()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generators::generator_generic_test;

    #[test]
    fn test_fork_children() {
        generator_generic_test::test_fork_children::<SoftwareRandomGenerator>();
    }

    #[test]
    fn test_bounded_none_should_be_returned() {
        generator_generic_test::test_bounded_none_should_be_returned::<SoftwareRandomGenerator>();
    }

    #[test]
    fn test_fork_errors() {
        generator_generic_test::test_fork_errors::<SoftwareRandomGenerator>();
    }

    #[test]
    fn test_different_seeds_different_streams() {
        generator_generic_test::test_different_seeds_different_streams::<SoftwareRandomGenerator>(
        );
    }
}
