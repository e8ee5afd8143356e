//! A module containing random generators objects.
//!
//! The [`RandomGenerator`] trait is implemented by generators producing a stream of bytes from a
//! [`Seed`](crate::seeders::Seed). A generator can be _forked_: the fork reserves a contiguous
//! portion of the parent stream and splits it evenly between a number of children generators, each
//! of them being bounded to its own portion. The parent generator resumes after the reserved
//! portion, so the parent and the children never output the same bytes.
use crate::seeders::Seed;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The number of children created when a generator is forked.
#[derive(Debug, Copy, Clone)]
pub struct ChildrenCount(pub usize);

/// The number of bytes each child can generate, when a generator is forked.
#[derive(Debug, Copy, Clone)]
pub struct BytesPerChild(pub usize);

/// A structure representing the number of bytes between two table indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteCount(pub u128);

/// An error occurring during a generator fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkError {
    ForkTooLarge,
    ZeroChildrenCount,
    ZeroBytesPerChild,
}

impl Display for ForkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ForkError::ForkTooLarge => {
                write!(
                    f,
                    "The children generators would output bytes after the parent bound. "
                )
            }
            ForkError::ZeroChildrenCount => {
                write!(
                    f,
                    "The number of children in the fork must be greater than zero."
                )
            }
            ForkError::ZeroBytesPerChild => {
                write!(
                    f,
                    "The number of bytes per child must be greater than zero."
                )
            }
        }
    }
}

impl Error for ForkError {}

/// A trait for cryptographically secure pseudo-random generators.
///
/// See the [crate-level](#crate) documentation for details.
pub trait RandomGenerator: Iterator<Item = u8> {
    /// The iterator over children generators, returned by `try_fork` in case of success.
    type ChildrenIter: Iterator<Item = Self>;

    /// Creates a new generator from a seed.
    ///
    /// This operation is usually costly to perform, as the aes round keys need to be generated from
    /// the seed.
    fn new(seed: Seed) -> Self;

    /// Returns the number of bytes that can still be outputted by the generator before reaching its
    /// bound.
    ///
    /// Note:
    /// -----
    ///
    /// A fresh generator can generate 2¹³² bytes. Unfortunately, no rust integer type in is able
    /// to encode such a large number. Consequently [`ByteCount`] uses the largest integer type
    /// available to encode this value: the `u128` type. For this reason, this method does not
    /// effectively return the number of remaining bytes, but instead
    /// `min(2¹²⁸-1, remaining_bytes)`.
    fn remaining_bytes(&self) -> ByteCount;

    /// Returns the next byte of the stream, if the generator did not yet reach its bound.
    fn next_byte(&mut self) -> Option<u8>;

    /// Tries to fork the generator into an iterator of `n_children` new generators, each able to
    /// output `n_bytes` bytes.
    ///
    /// Note:
    /// -----
    ///
    /// To be successful, the number of remaining bytes for the parent generator must be larger than
    /// `n_children*n_bytes`.
    fn try_fork(
        &mut self,
        n_children: ChildrenCount,
        n_bytes: BytesPerChild,
    ) -> Result<Self::ChildrenIter, ForkError>;
}

/// A trait extending [`RandomGenerator`] to the parallel iterators of `rayon`.
#[cfg(feature = "parallel")]
pub trait ParallelRandomGenerator: RandomGenerator + Send {
    /// The iterator over children generators, returned by `par_try_fork` in case of success.
    type ParChildrenIter: rayon::prelude::IndexedParallelIterator<Item = Self>;

    /// Tries to fork the generator into a parallel iterator of `n_children` new generators, each
    /// able to output `n_bytes` bytes.
    fn par_try_fork(
        &mut self,
        n_children: ChildrenCount,
        n_bytes: BytesPerChild,
    ) -> Result<Self::ParChildrenIter, ForkError>;
}

mod aes_ctr;

mod implem;
pub use implem::*;

/// The generator used by default on every platform.
pub type DefaultRandomGenerator = SoftwareRandomGenerator;

#[cfg(test)]
pub mod generator_generic_test {
    #![allow(unused)] // to please clippy when tests are not activated
    use super::*;
    use rand::Rng;

    const REPEATS: usize = 1_000;

    fn any_seed() -> Seed {
        Seed(rand::thread_rng().gen())
    }

    fn any_children_count() -> ChildrenCount {
        ChildrenCount(rand::thread_rng().gen_range(1..16))
    }

    fn any_bytes_per_child() -> BytesPerChild {
        BytesPerChild(rand::thread_rng().gen_range(1..64))
    }

    /// Checks that the bytes output by the children of a fork, taken in order, are the bytes the
    /// parent would have output without the fork, and that the parent resumes right after them.
    pub fn test_fork_children<G: RandomGenerator>() {
        for _ in 0..REPEATS {
            let seed = any_seed();
            let n_children = any_children_count();
            let n_bytes = any_bytes_per_child();
            let mut forked = G::new(seed);
            let mut reference = G::new(seed);

            let children_bytes: Vec<u8> = forked
                .try_fork(n_children, n_bytes)
                .unwrap()
                .flat_map(|child| child.collect::<Vec<_>>())
                .collect();
            let reference_bytes: Vec<u8> = (&mut reference)
                .take(n_children.0 * n_bytes.0)
                .collect();
            assert_eq!(children_bytes, reference_bytes);

            let after_fork: Vec<u8> = (&mut forked).take(64).collect();
            let reference_after: Vec<u8> = (&mut reference).take(64).collect();
            assert_eq!(after_fork, reference_after);
        }
    }

    /// Checks that a child generator stops exactly at its bound.
    pub fn test_bounded_none_should_be_returned<G: RandomGenerator>() {
        for _ in 0..REPEATS {
            let n_bytes = any_bytes_per_child();
            let mut generator = G::new(any_seed());
            let mut child = generator
                .try_fork(ChildrenCount(1), n_bytes)
                .unwrap()
                .next()
                .unwrap();
            assert_eq!(child.remaining_bytes(), ByteCount(n_bytes.0 as u128));
            for _ in 0..n_bytes.0 {
                assert!(child.next().is_some());
            }
            assert_eq!(child.remaining_bytes(), ByteCount(0));
            assert!(child.next().is_none());
        }
    }

    /// Checks that a bounded child refuses forks larger than what it can still output.
    pub fn test_fork_errors<G: RandomGenerator>() {
        let mut generator = G::new(any_seed());
        assert!(matches!(
            generator.try_fork(ChildrenCount(0), BytesPerChild(1)),
            Err(ForkError::ZeroChildrenCount)
        ));
        assert!(matches!(
            generator.try_fork(ChildrenCount(1), BytesPerChild(0)),
            Err(ForkError::ZeroBytesPerChild)
        ));
        let mut child = generator
            .try_fork(ChildrenCount(1), BytesPerChild(16))
            .unwrap()
            .next()
            .unwrap();
        assert!(matches!(
            child.try_fork(ChildrenCount(2), BytesPerChild(9)),
            Err(ForkError::ForkTooLarge)
        ));
        assert!(child.try_fork(ChildrenCount(2), BytesPerChild(8)).is_ok());
    }

    /// Checks that two generators seeded differently output different streams.
    pub fn test_different_seeds_different_streams<G: RandomGenerator>() {
        for _ in 0..REPEATS {
            let first = G::new(any_seed()).take(32).collect::<Vec<_>>();
            let second = G::new(any_seed()).take(32).collect::<Vec<_>>();
            assert_ne!(first, second);
        }
    }
}
