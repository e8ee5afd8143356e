use crate::generators::aes_ctr::{
    AesBlockCipher, AesIndex, AesKey, TableIndex, BYTES_PER_AES_CALL,
};
use crate::generators::{ByteCount, BytesPerChild, ChildrenCount, ForkError};

/// A generic random generator using the AES block cipher in counter mode.
///
/// The generator outputs the bytes located between its current index (inclusive) and its bound
/// (exclusive). A generator created from a seed is bounded by [`TableIndex::LAST`], which is never
/// reached in practice.
#[derive(Clone)]
pub struct AesCtrGenerator<BlockCipher: AesBlockCipher> {
    // The block cipher used in the background
    block_cipher: Box<BlockCipher>,
    // The index of the next byte to output
    state: TableIndex,
    // The first index the generator is not allowed to output
    bound: TableIndex,
    // The output of the last aes call
    buffer: [u8; BYTES_PER_AES_CALL],
    // The counter value which produced `buffer`
    buffered: Option<AesIndex>,
}

impl<BlockCipher: AesBlockCipher> AesCtrGenerator<BlockCipher> {
    /// Generates a new csprng.
    ///
    /// If not given, `start` defaults to [`TableIndex::FIRST`] and `bound` to
    /// [`TableIndex::LAST`].
    pub fn new(key: AesKey, start: Option<TableIndex>, bound: Option<TableIndex>) -> Self {
        AesCtrGenerator::from_block_cipher(
            Box::new(BlockCipher::new(key)),
            start.unwrap_or(TableIndex::FIRST),
            bound.unwrap_or(TableIndex::LAST),
        )
    }

    fn from_block_cipher(
        block_cipher: Box<BlockCipher>,
        state: TableIndex,
        bound: TableIndex,
    ) -> Self {
        AesCtrGenerator {
            block_cipher,
            state,
            bound,
            buffer: [0; BYTES_PER_AES_CALL],
            buffered: None,
        }
    }

    /// Returns the index of the next byte to be output.
    pub fn table_index(&self) -> TableIndex {
        self.state
    }

    /// Returns the number of bytes the generator can still output.
    pub fn remaining_bytes(&self) -> ByteCount {
        self.state.distance(&self.bound).unwrap_or(ByteCount(0))
    }

    /// Outputs the next random byte, or `None` if the bound was reached.
    pub fn next_byte(&mut self) -> Option<u8> {
        if self.state >= self.bound {
            return None;
        }
        let aes_index = self.state.aes_index;
        if self.buffered != Some(aes_index) {
            self.buffer = self.block_cipher.generate_next(aes_index.0);
            self.buffered = Some(aes_index);
        }
        let output = self.buffer[self.state.byte_index.0];
        // The state is strictly below the bound, hence below the last representable index.
        self.state = self.state.increased(1)?;
        Some(output)
    }

    /// Tries to fork the current generator into `n_children` generators each containing
    /// `n_bytes`.
    pub fn try_fork(
        &mut self,
        n_children: ChildrenCount,
        n_bytes: BytesPerChild,
    ) -> Result<ChildrenIterator<BlockCipher>, ForkError> {
        if n_children.0 == 0 {
            return Err(ForkError::ZeroChildrenCount);
        }
        if n_bytes.0 == 0 {
            return Err(ForkError::ZeroBytesPerChild);
        }
        let total_bytes = (n_children.0 as u128)
            .checked_mul(n_bytes.0 as u128)
            .ok_or(ForkError::ForkTooLarge)?;
        if self.remaining_bytes().0 < total_bytes {
            return Err(ForkError::ForkTooLarge);
        }

        let first_child_start = self.state;
        self.state = self
            .state
            .increased(total_bytes)
            .ok_or(ForkError::ForkTooLarge)?;

        Ok(ChildrenIterator {
            block_cipher: self.block_cipher.clone(),
            next_start: first_child_start,
            n_bytes,
            remaining_children: n_children.0,
        })
    }
}

impl<BlockCipher: AesBlockCipher> Iterator for AesCtrGenerator<BlockCipher> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_byte()
    }
}

/// The iterator over the children of a fork, in the order of their portion of the stream.
pub struct ChildrenIterator<BlockCipher: AesBlockCipher> {
    block_cipher: Box<BlockCipher>,
    next_start: TableIndex,
    n_bytes: BytesPerChild,
    remaining_children: usize,
}

impl<BlockCipher: AesBlockCipher> Iterator for ChildrenIterator<BlockCipher> {
    type Item = AesCtrGenerator<BlockCipher>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining_children == 0 {
            return None;
        }
        let start = self.next_start;
        // The parent checked that the whole fork fits before its own bound.
        let bound = start.increased(self.n_bytes.0 as u128)?;
        self.next_start = bound;
        self.remaining_children -= 1;
        Some(AesCtrGenerator::from_block_cipher(
            self.block_cipher.clone(),
            start,
            bound,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining_children, Some(self.remaining_children))
    }
}

impl<BlockCipher: AesBlockCipher> ExactSizeIterator for ChildrenIterator<BlockCipher> {}

#[cfg(test)]
pub mod aes_ctr_generic_test {
    #![allow(unused)] // to please clippy when tests are not activated
    use super::*;
    use crate::generators::aes_ctr::ByteIndex;

    /// Checks that a generator started in the middle of the stream outputs the same bytes as a
    /// generator started at the beginning and advanced to the same position.
    pub fn prop_fork_start_matches_offset<B: AesBlockCipher>() {
        let key = AesKey(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let mut from_start = AesCtrGenerator::<B>::new(key, None, None);
        let offset = TableIndex {
            aes_index: AesIndex(2),
            byte_index: ByteIndex(5),
        };
        let mut from_offset = AesCtrGenerator::<B>::new(key, Some(offset), None);
        from_start.nth(2 * BYTES_PER_AES_CALL + 5 - 1);
        assert_eq!(from_start.table_index(), offset);
        for _ in 0..100 {
            assert_eq!(from_start.next(), from_offset.next());
        }
    }

    /// Checks that bytes are produced by encrypting consecutive counter values.
    pub fn prop_stream_is_counter_mode<B: AesBlockCipher>() {
        let key = AesKey(42);
        let mut cipher = B::new(key);
        let generator = AesCtrGenerator::<B>::new(key, None, None);
        let stream: Vec<u8> = generator.take(3 * BYTES_PER_AES_CALL).collect();
        for (counter, chunk) in stream.chunks(BYTES_PER_AES_CALL).enumerate() {
            assert_eq!(chunk, cipher.generate_next(counter as u128).as_slice());
        }
    }
}
