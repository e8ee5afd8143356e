use crate::generators::aes_ctr::BYTES_PER_AES_CALL;
use crate::generators::ByteCount;
use std::cmp::Ordering;

/// A structure representing an aes index, i.e. the value of the counter fed to the block cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AesIndex(pub u128);

/// A structure representing the index of a byte in the output of an aes call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteIndex(pub usize);

/// A structure representing the index of a byte in the whole stream of a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableIndex {
    pub aes_index: AesIndex,
    pub byte_index: ByteIndex,
}

impl TableIndex {
    /// The first table index.
    pub const FIRST: TableIndex = TableIndex {
        aes_index: AesIndex(0),
        byte_index: ByteIndex(0),
    };

    /// The last table index.
    pub const LAST: TableIndex = TableIndex {
        aes_index: AesIndex(u128::MAX),
        byte_index: ByteIndex(BYTES_PER_AES_CALL - 1),
    };

    /// Returns the table index located `shift` bytes after `self`, if it can be represented.
    pub fn increased(self, shift: u128) -> Option<TableIndex> {
        let bytes_per_call = BYTES_PER_AES_CALL as u128;
        let mut byte_index = self.byte_index.0 as u128 + shift % bytes_per_call;
        let mut aes_shift = shift / bytes_per_call;
        if byte_index >= bytes_per_call {
            byte_index -= bytes_per_call;
            aes_shift += 1;
        }
        Some(TableIndex {
            aes_index: AesIndex(self.aes_index.0.checked_add(aes_shift)?),
            byte_index: ByteIndex(byte_index as usize),
        })
    }

    /// Returns the number of bytes between `self` and a larger index `other`, saturating at
    /// `u128::MAX`. Returns `None` if `other` is before `self`.
    pub fn distance(&self, other: &TableIndex) -> Option<ByteCount> {
        if other < self {
            return None;
        }
        let bytes_per_call = BYTES_PER_AES_CALL as u128;
        let count = (other.aes_index.0 - self.aes_index.0)
            .saturating_mul(bytes_per_call)
            .saturating_add(other.byte_index.0 as u128)
            .saturating_sub(self.byte_index.0 as u128);
        Some(ByteCount(count))
    }
}

impl Ord for TableIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.aes_index
            .cmp(&other.aes_index)
            .then(self.byte_index.cmp(&other.byte_index))
    }
}

impl PartialOrd for TableIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
