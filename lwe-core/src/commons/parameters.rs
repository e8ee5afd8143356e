//! Sizes and counts, each wrapped in its own type so that a dimension is never passed where a
//! size is expected.

use serde::{Deserialize, Serialize};

/// How many plaintexts a vector holds.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlaintextCount(pub usize);

/// How many cleartexts a vector holds.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct CleartextCount(pub usize);

/// How many ciphertexts a vector holds.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct LweCiphertextCount(pub usize);

/// The word count of one ciphertext: the mask plus the body.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub struct LweSize(pub usize);

impl LweSize {
    pub fn to_lwe_dimension(&self) -> LweDimension {
        LweDimension(self.0 - 1)
    }
}

/// The mask length of a ciphertext, which is also the secret key length.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub struct LweDimension(pub usize);

impl LweDimension {
    pub fn to_lwe_size(&self) -> LweSize {
        LweSize(self.0 + 1)
    }
}

/// The number of bits of precision of a fixed-point encoding, not counting the sign bit.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub struct PrecisionBits(pub usize);

/// The number of low-order bits of a fixed-point word reserved as noise headroom.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub struct EncodingShift(pub usize);

impl PrecisionBits {
    /// Return the shift of a word of `bits` bits encoded with this precision, i.e.
    /// `bits - (precision + 1)`, if the precision fits in the word.
    pub fn to_encoding_shift(&self, bits: usize) -> Option<EncodingShift> {
        self.0
            .checked_add(1)
            .and_then(|width| bits.checked_sub(width))
            .map(EncodingShift)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lwe_size_dimension_conversions() {
        assert_eq!(LweDimension(512).to_lwe_size(), LweSize(513));
        assert_eq!(LweSize(513).to_lwe_dimension(), LweDimension(512));
    }

    #[test]
    fn precision_to_shift() {
        assert_eq!(PrecisionBits(6).to_encoding_shift(64), Some(EncodingShift(57)));
        assert_eq!(PrecisionBits(6).to_encoding_shift(32), Some(EncodingShift(25)));
        assert_eq!(PrecisionBits(63).to_encoding_shift(64), Some(EncodingShift(0)));
        assert_eq!(PrecisionBits(64).to_encoding_shift(64), None);
        assert_eq!(PrecisionBits(usize::MAX).to_encoding_shift(64), None);
    }
}
