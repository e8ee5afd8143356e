use crate::generators::aes_ctr::BYTES_PER_AES_CALL;

/// Represents a key used in the AES block cipher.
///
/// The u128 endianness should be ignored by implementations and the u128 should be seen as a simple
/// [u8; 16].
#[derive(Clone, Copy)]
pub struct AesKey(pub u128);

/// A trait for AES block ciphers.
pub trait AesBlockCipher: Clone + Send + Sync {
    /// Instantiate a new generator from a secret key.
    fn new(key: AesKey) -> Self;
    /// Encrypts the given counter value.
    fn generate_next(&mut self, data: u128) -> [u8; BYTES_PER_AES_CALL];
}
