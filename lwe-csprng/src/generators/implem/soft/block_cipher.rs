use crate::generators::aes_ctr::{AesBlockCipher, AesKey, BYTES_PER_AES_CALL};
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Block};

/// An aes block cipher implemented by the `aes` crate.
///
/// The `aes` crate detects the aes-ni and armv8 extensions at runtime and falls back to a
/// constant-time software implementation when they are missing.
#[derive(Clone)]
pub struct SoftwareBlockCipher {
    // The set of round keys used for the aes encryption
    aes: Aes128,
}

impl AesBlockCipher for SoftwareBlockCipher {
    fn new(key: AesKey) -> SoftwareBlockCipher {
        let key_bytes = key.0.to_le_bytes();
        let aes = Aes128::new(GenericArray::from_slice(&key_bytes));
        SoftwareBlockCipher { aes }
    }

    fn generate_next(&mut self, data: u128) -> [u8; BYTES_PER_AES_CALL] {
        let mut block = Block::clone_from_slice(&data.to_le_bytes());
        self.aes.encrypt_block(&mut block);
        let mut output = [0u8; BYTES_PER_AES_CALL];
        output.copy_from_slice(&block);
        output
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generators::aes_ctr::aes_ctr_generic_test;

    // Test vector from the appendix C.1 of FIPS-197.
    const CIPHER_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const PLAINTEXT: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const CIPHERTEXT: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn test_encrypt_known_answer() {
        let mut cipher = SoftwareBlockCipher::new(AesKey(u128::from_le_bytes(CIPHER_KEY)));
        let output = cipher.generate_next(u128::from_le_bytes(PLAINTEXT));
        assert_eq!(output, CIPHERTEXT);
    }

    #[test]
    fn prop_fork_start_matches_offset() {
        aes_ctr_generic_test::prop_fork_start_matches_offset::<SoftwareBlockCipher>();
    }

    #[test]
    fn prop_stream_is_counter_mode() {
        aes_ctr_generic_test::prop_stream_is_counter_mode::<SoftwareBlockCipher>();
    }
}
