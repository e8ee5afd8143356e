//! A module containing the host-facing surface of the library.
//!
//! The [`HandleEngine`] exposes the operations of the [`DefaultEngine`] on 64 bits words through
//! opaque [`Handle`]s instead of typed entities, which suits callers living on the other side of
//! a language boundary. Every object created through a handle engine is owned by the engine, in
//! one arena per kind of object, and the caller only ever holds copies of its handle.
//!
//! Handles follow a simple life cycle: an object is _live_ from its creation until it is either
//! _consumed_, by an operation moving its content out, or _discarded_. Any later use of one of
//! its handles fails with [`BoundaryError::HandleConsumed`] or [`BoundaryError::HandleDiscarded`].
//! Handles are tied to the engine which minted them, and using them with another engine fails
//! with [`BoundaryError::UnknownHandle`].
//!
//! # Noise
//!
//! The variances given to a handle engine are expressed in squared encoding steps rather than on
//! the torus: with a shift of `s` bits, a variance `v` becomes `v * 2^(2 * (s - 64))` once handed
//! to the underlying engine.
//!
//! # Example
//!
//! ```rust
//! use lwe_core::prelude::*;
//! # use std::error::Error;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! // Unix seeder must be given a secret input.
//! // Here we just give it 0, which is totally unsafe.
//! const UNSAFE_SECRET: u128 = 0;
//! let mut engine = HandleEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
//!
//! let key = engine.create_secret_key(512)?;
//! let cleartexts = engine.create_cleartext_vector(&[3., 2., 5.])?;
//! let plaintexts = engine.encode_cleartext_vector(cleartexts)?;
//! let ciphertexts = engine.encrypt_ciphertext_vector(key, plaintexts, 2_f64.powi(-11))?;
//! let decrypted = engine.decrypt_ciphertext_vector(key, ciphertexts)?;
//! let decoded = engine.decode_plaintext_vector(decrypted)?;
//!
//! assert_eq!(engine.retrieve_cleartext_vector(decoded)?, vec![3., 2., 5.]);
//!
//! let raw = engine.consume_retrieve_ciphertext_vector(ciphertexts)?;
//! assert_eq!(raw.len(), 3 * 513);
//! assert_eq!(
//!     engine.consume_retrieve_ciphertext_vector(ciphertexts),
//!     Err(BoundaryError::HandleConsumed)
//! );
//! #
//! # Ok(())
//! # }
//! ```

mod arena;
mod config;
mod error;
mod handle;

pub use config::HandleEngineConfig;
pub use error::BoundaryError;
pub use handle::{
    CiphertextHandle, CiphertextVectorHandle, CleartextHandle, CleartextVectorHandle, Handle,
    HandleKind, PlaintextHandle, PlaintextVectorHandle, SecretKeyHandle,
};

use crate::commons::dispersion::Variance;
use crate::commons::parameters::{LweDimension, LweSize};
use crate::prelude::{
    AbstractEngine, CleartextCreationEngine, CleartextF64, CleartextRetrievalEngine,
    CleartextVectorCreationEngine, CleartextVectorEncodingEngine, CleartextVectorF64,
    CleartextVectorRetrievalEngine, DefaultEngine, EncoderCreationEngine,
    LweCiphertext64, LweCiphertextConsumingRetrievalEngine, LweCiphertextCreationEngine,
    LweCiphertextDecryptionEngine, LweCiphertextEncryptionEngine, LweCiphertextVector64,
    LweCiphertextVectorConsumingRetrievalEngine, LweCiphertextVectorCreationEngine,
    LweCiphertextVectorDecryptionEngine, LweCiphertextVectorEncryptionEngine, LweSecretKey64,
    LweSecretKeyGenerationEngine, Plaintext64, PlaintextCreationEngine, PlaintextRetrievalEngine,
    PlaintextVector64, PlaintextVectorCreationEngine, PlaintextVectorDecodingEngine,
    PlaintextVectorRetrievalEngine, Seeder, ShiftEncoder64,
};
use handle::Arenas;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENGINE_ID: AtomicU64 = AtomicU64::new(0);

/// An engine operating on 64 bits words through opaque handles.
pub struct HandleEngine {
    id: u64,
    config: HandleEngineConfig,
    engine: DefaultEngine,
    encoder: ShiftEncoder64,
    arenas: Arenas,
}

impl HandleEngine {
    /// Creates an engine with the default configuration, seeded from `seeder`.
    pub fn new(seeder: Box<dyn Seeder>) -> Result<HandleEngine, BoundaryError> {
        Self::with_config(seeder, HandleEngineConfig::default())
    }

    /// Creates an engine seeded from `seeder`.
    ///
    /// The seeder is only used during this call, to seed the generators of the engine.
    pub fn with_config(
        seeder: Box<dyn Seeder>,
        config: HandleEngineConfig,
    ) -> Result<HandleEngine, BoundaryError> {
        let mut engine = DefaultEngine::new(seeder)?;
        let encoder: ShiftEncoder64 = engine.create_encoder_from(&config.encoder_config())?;
        let id = NEXT_ENGINE_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            engine_id = id,
            precision_bits = encoder.0.precision().0,
            shift = encoder.0.shift().0,
            "handle engine created"
        );
        Ok(HandleEngine {
            id,
            config,
            engine,
            encoder,
            arenas: Arenas::default(),
        })
    }

    pub fn config(&self) -> HandleEngineConfig {
        self.config
    }

    /// Returns the number of objects which were neither consumed nor discarded yet.
    pub fn live_objects(&self) -> usize {
        self.arenas.live_count()
    }

    /// Drops the object referred to by `handle`.
    pub fn discard<Kind: HandleKind>(&mut self, handle: Handle<Kind>) -> Result<(), BoundaryError> {
        self.arenas.discard(self.id, handle)?;
        tracing::trace!(engine_id = self.id, index = handle.index, "handle discarded");
        Ok(())
    }

    pub fn create_cleartext(&mut self, value: f64) -> Result<CleartextHandle, BoundaryError> {
        let cleartext: CleartextF64 = self.engine.create_cleartext_from(&value)?;
        Ok(self.arenas.insert(self.id, cleartext))
    }

    pub fn create_cleartext_vector(
        &mut self,
        values: &[f64],
    ) -> Result<CleartextVectorHandle, BoundaryError> {
        let cleartexts: CleartextVectorF64 = self.engine.create_cleartext_vector_from(values)?;
        Ok(self.arenas.insert(self.id, cleartexts))
    }

    /// Creates a plaintext holding the already encoded word `value`.
    pub fn create_plaintext_from_raw(
        &mut self,
        value: u64,
    ) -> Result<PlaintextHandle, BoundaryError> {
        let plaintext: Plaintext64 = self.engine.create_plaintext_from(&value)?;
        Ok(self.arenas.insert(self.id, plaintext))
    }

    /// Creates a plaintext vector holding the already encoded words `values`.
    pub fn create_plaintext_vector_from_raw(
        &mut self,
        values: &[u64],
    ) -> Result<PlaintextVectorHandle, BoundaryError> {
        let plaintexts: PlaintextVector64 = self.engine.create_plaintext_vector_from(values)?;
        Ok(self.arenas.insert(self.id, plaintexts))
    }

    pub fn retrieve_cleartext(&mut self, handle: CleartextHandle) -> Result<f64, BoundaryError> {
        let cleartext = self.arenas.get(self.id, handle)?;
        Ok(self.engine.retrieve_cleartext(cleartext)?)
    }

    pub fn retrieve_cleartext_vector(
        &mut self,
        handle: CleartextVectorHandle,
    ) -> Result<Vec<f64>, BoundaryError> {
        let cleartexts = self.arenas.get(self.id, handle)?;
        Ok(self.engine.retrieve_cleartext_vector(cleartexts)?)
    }

    pub fn retrieve_plaintext(&mut self, handle: PlaintextHandle) -> Result<u64, BoundaryError> {
        let plaintext = self.arenas.get(self.id, handle)?;
        Ok(self.engine.retrieve_plaintext(plaintext)?)
    }

    pub fn retrieve_plaintext_vector(
        &mut self,
        handle: PlaintextVectorHandle,
    ) -> Result<Vec<u64>, BoundaryError> {
        let plaintexts = self.arenas.get(self.id, handle)?;
        Ok(self.engine.retrieve_plaintext_vector(plaintexts)?)
    }

    /// Encodes a cleartext vector with the shift encoder of the engine.
    pub fn encode_cleartext_vector(
        &mut self,
        handle: CleartextVectorHandle,
    ) -> Result<PlaintextVectorHandle, BoundaryError> {
        let cleartexts = self.arenas.get(self.id, handle)?;
        let plaintexts: PlaintextVector64 =
            self.engine.encode_cleartext_vector(&self.encoder, cleartexts)?;
        Ok(self.arenas.insert(self.id, plaintexts))
    }

    /// Decodes a plaintext vector with the shift encoder of the engine.
    pub fn decode_plaintext_vector(
        &mut self,
        handle: PlaintextVectorHandle,
    ) -> Result<CleartextVectorHandle, BoundaryError> {
        let plaintexts = self.arenas.get(self.id, handle)?;
        let cleartexts: CleartextVectorF64 =
            self.engine.decode_plaintext_vector(&self.encoder, plaintexts)?;
        Ok(self.arenas.insert(self.id, cleartexts))
    }

    /// Generates a new secret key. The key can only be used through its handle.
    pub fn create_secret_key(&mut self, dimension: u32) -> Result<SecretKeyHandle, BoundaryError> {
        lwe_size_of(dimension)?;
        let key: LweSecretKey64 = self
            .engine
            .generate_new_lwe_secret_key(LweDimension(dimension as usize))?;
        Ok(self.arenas.insert(self.id, key))
    }

    /// Encrypts a plaintext, `variance` being expressed in squared encoding steps.
    pub fn encrypt_ciphertext(
        &mut self,
        key: SecretKeyHandle,
        plaintext: PlaintextHandle,
        variance: f64,
    ) -> Result<CiphertextHandle, BoundaryError> {
        let noise = self.torus_variance(variance);
        let key = self.arenas.get(self.id, key)?;
        let plaintext = self.arenas.get(self.id, plaintext)?;
        let ciphertext: LweCiphertext64 =
            self.engine.encrypt_lwe_ciphertext(key, plaintext, noise)?;
        Ok(self.arenas.insert(self.id, ciphertext))
    }

    /// Encrypts a plaintext vector, `variance` being expressed in squared encoding steps.
    pub fn encrypt_ciphertext_vector(
        &mut self,
        key: SecretKeyHandle,
        plaintexts: PlaintextVectorHandle,
        variance: f64,
    ) -> Result<CiphertextVectorHandle, BoundaryError> {
        let noise = self.torus_variance(variance);
        let key = self.arenas.get(self.id, key)?;
        let plaintexts = self.arenas.get(self.id, plaintexts)?;
        let ciphertexts: LweCiphertextVector64 = self
            .engine
            .encrypt_lwe_ciphertext_vector(key, plaintexts, noise)?;
        Ok(self.arenas.insert(self.id, ciphertexts))
    }

    /// Decrypts a ciphertext. Decrypting with a wrong key of the right dimension succeeds and
    /// yields a meaningless plaintext.
    pub fn decrypt_ciphertext(
        &mut self,
        key: SecretKeyHandle,
        ciphertext: CiphertextHandle,
    ) -> Result<PlaintextHandle, BoundaryError> {
        let key = self.arenas.get(self.id, key)?;
        let ciphertext = self.arenas.get(self.id, ciphertext)?;
        let plaintext: Plaintext64 = self.engine.decrypt_lwe_ciphertext(key, ciphertext)?;
        Ok(self.arenas.insert(self.id, plaintext))
    }

    /// Decrypts a ciphertext vector. Decrypting with a wrong key of the right dimension succeeds
    /// and yields meaningless plaintexts.
    pub fn decrypt_ciphertext_vector(
        &mut self,
        key: SecretKeyHandle,
        ciphertexts: CiphertextVectorHandle,
    ) -> Result<PlaintextVectorHandle, BoundaryError> {
        let key = self.arenas.get(self.id, key)?;
        let ciphertexts = self.arenas.get(self.id, ciphertexts)?;
        let plaintexts: PlaintextVector64 =
            self.engine.decrypt_lwe_ciphertext_vector(key, ciphertexts)?;
        Ok(self.arenas.insert(self.id, plaintexts))
    }

    /// Moves the words of a ciphertext out of the engine, mask first. The handle is dead
    /// afterwards.
    pub fn consume_retrieve_ciphertext(
        &mut self,
        handle: CiphertextHandle,
    ) -> Result<Vec<u64>, BoundaryError> {
        let ciphertext = self.arenas.take(self.id, handle)?;
        Ok(self.engine.consume_retrieve_lwe_ciphertext(ciphertext)?)
    }

    /// Moves the words of a ciphertext vector out of the engine, one ciphertext after the other.
    /// The handle is dead afterwards.
    pub fn consume_retrieve_ciphertext_vector(
        &mut self,
        handle: CiphertextVectorHandle,
    ) -> Result<Vec<u64>, BoundaryError> {
        let ciphertexts = self.arenas.take(self.id, handle)?;
        Ok(self.engine.consume_retrieve_lwe_ciphertext_vector(ciphertexts)?)
    }

    /// Creates a ciphertext from its words, mask first. The dimension is `words.len() - 1`.
    pub fn create_ciphertext_from_raw(
        &mut self,
        words: Vec<u64>,
    ) -> Result<CiphertextHandle, BoundaryError> {
        let ciphertext: LweCiphertext64 = self.engine.create_lwe_ciphertext_from(words)?;
        Ok(self.arenas.insert(self.id, ciphertext))
    }

    /// Creates a ciphertext vector from the concatenated words of ciphertexts of dimension
    /// `dimension`.
    pub fn create_ciphertext_vector_from_raw(
        &mut self,
        words: Vec<u64>,
        dimension: u32,
    ) -> Result<CiphertextVectorHandle, BoundaryError> {
        let lwe_size = lwe_size_of(dimension)?;
        let ciphertexts: LweCiphertextVector64 =
            self.engine.create_lwe_ciphertext_vector_from(words, lwe_size)?;
        Ok(self.arenas.insert(self.id, ciphertexts))
    }

    fn torus_variance(&self, variance: f64) -> Variance {
        let shift = self.encoder.0.shift().0 as i32;
        Variance(variance * 2_f64.powi(2 * (shift - 64)))
    }
}

/// The size of the ciphertexts of dimension `dimension`, if it is addressable.
fn lwe_size_of(dimension: u32) -> Result<LweSize, BoundaryError> {
    if dimension == 0 {
        return Err(BoundaryError::InvalidDimension);
    }
    usize::try_from(dimension)
        .ok()
        .and_then(|dimension| dimension.checked_add(1))
        .map(LweSize)
        .ok_or(BoundaryError::InvalidDimension)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::UnixSeeder;

    fn engine() -> HandleEngine {
        HandleEngine::new(Box::new(UnixSeeder::new(0))).unwrap()
    }

    #[test]
    fn boundary_variance_is_scaled_by_the_encoding_step() {
        let engine = engine();
        // shift 57: one squared step is 2^(-14) on the torus.
        assert_eq!(engine.torus_variance(1.), Variance(2_f64.powi(-14)));
        assert_eq!(engine.torus_variance(2_f64.powi(-11)), Variance(2_f64.powi(-25)));
    }

    #[test]
    fn handles_of_another_engine_are_rejected() {
        let mut first = engine();
        let mut second = engine();
        let cleartext = first.create_cleartext(3.).unwrap();
        assert_eq!(
            second.retrieve_cleartext(cleartext),
            Err(BoundaryError::UnknownHandle)
        );
        assert_eq!(second.discard(cleartext), Err(BoundaryError::UnknownHandle));
        assert_eq!(first.retrieve_cleartext(cleartext), Ok(3.));
    }

    #[test]
    fn consumed_ciphertexts_can_not_be_used() {
        let mut engine = engine();
        let key = engine.create_secret_key(16).unwrap();
        let plaintext = engine.create_plaintext_from_raw(3 << 57).unwrap();
        let ciphertext = engine.encrypt_ciphertext(key, plaintext, 1.).unwrap();

        let words = engine.consume_retrieve_ciphertext(ciphertext).unwrap();
        assert_eq!(words.len(), 17);
        assert_eq!(
            engine.decrypt_ciphertext(key, ciphertext),
            Err(BoundaryError::HandleConsumed)
        );
        assert_eq!(
            engine.consume_retrieve_ciphertext(ciphertext),
            Err(BoundaryError::HandleConsumed)
        );
        assert_eq!(engine.discard(ciphertext), Err(BoundaryError::HandleConsumed));
    }

    #[test]
    fn discarded_handles_can_not_be_used() {
        let mut engine = engine();
        let cleartexts = engine.create_cleartext_vector(&[1., 2.]).unwrap();
        assert_eq!(engine.live_objects(), 1);
        engine.discard(cleartexts).unwrap();
        assert_eq!(engine.live_objects(), 0);
        assert_eq!(
            engine.retrieve_cleartext_vector(cleartexts),
            Err(BoundaryError::HandleDiscarded)
        );
        assert_eq!(
            engine.encode_cleartext_vector(cleartexts),
            Err(BoundaryError::HandleDiscarded)
        );
    }

    #[test]
    fn raw_ciphertexts_round_trip() {
        let mut engine = engine();
        let words = (0..12_u64).collect::<Vec<_>>();
        let ciphertexts = engine
            .create_ciphertext_vector_from_raw(words.clone(), 3)
            .unwrap();
        assert_eq!(
            engine.consume_retrieve_ciphertext_vector(ciphertexts),
            Ok(words.clone())
        );
        let ciphertext = engine.create_ciphertext_from_raw(words.clone()).unwrap();
        assert_eq!(engine.consume_retrieve_ciphertext(ciphertext), Ok(words));
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        let mut engine = engine();
        assert_eq!(
            engine.create_secret_key(0),
            Err(BoundaryError::InvalidDimension)
        );
        assert_eq!(
            engine.create_ciphertext_vector_from_raw(vec![0; 12], 0),
            Err(BoundaryError::InvalidDimension)
        );
        assert_eq!(
            engine.create_ciphertext_vector_from_raw(vec![0; 10], 3),
            Err(BoundaryError::LengthMismatch)
        );
        assert_eq!(
            engine.create_ciphertext_from_raw(vec![0]),
            Err(BoundaryError::InvalidDimension)
        );
        assert_eq!(
            engine.create_plaintext_vector_from_raw(&[]),
            Err(BoundaryError::LengthMismatch)
        );

        let key = engine.create_secret_key(8).unwrap();
        let ciphertexts = engine
            .create_ciphertext_vector_from_raw(vec![0; 10], 4)
            .unwrap();
        assert_eq!(
            engine.decrypt_ciphertext_vector(key, ciphertexts),
            Err(BoundaryError::LengthMismatch)
        );
    }

    #[test]
    fn lwe_sizes_do_not_overflow() {
        assert_eq!(lwe_size_of(0), Err(BoundaryError::InvalidDimension));
        assert_eq!(lwe_size_of(16), Ok(LweSize(17)));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(lwe_size_of(u32::MAX), Ok(LweSize(1 << 32)));
        #[cfg(not(target_pointer_width = "64"))]
        assert_eq!(lwe_size_of(u32::MAX), Err(BoundaryError::InvalidDimension));

        #[cfg(target_pointer_width = "64")]
        assert_eq!(
            engine().create_ciphertext_vector_from_raw(vec![0; 10], u32::MAX),
            Err(BoundaryError::LengthMismatch)
        );
    }

    #[test]
    fn invalid_variances_are_rejected() {
        let mut engine = engine();
        let key = engine.create_secret_key(8).unwrap();
        let plaintexts = engine.create_plaintext_vector_from_raw(&[0, 1]).unwrap();
        assert_eq!(
            engine.encrypt_ciphertext_vector(key, plaintexts, -1.),
            Err(BoundaryError::InvalidVariance)
        );
        assert_eq!(
            engine.encrypt_ciphertext_vector(key, plaintexts, f64::NAN),
            Err(BoundaryError::InvalidVariance)
        );
    }

    #[test]
    fn oversized_precisions_are_rejected() {
        let result = HandleEngine::with_config(
            Box::new(UnixSeeder::new(0)),
            HandleEngineConfig { precision_bits: 64 },
        );
        assert!(matches!(result, Err(BoundaryError::InvalidPrecision)));
    }
}
