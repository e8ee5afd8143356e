use super::engine_error;
use crate::commons::parameters::LweDimension;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweSecretKeyEntity;

engine_error! {
    LweSecretKeyGenerationError for LweSecretKeyGenerationEngine @
    NullLweDimension => "The LWE dimension must be greater than zero."
}

impl<EngineError: std::error::Error> LweSecretKeyGenerationError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks(lwe_dimension: LweDimension) -> Result<(), Self> {
        if lwe_dimension.0 == 0 {
            return Err(Self::NullLweDimension);
        }
        Ok(())
    }
}

/// A trait for engines generating new LWE secret keys.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a new LWE secret key. The checks
/// are performed before any randomness is drawn from the engine.
///
/// The underlying scheme is described on
/// [`LweSecretKeyEntity`](crate::specification::entities::LweSecretKeyEntity).
pub trait LweSecretKeyGenerationEngine<SecretKey>: AbstractEngine
where
    SecretKey: LweSecretKeyEntity,
{
    /// Generates a new LWE secret key.
    fn generate_new_lwe_secret_key(
        &mut self,
        lwe_dimension: LweDimension,
    ) -> Result<SecretKey, LweSecretKeyGenerationError<Self::EngineError>>;

    /// Unchecked version of [`Self::generate_new_lwe_secret_key`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`LweSecretKeyGenerationError`] variants.
    unsafe fn generate_new_lwe_secret_key_unchecked(
        &mut self,
        lwe_dimension: LweDimension,
    ) -> SecretKey;
}
