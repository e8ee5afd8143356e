use super::engine_error;
use crate::commons::parameters::LweSize;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweCiphertextVectorEntity;

engine_error! {
    LweCiphertextVectorCreationError for LweCiphertextVectorCreationEngine @
    EmptyContainer => "The container used to create the LWE ciphertext vector is of length 0.",
    NullLweDimension => "The LWE dimension must be greater than zero.",
    InvalidContainerSize => "The length of the container used to create the LWE ciphertext \
                             vector needs to be a multiple of the LWE size."
}

impl<EngineError: std::error::Error> LweCiphertextVectorCreationError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks(container_length: usize, lwe_size: LweSize) -> Result<(), Self> {
        if container_length == 0 {
            return Err(Self::EmptyContainer);
        }
        if lwe_size.0 <= 1 {
            return Err(Self::NullLweDimension);
        }
        if container_length % lwe_size.0 != 0 {
            return Err(Self::InvalidContainerSize);
        }
        Ok(())
    }
}

/// A trait for engines creating an LWE ciphertext vector from an arbitrary container.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation creates an LWE ciphertext vector from the
/// arbitrary `container`, which stores the ciphertexts contiguously, each of them being
/// `lwe_size` words long.
pub trait LweCiphertextVectorCreationEngine<Container, CiphertextVector>: AbstractEngine
where
    CiphertextVector: LweCiphertextVectorEntity,
{
    /// Creates an LWE ciphertext vector from an arbitrary container.
    fn create_lwe_ciphertext_vector_from(
        &mut self,
        container: Container,
        lwe_size: LweSize,
    ) -> Result<CiphertextVector, LweCiphertextVectorCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_lwe_ciphertext_vector_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic
    /// [`LweCiphertextVectorCreationError`] variants.
    unsafe fn create_lwe_ciphertext_vector_from_unchecked(
        &mut self,
        container: Container,
        lwe_size: LweSize,
    ) -> CiphertextVector;
}
