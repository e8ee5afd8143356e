use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweCiphertextEntity;

engine_error! {
    LweCiphertextCreationError for LweCiphertextCreationEngine @
    EmptyContainer => "The container used to create the LWE ciphertext is of length 0.",
    NullLweDimension => "The container used to create the LWE ciphertext holds a body and no mask."
}

impl<EngineError: std::error::Error> LweCiphertextCreationError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks(container_length: usize) -> Result<(), Self> {
        if container_length == 0 {
            return Err(Self::EmptyContainer);
        }
        if container_length == 1 {
            return Err(Self::NullLweDimension);
        }
        Ok(())
    }
}

/// A trait for engines creating an LWE ciphertext from an arbitrary container.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation creates an LWE ciphertext from the arbitrary
/// `container`. By arbitrary here, we mean that `Container` can be any type that allows to
/// instantiate an `LweCiphertextEntity`. The container holds the mask followed by the body, so
/// the dimension of the ciphertext is its length minus one.
pub trait LweCiphertextCreationEngine<Container, Ciphertext>: AbstractEngine
where
    Ciphertext: LweCiphertextEntity,
{
    /// Creates an LWE ciphertext from an arbitrary container.
    fn create_lwe_ciphertext_from(
        &mut self,
        container: Container,
    ) -> Result<Ciphertext, LweCiphertextCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_lwe_ciphertext_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`LweCiphertextCreationError`] variants.
    unsafe fn create_lwe_ciphertext_from_unchecked(&mut self, container: Container) -> Ciphertext;
}
