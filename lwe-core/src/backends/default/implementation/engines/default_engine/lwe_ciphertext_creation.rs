use crate::commons::crypto::lwe::LweCiphertext as ImplLweCiphertext;
use crate::prelude::{DefaultEngine, LweCiphertext32, LweCiphertext64};
use crate::specification::engines::{LweCiphertextCreationEngine, LweCiphertextCreationError};

macro_rules! implement_lwe_ciphertext_creation {
    ($Scalar:ty => $Ciphertext:ident) => {
        impl LweCiphertextCreationEngine<Vec<$Scalar>, $Ciphertext> for DefaultEngine {
            fn create_lwe_ciphertext_from(
                &mut self,
                container: Vec<$Scalar>,
            ) -> Result<$Ciphertext, LweCiphertextCreationError<Self::EngineError>> {
                LweCiphertextCreationError::<Self::EngineError>::perform_generic_checks(
                    container.len(),
                )?;
                Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
            }

            unsafe fn create_lwe_ciphertext_from_unchecked(
                &mut self,
                container: Vec<$Scalar>,
            ) -> $Ciphertext {
                $Ciphertext(ImplLweCiphertext::from_container(container))
            }
        }
    };
}

implement_lwe_ciphertext_creation!(u32 => LweCiphertext32);
implement_lwe_ciphertext_creation!(u64 => LweCiphertext64);
