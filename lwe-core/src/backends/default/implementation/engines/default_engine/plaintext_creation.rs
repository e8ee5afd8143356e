use crate::commons::crypto::encoding::Plaintext as ImplPlaintext;
use crate::prelude::{DefaultEngine, Plaintext32, Plaintext64};
use crate::specification::engines::{PlaintextCreationEngine, PlaintextCreationError};

macro_rules! implement_plaintext_creation {
    ($Scalar:ty => $Plaintext:ident) => {
        impl PlaintextCreationEngine<$Scalar, $Plaintext> for DefaultEngine {
            fn create_plaintext_from(
                &mut self,
                input: &$Scalar,
            ) -> Result<$Plaintext, PlaintextCreationError<Self::EngineError>> {
                Ok(unsafe { self.create_plaintext_from_unchecked(input) })
            }

            unsafe fn create_plaintext_from_unchecked(&mut self, input: &$Scalar) -> $Plaintext {
                $Plaintext(ImplPlaintext(*input))
            }
        }
    };
}

implement_plaintext_creation!(u32 => Plaintext32);
implement_plaintext_creation!(u64 => Plaintext64);
