use crate::prelude::{DefaultEngine, Plaintext32, Plaintext64};
use crate::specification::engines::{PlaintextRetrievalEngine, PlaintextRetrievalError};

macro_rules! implement_plaintext_retrieval {
    ($Plaintext:ident => $Scalar:ty) => {
        impl PlaintextRetrievalEngine<$Plaintext, $Scalar> for DefaultEngine {
            fn retrieve_plaintext(
                &mut self,
                plaintext: &$Plaintext,
            ) -> Result<$Scalar, PlaintextRetrievalError<Self::EngineError>> {
                Ok(unsafe { self.retrieve_plaintext_unchecked(plaintext) })
            }

            unsafe fn retrieve_plaintext_unchecked(&mut self, plaintext: &$Plaintext) -> $Scalar {
                plaintext.0 .0
            }
        }
    };
}

implement_plaintext_retrieval!(Plaintext32 => u32);
implement_plaintext_retrieval!(Plaintext64 => u64);
