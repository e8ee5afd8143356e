use crate::commons::crypto::encoding::Cleartext as ImplCleartext;
use crate::prelude::{Cleartext32, Cleartext64, CleartextF64, DefaultEngine};
use crate::specification::engines::{CleartextCreationEngine, CleartextCreationError};

macro_rules! implement_cleartext_creation {
    ($Raw:ty => $Cleartext:ident) => {
        impl CleartextCreationEngine<$Raw, $Cleartext> for DefaultEngine {
            fn create_cleartext_from(
                &mut self,
                input: &$Raw,
            ) -> Result<$Cleartext, CleartextCreationError<Self::EngineError>> {
                Ok(unsafe { self.create_cleartext_from_unchecked(input) })
            }

            unsafe fn create_cleartext_from_unchecked(&mut self, input: &$Raw) -> $Cleartext {
                $Cleartext(ImplCleartext(*input))
            }
        }
    };
}

implement_cleartext_creation!(u32 => Cleartext32);
implement_cleartext_creation!(u64 => Cleartext64);
implement_cleartext_creation!(f64 => CleartextF64);
