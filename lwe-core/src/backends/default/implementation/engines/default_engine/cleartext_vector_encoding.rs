use crate::commons::crypto::encoding::{Encoder, PlaintextList as ImplPlaintextList};
use crate::commons::parameters::PlaintextCount;
use crate::prelude::{
    CleartextVectorF64, DefaultEngine, DefaultError, FloatEncoder, PlaintextVector32,
    PlaintextVector64, ShiftEncoder32, ShiftEncoder64,
};
use crate::specification::engines::{
    CleartextVectorEncodingEngine, CleartextVectorEncodingError,
};
use crate::specification::entities::CleartextVectorEntity;

macro_rules! implement_cleartext_vector_encoding {
    ($Scalar:ty, $Encoder:ident => $Output:ident) => {
        impl CleartextVectorEncodingEngine<$Encoder, CleartextVectorF64, $Output>
            for DefaultEngine
        {
            fn encode_cleartext_vector(
                &mut self,
                encoder: &$Encoder,
                cleartext_vector: &CleartextVectorF64,
            ) -> Result<$Output, CleartextVectorEncodingError<Self::EngineError>> {
                let all_accepted = cleartext_vector
                    .0
                    .cleartext_iter()
                    .all(|cleartext| encoder.accepts(cleartext.0));
                if !all_accepted {
                    return Err(CleartextVectorEncodingError::Engine(
                        DefaultError::FloatEncoderMessageOutsideInterval,
                    ));
                }
                Ok(unsafe { self.encode_cleartext_vector_unchecked(encoder, cleartext_vector) })
            }

            unsafe fn encode_cleartext_vector_unchecked(
                &mut self,
                encoder: &$Encoder,
                cleartext_vector: &CleartextVectorF64,
            ) -> $Output {
                let mut plaintexts = ImplPlaintextList::allocate(
                    <$Scalar>::default(),
                    PlaintextCount(cleartext_vector.cleartext_count().0),
                );
                encoder.0.encode_list(&mut plaintexts, &cleartext_vector.0);
                $Output(plaintexts)
            }
        }
    };
}

implement_cleartext_vector_encoding!(u32, FloatEncoder => PlaintextVector32);
implement_cleartext_vector_encoding!(u64, FloatEncoder => PlaintextVector64);
implement_cleartext_vector_encoding!(u32, ShiftEncoder32 => PlaintextVector32);
implement_cleartext_vector_encoding!(u64, ShiftEncoder64 => PlaintextVector64);
