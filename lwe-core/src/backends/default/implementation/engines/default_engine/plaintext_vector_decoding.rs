use crate::commons::crypto::encoding::{CleartextList as ImplCleartextList, Encoder};
use crate::commons::parameters::CleartextCount;
use crate::prelude::{
    CleartextVectorF64, DefaultEngine, FloatEncoder, PlaintextVector32, PlaintextVector64,
    ShiftEncoder32, ShiftEncoder64,
};
use crate::specification::engines::{
    PlaintextVectorDecodingEngine, PlaintextVectorDecodingError,
};
use crate::specification::entities::PlaintextVectorEntity;

macro_rules! implement_plaintext_vector_decoding {
    ($Encoder:ident, $PlaintextVector:ident) => {
        impl PlaintextVectorDecodingEngine<$Encoder, $PlaintextVector, CleartextVectorF64>
            for DefaultEngine
        {
            fn decode_plaintext_vector(
                &mut self,
                encoder: &$Encoder,
                input: &$PlaintextVector,
            ) -> Result<CleartextVectorF64, PlaintextVectorDecodingError<Self::EngineError>> {
                Ok(unsafe { self.decode_plaintext_vector_unchecked(encoder, input) })
            }

            unsafe fn decode_plaintext_vector_unchecked(
                &mut self,
                encoder: &$Encoder,
                input: &$PlaintextVector,
            ) -> CleartextVectorF64 {
                let mut cleartexts =
                    ImplCleartextList::allocate(0_f64, CleartextCount(input.plaintext_count().0));
                encoder.0.decode_list(&mut cleartexts, &input.0);
                CleartextVectorF64(cleartexts)
            }
        }
    };
}

implement_plaintext_vector_decoding!(FloatEncoder, PlaintextVector32);
implement_plaintext_vector_decoding!(FloatEncoder, PlaintextVector64);
implement_plaintext_vector_decoding!(ShiftEncoder32, PlaintextVector32);
implement_plaintext_vector_decoding!(ShiftEncoder64, PlaintextVector64);

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn shift_vectors_round_trip_through_the_engine() {
        let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
        let encoder: ShiftEncoder32 = engine
            .create_encoder_from(&ShiftEncoderConfig { precision_bits: 4 })
            .unwrap();
        let values = vec![-8., -1., 0., 7.];
        let cleartexts: CleartextVectorF64 = engine.create_cleartext_vector_from(&values).unwrap();
        let plaintexts: PlaintextVector32 =
            engine.encode_cleartext_vector(&encoder, &cleartexts).unwrap();
        let decoded = engine.decode_plaintext_vector(&encoder, &plaintexts).unwrap();
        assert_eq!(engine.retrieve_cleartext_vector(&decoded).unwrap(), values);
    }

    #[test]
    fn float_vectors_reject_out_of_interval_messages() {
        let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
        let encoder = engine
            .create_encoder_from(&FloatEncoderCenterRadiusConfig {
                center: 0.,
                radius: 1.,
                nb_bit_precision: 4,
                nb_bit_padding: 0,
            })
            .unwrap();
        let values = vec![0.5, 3.];
        let cleartexts: CleartextVectorF64 = engine.create_cleartext_vector_from(&values).unwrap();
        let refused: Result<PlaintextVector64, _> =
            engine.encode_cleartext_vector(&encoder, &cleartexts);
        assert_eq!(
            refused.unwrap_err(),
            CleartextVectorEncodingError::Engine(DefaultError::FloatEncoderMessageOutsideInterval)
        );
    }
}
