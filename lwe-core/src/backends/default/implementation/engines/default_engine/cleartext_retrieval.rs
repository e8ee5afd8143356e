use crate::prelude::{Cleartext32, Cleartext64, CleartextF64, DefaultEngine};
use crate::specification::engines::{CleartextRetrievalEngine, CleartextRetrievalError};

macro_rules! implement_cleartext_retrieval {
    ($Cleartext:ident => $Raw:ty) => {
        impl CleartextRetrievalEngine<$Cleartext, $Raw> for DefaultEngine {
            fn retrieve_cleartext(
                &mut self,
                cleartext: &$Cleartext,
            ) -> Result<$Raw, CleartextRetrievalError<Self::EngineError>> {
                Ok(unsafe { self.retrieve_cleartext_unchecked(cleartext) })
            }

            unsafe fn retrieve_cleartext_unchecked(&mut self, cleartext: &$Cleartext) -> $Raw {
                cleartext.0 .0
            }
        }
    };
}

implement_cleartext_retrieval!(Cleartext32 => u32);
implement_cleartext_retrieval!(Cleartext64 => u64);
implement_cleartext_retrieval!(CleartextF64 => f64);

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn cleartexts_give_back_their_value() {
        let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
        let cleartext: CleartextF64 = engine.create_cleartext_from(&-2.5).unwrap();
        assert_eq!(engine.retrieve_cleartext(&cleartext).unwrap(), -2.5);
        let cleartext: Cleartext32 = engine.create_cleartext_from(&u32::MAX).unwrap();
        assert_eq!(engine.retrieve_cleartext(&cleartext).unwrap(), u32::MAX);
    }
}
