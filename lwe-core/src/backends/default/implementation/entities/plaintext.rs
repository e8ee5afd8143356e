use crate::commons::crypto::encoding::Plaintext as ImplPlaintext;
use crate::specification::entities::markers::PlaintextKind;
use crate::specification::entities::{AbstractEntity, PlaintextEntity};

macro_rules! plaintext {
    ($(#[$doc:meta])* $Plaintext:ident<$Scalar:ty>) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $Plaintext(pub(crate) ImplPlaintext<$Scalar>);
        impl AbstractEntity for $Plaintext {
            type Kind = PlaintextKind;
        }
        impl PlaintextEntity for $Plaintext {}
    };
}

plaintext!(
    /// An encoded 32 bits word, ready to be encrypted.
    Plaintext32<u32>
);
plaintext!(
    /// An encoded 64 bits word, ready to be encrypted.
    Plaintext64<u64>
);
