use crate::commons::crypto::encoding::Cleartext as ImplCleartext;
use crate::specification::entities::markers::CleartextKind;
use crate::specification::entities::{AbstractEntity, CleartextEntity};

macro_rules! cleartext {
    ($(#[$doc:meta])* $Cleartext:ident<$Scalar:ty>) => {
        $(#[$doc])*
        pub struct $Cleartext(pub(crate) ImplCleartext<$Scalar>);
        impl AbstractEntity for $Cleartext {
            type Kind = CleartextKind;
        }
        impl CleartextEntity for $Cleartext {}
    };
}

cleartext!(
    /// A raw 32 bits integer, before encoding.
    #[derive(Debug, Clone, PartialEq, Eq)]
    Cleartext32<u32>
);
cleartext!(
    /// A raw 64 bits integer, before encoding.
    #[derive(Debug, Clone, PartialEq, Eq)]
    Cleartext64<u64>
);
cleartext!(
    /// A raw floating point message, before encoding.
    #[derive(Debug, Clone, PartialEq)]
    CleartextF64<f64>
);
