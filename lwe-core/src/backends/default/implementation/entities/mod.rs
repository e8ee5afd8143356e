//! A module containing all the [entities](crate::specification::entities) exposed by the default
//! backend.

/// Declares the version tags written in front of serialized entities.
macro_rules! entity_versions {
    ($($Version:ident),+ $(,)?) => {
        $(
            #[cfg(feature = "backend_default_serialization")]
            #[derive(serde::Serialize, serde::Deserialize)]
            pub(crate) enum $Version {
                V0,
                #[serde(other)]
                Unsupported,
            }
        )+
    };
}

mod cleartext;
mod cleartext_vector;
mod encoder;
mod lwe_ciphertext;
mod lwe_ciphertext_vector;
mod lwe_secret_key;
mod plaintext;
mod plaintext_vector;

pub use cleartext::*;
pub use cleartext_vector::*;
pub use encoder::*;
pub use lwe_ciphertext::*;
pub use lwe_ciphertext_vector::*;
pub use lwe_secret_key::*;
pub use plaintext::*;
pub use plaintext_vector::*;
