use crate::prelude::{
    CleartextCreationError, CleartextRetrievalError, CleartextVectorCreationError,
    CleartextVectorEncodingError, CleartextVectorRetrievalError, DefaultError,
    EncoderCreationError, LweCiphertextConsumingRetrievalError, LweCiphertextCreationError,
    LweCiphertextDecryptionError, LweCiphertextEncryptionError,
    LweCiphertextVectorConsumingRetrievalError, LweCiphertextVectorCreationError,
    LweCiphertextVectorDecryptionError, LweCiphertextVectorEncryptionError,
    LweSecretKeyGenerationError, PlaintextCreationError, PlaintextRetrievalError,
    PlaintextVectorCreationError, PlaintextVectorDecodingError, PlaintextVectorRetrievalError,
    SeedError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error returned by the operations of a [`HandleEngine`](super::HandleEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The seeder failed to produce a seed.
    EntropyUnavailable(SeedError),
    /// A key or ciphertext dimension is zero.
    InvalidDimension,
    /// The handle refers to an object that was moved out by a consuming operation.
    HandleConsumed,
    /// The handle refers to an object that was discarded.
    HandleDiscarded,
    /// The handle was minted by another engine.
    UnknownHandle,
    /// Two operands, or a buffer and its declared shape, do not have compatible lengths.
    LengthMismatch,
    /// The variance is negative or not finite.
    InvalidVariance,
    /// The configured precision does not fit in a 64 bits word along with its sign bit.
    InvalidPrecision,
    /// Any other failure of the underlying engine.
    Engine(DefaultError),
}

impl Display for BoundaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::EntropyUnavailable(error) => write!(f, "{error}"),
            BoundaryError::InvalidDimension => {
                write!(f, "The LWE dimension must be greater than zero.")
            }
            BoundaryError::HandleConsumed => write!(f, "The handle was already consumed."),
            BoundaryError::HandleDiscarded => write!(f, "The handle was discarded."),
            BoundaryError::UnknownHandle => {
                write!(f, "The handle does not belong to this engine.")
            }
            BoundaryError::LengthMismatch => write!(f, "The input lengths are incompatible."),
            BoundaryError::InvalidVariance => {
                write!(f, "The noise variance must be finite and non-negative.")
            }
            BoundaryError::InvalidPrecision => write!(
                f,
                "The encoder precision and its sign bit must fit in a 64 bits word."
            ),
            BoundaryError::Engine(error) => write!(f, "Error occurred in the engine: {error}"),
        }
    }
}

impl Error for BoundaryError {}

impl From<DefaultError> for BoundaryError {
    fn from(error: DefaultError) -> Self {
        match error {
            DefaultError::EntropyUnavailable(error) => BoundaryError::EntropyUnavailable(error),
            DefaultError::ShiftEncoderPrecisionTooLarge => BoundaryError::InvalidPrecision,
            error => BoundaryError::Engine(error),
        }
    }
}

macro_rules! boundary_error_from {
    ($($error:ident { $($variant:ident => $kind:ident),* }),+ $(,)?) => {
        $(
            impl From<$error<DefaultError>> for BoundaryError {
                fn from(error: $error<DefaultError>) -> Self {
                    match error {
                        $($error::$variant => BoundaryError::$kind,)*
                        $error::Engine(error) => error.into(),
                    }
                }
            }
        )+
    };
}

boundary_error_from! {
    CleartextCreationError {},
    CleartextRetrievalError {},
    CleartextVectorCreationError { EmptyInput => LengthMismatch },
    CleartextVectorRetrievalError {},
    CleartextVectorEncodingError {},
    EncoderCreationError {},
    PlaintextCreationError {},
    PlaintextRetrievalError {},
    PlaintextVectorCreationError { EmptyInput => LengthMismatch },
    PlaintextVectorRetrievalError {},
    PlaintextVectorDecodingError {},
    LweSecretKeyGenerationError { NullLweDimension => InvalidDimension },
    LweCiphertextEncryptionError { InvalidVariance => InvalidVariance },
    LweCiphertextVectorEncryptionError { InvalidVariance => InvalidVariance },
    LweCiphertextDecryptionError { LweDimensionMismatch => LengthMismatch },
    LweCiphertextVectorDecryptionError { LweDimensionMismatch => LengthMismatch },
    LweCiphertextCreationError {
        EmptyContainer => LengthMismatch,
        NullLweDimension => InvalidDimension
    },
    LweCiphertextVectorCreationError {
        EmptyContainer => LengthMismatch,
        NullLweDimension => InvalidDimension,
        InvalidContainerSize => LengthMismatch
    },
    LweCiphertextConsumingRetrievalError {},
    LweCiphertextVectorConsumingRetrievalError {},
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seeding_failures_keep_their_cause() {
        let cause = SeedError::EntropyUnavailable("no device".to_string());
        let error: BoundaryError = DefaultError::EntropyUnavailable(cause.clone()).into();
        assert_eq!(error, BoundaryError::EntropyUnavailable(cause));
    }

    #[test]
    fn generic_errors_map_to_boundary_kinds() {
        let error: BoundaryError =
            LweSecretKeyGenerationError::<DefaultError>::NullLweDimension.into();
        assert_eq!(error, BoundaryError::InvalidDimension);

        let error: BoundaryError =
            LweCiphertextVectorCreationError::<DefaultError>::InvalidContainerSize.into();
        assert_eq!(error, BoundaryError::LengthMismatch);

        let error: BoundaryError =
            LweCiphertextDecryptionError::<DefaultError>::LweDimensionMismatch.into();
        assert_eq!(error, BoundaryError::LengthMismatch);
    }

    #[test]
    fn engine_errors_are_wrapped() {
        let error: BoundaryError =
            CleartextVectorEncodingError::Engine(DefaultError::FloatEncoderNullRadius).into();
        assert_eq!(error, BoundaryError::Engine(DefaultError::FloatEncoderNullRadius));
    }
}
