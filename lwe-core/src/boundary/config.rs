use crate::prelude::ShiftEncoderConfig;
use serde::Deserialize;

/// Parameters of a [`HandleEngine`](super::HandleEngine).
///
/// Missing fields take their default value when deserialized:
///
/// ```rust
/// use lwe_core::prelude::HandleEngineConfig;
///
/// let config: HandleEngineConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, HandleEngineConfig::default());
/// assert_eq!(config.precision_bits, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HandleEngineConfig {
    /// Number of bits of the encoded messages, excluding the sign bit.
    pub precision_bits: usize,
}

impl Default for HandleEngineConfig {
    fn default() -> Self {
        HandleEngineConfig { precision_bits: 6 }
    }
}

impl HandleEngineConfig {
    /// The configuration of the shift encoder used by the engine.
    pub(crate) fn encoder_config(&self) -> ShiftEncoderConfig {
        ShiftEncoderConfig {
            precision_bits: self.precision_bits,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encoder_follows_the_configured_precision() {
        let config = HandleEngineConfig { precision_bits: 4 };
        assert_eq!(config.encoder_config(), ShiftEncoderConfig { precision_bits: 4 });
    }
}
