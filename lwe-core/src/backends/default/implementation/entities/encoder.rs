use crate::commons::crypto::encoding::{
    FloatEncoder as ImplFloatEncoder, ShiftEncoder as ImplShiftEncoder,
};
use crate::commons::parameters::PrecisionBits;
use crate::specification::entities::markers::EncoderKind;
use crate::specification::entities::{AbstractEntity, EncoderEntity};
use serde::{Deserialize, Serialize};

/// A structure representing a floating point encoder.
///
/// The encoder maps a real interval onto the torus, and can be used to encode `f64` cleartexts
/// into 32 or 64 bits plaintexts.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatEncoder(pub(crate) ImplFloatEncoder);
impl AbstractEntity for FloatEncoder {
    type Kind = EncoderKind;
}
impl EncoderEntity for FloatEncoder {}

impl FloatEncoder {
    pub(crate) fn accepts(&self, message: f64) -> bool {
        !self.0.is_message_out_of_range(message)
    }
}

/// A structure representing a fixed-point encoder for 32 bits plaintexts.
///
/// A cleartext `x` is encoded as `round(x * 2^shift)`, where `shift` leaves `precision + 1` bits
/// for the message and its sign at the top of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEncoder32(pub(crate) ImplShiftEncoder<u32>);
impl AbstractEntity for ShiftEncoder32 {
    type Kind = EncoderKind;
}
impl EncoderEntity for ShiftEncoder32 {}

impl ShiftEncoder32 {
    // Out of range messages wrap around the word.
    pub(crate) fn accepts(&self, _message: f64) -> bool {
        true
    }
}

/// A structure representing a fixed-point encoder for 64 bits plaintexts.
///
/// A cleartext `x` is encoded as `round(x * 2^shift)`, where `shift` leaves `precision + 1` bits
/// for the message and its sign at the top of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEncoder64(pub(crate) ImplShiftEncoder<u64>);
impl AbstractEntity for ShiftEncoder64 {
    type Kind = EncoderKind;
}
impl EncoderEntity for ShiftEncoder64 {}

impl ShiftEncoder64 {
    pub(crate) fn accepts(&self, _message: f64) -> bool {
        true
    }
}

/// Parameters allowing to construct a [`FloatEncoder`] from the bounds (`min` and `max`) of the
/// encoded interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatEncoderMinMaxConfig {
    pub min: f64,
    pub max: f64,
    pub nb_bit_precision: usize,
    pub nb_bit_padding: usize,
}

impl FloatEncoderMinMaxConfig {
    pub(crate) fn to_commons(&self) -> ImplFloatEncoder {
        ImplFloatEncoder::new(
            self.min,
            self.max,
            self.nb_bit_precision,
            self.nb_bit_padding,
        )
    }
}

/// Parameters allowing to construct a [`FloatEncoder`] from the center and radius of the encoded
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatEncoderCenterRadiusConfig {
    pub center: f64,
    pub radius: f64,
    pub nb_bit_precision: usize,
    pub nb_bit_padding: usize,
}

impl FloatEncoderCenterRadiusConfig {
    pub(crate) fn to_commons(&self) -> ImplFloatEncoder {
        ImplFloatEncoder::new_centered(
            self.center,
            self.radius,
            self.nb_bit_precision,
            self.nb_bit_padding,
        )
    }
}

/// Parameters allowing to construct a shift encoder.
///
/// `precision_bits` is the number of bits of the message, not counting its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEncoderConfig {
    pub precision_bits: usize,
}

impl ShiftEncoderConfig {
    pub(crate) fn precision(&self) -> PrecisionBits {
        PrecisionBits(self.precision_bits)
    }
}
