use super::{Cleartext, CleartextList, Plaintext, PlaintextList};
use crate::commons::math::tensor::{AsMutTensor, AsRefTensor};
use crate::commons::math::torus::{FromTorus, IntoTorus, UnsignedTorus};
use crate::commons::numeric::{CastFrom, CastInto, Numeric, UnsignedInteger};
use crate::commons::parameters::{EncodingShift, PrecisionBits};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A trait for types encoding cleartexts into plaintexts.
///
/// Encoders are infallible: whatever validity condition an encoder has on its inputs is checked
/// by the engine using it.
pub trait Encoder<Enc: Numeric> {
    /// The type of the cleartexts.
    type Raw: Numeric;

    /// Encode a cleartext into a plaintext.
    fn encode(&self, raw: Cleartext<Self::Raw>) -> Plaintext<Enc>;

    /// Decode a plaintext into a cleartext.
    fn decode(&self, encoded: Plaintext<Enc>) -> Cleartext<Self::Raw>;

    /// Encode a list of cleartexts into a list of plaintexts of the same length.
    fn encode_list<RawCont, EncCont>(
        &self,
        encoded: &mut PlaintextList<EncCont>,
        raw: &CleartextList<RawCont>,
    ) where
        CleartextList<RawCont>: AsRefTensor<Element = Self::Raw>,
        PlaintextList<EncCont>: AsMutTensor<Element = Enc>,
    {
        debug_assert_eq!(encoded.count().0, raw.count().0);
        for (output, input) in encoded.plaintext_iter_mut().zip(raw.cleartext_iter()) {
            *output = self.encode(*input);
        }
    }

    /// Decode a list of plaintexts into a list of cleartexts of the same length.
    fn decode_list<RawCont, EncCont>(
        &self,
        raw: &mut CleartextList<RawCont>,
        encoded: &PlaintextList<EncCont>,
    ) where
        CleartextList<RawCont>: AsMutTensor<Element = Self::Raw>,
        PlaintextList<EncCont>: AsRefTensor<Element = Enc>,
    {
        debug_assert_eq!(encoded.count().0, raw.count().0);
        for (output, input) in raw.cleartext_iter_mut().zip(encoded.plaintext_iter()) {
            *output = self.decode(*input);
        }
    }
}

/// Round `value` to the closest word whose `BITS - kept_bits` low bits are zero.
fn closest_representable<T: UnsignedInteger>(value: T, kept_bits: usize) -> T {
    let dropped = T::BITS - kept_bits;
    if dropped == 0 {
        return value;
    }
    let half = T::ONE << (dropped - 1);
    (value.wrapping_add(half) >> dropped) << dropped
}

/// An encoder placing a fixed-point value in the high bits of a word.
///
/// With `p` bits of precision on a `w` bits word, the encoder keeps the `p + 1` most significant
/// bits for the signed message and leaves the `w - (p + 1)` low bits as noise headroom: a
/// cleartext `x` is encoded as `round(x * 2^(w - p - 1)) mod 2^w`. Encoding wraps silently on
/// overflow and on negative inputs.
///
/// Decoding rounds the word to the closest multiple of the step `2^(w - p - 1)` and reads the
/// remaining bits as a two's complement integer.
///
/// # Example
///
/// ```rust
/// use lwe_core::commons::crypto::encoding::{Cleartext, Encoder, Plaintext, ShiftEncoder};
/// use lwe_core::commons::parameters::PrecisionBits;
/// let encoder = ShiftEncoder::<u64>::new(PrecisionBits(6)).unwrap();
/// assert_eq!(encoder.shift().0, 57);
/// let plaintext: Plaintext<u64> = encoder.encode(Cleartext(-3.));
/// assert_eq!(plaintext.0, (-3_i64 << 57) as u64);
/// // Noise below half a step is rounded away.
/// let noisy = Plaintext(plaintext.0.wrapping_add(1 << 50));
/// assert_eq!(encoder.decode(noisy), Cleartext(-3.));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEncoder<T> {
    precision: PrecisionBits,
    shift: EncodingShift,
    _word: PhantomData<T>,
}

impl<T: UnsignedInteger> ShiftEncoder<T> {
    /// Create an encoder with the given precision, or `None` if `precision + 1` bits do not fit
    /// in a word.
    pub fn new(precision: PrecisionBits) -> Option<ShiftEncoder<T>> {
        let shift = precision.to_encoding_shift(T::BITS)?;
        Some(ShiftEncoder {
            precision,
            shift,
            _word: PhantomData,
        })
    }

    /// Create an encoder with the given precision, which must fit in a word along with its sign
    /// bit.
    pub(crate) fn new_unchecked(precision: PrecisionBits) -> ShiftEncoder<T> {
        debug_assert!(precision.0 < T::BITS);
        ShiftEncoder {
            precision,
            shift: EncodingShift(T::BITS - precision.0 - 1),
            _word: PhantomData,
        }
    }

    pub fn precision(&self) -> PrecisionBits {
        self.precision
    }

    pub fn shift(&self) -> EncodingShift {
        self.shift
    }
}

impl<T: UnsignedInteger> Encoder<T> for ShiftEncoder<T> {
    type Raw = f64;

    fn encode(&self, raw: Cleartext<f64>) -> Plaintext<T> {
        let scaled = (raw.0 * 2_f64.powi(self.shift.0 as i32)).round();
        let modulus = 2_f64.powi(T::BITS as i32);
        // The euclidean remainder is exact, but adding the modulus back for negative inputs may
        // round up to the modulus itself. The cast to the word truncates it to zero.
        let reduced: u128 = scaled.rem_euclid(modulus).cast_into();
        Plaintext(T::cast_from(reduced))
    }

    fn decode(&self, encoded: Plaintext<T>) -> Cleartext<f64> {
        let message_bits = self.precision.0 + 1;
        let rounded = closest_representable(encoded.0, message_bits);
        let message: u128 = (rounded >> self.shift.0).cast_into();
        let modulus = 1_u128 << message_bits;
        let value = if message >= modulus / 2 {
            message as f64 - modulus as f64
        } else {
            message as f64
        };
        Cleartext(value)
    }
}

/// An encoder mapping a real interval onto the torus.
///
/// The interval `[o, o + delta[` is mapped linearly onto `[0, 1[`, `delta` including a margin of
/// one precision step above the requested maximum. The resulting torus element is shifted right
/// by `nb_bit_padding` bits to leave room for carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatEncoder {
    pub(crate) o: f64,
    pub(crate) delta: f64,
    pub(crate) nb_bit_precision: usize,
    pub(crate) nb_bit_padding: usize,
    pub(crate) round: bool,
}

impl FloatEncoder {
    /// Create an encoder for the interval `[min, max]`.
    ///
    /// `min` must be smaller than `max`, and `nb_bit_precision` must be positive.
    pub fn new(min: f64, max: f64, nb_bit_precision: usize, nb_bit_padding: usize) -> FloatEncoder {
        debug_assert!(min < max);
        debug_assert!(nb_bit_precision > 0);
        let margin = (max - min) / (2_f64.powi(nb_bit_precision as i32) - 1.);
        FloatEncoder {
            o: min,
            delta: max - min + margin,
            nb_bit_precision,
            nb_bit_padding,
            round: false,
        }
    }

    /// Create an encoder for the interval `[min, max]`, rounding encoded values to the closest
    /// point of the precision grid.
    pub fn new_rounding_context(
        min: f64,
        max: f64,
        nb_bit_precision: usize,
        nb_bit_padding: usize,
    ) -> FloatEncoder {
        FloatEncoder {
            round: true,
            ..FloatEncoder::new(min, max, nb_bit_precision, nb_bit_padding)
        }
    }

    /// Create an encoder for the interval `[center - radius, center + radius]`.
    ///
    /// `radius` must be positive, and `nb_bit_precision` must be positive.
    pub fn new_centered(
        center: f64,
        radius: f64,
        nb_bit_precision: usize,
        nb_bit_padding: usize,
    ) -> FloatEncoder {
        debug_assert!(radius > 0.);
        FloatEncoder::new(
            center - radius,
            center + radius,
            nb_bit_precision,
            nb_bit_padding,
        )
    }

    /// Return the distance between two consecutive points of the precision grid.
    pub fn granularity(&self) -> f64 {
        self.delta / 2_f64.powi(self.nb_bit_precision as i32)
    }

    /// Return whether `message` lies outside of the interval of the encoder.
    pub fn is_message_out_of_range(&self, message: f64) -> bool {
        !(self.o..=self.o + self.delta).contains(&message)
    }
}

impl<T> Encoder<T> for FloatEncoder
where
    T: UnsignedTorus,
{
    type Raw = f64;

    fn encode(&self, raw: Cleartext<f64>) -> Plaintext<T> {
        debug_assert!(!self.is_message_out_of_range(raw.0));
        let mut encoded = T::from_torus((raw.0 - self.o) / self.delta);
        if self.round {
            encoded = closest_representable(encoded, self.nb_bit_precision);
        }
        Plaintext(encoded >> self.nb_bit_padding)
    }

    fn decode(&self, encoded: Plaintext<T>) -> Cleartext<f64> {
        let mut value = if self.round {
            closest_representable(encoded.0, self.nb_bit_precision + self.nb_bit_padding)
        } else {
            encoded.0
        };
        value <<= self.nb_bit_padding;

        // A message at the start of the interval can be pushed below zero by the noise and wrap
        // to the top of the torus. Values in the last precision step are rounded back to zero.
        let wrap_start = T::MAX << (T::BITS - self.nb_bit_precision);
        if value > wrap_start {
            value = closest_representable(value, self.nb_bit_precision);
        }

        Cleartext(value.into_torus() * self.delta + self.o)
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::commons::parameters::{CleartextCount, PlaintextCount};
    use rand::Rng;

    #[test]
    fn shift_encoder_rejects_too_large_precisions() {
        assert!(ShiftEncoder::<u32>::new(PrecisionBits(31)).is_none());
        assert!(ShiftEncoder::<u32>::new(PrecisionBits(30)).is_some());
        assert!(ShiftEncoder::<u64>::new(PrecisionBits(64)).is_none());
    }

    #[test]
    fn shift_encoder_round_trips_the_integer_grid() {
        let encoder = ShiftEncoder::<u64>::new(PrecisionBits(6)).unwrap();
        for message in -64_i64..64 {
            let plaintext: Plaintext<u64> = encoder.encode(Cleartext(message as f64));
            assert_eq!(plaintext.0, (message << 57) as u64);
            assert_eq!(encoder.decode(plaintext), Cleartext(message as f64));
        }
    }

    #[test]
    fn shift_encoder_tolerates_small_noise() {
        let mut rng = rand::thread_rng();
        let encoder = ShiftEncoder::<u32>::new(PrecisionBits(4)).unwrap();
        let half_step = 1_u32 << (encoder.shift().0 - 1);
        for _ in 0..1000 {
            let message = rng.gen_range(-16_i32..16);
            let noise = rng.gen_range(0..half_step);
            let plaintext: Plaintext<u32> = encoder.encode(Cleartext(message as f64));
            let up = Plaintext(plaintext.0.wrapping_add(noise));
            let down = Plaintext(plaintext.0.wrapping_sub(noise));
            assert_eq!(encoder.decode(up), Cleartext(message as f64));
            assert_eq!(encoder.decode(down), Cleartext(message as f64));
        }
    }

    #[test]
    fn shift_encoder_wraps_out_of_range_messages() {
        let encoder = ShiftEncoder::<u64>::new(PrecisionBits(6)).unwrap();
        let plaintext: Plaintext<u64> = encoder.encode(Cleartext(64.));
        assert_eq!(encoder.decode(plaintext), Cleartext(-64.));
        let plaintext: Plaintext<u64> = encoder.encode(Cleartext(128.));
        assert_eq!(plaintext.0, 0);
    }

    #[test]
    fn shift_encoder_lists_preserve_order() {
        let encoder = ShiftEncoder::<u64>::new(PrecisionBits(6)).unwrap();
        let cleartexts = CleartextList::from_container(vec![3., 2., 5.]);
        let mut plaintexts = PlaintextList::allocate(0_u64, PlaintextCount(3));
        encoder.encode_list(&mut plaintexts, &cleartexts);
        let raw: Vec<u64> = plaintexts.plaintext_iter().map(|p| p.0).collect();
        assert_eq!(raw, vec![3 << 57, 2 << 57, 5 << 57]);

        let mut decoded = CleartextList::allocate(0., CleartextCount(3));
        encoder.decode_list(&mut decoded, &plaintexts);
        assert_eq!(decoded, cleartexts);
    }

    fn random_interval() -> (f64, f64) {
        let mut rng = rand::thread_rng();
        let start: f64 = rng.gen_range(-1000.0..1000.);
        let size: f64 = rng.gen_range(0.001..1000.);
        (start, start + size)
    }

    #[test]
    fn float_encoder_round_trips_within_granularity() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let (min, max) = random_interval();
            let precision = rng.gen_range(1..=8);
            let padding = rng.gen_range(0..8);
            let encoder = FloatEncoder::new(min, max, precision, padding);
            let message = rng.gen_range(min..max);
            let plaintext: Plaintext<u64> = encoder.encode(Cleartext(message));
            let decoded = encoder.decode(plaintext);
            assert!(
                (decoded.0 - message).abs() < encoder.granularity(),
                "{} != {} +- {}",
                decoded.0,
                message,
                encoder.granularity()
            );
        }
    }

    #[test]
    fn centered_float_encoder_matches_min_max() {
        let centered = FloatEncoder::new_centered(1., 2., 4, 1);
        let min_max = FloatEncoder::new(-1., 3., 4, 1);
        assert_eq!(centered, min_max);
    }

    #[test]
    fn rounding_float_encoder_lands_on_the_grid() {
        let encoder = FloatEncoder::new_rounding_context(0., 15., 4, 0);
        let plaintext: Plaintext<u32> = encoder.encode(Cleartext(7.2));
        assert_eq!(plaintext.0 & ((1 << 28) - 1), 0);
        assert_eq!(encoder.decode(plaintext), Cleartext(7.));
    }

    #[test]
    fn float_encoder_detects_out_of_range_messages() {
        let encoder = FloatEncoder::new(0., 10., 3, 0);
        assert!(encoder.is_message_out_of_range(-0.5));
        assert!(encoder.is_message_out_of_range(12.));
        assert!(!encoder.is_message_out_of_range(10.));
    }
}
