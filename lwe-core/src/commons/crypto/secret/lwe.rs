use crate::commons::crypto::encoding::{Plaintext, PlaintextList};
use crate::commons::crypto::lwe::{LweCiphertext, LweList};
use crate::commons::crypto::secret::generators::{
    EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::random::{ByteRandomGenerator, ParallelByteRandomGenerator};
use crate::commons::math::tensor::{tensor_traits, AsMutTensor, AsRefSlice, AsRefTensor, Tensor};
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::LweDimension;
use lwe_csprng::generators::ForkError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A binary LWE secret key.
///
/// Each coefficient of the key is a word equal to `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweSecretKey<Cont> {
    pub(crate) tensor: Tensor<Cont>,
}

tensor_traits!(LweSecretKey);

impl<Scalar> LweSecretKey<Vec<Scalar>>
where
    Scalar: UnsignedTorus,
{
    /// Generate a new binary secret key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::crypto::secret::generators::SecretRandomGenerator;
    /// use lwe_core::commons::crypto::secret::LweSecretKey;
    /// use lwe_core::commons::math::random::{DefaultRandomGenerator, Seed};
    /// use lwe_core::commons::parameters::LweDimension;
    /// let mut generator = SecretRandomGenerator::<DefaultRandomGenerator>::new(Seed(0));
    /// let secret_key: LweSecretKey<Vec<u32>> =
    ///     LweSecretKey::generate_binary(LweDimension(256), &mut generator);
    /// assert_eq!(secret_key.key_size(), LweDimension(256));
    /// ```
    pub fn generate_binary<Gen: ByteRandomGenerator>(
        size: LweDimension,
        generator: &mut SecretRandomGenerator<Gen>,
    ) -> Self {
        LweSecretKey {
            tensor: Tensor::from_container(generator.random_binary_vec(size.0)),
        }
    }
}

impl<Cont> LweSecretKey<Cont> {
    /// Create a binary secret key from a container of `0` and `1` words.
    pub fn binary_from_container(cont: Cont) -> Self
    where
        Cont: AsRefSlice,
    {
        LweSecretKey {
            tensor: Tensor::from_container(cont),
        }
    }

    /// Return the dimension of the key.
    pub fn key_size(&self) -> LweDimension
    where
        Self: AsRefTensor,
    {
        LweDimension(self.as_tensor().len())
    }

    /// Encrypt a plaintext into the given ciphertext.
    ///
    /// A fresh mask is drawn from the mask generator and a fresh noise from the noise generator.
    pub fn encrypt_lwe<OutputCont, Scalar, Gen>(
        &self,
        output: &mut LweCiphertext<OutputCont>,
        encoded: &Plaintext<Scalar>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        Self: AsRefTensor<Element = Scalar>,
        LweCiphertext<OutputCont>: AsMutTensor<Element = Scalar>,
        Scalar: UnsignedTorus,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(output.lwe_size().to_lwe_dimension(), self.key_size());
        let (body, mut mask) = output.get_mut_body_and_mask();
        generator.fill_slice_with_random_mask(mask.as_mut_slice());
        let noise: Scalar = generator.random_noise(noise_parameters);
        body.0 = mask
            .compute_multisum(self.as_tensor())
            .wrapping_add(encoded.0)
            .wrapping_add(noise);
    }

    /// Encrypt a list of plaintexts into a list of ciphertexts of the same length.
    pub fn encrypt_lwe_list<OutputCont, InputCont, Scalar, Gen>(
        &self,
        output: &mut LweList<OutputCont>,
        encoded: &PlaintextList<InputCont>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        Self: AsRefTensor<Element = Scalar>,
        LweList<OutputCont>: AsMutTensor<Element = Scalar>,
        PlaintextList<InputCont>: AsRefTensor<Element = Scalar>,
        Scalar: UnsignedTorus,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(output.count().0, encoded.count().0);
        for (mut cipher, message) in output.ciphertext_iter_mut().zip(encoded.plaintext_iter()) {
            self.encrypt_lwe(&mut cipher, message, noise_parameters, generator);
        }
    }

    /// Encrypt a list of plaintexts in parallel.
    ///
    /// The generator is forked into one child per ciphertext, so the output does not depend on
    /// the scheduling of the threads.
    pub fn par_encrypt_lwe_list<OutputCont, InputCont, Scalar, Gen>(
        &self,
        output: &mut LweList<OutputCont>,
        encoded: &PlaintextList<InputCont>,
        noise_parameters: impl DispersionParameter + Sync + Send,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) -> Result<(), ForkError>
    where
        Self: AsRefTensor<Element = Scalar> + Sync,
        LweList<OutputCont>: AsMutTensor<Element = Scalar>,
        PlaintextList<InputCont>: AsRefTensor<Element = Scalar>,
        Scalar: UnsignedTorus,
        Gen: ParallelByteRandomGenerator,
    {
        debug_assert_eq!(output.count().0, encoded.count().0);
        let children =
            generator.par_fork_lwe_list_to_lwe::<Scalar>(output.count(), output.mask_size())?;
        output
            .par_ciphertext_iter_mut()
            .zip(encoded.par_plaintext_iter())
            .zip(children)
            .for_each(|((mut cipher, message), mut generator)| {
                self.encrypt_lwe(&mut cipher, message, noise_parameters, &mut generator);
            });
        Ok(())
    }

    /// Decrypt a ciphertext into the given plaintext.
    ///
    /// The output still contains the encryption noise.
    pub fn decrypt_lwe<Scalar, CipherCont>(
        &self,
        output: &mut Plaintext<Scalar>,
        cipher: &LweCiphertext<CipherCont>,
    ) where
        Self: AsRefTensor<Element = Scalar>,
        LweCiphertext<CipherCont>: AsRefTensor<Element = Scalar>,
        Scalar: UnsignedTorus,
    {
        debug_assert_eq!(cipher.lwe_size().to_lwe_dimension(), self.key_size());
        let (body, mask) = cipher.get_body_and_mask();
        output.0 = body.0.wrapping_sub(mask.compute_multisum(self.as_tensor()));
    }

    /// Decrypt a list of ciphertexts into a list of plaintexts of the same length.
    pub fn decrypt_lwe_list<Scalar, EncodedCont, CipherCont>(
        &self,
        output: &mut PlaintextList<EncodedCont>,
        cipher: &LweList<CipherCont>,
    ) where
        Self: AsRefTensor<Element = Scalar>,
        PlaintextList<EncodedCont>: AsMutTensor<Element = Scalar>,
        LweList<CipherCont>: AsRefTensor<Element = Scalar>,
        Scalar: UnsignedTorus,
    {
        debug_assert_eq!(output.count().0, cipher.count().0);
        for (cipher, output) in cipher.ciphertext_iter().zip(output.plaintext_iter_mut()) {
            self.decrypt_lwe(output, &cipher);
        }
    }

    /// Decrypt a list of ciphertexts in parallel.
    pub fn par_decrypt_lwe_list<Scalar, EncodedCont, CipherCont>(
        &self,
        output: &mut PlaintextList<EncodedCont>,
        cipher: &LweList<CipherCont>,
    ) where
        Self: AsRefTensor<Element = Scalar> + Sync,
        PlaintextList<EncodedCont>: AsMutTensor<Element = Scalar>,
        LweList<CipherCont>: AsRefTensor<Element = Scalar>,
        Scalar: UnsignedTorus,
    {
        debug_assert_eq!(output.count().0, cipher.count().0);
        cipher
            .par_ciphertext_iter()
            .zip(output.par_plaintext_iter_mut())
            .for_each(|(cipher, output)| self.decrypt_lwe(output, &cipher));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::crypto::encoding::{Cleartext, Encoder, ShiftEncoder};
    use crate::commons::dispersion::Variance;
    use crate::commons::math::tensor::IntoTensor;
    use crate::commons::parameters::{LweCiphertextCount, LweSize, PlaintextCount, PrecisionBits};
    use crate::commons::test_tools::{
        mean_and_variance, new_encryption_random_generator, new_secret_random_generator,
        torus_to_centered,
    };

    #[test]
    fn generated_keys_are_binary() {
        let mut generator = new_secret_random_generator();
        let key: LweSecretKey<Vec<u64>> =
            LweSecretKey::generate_binary(LweDimension(1024), &mut generator);
        let coefficients = key.into_tensor().into_container();
        assert!(coefficients.iter().all(|c| *c <= 1));
        let ones = coefficients.iter().filter(|c| **c == 1).count();
        assert!(ones > 384 && ones < 640, "{ones} ones out of 1024");
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let mut secret_generator = new_secret_random_generator();
        let mut encryption_generator = new_encryption_random_generator();
        let key: LweSecretKey<Vec<u64>> =
            LweSecretKey::generate_binary(LweDimension(512), &mut secret_generator);
        let encoder = ShiftEncoder::<u64>::new(PrecisionBits(6)).unwrap();
        let noise = Variance(2_f64.powi(-100));
        for message in [-64., -3., 0., 3., 63.] {
            let plaintext: Plaintext<u64> = encoder.encode(Cleartext(message));
            let mut ciphertext = LweCiphertext::allocate(0, LweSize(513));
            key.encrypt_lwe(&mut ciphertext, &plaintext, noise, &mut encryption_generator);
            let mut decrypted = Plaintext(0);
            key.decrypt_lwe(&mut decrypted, &ciphertext);
            assert_eq!(encoder.decode(decrypted), Cleartext(message));
        }
    }

    #[test]
    fn decryption_noise_follows_the_variance() {
        let mut secret_generator = new_secret_random_generator();
        let mut encryption_generator = new_encryption_random_generator();
        let key: LweSecretKey<Vec<u32>> =
            LweSecretKey::generate_binary(LweDimension(64), &mut secret_generator);
        let variance = 2_f64.powi(-20);
        let count = 2000;
        let plaintexts = PlaintextList::allocate(0_u32, PlaintextCount(count));
        let mut ciphertexts = LweList::allocate(0, LweSize(65), LweCiphertextCount(count));
        key.encrypt_lwe_list(
            &mut ciphertexts,
            &plaintexts,
            Variance(variance),
            &mut encryption_generator,
        );
        let mut decrypted = PlaintextList::allocate(0_u32, PlaintextCount(count));
        key.decrypt_lwe_list(&mut decrypted, &ciphertexts);
        let errors: Vec<f64> = decrypted
            .plaintext_iter()
            .map(|p| torus_to_centered(p.0))
            .collect();
        let (mean, empirical) = mean_and_variance(&errors);
        assert!(mean.abs() < 5. * (variance / count as f64).sqrt());
        assert!((empirical / variance - 1.).abs() < 0.2, "{empirical} vs {variance}");
    }

    #[test]
    fn parallel_encryption_matches_decryption() {
        let mut secret_generator = new_secret_random_generator();
        let mut encryption_generator = new_encryption_random_generator();
        let key: LweSecretKey<Vec<u64>> =
            LweSecretKey::generate_binary(LweDimension(256), &mut secret_generator);
        let encoder = ShiftEncoder::<u64>::new(PrecisionBits(6)).unwrap();
        let messages: Vec<f64> = (-20..20).map(f64::from).collect();
        let mut plaintexts = PlaintextList::allocate(0_u64, PlaintextCount(messages.len()));
        for (p, m) in plaintexts.plaintext_iter_mut().zip(messages.iter()) {
            *p = encoder.encode(Cleartext(*m));
        }
        let mut ciphertexts =
            LweList::allocate(0, LweSize(257), LweCiphertextCount(messages.len()));
        key.par_encrypt_lwe_list(
            &mut ciphertexts,
            &plaintexts,
            Variance(2_f64.powi(-80)),
            &mut encryption_generator,
        )
        .unwrap();

        let mut sequential = PlaintextList::allocate(0_u64, PlaintextCount(messages.len()));
        let mut parallel = PlaintextList::allocate(0_u64, PlaintextCount(messages.len()));
        key.decrypt_lwe_list(&mut sequential, &ciphertexts);
        key.par_decrypt_lwe_list(&mut parallel, &ciphertexts);
        assert_eq!(sequential, parallel);
        let decoded: Vec<f64> = sequential
            .plaintext_iter()
            .map(|p| encoder.decode(*p).0)
            .collect();
        assert_eq!(decoded, messages);
    }

    #[test]
    fn two_encryptions_differ() {
        let mut secret_generator = new_secret_random_generator();
        let mut encryption_generator = new_encryption_random_generator();
        let key: LweSecretKey<Vec<u32>> =
            LweSecretKey::generate_binary(LweDimension(128), &mut secret_generator);
        let plaintext = Plaintext(1_u32 << 28);
        let mut first = LweCiphertext::allocate(0, LweSize(129));
        let mut second = LweCiphertext::allocate(0, LweSize(129));
        let noise = Variance(2_f64.powi(-40));
        key.encrypt_lwe(&mut first, &plaintext, noise, &mut encryption_generator);
        key.encrypt_lwe(&mut second, &plaintext, noise, &mut encryption_generator);
        assert_ne!(first, second);
    }
}
