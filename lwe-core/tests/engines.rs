use lwe_core::prelude::*;

fn deterministic_seeder(seed: u128) -> Box<dyn Seeder> {
    Box::new(DeterministicSeeder::<ActivatedRandomGenerator>::new(Seed(seed)))
}

fn seeded_engines(seed: u128) -> (DefaultEngine, DefaultParallelEngine) {
    let default_engine = DefaultEngine::new(deterministic_seeder(seed)).unwrap();
    let parallel_engine = DefaultParallelEngine::new(deterministic_seeder(seed + 1)).unwrap();
    (default_engine, parallel_engine)
}

#[test]
fn parallel_encryption_round_trip_64() {
    let (mut engine, mut parallel_engine) = seeded_engines(0);
    let input = vec![3_u64 << 57, 2 << 57, 5 << 57, 63 << 57];
    let noise = Variance(2_f64.powi(-25));

    let key: LweSecretKey64 = engine
        .generate_new_lwe_secret_key(LweDimension(512))
        .unwrap();
    let plaintexts: PlaintextVector64 = engine.create_plaintext_vector_from(&input).unwrap();
    let ciphertexts: LweCiphertextVector64 = parallel_engine
        .encrypt_lwe_ciphertext_vector(&key, &plaintexts, noise)
        .unwrap();
    assert_eq!(ciphertexts.lwe_ciphertext_count(), LweCiphertextCount(4));

    // Both engines decrypt what the other encrypted.
    let sequential: PlaintextVector64 = engine
        .decrypt_lwe_ciphertext_vector(&key, &ciphertexts)
        .unwrap();
    let parallel: PlaintextVector64 = parallel_engine
        .decrypt_lwe_ciphertext_vector(&key, &ciphertexts)
        .unwrap();
    assert_eq!(sequential, parallel);

    let encoder: ShiftEncoder64 = engine
        .create_encoder_from(&ShiftEncoderConfig { precision_bits: 6 })
        .unwrap();
    let decoded: CleartextVectorF64 = engine.decode_plaintext_vector(&encoder, &parallel).unwrap();
    assert_eq!(
        engine.retrieve_cleartext_vector(&decoded).unwrap(),
        vec![3., 2., 5., -1.]
    );
}

#[test]
fn parallel_encryption_round_trip_32() {
    let (mut engine, mut parallel_engine) = seeded_engines(1);
    let input = (0..100_u32).map(|i| (i % 16) << 26).collect::<Vec<_>>();
    let noise = Variance(2_f64.powi(-25));

    let key: LweSecretKey32 = engine
        .generate_new_lwe_secret_key(LweDimension(128))
        .unwrap();
    let plaintexts: PlaintextVector32 = engine.create_plaintext_vector_from(&input).unwrap();
    let ciphertexts: LweCiphertextVector32 = parallel_engine
        .encrypt_lwe_ciphertext_vector(&key, &plaintexts, noise)
        .unwrap();
    let decrypted: PlaintextVector32 = parallel_engine
        .decrypt_lwe_ciphertext_vector(&key, &ciphertexts)
        .unwrap();

    let output = engine.retrieve_plaintext_vector(&decrypted).unwrap();
    for (expected, noisy) in input.iter().zip(output.iter()) {
        assert_eq!(noisy.wrapping_add(1 << 25) >> 26, expected >> 26);
    }
}

#[test]
fn parallel_encryption_only_depends_on_the_seed() {
    let encrypt = |seed: u128| {
        let (mut engine, mut parallel_engine) = seeded_engines(seed);
        let key: LweSecretKey64 = engine
            .generate_new_lwe_secret_key(LweDimension(32))
            .unwrap();
        let plaintexts: PlaintextVector64 =
            engine.create_plaintext_vector_from(&vec![1_u64 << 60; 64]).unwrap();
        let ciphertexts: LweCiphertextVector64 = parallel_engine
            .encrypt_lwe_ciphertext_vector(&key, &plaintexts, Variance(2_f64.powi(-40)))
            .unwrap();
        engine
            .consume_retrieve_lwe_ciphertext_vector(ciphertexts)
            .unwrap()
    };
    assert_eq!(encrypt(5), encrypt(5));
    assert_ne!(encrypt(5), encrypt(6));
}

#[test]
fn sequential_and_parallel_vector_checks_agree() {
    let (mut engine, mut parallel_engine) = seeded_engines(2);
    let key: LweSecretKey64 = engine
        .generate_new_lwe_secret_key(LweDimension(8))
        .unwrap();
    let other_key: LweSecretKey64 = engine
        .generate_new_lwe_secret_key(LweDimension(9))
        .unwrap();
    let plaintexts: PlaintextVector64 = engine.create_plaintext_vector_from(&[0_u64, 1]).unwrap();

    let invalid = Variance(-1.);
    let sequential: Result<LweCiphertextVector64, _> =
        engine.encrypt_lwe_ciphertext_vector(&key, &plaintexts, invalid);
    assert_eq!(
        sequential,
        Err(LweCiphertextVectorEncryptionError::InvalidVariance)
    );
    let parallel: Result<LweCiphertextVector64, _> =
        parallel_engine.encrypt_lwe_ciphertext_vector(&key, &plaintexts, invalid);
    assert_eq!(
        parallel,
        Err(LweCiphertextVectorEncryptionError::InvalidVariance)
    );

    let ciphertexts: LweCiphertextVector64 = engine
        .encrypt_lwe_ciphertext_vector(&key, &plaintexts, Variance(0.))
        .unwrap();
    let mismatch: Result<PlaintextVector64, _> =
        parallel_engine.decrypt_lwe_ciphertext_vector(&other_key, &ciphertexts);
    assert_eq!(
        mismatch,
        Err(LweCiphertextVectorDecryptionError::LweDimensionMismatch)
    );
}

#[test]
fn float_encoder_round_trip() {
    let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
    let encoder = engine
        .create_encoder_from(&FloatEncoderMinMaxConfig {
            min: 0.,
            max: 10.,
            nb_bit_precision: 8,
            nb_bit_padding: 1,
        })
        .unwrap();
    let input = vec![0., 2.5, 7., 9.75];
    let cleartexts: CleartextVectorF64 = engine.create_cleartext_vector_from(&input).unwrap();
    let plaintexts: PlaintextVector64 = engine
        .encode_cleartext_vector(&encoder, &cleartexts)
        .unwrap();
    let decoded: CleartextVectorF64 = engine
        .decode_plaintext_vector(&encoder, &plaintexts)
        .unwrap();
    for (expected, output) in input
        .iter()
        .zip(engine.retrieve_cleartext_vector(&decoded).unwrap())
    {
        assert!((expected - output).abs() < 10. / 256.);
    }
}

#[test]
fn invalid_float_encoders_are_rejected() {
    let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
    let min_max: Result<FloatEncoder, _> = engine.create_encoder_from(&FloatEncoderMinMaxConfig {
        min: 1.,
        max: 1.,
        nb_bit_precision: 8,
        nb_bit_padding: 1,
    });
    assert_eq!(
        min_max,
        Err(EncoderCreationError::Engine(
            DefaultError::FloatEncoderMinMaxOrder
        ))
    );
    let center_radius: Result<FloatEncoder, _> =
        engine.create_encoder_from(&FloatEncoderCenterRadiusConfig {
            center: 1.,
            radius: 0.,
            nb_bit_precision: 8,
            nb_bit_padding: 1,
        });
    assert_eq!(
        center_radius,
        Err(EncoderCreationError::Engine(
            DefaultError::FloatEncoderNullRadius
        ))
    );
}

#[cfg(feature = "backend_default_serialization")]
#[test]
fn serialized_entities_round_trip() {
    let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
    let mut serialization_engine = DefaultSerializationEngine::new(()).unwrap();
    let key: LweSecretKey64 = engine
        .generate_new_lwe_secret_key(LweDimension(16))
        .unwrap();
    let plaintexts: PlaintextVector64 = engine
        .create_plaintext_vector_from(&[3_u64 << 57, 2 << 57])
        .unwrap();
    let ciphertexts: LweCiphertextVector64 = engine
        .encrypt_lwe_ciphertext_vector(&key, &plaintexts, Variance(2_f64.powi(-25)))
        .unwrap();

    let serialized_key = serialization_engine.serialize(&key).unwrap();
    let serialized_ciphertexts = serialization_engine.serialize(&ciphertexts).unwrap();
    let recovered_key: LweSecretKey64 = serialization_engine
        .deserialize(serialized_key.as_slice())
        .unwrap();
    let recovered_ciphertexts: LweCiphertextVector64 = serialization_engine
        .deserialize(serialized_ciphertexts.as_slice())
        .unwrap();
    assert_eq!(recovered_key, key);
    assert_eq!(recovered_ciphertexts, ciphertexts);

    // A truncated payload is rejected.
    let truncated: Result<LweCiphertextVector64, _> =
        serialization_engine.deserialize(&serialized_ciphertexts[..8]);
    assert!(matches!(
        truncated,
        Err(EntityDeserializationError::Engine(
            DefaultSerializationError::Deserialization(_)
        ))
    ));
}

#[cfg(feature = "backend_default_serialization")]
#[test]
fn deserialized_vectors_with_a_null_lwe_size_are_rejected() {
    let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
    let mut serialization_engine = DefaultSerializationEngine::new(()).unwrap();
    let ciphertexts: LweCiphertextVector64 = engine
        .create_lwe_ciphertext_vector_from(vec![0_u64; 6], LweSize(3))
        .unwrap();
    let mut serialized = serialization_engine.serialize(&ciphertexts).unwrap();

    // The LWE size is the trailing field of the payload.
    let len = serialized.len();
    serialized[len - 8..].fill(0);
    let corrupted: Result<LweCiphertextVector64, _> =
        serialization_engine.deserialize(serialized.as_slice());
    assert!(matches!(
        corrupted,
        Err(EntityDeserializationError::Engine(
            DefaultSerializationError::InvalidEntity
        ))
    ));
}
