use lwe_core::prelude::*;

fn init_tracing() {
    // Discard error (mainly due to already registered subscriber)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .without_time()
        .with_test_writer()
        .try_init();
}

fn new_engine() -> HandleEngine {
    init_tracing();
    HandleEngine::new(new_seeder().unwrap()).unwrap()
}

#[test]
fn cleartext_round_trip() {
    let mut engine = new_engine();
    let cleartext = engine.create_cleartext(3.0).unwrap();
    assert_eq!(engine.retrieve_cleartext(cleartext).unwrap(), 3.0);
    // Retrieval does not consume.
    assert_eq!(engine.retrieve_cleartext(cleartext).unwrap(), 3.0);
}

#[test]
fn cleartext_vector_round_trip() {
    let mut engine = new_engine();
    let cleartexts = engine.create_cleartext_vector(&[3.0, 2.0, 5.0]).unwrap();
    assert_eq!(
        engine.retrieve_cleartext_vector(cleartexts).unwrap(),
        vec![3.0, 2.0, 5.0]
    );
}

#[test]
fn encrypt_decrypt_decode_raw_plaintexts() {
    let mut engine = new_engine();
    let key = engine.create_secret_key(512).unwrap();
    let plaintexts = engine
        .create_plaintext_vector_from_raw(&[3 << 57, 2 << 57, 5 << 57])
        .unwrap();

    let ciphertexts = engine
        .encrypt_ciphertext_vector(key, plaintexts, 2_f64.powi(-11))
        .unwrap();
    let decrypted = engine.decrypt_ciphertext_vector(key, ciphertexts).unwrap();
    let decoded = engine.decode_plaintext_vector(decrypted).unwrap();

    assert_eq!(
        engine.retrieve_cleartext_vector(decoded).unwrap(),
        vec![3.0, 2.0, 5.0]
    );
}

#[test]
fn encode_decode_round_trip_on_the_precision_grid() {
    let mut engine = new_engine();
    // 6 bits of precision plus a sign bit.
    let values = (-64..64).map(f64::from).collect::<Vec<_>>();
    let cleartexts = engine.create_cleartext_vector(&values).unwrap();
    let plaintexts = engine.encode_cleartext_vector(cleartexts).unwrap();
    assert_eq!(
        engine.retrieve_plaintext_vector(plaintexts).unwrap()[67],
        3 << 57
    );
    let decoded = engine.decode_plaintext_vector(plaintexts).unwrap();
    assert_eq!(engine.retrieve_cleartext_vector(decoded).unwrap(), values);
}

#[test]
fn scalar_encryption_round_trip() {
    let mut engine = new_engine();
    let key = engine.create_secret_key(512).unwrap();
    let plaintext = engine.create_plaintext_from_raw(7 << 57).unwrap();
    let ciphertext = engine.encrypt_ciphertext(key, plaintext, 2_f64.powi(-11)).unwrap();
    let decrypted = engine.decrypt_ciphertext(key, ciphertext).unwrap();
    let noisy = engine.retrieve_plaintext(decrypted).unwrap();
    assert_eq!(noisy.wrapping_add(1 << 56) >> 57, 7);
}

#[test]
fn vector_lengths_are_preserved() {
    let mut engine = new_engine();
    let key = engine.create_secret_key(16).unwrap();
    for count in [1_usize, 2, 17] {
        let plaintexts = engine
            .create_plaintext_vector_from_raw(&vec![1 << 57; count])
            .unwrap();
        let ciphertexts = engine
            .encrypt_ciphertext_vector(key, plaintexts, 2_f64.powi(-11))
            .unwrap();
        let decrypted = engine.decrypt_ciphertext_vector(key, ciphertexts).unwrap();
        assert_eq!(
            engine.retrieve_plaintext_vector(decrypted).unwrap().len(),
            count
        );
        assert_eq!(
            engine
                .consume_retrieve_ciphertext_vector(ciphertexts)
                .unwrap()
                .len(),
            count * 17
        );
    }
}

#[test]
fn encryptions_of_the_same_plaintext_differ() {
    let mut engine = new_engine();
    let key = engine.create_secret_key(512).unwrap();
    let plaintext = engine.create_plaintext_from_raw(3 << 57).unwrap();
    let first = engine.encrypt_ciphertext(key, plaintext, 2_f64.powi(-11)).unwrap();
    let second = engine.encrypt_ciphertext(key, plaintext, 2_f64.powi(-11)).unwrap();
    assert_ne!(
        engine.consume_retrieve_ciphertext(first).unwrap(),
        engine.consume_retrieve_ciphertext(second).unwrap()
    );
}

#[test]
fn wrong_key_decryption_yields_garbage() {
    let mut engine = new_engine();
    let key = engine.create_secret_key(512).unwrap();
    let other_key = engine.create_secret_key(512).unwrap();
    let values = (0..16).map(|i| f64::from(i % 8)).collect::<Vec<_>>();
    let cleartexts = engine.create_cleartext_vector(&values).unwrap();
    let plaintexts = engine.encode_cleartext_vector(cleartexts).unwrap();
    let ciphertexts = engine
        .encrypt_ciphertext_vector(key, plaintexts, 2_f64.powi(-11))
        .unwrap();

    let decrypted = engine
        .decrypt_ciphertext_vector(other_key, ciphertexts)
        .unwrap();
    let decoded = engine.decode_plaintext_vector(decrypted).unwrap();
    assert_ne!(engine.retrieve_cleartext_vector(decoded).unwrap(), values);
}

#[test]
fn ciphertexts_survive_a_raw_round_trip() {
    let mut engine = new_engine();
    let key = engine.create_secret_key(64).unwrap();
    let plaintexts = engine
        .create_plaintext_vector_from_raw(&[3 << 57, 2 << 57, 5 << 57])
        .unwrap();
    let ciphertexts = engine
        .encrypt_ciphertext_vector(key, plaintexts, 2_f64.powi(-11))
        .unwrap();

    let words = engine.consume_retrieve_ciphertext_vector(ciphertexts).unwrap();
    let restored = engine.create_ciphertext_vector_from_raw(words, 64).unwrap();
    let decrypted = engine.decrypt_ciphertext_vector(key, restored).unwrap();
    let decoded = engine.decode_plaintext_vector(decrypted).unwrap();
    assert_eq!(
        engine.retrieve_cleartext_vector(decoded).unwrap(),
        vec![3.0, 2.0, 5.0]
    );
    assert_eq!(
        engine.decrypt_ciphertext_vector(key, ciphertexts),
        Err(BoundaryError::HandleConsumed)
    );
}

#[test]
fn configuration_is_read_from_json() {
    init_tracing();
    let config: HandleEngineConfig = serde_json::from_str(r#"{ "precision_bits": 2 }"#).unwrap();
    let mut engine = HandleEngine::with_config(new_seeder().unwrap(), config).unwrap();
    assert_eq!(engine.config().precision_bits, 2);

    let cleartexts = engine.create_cleartext_vector(&[1.0, -2.0]).unwrap();
    let plaintexts = engine.encode_cleartext_vector(cleartexts).unwrap();
    assert_eq!(
        engine.retrieve_plaintext_vector(plaintexts).unwrap(),
        vec![1 << 61, (-2_i64 << 61) as u64]
    );
}

struct FailingSeeder;

impl Seeder for FailingSeeder {
    fn seed(&mut self) -> Result<Seed, SeedError> {
        Err(SeedError::EntropyUnavailable("device closed".to_string()))
    }

    fn is_available() -> bool {
        true
    }
}

#[test]
fn seeding_failures_are_reported() {
    init_tracing();
    assert!(matches!(
        HandleEngine::new(Box::new(FailingSeeder)),
        Err(BoundaryError::EntropyUnavailable(SeedError::EntropyUnavailable(_)))
    ));
    assert!(matches!(
        DefaultEngine::new(Box::new(FailingSeeder)),
        Err(DefaultError::EntropyUnavailable(_))
    ));
    assert!(matches!(
        DefaultParallelEngine::new(Box::new(FailingSeeder)),
        Err(DefaultParallelError::EntropyUnavailable(_))
    ));
}
