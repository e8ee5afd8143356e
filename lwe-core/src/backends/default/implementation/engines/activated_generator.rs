use lwe_csprng::generators::DefaultRandomGenerator;

/// The random generator used by the engines of the default backend.
///
/// All the generators of an engine are derived from the seed given at construction, so two
/// engines built from seeders returning the same seeds produce the same keys and ciphertexts.
pub type ActivatedRandomGenerator = DefaultRandomGenerator;
