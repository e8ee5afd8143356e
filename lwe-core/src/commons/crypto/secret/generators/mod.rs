//! Random generators dedicated to the sampling of secret material.
//!
//! Keys are sampled from a [`SecretRandomGenerator`]. Encryption draws its masks and its noise
//! from the two independent streams of an [`EncryptionRandomGenerator`]. Both are seeded from a
//! [`DeterministicSeeder`], itself seeded once from an entropy source.

mod encryption;
pub use encryption::EncryptionRandomGenerator;

mod secret;
pub use secret::SecretRandomGenerator;

mod seeder;
pub use seeder::DeterministicSeeder;
