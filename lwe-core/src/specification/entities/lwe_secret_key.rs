use crate::commons::parameters::LweDimension;
use crate::specification::entities::markers::LweSecretKeyKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying an LWE secret key.
///
/// # Formal Definition
///
/// ## LWE Secret Key
///
/// An LWE secret key is a vector of random elements $\vec{s}\in\mathbb{Z}\_q^n$, with $n$ the
/// LWE dimension. The keys of this crate are binary: each $s\_i$ is sampled uniformly in
/// $\\{0, 1\\}$.
pub trait LweSecretKeyEntity: AbstractEntity<Kind = LweSecretKeyKind> {
    /// Returns the LWE dimension of the key.
    fn lwe_dimension(&self) -> LweDimension;
}
