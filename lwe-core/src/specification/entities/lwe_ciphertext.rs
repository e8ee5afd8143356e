use crate::commons::parameters::LweDimension;
use crate::specification::entities::markers::LweCiphertextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying an LWE ciphertext.
///
/// # Formal Definition
///
/// ## LWE Ciphertext
///
/// An LWE ciphertext is an encryption of a plaintext. It is secure under the hardness assumption
/// called Learning With Errors (LWE).
///
/// We call $q$ the ciphertext modulus, and $n$ the LWE dimension. A ciphertext is the pair
/// $\mathsf{ct} = \left( \vec{a} , b\right) \in \mathbb{Z}\_q^{n+1}$ where $\vec{a}$ is the
/// mask, sampled uniformly, and $b = \left\langle \vec{a} , \vec{s} \right\rangle + \mathsf{pt} +
/// e$ is the body, $e$ being a small gaussian error.
pub trait LweCiphertextEntity: AbstractEntity<Kind = LweCiphertextKind> {
    /// Returns the LWE dimension of the ciphertext.
    fn lwe_dimension(&self) -> LweDimension;
}
