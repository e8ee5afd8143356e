use super::LweCiphertext;
use crate::commons::math::tensor::{tensor_traits, AsMutTensor, AsRefSlice, AsRefTensor, Tensor};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{LweCiphertextCount, LweDimension, LweSize};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A list of LWE ciphertexts of the same size, stored contiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweList<Cont> {
    pub(crate) tensor: Tensor<Cont>,
    pub(crate) lwe_size: LweSize,
}

tensor_traits!(LweList);

impl<Scalar> LweList<Vec<Scalar>>
where
    Scalar: UnsignedInteger,
{
    /// Allocate a list of `count` ciphertexts of size `lwe_size`, all words equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::crypto::lwe::LweList;
    /// use lwe_core::commons::parameters::{LweCiphertextCount, LweDimension, LweSize};
    /// let list = LweList::allocate(0_u8 as u32, LweSize(10), LweCiphertextCount(20));
    /// assert_eq!(list.count(), LweCiphertextCount(20));
    /// assert_eq!(list.lwe_size(), LweSize(10));
    /// assert_eq!(list.mask_size(), LweDimension(9));
    /// ```
    pub fn allocate(value: Scalar, lwe_size: LweSize, count: LweCiphertextCount) -> Self {
        LweList {
            tensor: Tensor::from_container(vec![value; lwe_size.0 * count.0]),
            lwe_size,
        }
    }
}

impl<Cont> LweList<Cont> {
    /// Create a list from a container whose length is a multiple of `lwe_size`.
    pub fn from_container(cont: Cont, lwe_size: LweSize) -> LweList<Cont>
    where
        Cont: AsRefSlice,
    {
        let tensor = Tensor::from_container(cont);
        debug_assert_eq!(tensor.len() % lwe_size.0, 0);
        LweList { tensor, lwe_size }
    }

    /// Return the number of ciphertexts in the list.
    pub fn count(&self) -> LweCiphertextCount
    where
        Self: AsRefTensor,
    {
        LweCiphertextCount(self.as_tensor().len() / self.lwe_size.0)
    }

    /// Return the size of the ciphertexts of the list.
    pub fn lwe_size(&self) -> LweSize {
        self.lwe_size
    }

    /// Return the dimension of the ciphertexts of the list.
    pub fn mask_size(&self) -> LweDimension {
        self.lwe_size.to_lwe_dimension()
    }

    /// Iterate over the ciphertexts of the list.
    pub fn ciphertext_iter<'a, Scalar>(
        &'a self,
    ) -> impl Iterator<Item = LweCiphertext<&'a [Scalar]>>
    where
        Self: AsRefTensor<Element = Scalar>,
        Scalar: 'a,
    {
        self.as_tensor()
            .subtensor_iter(self.lwe_size.0)
            .map(|sub| LweCiphertext::from_container(sub.into_container()))
    }

    /// Iterate mutably over the ciphertexts of the list.
    pub fn ciphertext_iter_mut<'a, Scalar>(
        &'a mut self,
    ) -> impl Iterator<Item = LweCiphertext<&'a mut [Scalar]>>
    where
        Self: AsMutTensor<Element = Scalar>,
        Scalar: 'a,
    {
        let lwe_size = self.lwe_size.0;
        self.as_mut_tensor()
            .subtensor_iter_mut(lwe_size)
            .map(|sub| LweCiphertext::from_container(sub.into_container()))
    }

    /// Iterate in parallel over the ciphertexts of the list.
    pub fn par_ciphertext_iter<'a, Scalar>(
        &'a self,
    ) -> impl IndexedParallelIterator<Item = LweCiphertext<&'a [Scalar]>>
    where
        Self: AsRefTensor<Element = Scalar>,
        Scalar: Sync + 'a,
    {
        self.as_tensor()
            .as_slice()
            .par_chunks(self.lwe_size.0)
            .map(LweCiphertext::from_container)
    }

    /// Iterate mutably in parallel over the ciphertexts of the list.
    pub fn par_ciphertext_iter_mut<'a, Scalar>(
        &'a mut self,
    ) -> impl IndexedParallelIterator<Item = LweCiphertext<&'a mut [Scalar]>>
    where
        Self: AsMutTensor<Element = Scalar>,
        Scalar: Send + 'a,
    {
        let lwe_size = self.lwe_size.0;
        self.as_mut_tensor()
            .as_mut_slice()
            .par_chunks_mut(lwe_size)
            .map(LweCiphertext::from_container)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ciphertexts_are_contiguous() {
        let list = LweList::from_container((0_u64..12).collect::<Vec<_>>(), LweSize(4));
        assert_eq!(list.count(), LweCiphertextCount(3));
        let bodies: Vec<u64> = list.ciphertext_iter().map(|c| c.get_body().0).collect();
        assert_eq!(bodies, vec![3, 7, 11]);
        let par_bodies: Vec<u64> = list.par_ciphertext_iter().map(|c| c.get_body().0).collect();
        assert_eq!(bodies, par_bodies);
    }

    #[test]
    fn mutable_iterators_write_through() {
        let mut list = LweList::allocate(0_u32, LweSize(2), LweCiphertextCount(3));
        list.par_ciphertext_iter_mut().for_each(|mut c| {
            let (body, _) = c.get_mut_body_and_mask();
            body.0 = 1;
        });
        for mut c in list.ciphertext_iter_mut() {
            let (_, mut mask) = c.get_mut_body_and_mask();
            mask.as_mut_slice()[0] = 2;
        }
        assert_eq!(list.as_tensor().as_slice(), &[2, 1, 2, 1, 2, 1]);
    }
}
