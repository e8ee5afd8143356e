use crate::commons::math::tensor::{tensor_traits, AsMutTensor, AsRefTensor, Tensor};
use crate::commons::numeric::Numeric;
use crate::commons::parameters::PlaintextCount;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An encoded value, ready to be encrypted.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plaintext<T: Numeric>(pub T);

/// A list of encoded values, stored contiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaintextList<Cont> {
    tensor: Tensor<Cont>,
}

tensor_traits!(PlaintextList);

impl<T> PlaintextList<Vec<T>>
where
    T: Numeric,
{
    /// Allocate a list of `count` plaintexts, all equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::crypto::encoding::PlaintextList;
    /// use lwe_core::commons::parameters::PlaintextCount;
    /// let list = PlaintextList::allocate(0_u64, PlaintextCount(10));
    /// assert_eq!(list.count(), PlaintextCount(10));
    /// ```
    pub fn allocate(value: T, count: PlaintextCount) -> PlaintextList<Vec<T>> {
        PlaintextList::from_container(vec![value; count.0])
    }
}

impl<Cont> PlaintextList<Cont> {
    pub fn from_container(cont: Cont) -> PlaintextList<Cont> {
        PlaintextList {
            tensor: Tensor::from_container(cont),
        }
    }

    /// Return the number of plaintexts in the list.
    pub fn count(&self) -> PlaintextCount
    where
        Self: AsRefTensor,
    {
        PlaintextCount(self.as_tensor().len())
    }

    /// Iterate over the plaintexts of the list.
    pub fn plaintext_iter<T>(&self) -> impl Iterator<Item = &Plaintext<T>>
    where
        Self: AsRefTensor<Element = T>,
        T: Numeric,
    {
        self.as_tensor()
            .iter()
            .map(|value| unsafe { &*(value as *const T as *const Plaintext<T>) })
    }

    /// Iterate mutably over the plaintexts of the list.
    pub fn plaintext_iter_mut<T>(&mut self) -> impl Iterator<Item = &mut Plaintext<T>>
    where
        Self: AsMutTensor<Element = T>,
        T: Numeric,
    {
        self.as_mut_tensor()
            .iter_mut()
            .map(|value| unsafe { &mut *(value as *mut T as *mut Plaintext<T>) })
    }

    /// Iterate in parallel over the plaintexts of the list.
    pub fn par_plaintext_iter<T>(&self) -> impl IndexedParallelIterator<Item = &Plaintext<T>>
    where
        Self: AsRefTensor<Element = T>,
        T: Numeric,
    {
        self.as_tensor()
            .as_slice()
            .par_iter()
            .map(|value| unsafe { &*(value as *const T as *const Plaintext<T>) })
    }

    /// Iterate mutably in parallel over the plaintexts of the list.
    pub fn par_plaintext_iter_mut<T>(
        &mut self,
    ) -> impl IndexedParallelIterator<Item = &mut Plaintext<T>>
    where
        Self: AsMutTensor<Element = T>,
        T: Numeric,
    {
        self.as_mut_tensor()
            .as_mut_slice()
            .par_iter_mut()
            .map(|value| unsafe { &mut *(value as *mut T as *mut Plaintext<T>) })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plaintext_list_iterators_agree() {
        let list = PlaintextList::from_container(vec![3_u64 << 57, 2 << 57, 5 << 57]);
        let sequential: Vec<u64> = list.plaintext_iter().map(|p| p.0).collect();
        let parallel: Vec<u64> = list.par_plaintext_iter().map(|p| p.0).collect();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential, vec![3 << 57, 2 << 57, 5 << 57]);
    }

    #[test]
    fn plaintext_iter_mut_writes_through() {
        let mut list = PlaintextList::allocate(0_u32, PlaintextCount(3));
        list.par_plaintext_iter_mut()
            .enumerate()
            .for_each(|(i, p)| p.0 = i as u32 + 1);
        let values: Vec<u32> = list.plaintext_iter().map(|p| p.0).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
