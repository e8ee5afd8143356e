use crate::commons::math::tensor::{tensor_traits, AsMutTensor, AsRefTensor, Tensor};
use crate::commons::numeric::Numeric;
use crate::commons::parameters::CleartextCount;
use serde::{Deserialize, Serialize};

/// A raw value, before it is encoded.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleartext<T: Numeric>(pub T);

/// A list of raw values, stored contiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleartextList<Cont> {
    tensor: Tensor<Cont>,
}

tensor_traits!(CleartextList);

impl<T> CleartextList<Vec<T>>
where
    T: Numeric,
{
    /// Allocate a list of `count` cleartexts, all equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::crypto::encoding::CleartextList;
    /// use lwe_core::commons::parameters::CleartextCount;
    /// let list = CleartextList::allocate(1_u8 as f64, CleartextCount(3));
    /// assert_eq!(list.count(), CleartextCount(3));
    /// ```
    pub fn allocate(value: T, count: CleartextCount) -> CleartextList<Vec<T>> {
        CleartextList::from_container(vec![value; count.0])
    }
}

impl<Cont> CleartextList<Cont> {
    pub fn from_container(cont: Cont) -> CleartextList<Cont> {
        CleartextList {
            tensor: Tensor::from_container(cont),
        }
    }

    /// Return the number of cleartexts in the list.
    pub fn count(&self) -> CleartextCount
    where
        Self: AsRefTensor,
    {
        CleartextCount(self.as_tensor().len())
    }

    /// Iterate over the cleartexts of the list.
    pub fn cleartext_iter<T>(&self) -> impl Iterator<Item = &Cleartext<T>>
    where
        Self: AsRefTensor<Element = T>,
        T: Numeric,
    {
        self.as_tensor()
            .iter()
            .map(|value| unsafe { &*(value as *const T as *const Cleartext<T>) })
    }

    /// Iterate mutably over the cleartexts of the list.
    pub fn cleartext_iter_mut<T>(&mut self) -> impl Iterator<Item = &mut Cleartext<T>>
    where
        Self: AsMutTensor<Element = T>,
        T: Numeric,
    {
        self.as_mut_tensor()
            .iter_mut()
            .map(|value| unsafe { &mut *(value as *mut T as *mut Cleartext<T>) })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::math::tensor::IntoTensor;

    #[test]
    fn cleartext_iter_preserves_order() {
        let list = CleartextList::from_container(vec![3.0_f64, 2.0, 5.0]);
        let values: Vec<f64> = list.cleartext_iter().map(|c| c.0).collect();
        assert_eq!(values, vec![3.0, 2.0, 5.0]);
        assert_eq!(list.count(), CleartextCount(3));
    }

    #[test]
    fn cleartext_iter_mut_writes_through() {
        let mut list = CleartextList::allocate(0_u32, CleartextCount(4));
        for (i, c) in list.cleartext_iter_mut().enumerate() {
            c.0 = i as u32 * 2;
        }
        assert_eq!(list.into_tensor().into_container(), vec![0, 2, 4, 6]);
    }
}
