use crate::commons::math::tensor::{
    tensor_traits, AsMutSlice, AsMutTensor, AsRefSlice, AsRefTensor, Tensor,
};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{LweDimension, LweSize};
use serde::{Deserialize, Serialize};

/// An LWE ciphertext, stored as its mask followed by its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweCiphertext<Cont> {
    pub(crate) tensor: Tensor<Cont>,
}

tensor_traits!(LweCiphertext);

impl<Scalar: UnsignedInteger> LweCiphertext<Vec<Scalar>> {
    /// Allocate a ciphertext of the given size, with all its words equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::crypto::lwe::LweCiphertext;
    /// use lwe_core::commons::parameters::{LweDimension, LweSize};
    /// let ciphertext = LweCiphertext::allocate(0_u64, LweSize(11));
    /// assert_eq!(ciphertext.lwe_size(), LweSize(11));
    /// assert_eq!(ciphertext.get_mask().mask_size(), LweDimension(10));
    /// ```
    pub fn allocate(value: Scalar, size: LweSize) -> Self {
        LweCiphertext::from_container(vec![value; size.0])
    }
}

impl<Cont> LweCiphertext<Cont> {
    pub fn from_container(cont: Cont) -> LweCiphertext<Cont> {
        LweCiphertext {
            tensor: Tensor::from_container(cont),
        }
    }

    /// Return the size of the ciphertext, i.e. its dimension plus one.
    pub fn lwe_size(&self) -> LweSize
    where
        Self: AsRefTensor,
    {
        LweSize(self.as_tensor().len())
    }

    /// Return the body of the ciphertext.
    pub fn get_body<Scalar>(&self) -> &LweBody<Scalar>
    where
        Self: AsRefTensor<Element = Scalar>,
    {
        // The container of a ciphertext is never empty.
        let body = &self.as_tensor().as_slice()[self.as_tensor().len() - 1];
        unsafe { &*(body as *const Scalar as *const LweBody<Scalar>) }
    }

    /// Return the mask of the ciphertext.
    pub fn get_mask<Scalar>(&self) -> LweMask<&[Scalar]>
    where
        Self: AsRefTensor<Element = Scalar>,
    {
        let slice = self.as_tensor().as_slice();
        LweMask {
            tensor: Tensor::from_container(&slice[..slice.len() - 1]),
        }
    }

    /// Return the body and the mask of the ciphertext.
    pub fn get_body_and_mask<Scalar>(&self) -> (&LweBody<Scalar>, LweMask<&[Scalar]>)
    where
        Self: AsRefTensor<Element = Scalar>,
    {
        (self.get_body(), self.get_mask())
    }

    /// Return mutable accesses to the body and the mask of the ciphertext.
    pub fn get_mut_body_and_mask<Scalar>(
        &mut self,
    ) -> (&mut LweBody<Scalar>, LweMask<&mut [Scalar]>)
    where
        Self: AsMutTensor<Element = Scalar>,
    {
        let slice = self.as_mut_tensor().as_mut_slice();
        let body_index = slice.len() - 1;
        let (mask, body) = slice.split_at_mut(body_index);
        (
            unsafe { &mut *(&mut body[0] as *mut Scalar as *mut LweBody<Scalar>) },
            LweMask {
                tensor: Tensor::from_container(mask),
            },
        )
    }
}

/// The body of an LWE ciphertext.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LweBody<T>(pub T);

/// The mask of an LWE ciphertext.
#[derive(Debug, PartialEq, Eq)]
pub struct LweMask<Cont> {
    tensor: Tensor<Cont>,
}

tensor_traits!(LweMask);

impl<Cont> LweMask<Cont> {
    pub fn from_container(cont: Cont) -> LweMask<Cont> {
        LweMask {
            tensor: Tensor::from_container(cont),
        }
    }

    /// Return the number of words of the mask, i.e. the dimension of the ciphertext.
    pub fn mask_size(&self) -> LweDimension
    where
        Self: AsRefTensor,
    {
        LweDimension(self.as_tensor().len())
    }

    /// Compute the inner product of the mask with a key, modulo the word size.
    pub fn compute_multisum<Scalar, KeyCont>(&self, key: &Tensor<KeyCont>) -> Scalar
    where
        Self: AsRefTensor<Element = Scalar>,
        KeyCont: AsRefSlice<Element = Scalar>,
        Scalar: UnsignedInteger,
    {
        debug_assert_eq!(self.as_tensor().len(), key.len());
        self.as_tensor()
            .iter()
            .zip(key.iter())
            .fold(Scalar::ZERO, |acc, (&mask, &key)| {
                acc.wrapping_add(mask.wrapping_mul(key))
            })
    }

    pub(crate) fn as_mut_slice<Scalar>(&mut self) -> &mut [Scalar]
    where
        Cont: AsMutSlice<Element = Scalar>,
    {
        self.tensor.as_mut_slice()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::math::tensor::IntoTensor;

    #[test]
    fn body_is_the_last_word() {
        let ciphertext = LweCiphertext::from_container(vec![1_u32, 2, 3, 4]);
        let (body, mask) = ciphertext.get_body_and_mask();
        assert_eq!(*body, LweBody(4));
        assert_eq!(mask.as_tensor().as_slice(), &[1, 2, 3]);
        assert_eq!(mask.mask_size(), LweDimension(3));
    }

    #[test]
    fn multisum_wraps() {
        let mask = LweMask::from_container(vec![u64::MAX, 2, 3]);
        let key = Tensor::from_container(vec![1_u64, 1, 0]);
        assert_eq!(mask.compute_multisum(&key), 1);
    }

    #[test]
    fn mutable_body_and_mask_write_through() {
        let mut ciphertext = LweCiphertext::allocate(0_u64, LweSize(3));
        {
            let (body, mut mask) = ciphertext.get_mut_body_and_mask();
            body.0 = 9;
            mask.as_mut_slice().copy_from_slice(&[7, 8]);
        }
        assert_eq!(ciphertext.into_tensor().into_container(), vec![7, 8, 9]);
    }
}
