//! A generic container of scalars, shared by every cryptographic object of the crate.
//!
//! Every object (plaintext lists, ciphertexts, secret keys, ...) stores its scalars in a
//! [`Tensor`], which wraps any container that can be viewed as a slice: an owned `Vec`, a borrowed
//! slice or a mutably borrowed slice. The [`tensor_traits`] macro gives an object the
//! [`AsRefTensor`], [`AsMutTensor`] and [`IntoTensor`] implementations giving access to its
//! tensor.

use serde::{Deserialize, Serialize};

/// A trait for containers that can be viewed as a slice.
pub trait AsRefSlice {
    type Element;
    fn as_slice(&self) -> &[Self::Element];
}

/// A trait for containers that can be viewed as a mutable slice.
pub trait AsMutSlice: AsRefSlice {
    fn as_mut_slice(&mut self) -> &mut [<Self as AsRefSlice>::Element];
}

impl<T> AsRefSlice for Vec<T> {
    type Element = T;
    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMutSlice for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRefSlice for &[T] {
    type Element = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> AsRefSlice for &mut [T] {
    type Element = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> AsMutSlice for &mut [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// A generic tensor, wrapping a container of scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Tensor<Cont>(Cont);

impl<Cont> Tensor<Cont> {
    /// Wraps a container into a tensor.
    pub fn from_container(cont: Cont) -> Tensor<Cont> {
        Tensor(cont)
    }

    /// Consumes the tensor and returns its container.
    pub fn into_container(self) -> Cont {
        self.0
    }

    /// Return a reference to the container.
    pub fn as_container(&self) -> &Cont {
        &self.0
    }
}

impl<Cont: AsRefSlice> Tensor<Cont> {
    /// Return the number of elements of the tensor.
    pub fn len(&self) -> usize {
        self.0.as_slice().len()
    }

    /// Whether the tensor holds no element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[Cont::Element] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cont::Element> {
        self.0.as_slice().iter()
    }

    /// Return an iterator over borrowed sub-tensors of `sub_len` elements.
    ///
    /// The length of the tensor must be a multiple of `sub_len`.
    pub fn subtensor_iter(&self, sub_len: usize) -> impl Iterator<Item = Tensor<&[Cont::Element]>> {
        debug_assert!(self.len() % sub_len == 0);
        self.0.as_slice().chunks(sub_len).map(Tensor::from_container)
    }

    /// Return the first element of the tensor together with a tensor of the remaining ones.
    pub fn split_first(&self) -> Option<(&Cont::Element, Tensor<&[Cont::Element]>)> {
        self.0
            .as_slice()
            .split_first()
            .map(|(first, rest)| (first, Tensor::from_container(rest)))
    }

    /// Return the last element of the tensor together with a tensor of the remaining ones.
    pub fn split_last(&self) -> Option<(&Cont::Element, Tensor<&[Cont::Element]>)> {
        self.0
            .as_slice()
            .split_last()
            .map(|(last, rest)| (last, Tensor::from_container(rest)))
    }
}

impl<Cont: AsMutSlice> Tensor<Cont> {
    pub fn as_mut_slice(&mut self) -> &mut [Cont::Element] {
        self.0.as_mut_slice()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cont::Element> {
        self.0.as_mut_slice().iter_mut()
    }

    /// Return an iterator over mutably borrowed sub-tensors of `sub_len` elements.
    ///
    /// The length of the tensor must be a multiple of `sub_len`.
    pub fn subtensor_iter_mut(
        &mut self,
        sub_len: usize,
    ) -> impl Iterator<Item = Tensor<&mut [Cont::Element]>> {
        debug_assert!(self.len() % sub_len == 0);
        self.0
            .as_mut_slice()
            .chunks_mut(sub_len)
            .map(Tensor::from_container)
    }

    /// Return the last element of the tensor, mutably, together with a tensor of the remaining
    /// ones.
    pub fn split_last_mut(&mut self) -> Option<(&mut Cont::Element, Tensor<&mut [Cont::Element]>)> {
        self.0
            .as_mut_slice()
            .split_last_mut()
            .map(|(last, rest)| (last, Tensor::from_container(rest)))
    }

    /// Fill the tensor with the values of an iterator, stopping at the shortest of the two.
    pub fn fill_with_iter<I: IntoIterator<Item = Cont::Element>>(&mut self, iter: I) {
        self.iter_mut()
            .zip(iter)
            .for_each(|(dst, src)| *dst = src);
    }
}

/// A trait for objects giving a borrowed access to their tensor.
pub trait AsRefTensor {
    type Element;
    type Container: AsRefSlice<Element = Self::Element>;
    fn as_tensor(&self) -> &Tensor<Self::Container>;
}

/// A trait for objects giving a mutably borrowed access to their tensor.
pub trait AsMutTensor: AsRefTensor {
    type MutContainer: AsMutSlice<Element = <Self as AsRefTensor>::Element>;
    fn as_mut_tensor(&mut self) -> &mut Tensor<Self::MutContainer>;
}

/// A trait for objects that can be turned into their tensor.
pub trait IntoTensor {
    type Element;
    type Container: AsRefSlice<Element = Self::Element>;
    fn into_tensor(self) -> Tensor<Self::Container>;
}

impl<Cont: AsRefSlice> AsRefTensor for Tensor<Cont> {
    type Element = Cont::Element;
    type Container = Cont;
    fn as_tensor(&self) -> &Tensor<Cont> {
        self
    }
}

impl<Cont: AsMutSlice> AsMutTensor for Tensor<Cont> {
    type MutContainer = Cont;
    fn as_mut_tensor(&mut self) -> &mut Tensor<Cont> {
        self
    }
}

/// Implements the tensor access traits for a type storing its scalars in a field named `tensor`.
macro_rules! tensor_traits {
    ($Type:ident) => {
        impl<Element, Cont> $crate::commons::math::tensor::AsRefTensor for $Type<Cont>
        where
            Cont: $crate::commons::math::tensor::AsRefSlice<Element = Element>,
        {
            type Element = Element;
            type Container = Cont;
            fn as_tensor(&self) -> &$crate::commons::math::tensor::Tensor<Self::Container> {
                &self.tensor
            }
        }

        impl<Element, Cont> $crate::commons::math::tensor::AsMutTensor for $Type<Cont>
        where
            Cont: $crate::commons::math::tensor::AsMutSlice<Element = Element>,
        {
            type MutContainer = Cont;
            fn as_mut_tensor(&mut self) -> &mut $crate::commons::math::tensor::Tensor<Cont> {
                &mut self.tensor
            }
        }

        impl<Element, Cont> $crate::commons::math::tensor::IntoTensor for $Type<Cont>
        where
            Cont: $crate::commons::math::tensor::AsRefSlice<Element = Element>,
        {
            type Element = Element;
            type Container = Cont;
            fn into_tensor(self) -> $crate::commons::math::tensor::Tensor<Self::Container> {
                self.tensor
            }
        }
    };
}
pub(crate) use tensor_traits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtensors_cover_the_tensor() {
        let tensor = Tensor::from_container((0..12u64).collect::<Vec<_>>());
        let chunks: Vec<Vec<u64>> = tensor
            .subtensor_iter(4)
            .map(|sub| sub.as_slice().to_vec())
            .collect();
        assert_eq!(chunks, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10, 11]]);
    }

    #[test]
    fn split_last_mut_gives_body() {
        let mut tensor = Tensor::from_container(vec![1u32, 2, 3]);
        let (last, rest) = tensor.split_last_mut().unwrap();
        *last = 7;
        assert_eq!(rest.as_slice(), &[1, 2]);
        assert_eq!(tensor.into_container(), vec![1, 2, 7]);
    }
}
