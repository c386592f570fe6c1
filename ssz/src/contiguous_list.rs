use core::marker::PhantomData;

use ethereum_types::H256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use try_from_iterator::TryFromIterator;
use typenum::{Unsigned, U1};

use crate::{
    error::{IndexError, PushError, ReadError},
    merkle_tree,
    porcelain::SszHash,
};

/// `List` from the SSZ specification: a variable-length collection with at most `N` elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContiguousList<T, N> {
    elements: Vec<T>,
    phantom: PhantomData<N>,
}

impl<T, N> Default for ContiguousList<T, N> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            phantom: PhantomData,
        }
    }
}

impl<T, N> AsRef<[T]> for ContiguousList<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T, N: Unsigned> TryFrom<Vec<T>> for ContiguousList<T, N> {
    type Error = ReadError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::validate_length(elements.len())?;

        Ok(Self {
            elements,
            phantom: PhantomData,
        })
    }
}

impl<T, N: Unsigned, const SIZE: usize> TryFrom<[T; SIZE]> for ContiguousList<T, N> {
    type Error = ReadError;

    fn try_from(elements: [T; SIZE]) -> Result<Self, Self::Error> {
        Vec::from(elements).try_into()
    }
}

impl<T, N: Unsigned> TryFromIterator<T> for ContiguousList<T, N> {
    type Error = ReadError;

    fn try_from_iter(items: impl IntoIterator<Item = T>) -> Result<Self, Self::Error> {
        items.into_iter().collect::<Vec<_>>().try_into()
    }
}

impl<T, N> IntoIterator for ContiguousList<T, N> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'list, T, N> IntoIterator for &'list ContiguousList<T, N> {
    type Item = &'list T;
    type IntoIter = core::slice::Iter<'list, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Serialize, N> Serialize for ContiguousList<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>, N: Unsigned> Deserialize<'de> for ContiguousList<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl<T: SszHash, N: Unsigned> SszHash for ContiguousList<T, N> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        let chunk_capacity = N::U64.div_ceil(T::PackingFactor::U64);
        let depth = merkle_tree::chunks_to_depth(chunk_capacity);

        let root = if T::PackingFactor::USIZE == 1 {
            merkle_tree::merkleize_chunks(self.iter().map(SszHash::hash_tree_root), depth)
        } else {
            merkle_tree::merkleize_packed(&self.elements, depth)
        };

        merkle_tree::mix_in_length(root, self.len())
    }
}

impl<T, N> ContiguousList<T, N> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn len_u64(&self) -> u64 {
        self.len().try_into().expect("usize fits in u64")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<T> {
        self.elements.iter()
    }

    pub fn get(&self, index: u64) -> Result<&T, IndexError> {
        let index = usize::try_from(index).map_err(|_| IndexError::DoesNotFitInUsize { index })?;

        self.elements.get(index).ok_or(IndexError::OutOfBounds {
            index,
            length: self.elements.len(),
        })
    }

    pub fn get_mut(&mut self, index: u64) -> Result<&mut T, IndexError> {
        let index = usize::try_from(index).map_err(|_| IndexError::DoesNotFitInUsize { index })?;
        let length = self.elements.len();

        self.elements
            .get_mut(index)
            .ok_or(IndexError::OutOfBounds { index, length })
    }

    pub fn push(&mut self, element: T) -> Result<(), PushError>
    where
        N: Unsigned,
    {
        if self.elements.len() == N::USIZE {
            return Err(PushError::ListFull);
        }

        self.elements.push(element);
        Ok(())
    }

    const fn validate_length(actual: usize) -> Result<(), ReadError>
    where
        N: Unsigned,
    {
        let maximum = N::USIZE;

        if actual > maximum {
            return Err(ReadError::ListTooLong { maximum, actual });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use typenum::U4;

    use super::*;

    #[test]
    fn construction_fails_above_the_limit() {
        let result = ContiguousList::<u64, U4>::try_from(vec![0; 5]);

        assert_eq!(
            result.err(),
            Some(ReadError::ListTooLong {
                maximum: 4,
                actual: 5,
            }),
        );
    }

    #[test]
    fn push_fails_when_full() {
        let mut list = ContiguousList::<u64, U4>::try_from(vec![0; 4])
            .expect("list is within its length limit");

        assert_eq!(list.push(5), Err(PushError::ListFull));
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let list = ContiguousList::<u64, U4>::try_from(vec![1, 2])
            .expect("list is within its length limit");

        assert_eq!(list.get(1).copied().ok(), Some(2));
        assert!(matches!(list.get(2), Err(IndexError::OutOfBounds { .. })));
    }

    #[test]
    fn empty_list_root_is_zero_subtree_with_mixed_in_length() {
        let list = ContiguousList::<H256, U4>::default();

        assert_eq!(
            list.hash_tree_root(),
            merkle_tree::mix_in_length(hashing::ZERO_HASHES[2], 0),
        );
    }

    #[test]
    fn packed_list_capacity_is_based_on_chunks_rather_than_elements() {
        // 4 `u64` values fit in a single chunk, so the tree has depth 0.
        let list = ContiguousList::<u64, U4>::try_from(vec![1, 2, 3])
            .expect("list is within its length limit");

        let root = merkle_tree::merkleize_packed(list.as_ref(), 0);

        assert_eq!(
            list.hash_tree_root(),
            merkle_tree::mix_in_length(root, 3),
        );
    }
}
