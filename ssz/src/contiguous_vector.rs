use core::marker::PhantomData;

use ethereum_types::H256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use try_from_iterator::TryFromIterator;
use typenum::{NonZero, Unsigned, U1};

use crate::{
    error::{IndexError, ReadError},
    merkle_tree,
    porcelain::SszHash,
};

/// `Vector` from the SSZ specification: a collection with exactly `N` elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContiguousVector<T, N> {
    elements: Box<[T]>,
    phantom: PhantomData<N>,
}

impl<T: Clone + Default, N: Unsigned> Default for ContiguousVector<T, N> {
    fn default() -> Self {
        Self {
            elements: vec![T::default(); N::USIZE].into(),
            phantom: PhantomData,
        }
    }
}

impl<T, N> AsRef<[T]> for ContiguousVector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T, N: Unsigned> TryFrom<Vec<T>> for ContiguousVector<T, N> {
    type Error = ReadError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::validate_length(elements.len())?;

        Ok(Self {
            elements: elements.into(),
            phantom: PhantomData,
        })
    }
}

impl<T, N: Unsigned> TryFromIterator<T> for ContiguousVector<T, N> {
    type Error = ReadError;

    fn try_from_iter(items: impl IntoIterator<Item = T>) -> Result<Self, Self::Error> {
        items.into_iter().collect::<Vec<_>>().try_into()
    }
}

impl<'vector, T, N> IntoIterator for &'vector ContiguousVector<T, N> {
    type Item = &'vector T;
    type IntoIter = core::slice::Iter<'vector, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Serialize, N> Serialize for ContiguousVector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>, N: Unsigned> Deserialize<'de> for ContiguousVector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl<T: SszHash, N: Unsigned + NonZero> SszHash for ContiguousVector<T, N> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        let chunk_count = N::U64.div_ceil(T::PackingFactor::U64);
        let depth = merkle_tree::chunks_to_depth(chunk_count);

        if T::PackingFactor::USIZE == 1 {
            merkle_tree::merkleize_chunks(self.iter().map(SszHash::hash_tree_root), depth)
        } else {
            merkle_tree::merkleize_packed(&self.elements, depth)
        }
    }
}

impl<T, N> ContiguousVector<T, N> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
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

    const fn validate_length(actual: usize) -> Result<(), ReadError>
    where
        N: Unsigned,
    {
        let expected = N::USIZE;

        if actual != expected {
            return Err(ReadError::VectorSizeMismatch { expected, actual });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use typenum::{U2, U8};

    use super::*;

    #[test]
    fn construction_requires_an_exact_length() {
        let result = ContiguousVector::<H256, U2>::try_from(vec![H256::zero()]);

        assert_eq!(
            result.err(),
            Some(ReadError::VectorSizeMismatch {
                expected: 2,
                actual: 1,
            }),
        );
    }

    #[test]
    fn default_vector_root_matches_zero_subtree() {
        let vector = ContiguousVector::<H256, U8>::default();

        assert_eq!(vector.hash_tree_root(), hashing::ZERO_HASHES[3]);
    }

    #[test]
    fn packed_vector_of_u64_occupies_two_chunks() {
        let vector = ContiguousVector::<u64, U8>::try_from((1..=8).collect::<Vec<_>>())
            .expect("vector has exactly 8 elements");

        let expected = hashing::hash_256_256(
            merkle_tree::merkleize_packed(&vector.as_ref()[..4], 0),
            merkle_tree::merkleize_packed(&vector.as_ref()[4..], 0),
        );

        assert_eq!(vector.hash_tree_root(), expected);
    }
}
