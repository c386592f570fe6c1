use core::marker::PhantomData;

use ethereum_types::H256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use typenum::{NonZero, Unsigned, U1};

use crate::{
    consts::BYTES_PER_CHUNK,
    error::ReadError,
    merkle_tree,
    porcelain::SszHash,
    shared,
};

/// `ByteVector` (`Vector[byte, N]`) represented as raw bytes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ByteVector<N> {
    bytes: Box<[u8]>,
    phantom: PhantomData<N>,
}

impl<N: Unsigned> Default for ByteVector<N> {
    fn default() -> Self {
        Self {
            bytes: vec![0; N::USIZE].into(),
            phantom: PhantomData,
        }
    }
}

impl<N> AsRef<[u8]> for ByteVector<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<N: Unsigned> TryFrom<Vec<u8>> for ByteVector<N> {
    type Error = ReadError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let actual = bytes.len();
        let expected = N::USIZE;

        if actual != expected {
            return Err(ReadError::VectorSizeMismatch { expected, actual });
        }

        Ok(Self {
            bytes: bytes.into(),
            phantom: PhantomData,
        })
    }
}

impl<N> Serialize for ByteVector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        shared::serialize_hex(&self.bytes, serializer)
    }
}

impl<'de, N: Unsigned> Deserialize<'de> for ByteVector<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        shared::deserialize_hex(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl<N: Unsigned + NonZero> SszHash for ByteVector<N> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        let chunk_count = N::U64.div_ceil(BYTES_PER_CHUNK as u64);
        let depth = merkle_tree::chunks_to_depth(chunk_count);
        merkle_tree::merkleize_chunks(shared::byte_chunks(&self.bytes), depth)
    }
}

#[cfg(test)]
mod tests {
    use typenum::U256;

    use super::*;

    #[test]
    fn zero_filled_vector_root_matches_zero_subtree() {
        // 256 bytes form 8 chunks, like the logs bloom in execution payloads.
        let vector = ByteVector::<U256>::default();

        assert_eq!(vector.hash_tree_root(), hashing::ZERO_HASHES[3]);
    }

    #[test]
    fn serializes_to_prefixed_hex() {
        let vector = ByteVector::<typenum::U2>::try_from(vec![0xab, 0xcd])
            .expect("vector has exactly 2 bytes");

        let json = serde_json::to_string(&vector).expect("serialization should succeed");

        assert_eq!(json, "\"0xabcd\"");
        assert_eq!(serde_json::from_str::<ByteVector<typenum::U2>>(&json).ok(), Some(vector));
    }
}
