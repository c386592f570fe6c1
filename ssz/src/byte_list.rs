use core::marker::PhantomData;

use ethereum_types::H256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use typenum::{Unsigned, U1};

use crate::{
    consts::BYTES_PER_CHUNK,
    error::ReadError,
    merkle_tree,
    porcelain::SszHash,
    shared,
};

/// `ByteList` (`List[byte, N]`) represented as raw bytes.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ByteList<N> {
    bytes: Box<[u8]>,
    phantom: PhantomData<N>,
}

impl<N> AsRef<[u8]> for ByteList<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<N: Unsigned> TryFrom<Vec<u8>> for ByteList<N> {
    type Error = ReadError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let actual = bytes.len();
        let maximum = N::USIZE;

        if actual > maximum {
            return Err(ReadError::ListTooLong { maximum, actual });
        }

        Ok(Self {
            bytes: bytes.into(),
            phantom: PhantomData,
        })
    }
}

impl<N> Serialize for ByteList<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        shared::serialize_hex(&self.bytes, serializer)
    }
}

impl<'de, N: Unsigned> Deserialize<'de> for ByteList<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        shared::deserialize_hex(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl<N: Unsigned> SszHash for ByteList<N> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        let chunk_capacity = N::U64.div_ceil(BYTES_PER_CHUNK as u64);
        let depth = merkle_tree::chunks_to_depth(chunk_capacity);
        let root = merkle_tree::merkleize_chunks(shared::byte_chunks(&self.bytes), depth);
        merkle_tree::mix_in_length(root, self.bytes.len())
    }
}
