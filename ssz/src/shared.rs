use ethereum_types::H256;
use serde::{de::Error as _, Deserialize as _, Deserializer, Serializer};

use crate::{consts::BYTES_PER_CHUNK, error::ReadError};

pub fn byte_chunks(bytes: &[u8]) -> impl DoubleEndedIterator<Item = H256> + '_ {
    bytes.chunks(BYTES_PER_CHUNK).map(|partial_chunk| {
        let mut chunk = H256::zero();
        chunk[..partial_chunk.len()].copy_from_slice(partial_chunk);
        chunk
    })
}

pub fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("0x{}", hex::encode(bytes)))
}

pub fn deserialize_hex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let string = String::deserialize(deserializer)?;
    let digits = string.strip_prefix("0x").unwrap_or(&string);
    hex::decode(digits).map_err(|_| D::Error::custom(ReadError::HexInvalid))
}
