pub use ethereum_types::H256;

pub use crate::{
    byte_list::ByteList,
    byte_vector::ByteVector,
    consts::BYTES_PER_CHUNK,
    contiguous_list::ContiguousList,
    contiguous_vector::ContiguousVector,
    error::{IndexError, PushError, ReadError},
    merkle_tree::{
        chunks_to_depth, merkleize_chunks, merkleize_packed, mix_in_length, MerkleTree,
    },
    porcelain::SszHash,
};

mod arrays;
mod basic;
mod byte_list;
mod byte_vector;
mod consts;
mod contiguous_list;
mod contiguous_vector;
mod error;
mod merkle_tree;
mod porcelain;
mod shared;
