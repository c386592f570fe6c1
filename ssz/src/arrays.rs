// Impls for types that correspond to the `BytesN` types from the SSZ specification
// and for `uint256`. None of them are packed.

use ethereum_types::{H160, H256, H32, U256};
use typenum::U1;

use crate::{merkle_tree, porcelain::SszHash};

impl SszHash for H32 {
    type PackingFactor = U1;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut hash = H256::zero();
        hash[..Self::len_bytes()].copy_from_slice(self.as_bytes());
        hash
    }
}

impl SszHash for H160 {
    type PackingFactor = U1;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut hash = H256::zero();
        hash[..Self::len_bytes()].copy_from_slice(self.as_bytes());
        hash
    }
}

impl SszHash for H256 {
    type PackingFactor = U1;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        *self
    }
}

impl SszHash for primitive_types::H384 {
    type PackingFactor = U1;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut first = H256::zero();
        let mut second = H256::zero();
        first.as_bytes_mut().copy_from_slice(&self[..32]);
        second[..16].copy_from_slice(&self[32..]);
        hashing::hash_256_256(first, second)
    }
}

impl SszHash for U256 {
    type PackingFactor = U1;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut hash = H256::zero();
        self.to_little_endian(hash.as_bytes_mut());
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h160_is_padded_to_a_full_chunk() {
        let address = H160::repeat_byte(0x11);
        let root = address.hash_tree_root();

        assert_eq!(root[..20], address[..]);
        assert_eq!(root[20..], [0; 12]);
    }

    #[test]
    fn u256_root_is_little_endian() {
        let root = U256::from(1_u64).hash_tree_root();

        assert_eq!(root[0], 1);
        assert_eq!(root[1..], [0; 31]);
    }

    #[test]
    fn h384_is_merkleized_as_two_chunks() {
        let bytes = primitive_types::H384::repeat_byte(0x22);
        let root = bytes.hash_tree_root();

        let mut first = H256::repeat_byte(0x22);
        let mut second = H256::zero();
        second[..16].copy_from_slice(&[0x22; 16]);

        assert_eq!(root, hashing::hash_256_256(first, second));

        // Both chunks contribute to the root.
        first.0[0] ^= 1;
        assert_ne!(root, hashing::hash_256_256(first, second));
    }
}
