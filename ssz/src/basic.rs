use ethereum_types::H256;
use typenum::{U32, U4};

use crate::porcelain::SszHash;

impl SszHash for bool {
    type PackingFactor = U32;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut hash = H256::zero();
        hash.as_mut()[0] = (*self).into();
        hash
    }
}

impl SszHash for u8 {
    type PackingFactor = U32;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut hash = H256::zero();
        hash.as_mut()[0] = *self;
        hash
    }
}

impl SszHash for u64 {
    type PackingFactor = U4;

    #[inline]
    fn hash_tree_root(&self) -> H256 {
        let mut hash = H256::zero();
        hash[..8].copy_from_slice(&self.to_le_bytes());
        hash
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn u64_root_is_little_endian() {
        assert_eq!(
            0x0102_0304_0506_0708_u64.hash_tree_root(),
            H256(hex!(
                "0807060504030201000000000000000000000000000000000000000000000000"
            )),
        );
    }
}
