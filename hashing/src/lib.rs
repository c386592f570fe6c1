use ethereum_types::H256;
use once_cell::sync::Lazy;
use sha2::{Digest as _, Sha256};

/// Number of precomputed all-zero subtree roots.
///
/// The deepest trees hashed by this workspace are the validator registry and balance lists,
/// whose limits produce trees 40 levels deep. One extra entry covers the root of an empty
/// registry tree.
pub const ZERO_HASH_COUNT: usize = 41;

/// `ZERO_HASHES[height]` is the root of a tree of the given height whose chunks are all zero.
pub static ZERO_HASHES: Lazy<[H256; ZERO_HASH_COUNT]> = Lazy::new(|| {
    let mut hashes = [H256::zero(); ZERO_HASH_COUNT];

    for height in 1..ZERO_HASH_COUNT {
        let lower = hashes[height - 1];
        hashes[height] = hash_256_256(lower, lower);
    }

    hashes
});

#[inline]
#[must_use]
pub fn hash_256_256(left: H256, right: H256) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    H256(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use itertools::Itertools as _;

    use super::*;

    #[test]
    fn zero_hashes_match_known_values() {
        assert_eq!(ZERO_HASHES[0], H256::zero());
        assert_eq!(
            ZERO_HASHES[1],
            H256(hex!(
                "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"
            )),
        );
        assert_eq!(
            ZERO_HASHES[2],
            H256(hex!(
                "db56114e00fdd4c1f85c892bf35ac9a89289aaecb1ebd0a96cde606a748b5d71"
            )),
        );
    }

    #[test]
    fn higher_zero_hashes_are_calculated_from_lower_ones() {
        for (lower, higher) in ZERO_HASHES.into_iter().tuple_windows() {
            assert_eq!(hash_256_256(lower, lower), higher);
        }
    }
}
