// Incremental merkleization. Chunks are pushed in index order; completed subtrees are
// folded into `sibling_hashes` as soon as their last chunk arrives, so a tree of depth `d`
// needs only `d` stored hashes regardless of chunk count. Missing chunks on the right are
// virtual all-zero subtrees taken from `ZERO_HASHES`.

use ethereum_types::H256;
use hashing::ZERO_HASHES;
use typenum::Unsigned;

use crate::{consts::BYTES_PER_CHUNK, porcelain::SszHash};

pub struct MerkleTree {
    sibling_hashes: Box<[H256]>,
}

impl MerkleTree {
    #[must_use]
    pub fn with_depth(depth: usize) -> Self {
        Self {
            sibling_hashes: vec![H256::zero(); depth].into(),
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.sibling_hashes.len()
    }

    pub fn push(&mut self, index: usize, chunk: H256) -> (usize, H256) {
        assert!(self.depth() >= usize::BITS as usize || index < 1 << self.depth());

        let sibling_to_update = index.trailing_ones() as usize;

        let mut hash = chunk;

        for height in 0..sibling_to_update {
            hash = hashing::hash_256_256(self.sibling_hashes[height], hash);
        }

        if sibling_to_update < self.depth() {
            self.sibling_hashes[sibling_to_update] = hash;
        }

        (sibling_to_update, hash)
    }

    pub fn push_and_compute_root(&mut self, index: usize, chunk: H256) -> H256 {
        let (updated_sibling, mut hash) = self.push(index, chunk);

        for height in updated_sibling..self.depth() {
            // The subtree to the right of the last chunk is empty at every height where the
            // index bit is unset.
            if index >> height & 1 == 1 {
                hash = hashing::hash_256_256(self.sibling_hashes[height], hash);
            } else {
                hash = hashing::hash_256_256(hash, ZERO_HASHES[height]);
            }
        }

        hash
    }
}

/// Number of tree levels needed to merkleize `chunk_count` chunks.
#[must_use]
pub fn chunks_to_depth(chunk_count: u64) -> usize {
    chunk_count
        .max(1)
        .next_power_of_two()
        .trailing_zeros()
        .try_into()
        .expect("number of bits in u64 fits in usize")
}

pub fn merkleize_chunks(chunks: impl IntoIterator<Item = H256>, depth: usize) -> H256 {
    let mut chunks = chunks.into_iter();

    let Some(mut last_chunk) = chunks.next() else {
        return ZERO_HASHES[depth];
    };

    let mut merkle_tree = MerkleTree::with_depth(depth);
    let mut last_index = 0;

    for chunk in chunks {
        merkle_tree.push(last_index, last_chunk);
        last_chunk = chunk;
        last_index += 1;
    }

    merkle_tree.push_and_compute_root(last_index, last_chunk)
}

/// Merkleizes a slice of basic values, `T::PackingFactor` of them per chunk.
pub fn merkleize_packed<T: SszHash>(values: &[T], depth: usize) -> H256 {
    let size = BYTES_PER_CHUNK / T::PackingFactor::USIZE;

    let chunks = values.chunks(T::PackingFactor::USIZE).map(|pack| {
        let mut chunk = H256::zero();

        for (position, value) in pack.iter().enumerate() {
            let encoding = value.hash_tree_root();
            chunk[position * size..(position + 1) * size].copy_from_slice(&encoding[..size]);
        }

        chunk
    });

    merkleize_chunks(chunks, depth)
}

/// [`mix_in_length`](https://github.com/ethereum/consensus-specs/blob/4c54bddb6cd144ca8a0a01b7155f43b295c70458/ssz/simple-serialize.md#merkleization)
#[must_use]
pub fn mix_in_length(root: H256, length: usize) -> H256 {
    let length = u64::try_from(length).expect("usize fits in u64");

    let mut length_chunk = H256::zero();
    length_chunk[..8].copy_from_slice(&length.to_le_bytes());
    hashing::hash_256_256(root, length_chunk)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0)]
    #[test_case(1, 0)]
    #[test_case(2, 1)]
    #[test_case(3, 2)]
    #[test_case(4, 2)]
    #[test_case(5, 3)]
    #[test_case(1 << 40, 40)]
    fn chunks_to_depth_rounds_up(chunk_count: u64, expected: usize) {
        assert_eq!(chunks_to_depth(chunk_count), expected);
    }

    #[test]
    fn no_chunks_merkleize_to_zero_subtree_root() {
        assert_eq!(merkleize_chunks([], 3), ZERO_HASHES[3]);
    }

    #[test]
    fn single_chunk_at_depth_0_is_its_own_root() {
        let chunk = H256::repeat_byte(0xab);
        assert_eq!(merkleize_chunks([chunk], 0), chunk);
    }

    #[test]
    fn two_chunks_merkleize_to_their_parent() {
        let left = H256::repeat_byte(1);
        let right = H256::repeat_byte(2);

        assert_eq!(
            merkleize_chunks([left, right], 1),
            hashing::hash_256_256(left, right),
        );
    }

    #[test]
    fn partially_filled_tree_is_padded_with_zero_subtrees() {
        let chunk = H256::repeat_byte(3);

        let expected = hashing::hash_256_256(
            hashing::hash_256_256(chunk, ZERO_HASHES[0]),
            ZERO_HASHES[1],
        );

        assert_eq!(merkleize_chunks([chunk], 2), expected);
    }

    #[test]
    fn incremental_root_matches_explicit_computation() {
        let chunks = [
            H256::repeat_byte(1),
            H256::repeat_byte(2),
            H256::repeat_byte(3),
        ];

        let expected = hashing::hash_256_256(
            hashing::hash_256_256(chunks[0], chunks[1]),
            hashing::hash_256_256(chunks[2], ZERO_HASHES[0]),
        );

        assert_eq!(merkleize_chunks(chunks, 2), expected);
    }

    #[test]
    fn packing_places_four_u64_values_in_one_chunk() {
        let values = [1_u64, 2, 3, 4];

        let mut expected = H256::zero();
        for (position, value) in values.iter().enumerate() {
            expected[position * 8..(position + 1) * 8].copy_from_slice(&value.to_le_bytes());
        }

        assert_eq!(merkleize_packed(&values, 0), expected);
    }

    #[test]
    fn mixed_in_length_is_hashed_as_little_endian_chunk() {
        let root = H256::repeat_byte(7);

        let mut length_chunk = H256::zero();
        length_chunk.0[0] = 5;

        assert_eq!(
            mix_in_length(root, 5),
            hashing::hash_256_256(root, length_chunk),
        );
    }
}
