use ethereum_types::H256;
use typenum::{NonZero, Unsigned};

/// Merkleization as defined in the SSZ specification.
///
/// `PackingFactor` is the number of values that fit in one 32 byte chunk.
/// It is 1 for composite types and `32 / size` for basic types.
///
/// The root of a basic value is its little-endian encoding padded to a full chunk.
/// [`merkleize_packed`](crate::merkle_tree::merkleize_packed) relies on that to pack
/// values without a separate serialization trait.
pub trait SszHash {
    type PackingFactor: Unsigned + NonZero;

    fn hash_tree_root(&self) -> H256;
}

impl<T: SszHash> SszHash for Box<T> {
    type PackingFactor = T::PackingFactor;

    fn hash_tree_root(&self) -> H256 {
        T::hash_tree_root(self)
    }
}
