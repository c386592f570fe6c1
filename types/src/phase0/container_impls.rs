use ssz::{merkleize_chunks, SszHash, H256};
use typenum::U1;

use crate::phase0::containers::{BeaconBlockHeader, Eth1Data, Fork, Validator};

impl SszHash for BeaconBlockHeader {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        merkleize_chunks(
            [
                self.slot.hash_tree_root(),
                self.proposer_index.hash_tree_root(),
                self.parent_root,
                self.state_root,
                self.body_root,
            ],
            3,
        )
    }
}

impl SszHash for Eth1Data {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        merkleize_chunks(
            [
                self.deposit_root,
                self.deposit_count.hash_tree_root(),
                self.block_hash,
            ],
            2,
        )
    }
}

impl SszHash for Fork {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        merkleize_chunks(
            [
                self.previous_version.hash_tree_root(),
                self.current_version.hash_tree_root(),
                self.epoch.hash_tree_root(),
            ],
            2,
        )
    }
}

impl SszHash for Validator {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        merkleize_chunks(
            [
                self.pubkey.hash_tree_root(),
                self.withdrawal_credentials,
                self.effective_balance.hash_tree_root(),
                self.slashed.hash_tree_root(),
                self.activation_eligibility_epoch.hash_tree_root(),
                self.activation_epoch.hash_tree_root(),
                self.exit_epoch.hash_tree_root(),
                self.withdrawable_epoch.hash_tree_root(),
            ],
            3,
        )
    }
}
