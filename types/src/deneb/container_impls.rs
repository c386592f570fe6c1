use ssz::{merkleize_chunks, SszHash, H256};
use typenum::U1;

use crate::{
    deneb::{beacon_state::BeaconState, containers::ExecutionPayloadHeader},
    preset::Preset,
};

impl<P: Preset> SszHash for ExecutionPayloadHeader<P> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        merkleize_chunks(
            [
                self.parent_hash,
                self.fee_recipient.hash_tree_root(),
                self.state_root,
                self.receipts_root,
                self.logs_bloom.hash_tree_root(),
                self.prev_randao,
                self.block_number.hash_tree_root(),
                self.gas_limit.hash_tree_root(),
                self.gas_used.hash_tree_root(),
                self.timestamp.hash_tree_root(),
                self.extra_data.hash_tree_root(),
                self.base_fee_per_gas.hash_tree_root(),
                self.block_hash,
                self.transactions_root,
                self.withdrawals_root,
                self.blob_gas_used.hash_tree_root(),
                self.excess_blob_gas.hash_tree_root(),
            ],
            5,
        )
    }
}

impl<P: Preset> SszHash for BeaconState<P> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        merkleize_chunks(
            [
                self.slot.hash_tree_root(),
                self.genesis_validators_root,
                self.fork.hash_tree_root(),
                self.latest_block_header.hash_tree_root(),
                self.block_roots.hash_tree_root(),
                self.state_roots.hash_tree_root(),
                self.latest_execution_payload_header.hash_tree_root(),
                self.eth1_data.hash_tree_root(),
                self.eth1_deposit_index.hash_tree_root(),
                self.validators.hash_tree_root(),
                self.balances.hash_tree_root(),
                self.randao_mixes.hash_tree_root(),
                self.next_withdrawal_index.hash_tree_root(),
                self.next_withdrawal_validator_index.hash_tree_root(),
                self.slashings.hash_tree_root(),
                self.total_slashing.hash_tree_root(),
            ],
            4,
        )
    }
}
