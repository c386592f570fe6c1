use anyhow::Result;
use types::{
    capella::{
        containers::ExecutionPayloadHeader as CapellaExecutionPayloadHeader,
        primitives::WithdrawalIndex,
    },
    collections::{Balances, RandaoMixes, RecentRoots, Slashings, Validators},
    combined::ExecutionPayloadHeader,
    phase0::{
        containers::{BeaconBlockHeader, Eth1Data, Fork, Validator},
        primitives::{DepositIndex, Gwei, Slot, ValidatorIndex, H256},
    },
    preset::Preset,
};

use crate::store::Store;

/// In-memory [`Store`]. Backs tests and single-process use; [`Store::copy`] is a deep copy.
#[derive(Clone)]
pub struct MemoryStore<P: Preset> {
    slot: Slot,
    fork: Fork,
    genesis_validators_root: H256,
    latest_block_header: BeaconBlockHeader,
    block_roots: RecentRoots<P>,
    state_roots: RecentRoots<P>,
    latest_execution_payload_header: ExecutionPayloadHeader<P>,
    eth1_data: Eth1Data,
    eth1_deposit_index: DepositIndex,
    validators: Validators<P>,
    balances: Balances<P>,
    randao_mixes: RandaoMixes<P>,
    next_withdrawal_index: WithdrawalIndex,
    next_withdrawal_validator_index: ValidatorIndex,
    slashings: Slashings<P>,
    total_slashing: Gwei,
}

impl<P: Preset> Default for MemoryStore<P> {
    fn default() -> Self {
        Self {
            slot: Slot::default(),
            fork: Fork::default(),
            genesis_validators_root: H256::default(),
            latest_block_header: BeaconBlockHeader::default(),
            block_roots: RecentRoots::<P>::default(),
            state_roots: RecentRoots::<P>::default(),
            latest_execution_payload_header: CapellaExecutionPayloadHeader::default().into(),
            eth1_data: Eth1Data::default(),
            eth1_deposit_index: DepositIndex::default(),
            validators: Validators::<P>::default(),
            balances: Balances::<P>::default(),
            randao_mixes: RandaoMixes::<P>::default(),
            next_withdrawal_index: WithdrawalIndex::default(),
            next_withdrawal_validator_index: ValidatorIndex::default(),
            slashings: Slashings::<P>::default(),
            total_slashing: Gwei::default(),
        }
    }
}

impl<P: Preset> Store<P> for MemoryStore<P> {
    fn copy(&self) -> Self {
        self.clone()
    }

    fn slot(&self) -> Result<Slot> {
        Ok(self.slot)
    }

    fn set_slot(&mut self, slot: Slot) -> Result<()> {
        self.slot = slot;
        Ok(())
    }

    fn fork(&self) -> Result<Fork> {
        Ok(self.fork)
    }

    fn set_fork(&mut self, fork: Fork) -> Result<()> {
        self.fork = fork;
        Ok(())
    }

    fn genesis_validators_root(&self) -> Result<H256> {
        Ok(self.genesis_validators_root)
    }

    fn set_genesis_validators_root(&mut self, root: H256) -> Result<()> {
        self.genesis_validators_root = root;
        Ok(())
    }

    fn latest_block_header(&self) -> Result<BeaconBlockHeader> {
        Ok(self.latest_block_header)
    }

    fn set_latest_block_header(&mut self, header: BeaconBlockHeader) -> Result<()> {
        self.latest_block_header = header;
        Ok(())
    }

    fn block_root_at_index(&self, index: u64) -> Result<H256> {
        Ok(*self.block_roots.get(index)?)
    }

    fn set_block_root_at_index(&mut self, index: u64, root: H256) -> Result<()> {
        *self.block_roots.get_mut(index)? = root;
        Ok(())
    }

    fn state_root_at_index(&self, index: u64) -> Result<H256> {
        Ok(*self.state_roots.get(index)?)
    }

    fn set_state_root_at_index(&mut self, index: u64, root: H256) -> Result<()> {
        *self.state_roots.get_mut(index)? = root;
        Ok(())
    }

    fn latest_execution_payload_header(&self) -> Result<ExecutionPayloadHeader<P>> {
        Ok(self.latest_execution_payload_header.clone())
    }

    fn set_latest_execution_payload_header(
        &mut self,
        header: ExecutionPayloadHeader<P>,
    ) -> Result<()> {
        self.latest_execution_payload_header = header;
        Ok(())
    }

    fn eth1_data(&self) -> Result<Eth1Data> {
        Ok(self.eth1_data)
    }

    fn set_eth1_data(&mut self, eth1_data: Eth1Data) -> Result<()> {
        self.eth1_data = eth1_data;
        Ok(())
    }

    fn eth1_deposit_index(&self) -> Result<DepositIndex> {
        Ok(self.eth1_deposit_index)
    }

    fn set_eth1_deposit_index(&mut self, deposit_index: DepositIndex) -> Result<()> {
        self.eth1_deposit_index = deposit_index;
        Ok(())
    }

    fn validator_at_index(&self, index: ValidatorIndex) -> Result<Validator> {
        Ok(*self.validators.get(index)?)
    }

    fn set_validator_at_index(
        &mut self,
        index: ValidatorIndex,
        validator: Validator,
    ) -> Result<()> {
        *self.validators.get_mut(index)? = validator;
        Ok(())
    }

    fn append_validator(&mut self, validator: Validator, balance: Gwei) -> Result<()> {
        self.validators.push(validator)?;
        self.balances.push(balance)?;
        Ok(())
    }

    fn validators(&self) -> Result<Validators<P>> {
        Ok(self.validators.clone())
    }

    fn validator_count(&self) -> Result<u64> {
        Ok(self.validators.len_u64())
    }

    fn balance(&self, index: ValidatorIndex) -> Result<Gwei> {
        Ok(*self.balances.get(index)?)
    }

    fn set_balance(&mut self, index: ValidatorIndex, balance: Gwei) -> Result<()> {
        *self.balances.get_mut(index)? = balance;
        Ok(())
    }

    fn balances(&self) -> Result<Balances<P>> {
        Ok(self.balances.clone())
    }

    fn randao_mix_at_index(&self, index: u64) -> Result<H256> {
        Ok(*self.randao_mixes.get(index)?)
    }

    fn set_randao_mix_at_index(&mut self, index: u64, mix: H256) -> Result<()> {
        *self.randao_mixes.get_mut(index)? = mix;
        Ok(())
    }

    fn next_withdrawal_index(&self) -> Result<WithdrawalIndex> {
        Ok(self.next_withdrawal_index)
    }

    fn set_next_withdrawal_index(&mut self, index: WithdrawalIndex) -> Result<()> {
        self.next_withdrawal_index = index;
        Ok(())
    }

    fn next_withdrawal_validator_index(&self) -> Result<ValidatorIndex> {
        Ok(self.next_withdrawal_validator_index)
    }

    fn set_next_withdrawal_validator_index(&mut self, index: ValidatorIndex) -> Result<()> {
        self.next_withdrawal_validator_index = index;
        Ok(())
    }

    fn slashing_at_index(&self, index: u64) -> Result<Gwei> {
        Ok(*self.slashings.get(index)?)
    }

    fn set_slashing_at_index(&mut self, index: u64, amount: Gwei) -> Result<()> {
        *self.slashings.get_mut(index)? = amount;
        Ok(())
    }

    fn slashings(&self) -> Result<Slashings<P>> {
        Ok(self.slashings.clone())
    }

    fn total_slashing(&self) -> Result<Gwei> {
        Ok(self.total_slashing)
    }

    fn set_total_slashing(&mut self, total: Gwei) -> Result<()> {
        self.total_slashing = total;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use types::preset::Minimal;

    use super::*;

    #[test]
    fn out_of_range_indexed_access_is_an_error() {
        let mut store = MemoryStore::<Minimal>::default();

        // 64 slots per historical root vector in the minimal preset.
        store.block_root_at_index(63).expect("index is in range");
        store.block_root_at_index(64).expect_err("index is out of range");

        store.balance(0).expect_err("no validators are registered");

        store
            .set_slashing_at_index(64, 1)
            .expect_err("index is out of range");
    }

    #[test]
    fn copies_are_isolated_from_the_original() {
        let mut store = MemoryStore::<Minimal>::default();

        store
            .append_validator(Validator::default(), 10)
            .expect("registry limit is not reached");

        let copy = store.copy();

        store.set_balance(0, 20).expect("validator 0 is registered");

        assert_eq!(store.balance(0).ok(), Some(20));
        assert_eq!(copy.balance(0).ok(), Some(10));
    }
}
