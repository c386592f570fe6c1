use anyhow::Result;
use types::{
    capella::primitives::WithdrawalIndex,
    collections::{Balances, Slashings, Validators},
    combined::ExecutionPayloadHeader,
    phase0::{
        containers::{BeaconBlockHeader, Eth1Data, Fork, Validator},
        primitives::{DepositIndex, Gwei, Slot, ValidatorIndex, H256},
    },
    preset::Preset,
};

/// Typed access to every field of the beacon state.
///
/// Getters fail when the backing storage cannot produce the value. Indexed getters also
/// fail on out-of-range access instead of returning a default. [`Store::copy`] returns a
/// snapshot that is unaffected by later mutations of `self` and vice versa.
///
/// Read-modify-write sequences built out of these methods are not atomic. Callers must
/// serialize access to a store, either with single-writer-per-slot discipline or with an
/// external lock held for the whole sequence. Concurrent readers should be handed
/// [`Store::copy`] snapshots.
pub trait Store<P: Preset>: Sized {
    fn copy(&self) -> Self;

    fn slot(&self) -> Result<Slot>;
    fn set_slot(&mut self, slot: Slot) -> Result<()>;

    fn fork(&self) -> Result<Fork>;
    fn set_fork(&mut self, fork: Fork) -> Result<()>;

    fn genesis_validators_root(&self) -> Result<H256>;
    fn set_genesis_validators_root(&mut self, root: H256) -> Result<()>;

    fn latest_block_header(&self) -> Result<BeaconBlockHeader>;
    fn set_latest_block_header(&mut self, header: BeaconBlockHeader) -> Result<()>;

    fn block_root_at_index(&self, index: u64) -> Result<H256>;
    fn set_block_root_at_index(&mut self, index: u64, root: H256) -> Result<()>;

    fn state_root_at_index(&self, index: u64) -> Result<H256>;
    fn set_state_root_at_index(&mut self, index: u64, root: H256) -> Result<()>;

    fn latest_execution_payload_header(&self) -> Result<ExecutionPayloadHeader<P>>;
    fn set_latest_execution_payload_header(
        &mut self,
        header: ExecutionPayloadHeader<P>,
    ) -> Result<()>;

    fn eth1_data(&self) -> Result<Eth1Data>;
    fn set_eth1_data(&mut self, eth1_data: Eth1Data) -> Result<()>;

    fn eth1_deposit_index(&self) -> Result<DepositIndex>;
    fn set_eth1_deposit_index(&mut self, deposit_index: DepositIndex) -> Result<()>;

    fn validator_at_index(&self, index: ValidatorIndex) -> Result<Validator>;
    fn set_validator_at_index(&mut self, index: ValidatorIndex, validator: Validator)
        -> Result<()>;
    /// Registers a validator with its starting balance. Only used when processing deposits.
    fn append_validator(&mut self, validator: Validator, balance: Gwei) -> Result<()>;
    fn validators(&self) -> Result<Validators<P>>;
    fn validator_count(&self) -> Result<u64>;

    fn balance(&self, index: ValidatorIndex) -> Result<Gwei>;
    fn set_balance(&mut self, index: ValidatorIndex, balance: Gwei) -> Result<()>;
    fn balances(&self) -> Result<Balances<P>>;

    fn randao_mix_at_index(&self, index: u64) -> Result<H256>;
    fn set_randao_mix_at_index(&mut self, index: u64, mix: H256) -> Result<()>;

    fn next_withdrawal_index(&self) -> Result<WithdrawalIndex>;
    fn set_next_withdrawal_index(&mut self, index: WithdrawalIndex) -> Result<()>;

    fn next_withdrawal_validator_index(&self) -> Result<ValidatorIndex>;
    fn set_next_withdrawal_validator_index(&mut self, index: ValidatorIndex) -> Result<()>;

    fn slashing_at_index(&self, index: u64) -> Result<Gwei>;
    fn set_slashing_at_index(&mut self, index: u64, amount: Gwei) -> Result<()>;
    fn slashings(&self) -> Result<Slashings<P>>;

    fn total_slashing(&self) -> Result<Gwei>;
    fn set_total_slashing(&mut self, total: Gwei) -> Result<()>;
}
