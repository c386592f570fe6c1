use core::marker::PhantomData;
use std::sync::Arc;

use anyhow::{bail, ensure, Result};
use helper_functions::{misc, mutators, predicates};
use ssz::{SszHash as _, H256};
use typenum::Unsigned as _;
use types::{
    capella,
    collections::{RandaoMixes, RecentRoots},
    combined::{BeaconState, ExecutionPayloadHeader},
    config::Config,
    deneb,
    nonstandard::Phase,
    phase0::primitives::{Gwei, ValidatorIndex},
    preset::{Preset, SlotsPerHistoricalRoot},
};

use crate::{error::Error, store::Store};

/// The state engine: consensus operations over a [`Store`].
///
/// This is a stateless façade. All data lives in the store; the engine adds the
/// operations whose semantics are fixed by the protocol. Operations that read and then
/// write are not atomic, see the concurrency note on [`Store`].
pub struct StateDb<P: Preset, S: Store<P>> {
    store: S,
    config: Arc<Config>,
    phantom: PhantomData<P>,
}

impl<P: Preset, S: Store<P>> StateDb<P, S> {
    pub fn new(store: S, config: Arc<Config>) -> Self {
        Self {
            store,
            config,
            phantom: PhantomData,
        }
    }

    /// Returns an engine over an independent snapshot of the store.
    ///
    /// Mutations through either engine never affect the other. The snapshot can be
    /// handed to a concurrent reader while a transition keeps mutating the original.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self::new(self.store.copy(), Arc::clone(&self.config))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn increase_balance(&mut self, validator_index: ValidatorIndex, delta: Gwei) -> Result<()> {
        let mut balance = self.store.balance(validator_index)?;
        mutators::increase_balance(&mut balance, delta);
        self.store.set_balance(validator_index, balance)
    }

    /// Decreases a balance, clamping at zero.
    ///
    /// Deduction requests may legitimately exceed the remaining balance; clamping is a
    /// protocol rule, not an error case.
    pub fn decrease_balance(&mut self, validator_index: ValidatorIndex, delta: Gwei) -> Result<()> {
        let mut balance = self.store.balance(validator_index)?;
        mutators::decrease_balance(&mut balance, delta);
        self.store.set_balance(validator_index, balance)
    }

    /// Overwrites the slashing amount at `index` and keeps the running total consistent.
    ///
    /// The total is recomputed as `total - old + amount` rather than by re-summing the
    /// vector. A stored value exceeding the recorded total means the store is corrupt
    /// and fails the operation.
    pub fn update_slashing_at_index(&mut self, index: u64, amount: Gwei) -> Result<()> {
        let total = self.store.total_slashing()?;
        let old_value = self.store.slashing_at_index(index)?;

        ensure!(old_value <= total, Error::TotalSlashingOutOfDate);

        self.store.set_total_slashing(total - old_value + amount)?;
        self.store.set_slashing_at_index(index, amount)
    }

    /// Computes the withdrawals the next execution payload is expected to contain.
    ///
    /// > Iterate through indicies to find the next validators to withdraw.
    ///
    /// Every swept validator produces a record, including validators with nothing to
    /// withdraw, whose records carry a zero amount. The store is not mutated; cursor
    /// advancement is committed when the corresponding block is applied.
    pub fn expected_withdrawals(&self) -> Result<Vec<capella::containers::Withdrawal>> {
        let slot = self.store.slot()?;
        let epoch = misc::compute_epoch_at_slot::<P>(slot);

        let mut withdrawal_index = self.store.next_withdrawal_index()?;
        let mut validator_index = self.store.next_withdrawal_validator_index()?;

        let total_validators = self.store.validator_count()?;
        let bound = total_validators.min(P::MAX_VALIDATORS_PER_WITHDRAWALS_SWEEP);

        let mut withdrawals = vec![];

        for _ in 0..bound {
            let validator = self.store.validator_at_index(validator_index)?;
            let balance = self.store.balance(validator_index)?;

            // A validator whose credentials cannot be converted fails the whole batch.
            // Skipping it would make the batch depend on which validators happen to be
            // swept, breaking determinism.
            let address = misc::withdrawal_address(&validator)?;

            let mut amount = 0;

            if predicates::is_fully_withdrawable_validator(&validator, balance, epoch) {
                amount = balance;
            } else if predicates::is_partially_withdrawable_validator::<P>(&validator, balance) {
                amount = balance - P::MAX_EFFECTIVE_BALANCE;
            }

            withdrawals.push(capella::containers::Withdrawal {
                index: withdrawal_index,
                validator_index,
                address,
                amount,
            });

            withdrawal_index += 1;

            if withdrawals.len() == P::MaxWithdrawalsPerPayload::USIZE {
                break;
            }

            validator_index = (validator_index + 1) % total_validators;
        }

        Ok(withdrawals)
    }

    /// Assembles the state representation of the phase active at the current slot and
    /// returns its root.
    ///
    /// The store is only read. Identical store contents at an identical slot always
    /// produce identical roots.
    pub fn hash_tree_root(&self) -> Result<H256> {
        let slot = self.store.slot()?;
        let fork = self.store.fork()?;
        let genesis_validators_root = self.store.genesis_validators_root()?;
        let latest_block_header = self.store.latest_block_header()?;

        let block_roots = (0..SlotsPerHistoricalRoot::<P>::U64)
            .map(|index| self.store.block_root_at_index(index))
            .collect::<Result<Vec<_>>>()?;
        let block_roots = RecentRoots::<P>::try_from(block_roots)?;

        let state_roots = (0..SlotsPerHistoricalRoot::<P>::U64)
            .map(|index| self.store.state_root_at_index(index))
            .collect::<Result<Vec<_>>>()?;
        let state_roots = RecentRoots::<P>::try_from(state_roots)?;

        let latest_execution_payload_header = self.store.latest_execution_payload_header()?;

        let eth1_data = self.store.eth1_data()?;
        let eth1_deposit_index = self.store.eth1_deposit_index()?;
        let validators = self.store.validators()?;
        let balances = self.store.balances()?;

        let randao_mixes = (0..P::EpochsPerHistoricalVector::U64)
            .map(|index| self.store.randao_mix_at_index(index))
            .collect::<Result<Vec<_>>>()?;
        let randao_mixes = RandaoMixes::<P>::try_from(randao_mixes)?;

        let next_withdrawal_index = self.store.next_withdrawal_index()?;
        let next_withdrawal_validator_index = self.store.next_withdrawal_validator_index()?;
        let slashings = self.store.slashings()?;
        let total_slashing = self.store.total_slashing()?;

        let stored = latest_execution_payload_header.phase();
        let active = self.config.phase_at_slot::<P>(slot);

        let state: BeaconState<P> = match active {
            Phase::Capella => {
                let ExecutionPayloadHeader::Capella(latest_execution_payload_header) =
                    latest_execution_payload_header
                else {
                    bail!(Error::PayloadHeaderPhaseMismatch { stored, active });
                };

                capella::beacon_state::BeaconState {
                    slot,
                    genesis_validators_root,
                    fork,
                    latest_block_header,
                    block_roots,
                    state_roots,
                    latest_execution_payload_header,
                    eth1_data,
                    eth1_deposit_index,
                    validators,
                    balances,
                    randao_mixes,
                    next_withdrawal_index,
                    next_withdrawal_validator_index,
                    slashings,
                    total_slashing,
                }
                .into()
            }
            Phase::Deneb => {
                let ExecutionPayloadHeader::Deneb(latest_execution_payload_header) =
                    latest_execution_payload_header
                else {
                    bail!(Error::PayloadHeaderPhaseMismatch { stored, active });
                };

                deneb::beacon_state::BeaconState {
                    slot,
                    genesis_validators_root,
                    fork,
                    latest_block_header,
                    block_roots,
                    state_roots,
                    latest_execution_payload_header,
                    eth1_data,
                    eth1_deposit_index,
                    validators,
                    balances,
                    randao_mixes,
                    next_withdrawal_index,
                    next_withdrawal_validator_index,
                    slashings,
                    total_slashing,
                }
                .into()
            }
            Phase::Electra => bail!(Error::UnsupportedPhase { phase: active }),
        };

        Ok(state.hash_tree_root())
    }
}
