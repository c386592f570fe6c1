//! Collections used in `BeaconState`.

use ssz::{ContiguousList, ContiguousVector};

use crate::{
    phase0::{
        containers::Validator,
        primitives::{Gwei, H256},
    },
    preset::{Preset, SlotsPerHistoricalRoot},
};

pub type Balances<P> = ContiguousList<Gwei, <P as Preset>::ValidatorRegistryLimit>;

pub type RandaoMixes<P> = ContiguousVector<H256, <P as Preset>::EpochsPerHistoricalVector>;

pub type RecentRoots<P> = ContiguousVector<H256, SlotsPerHistoricalRoot<P>>;

pub type Slashings<P> = ContiguousVector<Gwei, <P as Preset>::EpochsPerSlashingsVector>;

pub type Validators<P> = ContiguousList<Validator, <P as Preset>::ValidatorRegistryLimit>;
