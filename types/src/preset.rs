use core::{fmt::Debug, hash::Hash, num::NonZeroU64};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use typenum::{
    NonZero, Prod, Unsigned, U1099511627776, U16, U256, U32, U4, U64, U65536, U8, U8192,
};

use crate::phase0::primitives::Gwei;

/// Compile-time configuration variables.
///
/// Lengths of state vectors and limits of state lists have to be known at the type level
/// so that partially filled collections merkleize at their full capacity.
pub trait Preset: Copy + Eq + Ord + Hash + Default + Debug + Send + Sync + 'static {
    type SlotsPerEpoch: Unsigned + NonZero + Eq + Debug + Send + Sync;
    type EpochsPerHistoricalRoot: Unsigned + NonZero;
    type EpochsPerHistoricalVector: Unsigned + NonZero + Eq + Debug + Send + Sync;
    type EpochsPerSlashingsVector: Unsigned + NonZero + Eq + Debug + Send + Sync;
    type ValidatorRegistryLimit: Unsigned + NonZero + Eq + Debug + Send + Sync;

    // Execution
    type BytesPerLogsBloom: Unsigned + NonZero + Eq + Debug + Send + Sync;
    type MaxExtraDataBytes: Unsigned + Eq + Debug + Send + Sync;

    // Withdrawals
    type MaxWithdrawalsPerPayload: Unsigned + NonZero + Eq + Debug + Send + Sync;

    // Derived type-level variables
    type SlotsPerHistoricalRoot: Unsigned + NonZero + Eq + Debug + Send + Sync;

    // Meta
    const NAME: PresetName;

    const EFFECTIVE_BALANCE_INCREMENT: NonZeroU64 = nonzero_ext::nonzero!(1_000_000_000_u64);
    const MAX_EFFECTIVE_BALANCE: Gwei = 32_000_000_000;
    const MAX_VALIDATORS_PER_WITHDRAWALS_SWEEP: u64 = 1 << 14;
}

/// Preset matching the mainnet constants of the protocol specification.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Mainnet;

impl Preset for Mainnet {
    type SlotsPerEpoch = U32;
    type EpochsPerHistoricalRoot = U256;
    type EpochsPerHistoricalVector = U65536;
    type EpochsPerSlashingsVector = U8192;
    type ValidatorRegistryLimit = U1099511627776;

    // Execution
    type BytesPerLogsBloom = U256;
    type MaxExtraDataBytes = U32;

    // Withdrawals
    type MaxWithdrawalsPerPayload = U16;

    // Derived type-level variables
    type SlotsPerHistoricalRoot = Prod<Self::EpochsPerHistoricalRoot, Self::SlotsPerEpoch>;

    // Meta
    const NAME: PresetName = PresetName::Mainnet;
}

/// Preset with most lengths shortened. Only suitable for testing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Minimal;

impl Preset for Minimal {
    type SlotsPerEpoch = U8;
    type EpochsPerHistoricalRoot = U8;
    type EpochsPerHistoricalVector = U64;
    type EpochsPerSlashingsVector = U64;
    type ValidatorRegistryLimit = <Mainnet as Preset>::ValidatorRegistryLimit;

    // Execution
    type BytesPerLogsBloom = <Mainnet as Preset>::BytesPerLogsBloom;
    type MaxExtraDataBytes = <Mainnet as Preset>::MaxExtraDataBytes;

    // Withdrawals
    type MaxWithdrawalsPerPayload = U4;

    // Derived type-level variables
    type SlotsPerHistoricalRoot = Prod<Self::EpochsPerHistoricalRoot, Self::SlotsPerEpoch>;

    // Meta
    const NAME: PresetName = PresetName::Minimal;

    const MAX_VALIDATORS_PER_WITHDRAWALS_SWEEP: u64 = 16;
}

pub type SlotsPerHistoricalRoot<P> = <P as Preset>::SlotsPerHistoricalRoot;

#[derive(
    Clone, Copy, PartialEq, Eq, Default, Debug, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PresetName {
    #[default]
    Mainnet,
    Minimal,
}

#[cfg(test)]
mod tests {
    use typenum::Unsigned as _;

    use super::*;

    #[test]
    fn slots_per_historical_root_is_derived_from_epochs() {
        assert_eq!(SlotsPerHistoricalRoot::<Mainnet>::U64, 8192);
        assert_eq!(SlotsPerHistoricalRoot::<Minimal>::U64, 64);
    }

    #[test]
    fn sweep_bound_is_shortened_in_the_minimal_preset() {
        assert_eq!(Mainnet::MAX_VALIDATORS_PER_WITHDRAWALS_SWEEP, 16384);
        assert_eq!(Minimal::MAX_VALIDATORS_PER_WITHDRAWALS_SWEEP, 16);
    }
}
