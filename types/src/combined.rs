use derive_more::From;
use duplicate::duplicate_item;
use serde::Serialize;
use ssz::{SszHash, H256};
use typenum::U1;

use crate::{
    capella::{
        beacon_state::BeaconState as CapellaBeaconState,
        containers::ExecutionPayloadHeader as CapellaExecutionPayloadHeader,
    },
    deneb::{
        beacon_state::BeaconState as DenebBeaconState,
        containers::ExecutionPayloadHeader as DenebExecutionPayloadHeader,
    },
    nonstandard::Phase,
    preset::Preset,
};

/// The state representations of all supported phases.
///
/// Dispatch on the phase is a total match. Phases without a variant here cannot be
/// hashed at all; callers are expected to report them instead of falling back to
/// another layout.
#[derive(Clone, PartialEq, Eq, Debug, From, Serialize)]
#[serde(bound = "", untagged)]
pub enum BeaconState<P: Preset> {
    Capella(CapellaBeaconState<P>),
    Deneb(DenebBeaconState<P>),
}

impl<P: Preset> SszHash for BeaconState<P> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        match self {
            Self::Capella(state) => state.hash_tree_root(),
            Self::Deneb(state) => state.hash_tree_root(),
        }
    }
}

impl<P: Preset> BeaconState<P> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Capella(_) => Phase::Capella,
            Self::Deneb(_) => Phase::Deneb,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, From, Serialize)]
#[serde(bound = "", untagged)]
pub enum ExecutionPayloadHeader<P: Preset> {
    Capella(CapellaExecutionPayloadHeader<P>),
    Deneb(DenebExecutionPayloadHeader<P>),
}

impl<P: Preset> SszHash for ExecutionPayloadHeader<P> {
    type PackingFactor = U1;

    fn hash_tree_root(&self) -> H256 {
        match self {
            Self::Capella(header) => header.hash_tree_root(),
            Self::Deneb(header) => header.hash_tree_root(),
        }
    }
}

impl<P: Preset> ExecutionPayloadHeader<P> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Capella(_) => Phase::Capella,
            Self::Deneb(_) => Phase::Deneb,
        }
    }
}

#[duplicate_item(
    state_representation;
    [CapellaBeaconState];
    [DenebBeaconState];
)]
impl<P: Preset> From<&state_representation<P>> for BeaconState<P> {
    fn from(state: &state_representation<P>) -> Self {
        state.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use crate::preset::Minimal;

    use super::*;

    #[test]
    fn beacon_state_phases_match_their_variants() {
        let capella = BeaconState::<Minimal>::from(CapellaBeaconState::default());
        let deneb = BeaconState::<Minimal>::from(DenebBeaconState::default());

        assert_eq!(capella.phase(), Phase::Capella);
        assert_eq!(deneb.phase(), Phase::Deneb);
    }

    #[test]
    fn capella_and_deneb_default_states_hash_differently() {
        let capella = BeaconState::<Minimal>::from(CapellaBeaconState::default());
        let deneb = BeaconState::<Minimal>::from(DenebBeaconState::default());

        // The phases differ only in the execution payload header layout.
        assert_ne!(capella.hash_tree_root(), deneb.hash_tree_root());
    }
}
