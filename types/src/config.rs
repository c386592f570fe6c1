use std::borrow::Cow;

use enum_iterator::all;
use hex_literal::hex;
use serde::{Deserialize, Serialize};
use typenum::Unsigned as _;

use crate::{
    nonstandard::Phase,
    phase0::{
        consts::{FAR_FUTURE_EPOCH, GENESIS_EPOCH},
        primitives::{Epoch, Slot, Version, H32},
    },
    preset::{Preset, PresetName},
};

/// Configuration variables customizable at runtime.
///
/// Fork versions and epochs follow the layout of standard chain configuration files.
/// Numbers are accepted both as strings and natively, like everywhere else in the
/// beacon node APIs.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    // Meta
    pub config_name: Cow<'static, str>,
    pub preset_base: PresetName,

    // Genesis
    pub genesis_fork_version: Version,

    // Forking
    #[serde(with = "serde_utils::string_or_native")]
    pub deneb_fork_epoch: Epoch,
    pub deneb_fork_version: Version,
    #[serde(with = "serde_utils::string_or_native")]
    pub electra_fork_epoch: Epoch,
    pub electra_fork_version: Version,
}

impl Default for Config {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl Config {
    #[must_use]
    pub const fn mainnet() -> Self {
        Self {
            config_name: Cow::Borrowed("mainnet"),
            preset_base: PresetName::Mainnet,
            genesis_fork_version: H32(hex!("03000000")),
            deneb_fork_epoch: 269_568,
            deneb_fork_version: H32(hex!("04000000")),
            electra_fork_epoch: FAR_FUTURE_EPOCH,
            electra_fork_version: H32(hex!("05000000")),
        }
    }

    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            config_name: Cow::Borrowed("minimal"),
            preset_base: PresetName::Minimal,
            genesis_fork_version: H32(hex!("03000001")),
            deneb_fork_epoch: GENESIS_EPOCH,
            deneb_fork_version: H32(hex!("04000001")),
            electra_fork_epoch: FAR_FUTURE_EPOCH,
            electra_fork_version: H32(hex!("05000001")),
        }
    }

    #[must_use]
    pub fn genesis_phase(&self) -> Phase {
        self.phase_at_epoch(GENESIS_EPOCH)
    }

    #[inline]
    #[must_use]
    pub const fn version(&self, phase: Phase) -> Version {
        match phase {
            Phase::Capella => self.genesis_fork_version,
            Phase::Deneb => self.deneb_fork_version,
            Phase::Electra => self.electra_fork_version,
        }
    }

    #[inline]
    #[must_use]
    pub const fn fork_epoch(&self, phase: Phase) -> Epoch {
        match phase {
            Phase::Capella => GENESIS_EPOCH,
            Phase::Deneb => self.deneb_fork_epoch,
            Phase::Electra => self.electra_fork_epoch,
        }
    }

    #[must_use]
    pub fn is_phase_scheduled(&self, phase: Phase) -> bool {
        self.fork_epoch(phase) != FAR_FUTURE_EPOCH
    }

    #[must_use]
    pub fn phase_at_epoch(&self, epoch: Epoch) -> Phase {
        self.fork_epochs()
            .take_while(|(_, fork_epoch)| *fork_epoch <= epoch)
            .map(|(phase, _)| phase)
            .last()
            .unwrap_or(Phase::Capella)
    }

    #[must_use]
    pub fn phase_at_slot<P: Preset>(&self, slot: Slot) -> Phase {
        self.phase_at_epoch(slot / P::SlotsPerEpoch::U64)
    }

    fn fork_epochs(&self) -> impl Iterator<Item = (Phase, Epoch)> + '_ {
        all::<Phase>().map(|phase| (phase, self.fork_epoch(phase)))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::preset::Minimal;

    use super::*;

    #[test]
    fn mainnet_genesis_phase_is_capella() {
        assert_eq!(Config::mainnet().genesis_phase(), Phase::Capella);
    }

    // The minimal configuration activates Deneb at genesis and never activates Electra.
    #[test_case(0, Phase::Deneb)]
    #[test_case(u64::MAX, Phase::Deneb)]
    fn minimal_phase_at_slot(slot: Slot, expected: Phase) {
        assert_eq!(Config::minimal().phase_at_slot::<Minimal>(slot), expected);
    }

    #[test]
    fn scheduling_electra_changes_the_resolved_phase() {
        let config = Config {
            electra_fork_epoch: 2,
            ..Config::minimal()
        };

        // 8 slots per epoch in the minimal preset.
        assert_eq!(config.phase_at_slot::<Minimal>(15), Phase::Deneb);
        assert_eq!(config.phase_at_slot::<Minimal>(16), Phase::Electra);
    }

    #[test]
    fn config_round_trips_through_yaml_with_stringified_numbers() {
        let config = Config {
            deneb_fork_epoch: 123,
            ..Config::mainnet()
        };

        let yaml = serde_yaml::to_string(&config).expect("serialization should succeed");

        assert!(yaml.contains("DENEB_FORK_EPOCH: '123'"));

        let restored = serde_yaml::from_str::<Config>(&yaml).expect("config should deserialize");

        assert_eq!(restored.deneb_fork_epoch, 123);
        assert_eq!(restored.preset_base, config.preset_base);
    }
}
