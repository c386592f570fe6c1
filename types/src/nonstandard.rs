//! Types used across the workspace that do not come from any specification.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Protocol phases in order of activation.
///
/// Every phase is known to the fork schedule, but only phases with a registered
/// `BeaconState` representation in [`combined`](crate::combined) can be hashed.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Display,
    EnumString,
    Sequence,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Capella,
    Deneb,
    Electra,
}
