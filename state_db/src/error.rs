use thiserror::Error;
use types::nonstandard::Phase;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Error {
    #[error("count of total slashing is not up to date")]
    TotalSlashingOutOfDate,
    #[error(
        "stored execution payload header is from {stored} \
         while the phase active at the current slot is {active}"
    )]
    PayloadHeaderPhaseMismatch { stored: Phase, active: Phase },
    #[error("no state representation is registered for {phase}")]
    UnsupportedPhase { phase: Phase },
}
