use anyhow::{ensure, Result};
use typenum::Unsigned as _;
use types::{
    phase0::{
        containers::Validator,
        primitives::{Epoch, ExecutionAddress, Slot, H256},
    },
    preset::Preset,
};

use crate::{error::Error, predicates::has_eth1_withdrawal_credential};

#[inline]
#[must_use]
pub fn compute_epoch_at_slot<P: Preset>(slot: Slot) -> Epoch {
    slot / P::SlotsPerEpoch::U64
}

/// Extracts the execution address committed to by a validator's withdrawal credentials.
///
/// Only credentials carrying the execution prefix embed an address. Credentials still
/// using the BLS prefix make the whole operation fail so that callers never fabricate
/// an address out of a key hash.
pub fn withdrawal_address(validator: &Validator) -> Result<ExecutionAddress> {
    ensure!(
        has_eth1_withdrawal_credential(validator),
        Error::CredentialsNotExecution,
    );

    let address_bytes = &validator.withdrawal_credentials
        [H256::len_bytes() - ExecutionAddress::len_bytes()..];

    Ok(ExecutionAddress::from_slice(address_bytes))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use types::preset::{Mainnet, Minimal};

    use super::*;

    #[test]
    fn epochs_are_slots_divided_by_the_preset_epoch_length() {
        assert_eq!(compute_epoch_at_slot::<Mainnet>(65), 2);
        assert_eq!(compute_epoch_at_slot::<Minimal>(65), 8);
    }

    #[test]
    fn execution_credentials_yield_their_low_20_bytes() {
        let validator = Validator {
            withdrawal_credentials: H256(hex!(
                "010000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
            )),
            ..Validator::default()
        };

        let address = withdrawal_address(&validator).expect("credentials embed an address");

        assert_eq!(address, ExecutionAddress::repeat_byte(0xaa));
    }

    #[test]
    fn bls_credentials_do_not_convert() {
        let validator = Validator {
            withdrawal_credentials: H256(hex!(
                "000000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
            )),
            ..Validator::default()
        };

        withdrawal_address(&validator).expect_err("BLS credentials embed no address");
    }
}
