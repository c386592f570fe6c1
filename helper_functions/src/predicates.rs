use types::{
    phase0::{
        consts::ETH1_ADDRESS_WITHDRAWAL_PREFIX,
        containers::Validator,
        primitives::{Epoch, Gwei},
    },
    preset::Preset,
};

/// > Check if ``validator`` has an 0x01 prefixed "eth1" withdrawal credential.
#[must_use]
pub fn has_eth1_withdrawal_credential(validator: &Validator) -> bool {
    validator
        .withdrawal_credentials
        .as_bytes()
        .starts_with(ETH1_ADDRESS_WITHDRAWAL_PREFIX)
}

/// > Check if ``validator`` is fully withdrawable.
#[must_use]
pub fn is_fully_withdrawable_validator(validator: &Validator, balance: Gwei, epoch: Epoch) -> bool {
    has_eth1_withdrawal_credential(validator)
        && validator.withdrawable_epoch <= epoch
        && balance > 0
}

/// > Check if ``validator`` is partially withdrawable.
#[must_use]
pub fn is_partially_withdrawable_validator<P: Preset>(validator: &Validator, balance: Gwei) -> bool {
    let has_max_effective_balance = validator.effective_balance == P::MAX_EFFECTIVE_BALANCE;
    let has_excess_balance = balance > P::MAX_EFFECTIVE_BALANCE;
    has_eth1_withdrawal_credential(validator) && has_max_effective_balance && has_excess_balance
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use test_case::test_case;
    use types::{phase0::primitives::H256, preset::Mainnet};

    use super::*;

    fn execution_validator() -> Validator {
        Validator {
            withdrawal_credentials: H256(hex!(
                "010000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
            )),
            effective_balance: Mainnet::MAX_EFFECTIVE_BALANCE,
            withdrawable_epoch: 100,
            ..Validator::default()
        }
    }

    #[test]
    fn bls_credentials_are_not_eth1() {
        assert!(!has_eth1_withdrawal_credential(&Validator::default()));
        assert!(has_eth1_withdrawal_credential(&execution_validator()));
    }

    // Full withdrawability requires a positive balance and a reached withdrawable epoch.
    #[test_case(32_000_000_000, 100, true)]
    #[test_case(32_000_000_000, 99, false)]
    #[test_case(0, 100, false)]
    fn full_withdrawability(balance: Gwei, epoch: Epoch, expected: bool) {
        assert_eq!(
            is_fully_withdrawable_validator(&execution_validator(), balance, epoch),
            expected,
        );
    }

    // Partial withdrawability requires the effective balance to be capped and an excess.
    #[test_case(33_000_000_000, true)]
    #[test_case(32_000_000_000, false)]
    fn partial_withdrawability(balance: Gwei, expected: bool) {
        assert_eq!(
            is_partially_withdrawable_validator::<Mainnet>(&execution_validator(), balance),
            expected,
        );
    }

    #[test]
    fn uncapped_effective_balance_prevents_partial_withdrawal() {
        let validator = Validator {
            effective_balance: Mainnet::MAX_EFFECTIVE_BALANCE - 1,
            ..execution_validator()
        };

        assert!(!is_partially_withdrawable_validator::<Mainnet>(
            &validator,
            33_000_000_000,
        ));
    }
}
