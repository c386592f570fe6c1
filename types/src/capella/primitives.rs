use ethereum_types::U256;

pub type Gas = u64;
pub type Wei = U256;
pub type WithdrawalIndex = u64;
