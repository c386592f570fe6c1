pub use ethereum_types::{H160, H256, H32};

pub type DepositIndex = u64;
pub type Epoch = u64;
pub type ExecutionAddress = H160;
pub type ExecutionBlockHash = H256;
pub type ExecutionBlockNumber = u64;
pub type Gwei = u64;
pub type Slot = u64;
pub type UnixSeconds = u64;
pub type ValidatorIndex = u64;
pub type Version = H32;

// Public keys are kept as opaque bytes. Nothing in this workspace verifies signatures,
// so there is no need to decompress them into curve points.
pub type PublicKeyBytes = primitive_types::H384;
