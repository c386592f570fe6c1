pub use crate::{error::Error, memory::MemoryStore, state_db::StateDb, store::Store};

mod error;
mod memory;
mod state_db;
mod store;
