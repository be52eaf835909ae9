#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use contract::{CentralizedConnection, CentralizedConnectionClient};
pub use errors::ContractError;
pub use events::MessageEvent;
pub use types::NetworkFee;
