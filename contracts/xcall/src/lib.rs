#![no_std]

mod connection;
mod contract;
mod errors;
mod events;
mod execute_call;
mod handle_message;
mod helpers;
mod send_message;
mod storage;
pub mod types;


pub use contract::{XcallContract, XcallContractClient};
pub use errors::ContractError;
pub use events::{
    CallExecutedEvent, CallMessageEvent, CallMessageSentEvent, ResponseMessageEvent,
    RollbackExecutedEvent, RollbackMessageEvent,
};
pub use storage::{MAX_DATA_SIZE, MAX_ROLLBACK_SIZE};
