#![no_std]

pub mod errors;
pub mod interfaces;
pub mod messages;
pub mod network_address;

pub use errors::LibError;
pub use messages::{
    AnyMessage, CallMessage, CallMessagePersisted, CallMessageWithRollback, Envelope, MessageType,
};
pub use network_address::NetworkAddress;
