//! RLP encoding as spoken by xCall peers on EVM, ICON, Solana and Stellar.
//!
//! Integers on the wire use the sign-disambiguated `uintToBytes` form
//! (zero is `0x00`, `128` is `0x820080`). Plain scalar RLP and signed
//! two's-complement integers are available for callers that need them.
#![no_std]

mod decoder;
mod encoder;
mod error;
pub mod utils;

pub use decoder::*;
pub use encoder::*;
pub use error::RlpError;
