//! Cross-contract clients for the three parties of an xCall exchange.

use soroban_sdk::{contractclient, Address, Bytes, Env, String, Vec};

use crate::messages::Envelope;

/// xCall entrypoints used by connections and dapps.
#[contractclient(name = "XcallClient")]
pub trait IXcall {
    fn send_call(env: Env, tx_origin: Address, sender: Address, envelope: Envelope, to: String)
        -> u128;

    fn handle_message(env: Env, sender: Address, from_nid: String, msg: Bytes, sn: u128);

    fn handle_error(env: Env, sender: Address, sn: u128);

    fn get_network_address(env: Env) -> String;
}

/// Entrypoints xCall calls on a connection.
///
/// `sn` is signed: zero for one-way requests, positive when a response is
/// expected and negative for response legs.
#[contractclient(name = "ConnectionClient")]
pub trait IConnection {
    fn send_message(env: Env, tx_origin: Address, to: String, sn: i128, msg: Bytes) -> u128;

    fn get_fee(env: Env, network_id: String, response: bool) -> u128;
}

/// Callbacks a dapp exposes to receive calls and rollbacks.
#[contractclient(name = "DappClient")]
pub trait IDapp {
    fn handle_call_message(env: Env, from: String, data: Bytes, protocols: Vec<String>);

    fn handle_rollback(env: Env, data: Bytes);
}
