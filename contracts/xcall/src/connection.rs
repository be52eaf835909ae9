use soroban_sdk::{Address, Bytes, Env, String, Vec};
use xcall_lib::interfaces::ConnectionClient;

use crate::{errors::ContractError, storage};

/// Resolves connection addresses for `nid`, falling back to the default
/// connection when no sources are named.
pub fn resolve(env: &Env, nid: &String, sources: &Vec<String>) -> Result<Vec<Address>, ContractError> {
    let mut connections = Vec::new(env);
    if sources.is_empty() {
        connections.push_back(storage::get_default_connection(env, nid)?);
        return Ok(connections);
    }
    for source in sources.iter() {
        connections.push_back(Address::from_string(&source));
    }
    Ok(connections)
}

pub fn total_fee(
    env: &Env,
    nid: &String,
    rollback: bool,
    connections: &Vec<Address>,
) -> Result<u128, ContractError> {
    let mut fee = storage::get_protocol_fee(env);
    for connection in connections.iter() {
        let connection_fee = ConnectionClient::new(env, &connection).get_fee(nid, &rollback);
        fee = fee.checked_add(connection_fee).ok_or(ContractError::Overflow)?;
    }
    Ok(fee)
}

pub fn send(
    env: &Env,
    tx_origin: &Address,
    connection: &Address,
    nid: &String,
    sn: i128,
    msg: &Bytes,
) -> u128 {
    ConnectionClient::new(env, connection).send_message(tx_origin, nid, &sn, msg)
}
