use soroban_sdk::{token, Address, Bytes, BytesN, Env, String, Vec};
use xcall_lib::NetworkAddress;
use xcall_rlp::utils::string_to_bytes;

use crate::{
    errors::ContractError,
    storage::{self, StorageKey},
};

pub fn ensure_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != storage::get_admin(env)? {
        return Err(ContractError::OnlyAdmin);
    }
    Ok(())
}

/// Contract strkeys start with `C`, accounts with `G`.
pub fn is_contract(env: &Env, address: &Address) -> bool {
    string_to_bytes(env, &address.to_string()).get(0) == Some(b'C')
}

pub fn hash_data(env: &Env, data: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(data).into()
}

pub fn network_address_of(env: &Env, account: &Address) -> Result<NetworkAddress, ContractError> {
    let config = storage::get_config(env)?;
    Ok(NetworkAddress::new(
        env,
        &config.network_id,
        &account.to_string(),
    )?)
}

/// A connection may deliver for `nid` when it is listed in `protocols`,
/// or when `protocols` is empty and it is the default connection.
pub fn is_valid_source(
    env: &Env,
    sender: &String,
    nid: &String,
    protocols: &Vec<String>,
) -> bool {
    if protocols.iter().any(|protocol| protocol == *sender) {
        return true;
    }
    if !protocols.is_empty() {
        return false;
    }
    match storage::get_default_connection(env, nid) {
        Ok(default) => default.to_string() == *sender,
        Err(_) => false,
    }
}

/// Records that `sender` delivered the message behind `key` and reports
/// whether every listed protocol has now delivered it.
pub fn record_delivery(
    env: &Env,
    key: &StorageKey,
    sender: &String,
    protocols: &Vec<String>,
) -> bool {
    let mut delivered = storage::get_pending(env, key);
    if delivered.iter().any(|connection| connection == *sender) {
        soroban_sdk::log!(env, "repeated delivery from {}", sender.clone());
    } else {
        delivered.push_back(sender.clone());
    }

    let complete = protocols
        .iter()
        .all(|protocol| delivered.iter().any(|connection| connection == protocol));
    if complete {
        storage::remove_pending(env, key);
    } else {
        storage::store_pending(env, key, &delivered);
    }
    complete
}

pub fn ensure_balance(
    env: &Env,
    token: &Address,
    owner: &Address,
    amount: u128,
) -> Result<(), ContractError> {
    let amount = i128::try_from(amount).map_err(|_| ContractError::Overflow)?;
    if token::Client::new(env, token).balance(owner) < amount {
        return Err(ContractError::InsufficientFee);
    }
    Ok(())
}

pub fn transfer_token(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = i128::try_from(amount).map_err(|_| ContractError::Overflow)?;
    token::Client::new(env, token).transfer(from, to, &amount);
    Ok(())
}
