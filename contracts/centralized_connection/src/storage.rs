use crate::{errors::ContractError, types::NetworkFee};
use soroban_sdk::{contracttype, Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECEIPT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const RECEIPT_LIFETIME_THRESHOLD: u32 = 3 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Xcall,
    NativeToken,
    ConnSn,
    NetworkFee(String),
    Receipt(String, u128),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Xcall)
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::Uninitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_xcall(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Xcall)
        .ok_or(ContractError::Uninitialized)
}

pub fn set_xcall(env: &Env, xcall: &Address) {
    env.storage().instance().set(&DataKey::Xcall, xcall);
}

pub fn get_native_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(ContractError::Uninitialized)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn get_conn_sn(env: &Env) -> u128 {
    env.storage().instance().get(&DataKey::ConnSn).unwrap_or(0)
}

pub fn next_conn_sn(env: &Env) -> Result<u128, ContractError> {
    let sn = get_conn_sn(env).checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::ConnSn, &sn);
    Ok(sn)
}

pub fn get_network_fee(env: &Env, network_id: &String) -> NetworkFee {
    env.storage()
        .persistent()
        .get(&DataKey::NetworkFee(network_id.clone()))
        .unwrap_or_default()
}

pub fn set_network_fee(env: &Env, network_id: &String, fee: &NetworkFee) {
    env.storage()
        .persistent()
        .set(&DataKey::NetworkFee(network_id.clone()), fee);
}

pub fn has_receipt(env: &Env, network_id: &String, conn_sn: u128) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Receipt(network_id.clone(), conn_sn))
}

pub fn store_receipt(env: &Env, network_id: &String, conn_sn: u128) {
    let key = DataKey::Receipt(network_id.clone(), conn_sn);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECEIPT_LIFETIME_THRESHOLD, RECEIPT_BUMP_AMOUNT);
}
