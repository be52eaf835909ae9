use soroban_sdk::{contracttype, Address, BytesN, Env, String, Vec};

use crate::{
    errors::ContractError,
    types::{Config, ProxyRequest, RollbackRecord},
};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 3 * DAY_IN_LEDGERS;

pub const MAX_DATA_SIZE: u32 = 2048;
pub const MAX_ROLLBACK_SIZE: u32 = 1024;

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    Admin,
    FeeHandler,
    ProtocolFee,
    Sn,
    LastReqId,
    DefaultConnection(String),
    Rollback(u128),
    ProxyRequest(u128),
    SuccessfulResponse(u128),
    PendingRequest(BytesN<32>),
    PendingResponse(BytesN<32>),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ==================== Configuration ====================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .ok_or(ContractError::Uninitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&StorageKey::Admin)
        .ok_or(ContractError::Uninitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn get_fee_handler(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&StorageKey::FeeHandler)
        .ok_or(ContractError::Uninitialized)
}

pub fn set_fee_handler(env: &Env, handler: &Address) {
    env.storage().instance().set(&StorageKey::FeeHandler, handler);
}

pub fn get_protocol_fee(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&StorageKey::ProtocolFee)
        .unwrap_or(0)
}

pub fn set_protocol_fee(env: &Env, fee: u128) {
    env.storage().instance().set(&StorageKey::ProtocolFee, &fee);
}

pub fn get_default_connection(env: &Env, nid: &String) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&StorageKey::DefaultConnection(nid.clone()))
        .ok_or(ContractError::NoDefaultConnection)
}

pub fn set_default_connection(env: &Env, nid: &String, connection: &Address) {
    env.storage()
        .instance()
        .set(&StorageKey::DefaultConnection(nid.clone()), connection);
}

// ==================== Counters ====================

pub fn get_sn(env: &Env) -> u128 {
    env.storage().instance().get(&StorageKey::Sn).unwrap_or(0)
}

pub fn next_sn(env: &Env) -> Result<u128, ContractError> {
    let sn = get_sn(env).checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&StorageKey::Sn, &sn);
    Ok(sn)
}

pub fn get_last_req_id(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&StorageKey::LastReqId)
        .unwrap_or(0)
}

pub fn next_req_id(env: &Env) -> Result<u128, ContractError> {
    let req_id = get_last_req_id(env)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&StorageKey::LastReqId, &req_id);
    Ok(req_id)
}

// ==================== Rollbacks ====================

pub fn get_rollback(env: &Env, sn: u128) -> Result<RollbackRecord, ContractError> {
    let key = StorageKey::Rollback(sn);
    let record = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::RollbackNotFound)?;
    extend_persistent(env, &key);
    Ok(record)
}

pub fn store_rollback(env: &Env, sn: u128, record: &RollbackRecord) {
    let key = StorageKey::Rollback(sn);
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

pub fn remove_rollback(env: &Env, sn: u128) {
    env.storage().persistent().remove(&StorageKey::Rollback(sn));
}

pub fn save_success(env: &Env, sn: u128) {
    let key = StorageKey::SuccessfulResponse(sn);
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

pub fn is_success(env: &Env, sn: u128) -> bool {
    env.storage()
        .persistent()
        .get(&StorageKey::SuccessfulResponse(sn))
        .unwrap_or(false)
}

// ==================== Proxy requests ====================

pub fn get_proxy_request(env: &Env, req_id: u128) -> Result<ProxyRequest, ContractError> {
    let key = StorageKey::ProxyRequest(req_id);
    let request = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::RequestNotFound)?;
    extend_persistent(env, &key);
    Ok(request)
}

pub fn store_proxy_request(env: &Env, req_id: u128, request: &ProxyRequest) {
    let key = StorageKey::ProxyRequest(req_id);
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

pub fn remove_proxy_request(env: &Env, req_id: u128) {
    env.storage()
        .persistent()
        .remove(&StorageKey::ProxyRequest(req_id));
}

// ==================== Quorum tracking ====================

pub fn get_pending(env: &Env, key: &StorageKey) -> Vec<String> {
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn store_pending(env: &Env, key: &StorageKey, delivered: &Vec<String>) {
    env.storage().persistent().set(key, delivered);
    extend_persistent(env, key);
}

pub fn remove_pending(env: &Env, key: &StorageKey) {
    env.storage().persistent().remove(key);
}
