//! A dapp that sends calls through xCall and records what it receives.
//!
//! Calls carrying the payload `rollback` fail, so tests can drive the
//! failure and rollback paths.
#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Bytes, Env, String, Vec,
};
use xcall_lib::{interfaces::XcallClient, AnyMessage, Envelope};

#[cfg(test)]
mod test;

pub const FAILING_PAYLOAD: &[u8] = b"rollback";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    Uninitialized = 2,
    RevertFromDapp = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReceivedCall {
    pub from: String,
    pub data: Bytes,
    pub protocols: Vec<String>,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Xcall,
    CallCount,
    LastCall,
    Rollbacks,
}

#[contract]
pub struct MockDapp;

fn xcall(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Xcall)
        .ok_or(ContractError::Uninitialized)
}

#[contractimpl]
impl MockDapp {
    pub fn initialize(env: Env, xcall: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&DataKey::Xcall) {
            return Err(ContractError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Xcall, &xcall);
        Ok(())
    }

    pub fn send_call(
        env: Env,
        tx_origin: Address,
        to: String,
        message: AnyMessage,
        sources: Vec<String>,
        destinations: Vec<String>,
    ) -> Result<u128, ContractError> {
        tx_origin.require_auth();

        let envelope = Envelope {
            message,
            sources,
            destinations,
        };
        let sn = XcallClient::new(&env, &xcall(&env)?).send_call(
            &tx_origin,
            &env.current_contract_address(),
            &envelope,
            &to,
        );
        Ok(sn)
    }

    pub fn handle_call_message(
        env: Env,
        from: String,
        data: Bytes,
        protocols: Vec<String>,
    ) -> Result<(), ContractError> {
        xcall(&env)?.require_auth();

        if data == Bytes::from_slice(&env, FAILING_PAYLOAD) {
            return Err(ContractError::RevertFromDapp);
        }
        let count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CallCount)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::CallCount, &(count + 1));
        env.storage().instance().set(
            &DataKey::LastCall,
            &ReceivedCall {
                from,
                data,
                protocols,
            },
        );
        Ok(())
    }

    pub fn handle_rollback(env: Env, data: Bytes) -> Result<(), ContractError> {
        xcall(&env)?.require_auth();

        let mut rollbacks: Vec<Bytes> = env
            .storage()
            .instance()
            .get(&DataKey::Rollbacks)
            .unwrap_or_else(|| Vec::new(&env));
        rollbacks.push_back(data);
        env.storage()
            .instance()
            .set(&DataKey::Rollbacks, &rollbacks);
        Ok(())
    }

    pub fn call_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CallCount)
            .unwrap_or(0)
    }

    pub fn last_call(env: Env) -> Option<ReceivedCall> {
        env.storage().instance().get(&DataKey::LastCall)
    }

    pub fn rollbacks(env: Env) -> Vec<Bytes> {
        env.storage()
            .instance()
            .get(&DataKey::Rollbacks)
            .unwrap_or_else(|| Vec::new(&env))
    }
}
