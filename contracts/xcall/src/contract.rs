use soroban_sdk::{contract, contractimpl, contractmeta, Address, Bytes, Env, String, Vec};
use xcall_lib::Envelope;

use crate::{
    errors::ContractError,
    execute_call, handle_message, helpers, send_message, storage,
    types::{Config, RollbackRecord},
};

contractmeta!(
    key = "Description",
    val = "xCall cross-chain message passing with rollback support"
);

#[contract]
pub struct XcallContract;

#[contractimpl]
impl XcallContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        network_id: String,
        native_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_config(
            &env,
            &Config {
                network_id,
                native_token,
            },
        );
        storage::set_admin(&env, &admin);
        storage::set_fee_handler(&env, &admin);
        storage::extend_instance(&env);
        Ok(())
    }

    // ==================== Administration ====================

    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ContractError> {
        helpers::ensure_admin(&env, &caller)?;
        storage::set_admin(&env, &new_admin);
        Ok(())
    }

    pub fn set_protocol_fee(env: Env, caller: Address, fee: u128) -> Result<(), ContractError> {
        helpers::ensure_admin(&env, &caller)?;
        storage::set_protocol_fee(&env, fee);
        Ok(())
    }

    pub fn set_protocol_fee_handler(
        env: Env,
        caller: Address,
        handler: Address,
    ) -> Result<(), ContractError> {
        helpers::ensure_admin(&env, &caller)?;
        storage::set_fee_handler(&env, &handler);
        Ok(())
    }

    pub fn set_default_connection(
        env: Env,
        caller: Address,
        nid: String,
        connection: Address,
    ) -> Result<(), ContractError> {
        helpers::ensure_admin(&env, &caller)?;
        storage::set_default_connection(&env, &nid, &connection);
        Ok(())
    }

    // ==================== Messaging ====================

    /// Sends `envelope` to the network address `to` and returns its sn.
    ///
    /// `tx_origin` pays the protocol and connection fees; `sender` is the
    /// calling dapp and receives any rollback.
    pub fn send_call(
        env: Env,
        tx_origin: Address,
        sender: Address,
        envelope: Envelope,
        to: String,
    ) -> Result<u128, ContractError> {
        send_message::send_call(&env, &tx_origin, &sender, envelope, to)
    }

    pub fn handle_message(
        env: Env,
        sender: Address,
        from_nid: String,
        msg: Bytes,
        sn: u128,
    ) -> Result<(), ContractError> {
        handle_message::handle_message(&env, &sender, from_nid, msg, sn)
    }

    pub fn handle_error(env: Env, sender: Address, sn: u128) -> Result<(), ContractError> {
        handle_message::handle_error(&env, &sender, sn)
    }

    pub fn execute_call(env: Env, req_id: u128, data: Bytes) -> Result<(), ContractError> {
        execute_call::execute_call(&env, req_id, data)
    }

    pub fn execute_rollback(env: Env, sn: u128) -> Result<(), ContractError> {
        execute_call::execute_rollback(&env, sn)
    }

    // ==================== Queries ====================

    pub fn verify_success(env: Env, sn: u128) -> bool {
        storage::is_success(&env, sn)
    }

    pub fn get_fee(
        env: Env,
        nid: String,
        rollback: bool,
        sources: Option<Vec<String>>,
    ) -> Result<u128, ContractError> {
        send_message::get_fee(&env, &nid, rollback, sources)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env)
    }

    pub fn get_network_address(env: Env) -> Result<String, ContractError> {
        let address = helpers::network_address_of(&env, &env.current_contract_address())?;
        Ok(address.as_string().clone())
    }

    pub fn get_default_connection(env: Env, nid: String) -> Result<Address, ContractError> {
        storage::get_default_connection(&env, &nid)
    }

    pub fn get_protocol_fee(env: Env) -> u128 {
        storage::get_protocol_fee(&env)
    }

    pub fn get_protocol_fee_handler(env: Env) -> Result<Address, ContractError> {
        storage::get_fee_handler(&env)
    }

    pub fn get_sn(env: Env) -> u128 {
        storage::get_sn(&env)
    }

    pub fn get_last_req_id(env: Env) -> u128 {
        storage::get_last_req_id(&env)
    }

    pub fn get_rollback(env: Env, sn: u128) -> Result<RollbackRecord, ContractError> {
        storage::get_rollback(&env, sn)
    }
}
