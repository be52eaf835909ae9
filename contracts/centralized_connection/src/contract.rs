use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Bytes, Env, String};
use xcall_lib::interfaces::XcallClient;

use crate::{errors::ContractError, events, storage, types::NetworkFee};

contractmeta!(
    key = "Description",
    val = "Centralized relayer connection for xCall"
);

#[contract]
pub struct CentralizedConnection;

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != storage::get_admin(env)? {
        return Err(ContractError::OnlyAdmin);
    }
    Ok(())
}

fn require_xcall(env: &Env) -> Result<Address, ContractError> {
    let xcall = storage::get_xcall(env)?;
    xcall.require_auth();
    Ok(xcall)
}

#[contractimpl]
impl CentralizedConnection {
    pub fn initialize(
        env: Env,
        admin: Address,
        xcall: Address,
        native_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_xcall(&env, &xcall);
        storage::set_native_token(&env, &native_token);
        storage::extend_instance(&env);
        Ok(())
    }

    /// Publishes `msg` for the relayer and returns the connection sn.
    ///
    /// A non-negative `sn` pays the message fee from `tx_origin`, plus the
    /// response fee when positive. Response legs (`sn < 0`) are free.
    pub fn send_message(
        env: Env,
        tx_origin: Address,
        to: String,
        sn: i128,
        msg: Bytes,
    ) -> Result<u128, ContractError> {
        require_xcall(&env)?;

        if sn >= 0 {
            let fee = Self::get_fee(env.clone(), to.clone(), sn > 0);
            if fee > 0 {
                let amount = i128::try_from(fee).map_err(|_| ContractError::Overflow)?;
                let token = storage::get_native_token(&env)?;
                token::Client::new(&env, &token).transfer(
                    &tx_origin,
                    &env.current_contract_address(),
                    &amount,
                );
            }
        }

        let conn_sn = storage::next_conn_sn(&env)?;
        events::message(&env, to, conn_sn, msg);
        storage::extend_instance(&env);
        Ok(conn_sn)
    }

    /// Delivers a relayed message to xCall once per `(src_network, conn_sn)`.
    pub fn recv_message(
        env: Env,
        caller: Address,
        src_network: String,
        conn_sn: u128,
        msg: Bytes,
        sn: u128,
    ) -> Result<(), ContractError> {
        require_admin(&env, &caller)?;
        if storage::has_receipt(&env, &src_network, conn_sn) {
            return Err(ContractError::DuplicateMessage);
        }
        storage::store_receipt(&env, &src_network, conn_sn);

        let xcall = storage::get_xcall(&env)?;
        XcallClient::new(&env, &xcall).handle_message(
            &env.current_contract_address(),
            &src_network,
            &msg,
            &sn,
        );
        Ok(())
    }

    /// Fails the rollback-capable call `sn` without waiting for an answer.
    pub fn revert_message(env: Env, caller: Address, sn: u128) -> Result<(), ContractError> {
        require_admin(&env, &caller)?;

        let xcall = storage::get_xcall(&env)?;
        XcallClient::new(&env, &xcall).handle_error(&env.current_contract_address(), &sn);
        Ok(())
    }

    pub fn set_fee(
        env: Env,
        caller: Address,
        network_id: String,
        message_fee: u128,
        response_fee: u128,
    ) -> Result<(), ContractError> {
        require_admin(&env, &caller)?;
        storage::set_network_fee(
            &env,
            &network_id,
            &NetworkFee {
                message_fee,
                response_fee,
            },
        );
        Ok(())
    }

    pub fn get_fee(env: Env, network_id: String, response: bool) -> u128 {
        let fee = storage::get_network_fee(&env, &network_id);
        if response {
            fee.message_fee.saturating_add(fee.response_fee)
        } else {
            fee.message_fee
        }
    }

    /// Sends the whole collected balance to the admin and returns it.
    pub fn claim_fees(env: Env, caller: Address) -> Result<i128, ContractError> {
        require_admin(&env, &caller)?;

        let token = token::Client::new(&env, &storage::get_native_token(&env)?);
        let balance = token.balance(&env.current_contract_address());
        if balance > 0 {
            token.transfer(&env.current_contract_address(), &caller, &balance);
        }
        Ok(balance)
    }

    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ContractError> {
        require_admin(&env, &caller)?;
        storage::set_admin(&env, &new_admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env)
    }

    pub fn get_xcall(env: Env) -> Result<Address, ContractError> {
        storage::get_xcall(&env)
    }

    pub fn get_network_fee(env: Env, network_id: String) -> NetworkFee {
        storage::get_network_fee(&env, &network_id)
    }

    pub fn get_receipt(env: Env, network_id: String, conn_sn: u128) -> bool {
        storage::has_receipt(&env, &network_id, conn_sn)
    }

    pub fn get_conn_sn(env: Env) -> u128 {
        storage::get_conn_sn(&env)
    }
}
