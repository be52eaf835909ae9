use soroban_sdk::{Address, Bytes, Env, String};
use xcall_lib::{interfaces::DappClient, MessageType};

use crate::{
    connection,
    errors::ContractError,
    events, helpers, storage,
    types::{CSMessage, CSMessageResult, CSResponseType, ProxyRequest},
};

pub fn execute_call(env: &Env, req_id: u128, data: Bytes) -> Result<(), ContractError> {
    let request = storage::get_proxy_request(env, req_id)?;
    if helpers::hash_data(env, &data) != request.data_hash {
        return Err(ContractError::DataMismatch);
    }
    let dapp = Address::from_string(&request.to);

    match request.msg_type {
        MessageType::CallMessage => {
            storage::remove_proxy_request(env, req_id);
            let code = try_handle_call(env, &dapp, &request, &data);
            emit_executed(env, req_id, code);
        }
        MessageType::CallMessageWithRollback => {
            storage::remove_proxy_request(env, req_id);
            let code = try_handle_call(env, &dapp, &request, &data);
            emit_executed(env, req_id, code);
            send_result(env, &request, CSMessageResult::new(request.sequence_no, code))?;
        }
        MessageType::CallMessagePersisted => {
            // a failing dapp aborts the whole call and the request stays for a retry
            DappClient::new(env, &dapp).handle_call_message(
                request.from.as_string(),
                &data,
                &request.protocols,
            );
            storage::remove_proxy_request(env, req_id);
            emit_executed(env, req_id, CSResponseType::Success);
        }
    }
    Ok(())
}

pub fn execute_rollback(env: &Env, sn: u128) -> Result<(), ContractError> {
    let record = storage::get_rollback(env, sn)?;
    if !record.enabled || !record.executable {
        return Err(ContractError::RollbackNotEnabled);
    }
    storage::remove_rollback(env, sn);

    DappClient::new(env, &record.sender).handle_rollback(&record.rollback);
    events::rollback_executed(env, sn);
    Ok(())
}

fn try_handle_call(
    env: &Env,
    dapp: &Address,
    request: &ProxyRequest,
    data: &Bytes,
) -> CSResponseType {
    let outcome = DappClient::new(env, dapp).try_handle_call_message(
        request.from.as_string(),
        data,
        &request.protocols,
    );
    match outcome {
        Ok(Ok(_)) => CSResponseType::Success,
        _ => {
            soroban_sdk::log!(env, "dapp call failed for sn {}", request.sequence_no);
            CSResponseType::Failure
        }
    }
}

/// Sends the outcome back over the connections the request arrived on.
/// Response legs carry the negated sn, which connections deliver for free.
fn send_result(
    env: &Env,
    request: &ProxyRequest,
    result: CSMessageResult,
) -> Result<(), ContractError> {
    let (origin_nid, _) = request.from.parse(env)?;
    let connections = connection::resolve(env, &origin_nid, &request.protocols)?;
    let msg = CSMessage::from_result(env, &result).encode(env);
    let sn = i128::try_from(request.sequence_no).map_err(|_| ContractError::Overflow)?;

    let tx_origin = env.current_contract_address();
    for connection in connections.iter() {
        connection::send(env, &tx_origin, &connection, &origin_nid, -sn, &msg);
    }
    Ok(())
}

fn emit_executed(env: &Env, req_id: u128, code: CSResponseType) {
    let msg = match code {
        CSResponseType::Success => "success",
        CSResponseType::Failure => "dapp call failed",
    };
    events::call_executed(env, req_id, code.code(), String::from_str(env, msg));
}
