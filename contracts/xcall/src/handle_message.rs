use soroban_sdk::{Address, Bytes, Env, String};

use crate::{
    errors::ContractError,
    events, helpers, storage,
    storage::StorageKey,
    types::{
        CSMessage, CSMessageRequest, CSMessageResult, CSMessageType, CSResponseType, ProxyRequest,
        RollbackRecord,
    },
};

pub fn handle_message(
    env: &Env,
    sender: &Address,
    from_nid: String,
    msg: Bytes,
    sn: u128,
) -> Result<(), ContractError> {
    sender.require_auth();

    let config = storage::get_config(env)?;
    if from_nid == config.network_id {
        return Err(ContractError::ProtocolMismatch);
    }

    let cs_message = CSMessage::decode(env, &msg)?;
    match cs_message.message_type {
        CSMessageType::Request => handle_request(env, sender, &from_nid, sn, &cs_message.payload),
        CSMessageType::Result => {
            let result = CSMessageResult::decode(env, &cs_message.payload)?;
            if result.sequence_no != sn {
                return Err(ContractError::InvalidSequenceNo);
            }
            handle_result(env, sender, &result, &cs_message.payload)
        }
    }
}

/// Treats a message the connection could not deliver as a failed call.
pub fn handle_error(env: &Env, sender: &Address, sn: u128) -> Result<(), ContractError> {
    sender.require_auth();

    let result = CSMessageResult::new(sn, CSResponseType::Failure);
    let payload = result.encode(env);
    handle_result(env, sender, &result, &payload)
}

fn handle_request(
    env: &Env,
    sender: &Address,
    from_nid: &String,
    sn: u128,
    payload: &Bytes,
) -> Result<(), ContractError> {
    let request = CSMessageRequest::decode(env, payload)?;
    if request.sequence_no != sn {
        return Err(ContractError::InvalidSequenceNo);
    }
    let (src_nid, _) = request.from.parse(env)?;
    if src_nid != *from_nid {
        return Err(ContractError::ProtocolMismatch);
    }

    let sender = sender.to_string();
    if !helpers::is_valid_source(env, &sender, &src_nid, &request.protocols) {
        return Err(ContractError::ProtocolMismatch);
    }
    if request.protocols.len() > 1 {
        let key = StorageKey::PendingRequest(helpers::hash_data(env, payload));
        if !helpers::record_delivery(env, &key, &sender, &request.protocols) {
            return Ok(());
        }
    }

    store_request(env, &request)
}

fn handle_result(
    env: &Env,
    sender: &Address,
    result: &CSMessageResult,
    payload: &Bytes,
) -> Result<(), ContractError> {
    let sn = result.sequence_no;
    let mut record =
        storage::get_rollback(env, sn).map_err(|_| ContractError::MessageNotFound)?;

    let sender = sender.to_string();
    let (dst_nid, _) = record.to.parse(env)?;
    if !helpers::is_valid_source(env, &sender, &dst_nid, &record.protocols) {
        return Err(ContractError::ProtocolMismatch);
    }
    if record.protocols.len() > 1 {
        let key = StorageKey::PendingResponse(helpers::hash_data(env, payload));
        if !helpers::record_delivery(env, &key, &sender, &record.protocols) {
            return Ok(());
        }
    }
    if record.executable {
        return Err(ContractError::InvalidState);
    }

    events::response_message(env, sn, result.response_code.code());
    match result.response_code {
        CSResponseType::Success => {
            storage::remove_rollback(env, sn);
            storage::save_success(env, sn);
            if let Some(reply) = &result.message {
                handle_reply(env, &record, reply)?;
            }
        }
        CSResponseType::Failure => {
            record.executable = true;
            storage::store_rollback(env, sn, &record);
            events::rollback_message(env, sn);
        }
    }
    Ok(())
}

/// A success result may carry a call from the destination back to us.
fn handle_reply(env: &Env, record: &RollbackRecord, reply: &Bytes) -> Result<(), ContractError> {
    let mut request = CSMessageRequest::decode(env, reply)?;
    let (reply_nid, _) = request.from.parse(env)?;
    let (dst_nid, _) = record.to.parse(env)?;
    if reply_nid != dst_nid {
        return Err(ContractError::InvalidReply);
    }
    request.protocols = record.protocols.clone();
    store_request(env, &request)
}

fn store_request(env: &Env, request: &CSMessageRequest) -> Result<(), ContractError> {
    let req_id = storage::next_req_id(env)?;
    let data_hash = helpers::hash_data(env, &request.data);
    storage::store_proxy_request(env, req_id, &ProxyRequest::new(request, data_hash));

    events::call_message(
        env,
        request.from.as_string().clone(),
        request.to.clone(),
        request.sequence_no,
        req_id,
        request.data.clone(),
    );
    storage::extend_instance(env);
    Ok(())
}
