use soroban_sdk::{Address, Bytes, Env, String, Vec};
use xcall_lib::{Envelope, NetworkAddress};

use crate::{
    connection,
    errors::ContractError,
    events, helpers, storage,
    storage::{MAX_DATA_SIZE, MAX_ROLLBACK_SIZE},
    types::{CSMessage, CSMessageRequest, RollbackRecord},
};

pub fn send_call(
    env: &Env,
    tx_origin: &Address,
    sender: &Address,
    envelope: Envelope,
    to: String,
) -> Result<u128, ContractError> {
    tx_origin.require_auth();
    sender.require_auth();

    let config = storage::get_config(env)?;
    let to = NetworkAddress::from_string(env, to)?;
    let (nid, account) = to.parse(env)?;
    if nid == config.network_id {
        return Err(ContractError::InvalidNetworkAddress);
    }

    let needs_response = envelope.message_type().is_rollback();
    let rollback = envelope.message.rollback();
    validate_payload(env, sender, &envelope, &rollback)?;

    let connections = connection::resolve(env, &nid, &envelope.sources)?;
    let fee = connection::total_fee(env, &nid, needs_response, &connections)?;
    helpers::ensure_balance(env, &config.native_token, tx_origin, fee)?;

    let sn = storage::next_sn(env)?;
    if let Some(rollback) = rollback {
        let record = RollbackRecord {
            sender: sender.clone(),
            to: to.clone(),
            protocols: envelope.sources.clone(),
            rollback,
            enabled: true,
            executable: false,
        };
        storage::store_rollback(env, sn, &record);
    }

    let request = CSMessageRequest {
        from: helpers::network_address_of(env, sender)?,
        to: account,
        sequence_no: sn,
        msg_type: envelope.message_type(),
        data: envelope.message.data(),
        protocols: remote_protocols(&envelope),
    };
    let msg = CSMessage::from_request(env, &request).encode(env);

    let connection_sn = if needs_response {
        i128::try_from(sn).map_err(|_| ContractError::Overflow)?
    } else {
        0
    };
    for connection in connections.iter() {
        connection::send(env, tx_origin, &connection, &nid, connection_sn, &msg);
    }

    let protocol_fee = storage::get_protocol_fee(env);
    let fee_handler = storage::get_fee_handler(env)?;
    helpers::transfer_token(env, &config.native_token, tx_origin, &fee_handler, protocol_fee)?;

    events::call_message_sent(env, sender.clone(), to.as_string().clone(), sn);
    storage::extend_instance(env);
    Ok(sn)
}

/// Protocol fee plus what every selected connection charges for `nid`.
pub fn get_fee(
    env: &Env,
    nid: &String,
    rollback: bool,
    sources: Option<Vec<String>>,
) -> Result<u128, ContractError> {
    let sources = sources.unwrap_or_else(|| Vec::new(env));
    let connections = connection::resolve(env, nid, &sources)?;
    connection::total_fee(env, nid, rollback, &connections)
}

fn validate_payload(
    env: &Env,
    sender: &Address,
    envelope: &Envelope,
    rollback: &Option<Bytes>,
) -> Result<(), ContractError> {
    if envelope.message.data().len() > MAX_DATA_SIZE {
        return Err(ContractError::MaxDataSizeExceeded);
    }
    if let Some(rollback) = rollback {
        if rollback.len() > MAX_ROLLBACK_SIZE {
            return Err(ContractError::MaxRollbackSizeExceeded);
        }
        if !helpers::is_contract(env, sender) {
            return Err(ContractError::RollbackNotPossible);
        }
    }
    Ok(())
}

/// The receiving chain authenticates deliveries against the connections
/// named here: the remote identifiers when given, otherwise the sources.
fn remote_protocols(envelope: &Envelope) -> Vec<String> {
    if envelope.destinations.is_empty() {
        envelope.sources.clone()
    } else {
        envelope.destinations.clone()
    }
}
