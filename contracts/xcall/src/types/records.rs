use soroban_sdk::{contracttype, Address, Bytes, BytesN, String, Vec};
use xcall_lib::{MessageType, NetworkAddress};

use super::CSMessageRequest;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub network_id: String,
    /// Token fees are paid in.
    pub native_token: Address,
}

/// Kept per outbound rollback-capable call until it resolves.
///
/// `enabled` holds while the call is live. `executable` is set once a
/// failure result arrives and gates `execute_rollback`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RollbackRecord {
    pub sender: Address,
    pub to: NetworkAddress,
    pub protocols: Vec<String>,
    pub rollback: Bytes,
    pub enabled: bool,
    pub executable: bool,
}

/// Inbound request waiting for `execute_call`. Only the hash of the
/// payload is stored; the executor supplies the data again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyRequest {
    pub from: NetworkAddress,
    pub to: String,
    pub sequence_no: u128,
    pub msg_type: MessageType,
    pub data_hash: BytesN<32>,
    pub protocols: Vec<String>,
}

impl ProxyRequest {
    pub fn new(request: &CSMessageRequest, data_hash: BytesN<32>) -> Self {
        ProxyRequest {
            from: request.from.clone(),
            to: request.to.clone(),
            sequence_no: request.sequence_no,
            msg_type: request.msg_type,
            data_hash,
            protocols: request.protocols.clone(),
        }
    }
}
