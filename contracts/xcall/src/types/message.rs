use soroban_sdk::{vec, Bytes, Env};
use xcall_rlp::{decode_bytes, decode_list, decode_u8, encode_bytes, encode_list, encode_u8};

use super::{CSMessageRequest, CSMessageResult};
use crate::errors::ContractError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CSMessageType {
    Request = 1,
    Result = 2,
}

impl TryFrom<u8> for CSMessageType {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CSMessageType::Request),
            2 => Ok(CSMessageType::Result),
            _ => Err(ContractError::InvalidMessageType),
        }
    }
}

/// The unit exchanged between chains: a tagged, encoded request or result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CSMessage {
    pub message_type: CSMessageType,
    pub payload: Bytes,
}

impl CSMessage {
    pub fn from_request(env: &Env, request: &CSMessageRequest) -> Self {
        CSMessage {
            message_type: CSMessageType::Request,
            payload: request.encode(env),
        }
    }

    pub fn from_result(env: &Env, result: &CSMessageResult) -> Self {
        CSMessage {
            message_type: CSMessageType::Result,
            payload: result.encode(env),
        }
    }

    pub fn encode(&self, env: &Env) -> Bytes {
        encode_list(
            env,
            &vec![
                env,
                encode_u8(env, self.message_type as u8),
                encode_bytes(env, &self.payload),
            ],
        )
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, ContractError> {
        let items = decode_list(env, encoded)?;
        if items.len() != 2 {
            return Err(ContractError::DecodeFailed);
        }
        let message_type = items.get(0).ok_or(ContractError::DecodeFailed)?;
        let payload = items.get(1).ok_or(ContractError::DecodeFailed)?;
        Ok(CSMessage {
            message_type: CSMessageType::try_from(decode_u8(&message_type)?)?,
            payload: decode_bytes(&payload)?,
        })
    }
}
