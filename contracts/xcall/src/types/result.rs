use soroban_sdk::{vec, Bytes, Env};
use xcall_rlp::{
    decode_list, decode_nullable, decode_u128, decode_u8, encode_bytes, encode_list, encode_u128,
    encode_u8,
};

use crate::errors::ContractError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CSResponseType {
    Failure = 0,
    Success = 1,
}

impl CSResponseType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u8> for CSResponseType {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CSResponseType::Failure),
            1 => Ok(CSResponseType::Success),
            _ => Err(ContractError::InvalidResponseCode),
        }
    }
}

/// Outcome of a rollback-capable call, sent back to the origin chain.
///
/// `message` optionally carries an encoded reply `CSMessageRequest`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CSMessageResult {
    pub sequence_no: u128,
    pub response_code: CSResponseType,
    pub message: Option<Bytes>,
}

impl CSMessageResult {
    pub fn new(sequence_no: u128, response_code: CSResponseType) -> Self {
        CSMessageResult {
            sequence_no,
            response_code,
            message: None,
        }
    }

    pub fn encode(&self, env: &Env) -> Bytes {
        let message = self.message.clone().unwrap_or_else(|| Bytes::new(env));
        encode_list(
            env,
            &vec![
                env,
                encode_u128(env, self.sequence_no),
                encode_u8(env, self.response_code as u8),
                encode_bytes(env, &message),
            ],
        )
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, ContractError> {
        let items = decode_list(env, encoded)?;
        if items.len() < 2 || items.len() > 3 {
            return Err(ContractError::DecodeFailed);
        }
        let item = |i: u32| items.get(i).ok_or(ContractError::DecodeFailed);

        let message = match items.get(2) {
            Some(raw) => decode_nullable(&raw)?.filter(|data| !data.is_empty()),
            None => None,
        };
        Ok(CSMessageResult {
            sequence_no: decode_u128(&item(0)?)?,
            response_code: CSResponseType::try_from(decode_u8(&item(1)?)?)?,
            message,
        })
    }
}
