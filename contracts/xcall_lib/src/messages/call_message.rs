use soroban_sdk::{contracttype, vec, Bytes, Env};
use xcall_rlp::{decode_bytes, decode_list, encode_bytes, encode_list, RlpError};

use crate::errors::LibError;

/// Fire-and-forget payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallMessage {
    pub data: Bytes,
}

impl CallMessage {
    pub fn encode(&self, env: &Env) -> Bytes {
        encode_list(env, &vec![env, encode_bytes(env, &self.data)])
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, LibError> {
        let items = decode_list(env, encoded)?;
        if items.len() != 1 {
            return Err(RlpError::UnexpectedItemCount.into());
        }
        let data = decode_bytes(&items.get(0).ok_or(RlpError::InputTooShort)?)?;
        Ok(CallMessage { data })
    }
}
