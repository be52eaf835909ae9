use soroban_sdk::{contracttype, vec, Bytes, Env};
use xcall_rlp::{decode_bytes, decode_list, encode_bytes, encode_list, RlpError};

use crate::errors::LibError;

/// Payload whose request stays stored until the destination executes it
/// successfully.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallMessagePersisted {
    pub data: Bytes,
}

impl CallMessagePersisted {
    pub fn encode(&self, env: &Env) -> Bytes {
        encode_list(env, &vec![env, encode_bytes(env, &self.data)])
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, LibError> {
        let items = decode_list(env, encoded)?;
        if items.len() != 1 {
            return Err(RlpError::UnexpectedItemCount.into());
        }
        let data = decode_bytes(&items.get(0).ok_or(RlpError::InputTooShort)?)?;
        Ok(CallMessagePersisted { data })
    }
}
