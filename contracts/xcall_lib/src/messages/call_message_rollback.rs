use soroban_sdk::{contracttype, vec, Bytes, Env};
use xcall_rlp::{decode_bytes, decode_list, encode_bytes, encode_list, RlpError};

use crate::errors::LibError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallMessageWithRollback {
    pub data: Bytes,
    pub rollback: Bytes,
}

impl CallMessageWithRollback {
    pub fn encode(&self, env: &Env) -> Bytes {
        encode_list(
            env,
            &vec![
                env,
                encode_bytes(env, &self.data),
                encode_bytes(env, &self.rollback),
            ],
        )
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, LibError> {
        let items = decode_list(env, encoded)?;
        if items.len() != 2 {
            return Err(RlpError::UnexpectedItemCount.into());
        }
        Ok(CallMessageWithRollback {
            data: decode_bytes(&items.get(0).ok_or(RlpError::InputTooShort)?)?,
            rollback: decode_bytes(&items.get(1).ok_or(RlpError::InputTooShort)?)?,
        })
    }
}
