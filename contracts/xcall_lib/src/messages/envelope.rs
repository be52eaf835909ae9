use soroban_sdk::{contracttype, vec, Bytes, Env, String, Vec};
use xcall_rlp::{
    decode_bytes, decode_list, decode_strings, decode_u8, encode_bytes, encode_list,
    encode_strings, encode_u8, RlpError,
};

use super::{AnyMessage, MessageType};
use crate::errors::LibError;

/// Outbound message together with the connections it travels through.
///
/// `sources` are local connection addresses. `destinations` name the
/// connections the destination chain should expect the message from.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    pub message: AnyMessage,
    pub sources: Vec<String>,
    pub destinations: Vec<String>,
}

impl Envelope {
    pub fn message_type(&self) -> MessageType {
        self.message.message_type()
    }

    pub fn encode(&self, env: &Env) -> Bytes {
        let items = vec![
            env,
            encode_u8(env, self.message_type().as_u8()),
            encode_bytes(env, &self.message.encode(env)),
            encode_strings(env, &self.sources),
            encode_strings(env, &self.destinations),
        ];
        encode_list(env, &items)
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, LibError> {
        let items = decode_list(env, encoded)?;
        if items.len() != 4 {
            return Err(RlpError::UnexpectedItemCount.into());
        }
        let item = |i: u32| items.get(i).ok_or(RlpError::InputTooShort);

        let msg_type = MessageType::try_from(decode_u8(&item(0)?)?)?;
        let message = AnyMessage::decode(env, msg_type, &decode_bytes(&item(1)?)?)?;
        Ok(Envelope {
            message,
            sources: decode_strings(env, &item(2)?)?,
            destinations: decode_strings(env, &item(3)?)?,
        })
    }
}
