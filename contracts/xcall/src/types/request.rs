use soroban_sdk::{vec, Bytes, Env, String, Vec};
use xcall_lib::{MessageType, NetworkAddress};
use xcall_rlp::{
    decode_bytes, decode_list, decode_string, decode_strings, decode_u128, decode_u8,
    encode_bytes, encode_list, encode_string, encode_strings, encode_u128, encode_u8,
};

use crate::errors::ContractError;

/// A call travelling from `from` to the account `to` on the receiving chain.
///
/// `protocols` lists the connections the receiving chain must see the
/// request through.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CSMessageRequest {
    pub from: NetworkAddress,
    pub to: String,
    pub sequence_no: u128,
    pub msg_type: MessageType,
    pub data: Bytes,
    pub protocols: Vec<String>,
}

impl CSMessageRequest {
    pub fn encode(&self, env: &Env) -> Bytes {
        let items = vec![
            env,
            encode_string(env, self.from.as_string()),
            encode_string(env, &self.to),
            encode_u128(env, self.sequence_no),
            encode_u8(env, self.msg_type.as_u8()),
            encode_bytes(env, &self.data),
            encode_strings(env, &self.protocols),
        ];
        encode_list(env, &items)
    }

    pub fn decode(env: &Env, encoded: &Bytes) -> Result<Self, ContractError> {
        let items = decode_list(env, encoded)?;
        if items.len() != 6 {
            return Err(ContractError::DecodeFailed);
        }
        let item = |i: u32| items.get(i).ok_or(ContractError::DecodeFailed);

        let from = decode_string(env, &item(0)?)?;
        Ok(CSMessageRequest {
            from: NetworkAddress::from_string(env, from)?,
            to: decode_string(env, &item(1)?)?,
            sequence_no: decode_u128(&item(2)?)?,
            msg_type: MessageType::try_from(decode_u8(&item(3)?)?)?,
            data: decode_bytes(&item(4)?)?,
            protocols: decode_strings(env, &item(5)?)?,
        })
    }
}
