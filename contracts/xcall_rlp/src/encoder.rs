use soroban_sdk::{Bytes, Env, String, Vec};

use crate::utils::{int_to_bytes, string_to_bytes, uint_to_bytes, unsigned_to_bytes};

pub const STRING_OFFSET: u8 = 0x80;
pub const LIST_OFFSET: u8 = 0xc0;
pub const SHORT_LIMIT: u32 = 55;

pub fn encode_bytes(env: &Env, value: &Bytes) -> Bytes {
    if value.len() == 1 {
        if let Some(byte) = value.get(0) {
            if byte < STRING_OFFSET {
                return value.clone();
            }
        }
    }
    let mut out = encode_length(env, value.len(), STRING_OFFSET);
    out.append(value);
    out
}

/// Wraps already encoded items into a list.
pub fn encode_list(env: &Env, items: &Vec<Bytes>) -> Bytes {
    let mut payload = Bytes::new(env);
    for item in items.iter() {
        payload.append(&item);
    }
    let mut out = encode_length(env, payload.len(), LIST_OFFSET);
    out.append(&payload);
    out
}

pub fn encode_length(env: &Env, len: u32, offset: u8) -> Bytes {
    let mut header = Bytes::new(env);
    if len <= SHORT_LIMIT {
        header.push_back(offset + len as u8);
    } else {
        let len_bytes = unsigned_to_bytes(env, len as u128);
        header.push_back(offset + SHORT_LIMIT as u8 + len_bytes.len() as u8);
        header.append(&len_bytes);
    }
    header
}

pub fn encode_u8(env: &Env, value: u8) -> Bytes {
    encode_u128(env, value as u128)
}

pub fn encode_u128(env: &Env, value: u128) -> Bytes {
    encode_bytes(env, &uint_to_bytes(env, value))
}

pub fn encode_i128(env: &Env, value: i128) -> Bytes {
    encode_bytes(env, &int_to_bytes(env, value))
}

/// Plain RLP scalar: no sign pad, zero is the empty string.
pub fn encode_scalar(env: &Env, value: u128) -> Bytes {
    encode_bytes(env, &unsigned_to_bytes(env, value))
}

pub fn encode_string(env: &Env, value: &String) -> Bytes {
    encode_bytes(env, &string_to_bytes(env, value))
}

pub fn encode_strings(env: &Env, values: &Vec<String>) -> Bytes {
    let mut items = Vec::new(env);
    for value in values.iter() {
        items.push_back(encode_string(env, &value));
    }
    encode_list(env, &items)
}
