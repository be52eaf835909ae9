use soroban_sdk::{Bytes, Env, String, Vec};

use crate::{
    encoder::{LIST_OFFSET, SHORT_LIMIT, STRING_OFFSET},
    utils::{bytes_to_int, bytes_to_string, bytes_to_uint, bytes_to_unsigned},
    RlpError,
};

/// Null marker emitted by EVM and Java peers for absent byte strings.
pub const NULL_ITEM: [u8; 2] = [0xf8, 0x00];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Header {
    is_list: bool,
    header_len: u32,
    payload_len: u32,
}

impl Header {
    fn total_len(&self) -> u32 {
        self.header_len + self.payload_len
    }
}

fn read_header(input: &Bytes, at: u32) -> Result<Header, RlpError> {
    let prefix = input.get(at).ok_or(RlpError::InputTooShort)?;
    let header = match prefix {
        0x00..=0x7f => Header {
            is_list: false,
            header_len: 0,
            payload_len: 1,
        },
        0x80..=0xb7 => {
            let payload_len = (prefix - STRING_OFFSET) as u32;
            if payload_len == 1 {
                let byte = input.get(at + 1).ok_or(RlpError::InputTooShort)?;
                if byte < STRING_OFFSET {
                    return Err(RlpError::NonCanonicalSingleByte);
                }
            }
            Header {
                is_list: false,
                header_len: 1,
                payload_len,
            }
        }
        0xb8..=0xbf => {
            read_long_header(input, at, prefix - STRING_OFFSET - SHORT_LIMIT as u8, false)?
        }
        0xc0..=0xf7 => Header {
            is_list: true,
            header_len: 1,
            payload_len: (prefix - LIST_OFFSET) as u32,
        },
        0xf8 if input.get(at + 1) == Some(NULL_ITEM[1]) => Header {
            is_list: true,
            header_len: 2,
            payload_len: 0,
        },
        0xf8..=0xff => {
            read_long_header(input, at, prefix - LIST_OFFSET - SHORT_LIMIT as u8, true)?
        }
    };

    let end = at
        .checked_add(header.total_len())
        .ok_or(RlpError::Overflow)?;
    if end > input.len() {
        return Err(RlpError::InputTooShort);
    }
    Ok(header)
}

fn read_long_header(
    input: &Bytes,
    at: u32,
    len_of_len: u8,
    is_list: bool,
) -> Result<Header, RlpError> {
    if len_of_len > 4 {
        return Err(RlpError::Overflow);
    }
    let mut payload_len: u32 = 0;
    for i in 0..len_of_len as u32 {
        let byte = input.get(at + 1 + i).ok_or(RlpError::InputTooShort)?;
        if i == 0 && byte == 0 {
            return Err(RlpError::LeadingZeroLength);
        }
        payload_len = (payload_len << 8) | byte as u32;
    }
    if payload_len <= SHORT_LIMIT {
        return Err(RlpError::NonCanonicalSize);
    }
    Ok(Header {
        is_list,
        header_len: 1 + len_of_len as u32,
        payload_len,
    })
}

fn read_item(input: &Bytes) -> Result<Header, RlpError> {
    let header = read_header(input, 0)?;
    if header.total_len() != input.len() {
        return Err(RlpError::TrailingBytes);
    }
    Ok(header)
}

pub fn decode_bytes(input: &Bytes) -> Result<Bytes, RlpError> {
    let header = read_item(input)?;
    if header.is_list {
        return Err(RlpError::ExpectedBytes);
    }
    Ok(input.slice(header.header_len..header.total_len()))
}

/// Splits a list into the raw encodings of its items.
pub fn decode_list(env: &Env, input: &Bytes) -> Result<Vec<Bytes>, RlpError> {
    let header = read_item(input)?;
    if !header.is_list {
        return Err(RlpError::ExpectedList);
    }

    let mut items = Vec::new(env);
    let mut at = header.header_len;
    while at < input.len() {
        let item = read_header(input, at)?;
        let end = at + item.total_len();
        items.push_back(input.slice(at..end));
        at = end;
    }
    Ok(items)
}

pub fn decode_u8(input: &Bytes) -> Result<u8, RlpError> {
    u8::try_from(decode_u128(input)?).map_err(|_| RlpError::Overflow)
}

pub fn decode_u128(input: &Bytes) -> Result<u128, RlpError> {
    bytes_to_uint(&decode_bytes(input)?)
}

pub fn decode_i128(input: &Bytes) -> Result<i128, RlpError> {
    bytes_to_int(&decode_bytes(input)?)
}

pub fn decode_scalar(input: &Bytes) -> Result<u128, RlpError> {
    bytes_to_unsigned(&decode_bytes(input)?)
}

pub fn decode_string(env: &Env, input: &Bytes) -> Result<String, RlpError> {
    bytes_to_string(env, &decode_bytes(input)?)
}

pub fn decode_strings(env: &Env, input: &Bytes) -> Result<Vec<String>, RlpError> {
    let mut values = Vec::new(env);
    for item in decode_list(env, input)?.iter() {
        values.push_back(decode_string(env, &item)?);
    }
    Ok(values)
}

/// Decodes a byte string that peers may send as the `0xf800` null marker.
pub fn decode_nullable(input: &Bytes) -> Result<Option<Bytes>, RlpError> {
    if input.len() == NULL_ITEM.len() as u32
        && input.get(0) == Some(NULL_ITEM[0])
        && input.get(1) == Some(NULL_ITEM[1])
    {
        return Ok(None);
    }
    decode_bytes(input).map(Some)
}
