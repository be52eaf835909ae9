use soroban_sdk::{
    xdr::{FromXdr, ToXdr},
    Bytes, Env, String,
};

use crate::RlpError;

/// XDR discriminant of `ScVal::String`.
const SCV_STRING: u32 = 14;
const XDR_HEADER_LEN: u32 = 8;
/// Bytes copied out of the host per UTF-8 validation step.
const UTF8_CHUNK: usize = 64;

/// Minimal big-endian two's-complement bytes of an unsigned value.
///
/// A `0x00` pad is kept whenever the top bit of the first byte would be
/// set, so peers decoding into signed big integers read the same value.
pub fn uint_to_bytes(env: &Env, value: u128) -> Bytes {
    let mut buf = [0u8; 17];
    buf[1..].copy_from_slice(&value.to_be_bytes());
    Bytes::from_slice(env, trim_signed(&buf))
}

/// Minimal big-endian two's-complement bytes of a signed value.
pub fn int_to_bytes(env: &Env, value: i128) -> Bytes {
    let buf = value.to_be_bytes();
    Bytes::from_slice(env, trim_signed(&buf))
}

/// Minimal big-endian bytes with no sign pad. Zero is empty.
pub fn unsigned_to_bytes(env: &Env, value: u128) -> Bytes {
    let buf = value.to_be_bytes();
    let start = buf.iter().position(|b| *b != 0).unwrap_or(buf.len());
    Bytes::from_slice(env, &buf[start..])
}

/// Reads a sign-padded unsigned integer. Unpadded values with the top bit
/// set are read as magnitudes; redundant zero padding is rejected.
pub fn bytes_to_uint(bytes: &Bytes) -> Result<u128, RlpError> {
    let len = bytes.len();
    if len == 0 {
        return Ok(0);
    }
    if len > 17 {
        return Err(RlpError::Overflow);
    }
    let first = bytes.get(0).ok_or(RlpError::InputTooShort)?;
    if len > 1 && first == 0x00 {
        let next = bytes.get(1).ok_or(RlpError::InputTooShort)?;
        if next & 0x80 == 0 {
            return Err(RlpError::NonCanonicalInteger);
        }
    }
    if len == 17 && first != 0 {
        return Err(RlpError::Overflow);
    }

    let mut value: u128 = 0;
    for byte in bytes.iter() {
        value = (value << 8) | byte as u128;
    }
    Ok(value)
}

pub fn bytes_to_int(bytes: &Bytes) -> Result<i128, RlpError> {
    let len = bytes.len();
    if len == 0 {
        return Ok(0);
    }
    if len > 16 {
        return Err(RlpError::Overflow);
    }
    check_sign_padding(bytes)?;
    let first = bytes.get(0).ok_or(RlpError::InputTooShort)?;

    let mut value: i128 = if first & 0x80 != 0 { -1 } else { 0 };
    for byte in bytes.iter() {
        value = (value << 8) | byte as i128;
    }
    Ok(value)
}

/// Reads a scalar that must carry no leading zero bytes at all.
pub fn bytes_to_unsigned(bytes: &Bytes) -> Result<u128, RlpError> {
    if bytes.len() > 16 {
        return Err(RlpError::Overflow);
    }
    if bytes.get(0) == Some(0) {
        return Err(RlpError::NonCanonicalInteger);
    }
    let mut value: u128 = 0;
    for byte in bytes.iter() {
        value = (value << 8) | byte as u128;
    }
    Ok(value)
}

/// Raw UTF-8 bytes of a host string.
pub fn string_to_bytes(env: &Env, value: &String) -> Bytes {
    let xdr = value.clone().to_xdr(env);
    xdr.slice(XDR_HEADER_LEN..XDR_HEADER_LEN + value.len())
}

/// Builds a host string from UTF-8 bytes. The host does not validate
/// string contents, so malformed input is rejected here.
pub fn bytes_to_string(env: &Env, bytes: &Bytes) -> Result<String, RlpError> {
    check_utf8(bytes)?;
    let len = bytes.len();
    let mut xdr = Bytes::new(env);
    xdr.extend_from_array(&SCV_STRING.to_be_bytes());
    xdr.extend_from_array(&len.to_be_bytes());
    xdr.append(bytes);
    let padding = (4 - len % 4) % 4;
    for _ in 0..padding {
        xdr.push_back(0);
    }
    String::from_xdr(env, &xdr).map_err(|_| RlpError::InvalidString)
}

fn check_utf8(bytes: &Bytes) -> Result<(), RlpError> {
    // room for a chunk plus an incomplete sequence carried over from the last one
    let mut buf = [0u8; UTF8_CHUNK + 3];
    let mut carry = 0usize;
    let mut at = 0u32;
    while at < bytes.len() {
        let take = core::cmp::min(UTF8_CHUNK as u32, bytes.len() - at);
        let filled = carry + take as usize;
        bytes
            .slice(at..at + take)
            .copy_into_slice(&mut buf[carry..filled]);
        at += take;

        carry = match core::str::from_utf8(&buf[..filled]) {
            Ok(_) => 0,
            Err(err) if err.error_len().is_none() => {
                let valid = err.valid_up_to();
                buf.copy_within(valid..filled, 0);
                filled - valid
            }
            Err(_) => return Err(RlpError::InvalidString),
        };
    }
    if carry != 0 {
        return Err(RlpError::InvalidString);
    }
    Ok(())
}

fn check_sign_padding(bytes: &Bytes) -> Result<(), RlpError> {
    if bytes.len() < 2 {
        return Ok(());
    }
    let head = bytes.get(0).ok_or(RlpError::InputTooShort)?;
    let next = bytes.get(1).ok_or(RlpError::InputTooShort)?;
    if is_redundant(head, next) {
        return Err(RlpError::NonCanonicalInteger);
    }
    Ok(())
}

fn is_redundant(head: u8, next: u8) -> bool {
    (head == 0x00 && next & 0x80 == 0) || (head == 0xff && next & 0x80 != 0)
}

fn trim_signed(buf: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < buf.len() && is_redundant(buf[start], buf[start + 1]) {
        start += 1;
    }
    &buf[start..]
}
