use soroban_sdk::{contracttype, Bytes, Env, String};
use xcall_rlp::utils::{bytes_to_string, string_to_bytes};

use crate::errors::LibError;

const SEPARATOR: u8 = b'/';

/// An account on a named network, written `<network-id>/<account>`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkAddress(String);

impl NetworkAddress {
    pub fn new(env: &Env, nid: &String, account: &String) -> Result<Self, LibError> {
        let mut raw = string_to_bytes(env, nid);
        raw.push_back(SEPARATOR);
        raw.append(&string_to_bytes(env, account));
        Self::from_string(env, to_string(env, &raw)?)
    }

    /// Wraps `value` after checking it has exactly one separator and two
    /// non-empty parts.
    pub fn from_string(env: &Env, value: String) -> Result<Self, LibError> {
        let address = NetworkAddress(value);
        address.parse(env)?;
        Ok(address)
    }

    pub fn as_string(&self) -> &String {
        &self.0
    }

    pub fn nid(&self, env: &Env) -> Result<String, LibError> {
        Ok(self.parse(env)?.0)
    }

    pub fn account(&self, env: &Env) -> Result<String, LibError> {
        Ok(self.parse(env)?.1)
    }

    pub fn parse(&self, env: &Env) -> Result<(String, String), LibError> {
        let raw = string_to_bytes(env, &self.0);
        let mut split_at = None;
        for (i, byte) in raw.iter().enumerate() {
            if byte == SEPARATOR {
                if split_at.is_some() {
                    return Err(LibError::InvalidNetworkAddress);
                }
                split_at = Some(i as u32);
            }
        }

        let split_at = split_at.ok_or(LibError::InvalidNetworkAddress)?;
        if split_at == 0 || split_at + 1 >= raw.len() {
            return Err(LibError::InvalidNetworkAddress);
        }
        let nid = to_string(env, &raw.slice(..split_at))?;
        let account = to_string(env, &raw.slice(split_at + 1..))?;
        Ok((nid, account))
    }
}

fn to_string(env: &Env, raw: &Bytes) -> Result<String, LibError> {
    bytes_to_string(env, raw).map_err(|_| LibError::InvalidNetworkAddress)
}
