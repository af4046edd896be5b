//! Keyed commitment over a move name.

use super::SecretKey;
use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to `message` under `key`. Deterministic in both arguments.
    pub fn new(message: &str, key: &SecretKey) -> Result<Self> {
        let mut mac = keyed_mac(key)?;
        mac.update(message.as_bytes());
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Parse a 64-character hex digest
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| Error::InvalidKey(e.to_string()))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            Error::InvalidKey(format!("commitment must be 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Verify that the given message and key produce this commitment.
    /// The digest comparison is constant time.
    pub fn verify(&self, message: &str, key: &SecretKey) -> Result<bool> {
        let mut mac = keyed_mac(key)?;
        mac.update(message.as_bytes());
        Ok(mac.verify_slice(&self.0).is_ok())
    }
}

fn keyed_mac(key: &SecretKey) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(&key.mac_key_material())
        .map_err(|e| Error::CryptoUnavailable(e.to_string()))
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Commitment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        hex::encode(self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}
