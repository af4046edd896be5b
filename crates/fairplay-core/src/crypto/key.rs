//! Per-round secret key and its generator.

use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a secret key in bytes
pub const KEY_LEN: usize = 32;

/// 32 random bytes keying the commitment of a single round.
///
/// The key is shown to the player as 64 lowercase hex characters, and that
/// hex text (not the raw bytes) is the HMAC key material, so a player can
/// paste the disclosed key into any HMAC-SHA256 tool and reproduce the
/// commitment.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the 64-character hex form shown to players
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| Error::InvalidKey(e.to_string()))?;
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            Error::InvalidKey(format!("expected {} bytes, got {}", KEY_LEN, v.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Lowercase hex encoding, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Bytes fed to the MAC as its key
    pub(crate) fn mac_key_material(&self) -> Vec<u8> {
        self.to_hex().into_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SecretKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_hex().serialize(s)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Draws fresh keys from a cryptographically secure source.
///
/// There is no fallback: if the source fails, key generation fails with
/// [`Error::CryptoUnavailable`].
pub struct KeyGenerator<R> {
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Generator backed by the operating system's entropy source
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce a fresh 32-byte key
    pub fn generate_key(&mut self) -> Result<SecretKey> {
        generate_key_with(&mut self.rng)
    }
}

/// Produce a fresh key from a borrowed secure generator
pub fn generate_key_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<SecretKey> {
    let mut bytes = [0u8; KEY_LEN];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| Error::CryptoUnavailable(e.to_string()))?;
    tracing::debug!(len = KEY_LEN, "generated secret key");
    Ok(SecretKey(bytes))
}
