//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey and KeyGenerator for per-round keys
//! - Commitment, the HMAC-SHA256 of the opponent's move under that key

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::{generate_key_with, KeyGenerator, SecretKey, KEY_LEN};
