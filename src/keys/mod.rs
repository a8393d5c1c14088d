//! Key value types and the curve provider
//!
//! This module holds the secret/public key value types and the
//! `KeyProvider` seam through which key generation and public key
//! derivation are injected.

pub mod key;
pub mod provider;

pub use key::{PublicKey, SecretKey, PUBLIC_KEY_LEN, SECRET_KEY_LEN};
pub use provider::{generate_deterministic_key_pair, KeyProvider, Secp256k1Provider};
