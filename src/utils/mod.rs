//! Utility functions and helpers
//!
//! This module contains the digest primitives and hex helpers shared by
//! the codec, address and key modules.

pub mod crypto;
pub mod hex;

pub use crypto::{checksum, double_sha256, hash160, ripemd160_digest, sha256_digest};
pub use hex::{decode_hex_fixed, encode_hex};
