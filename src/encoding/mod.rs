//! Base58Check text encoding
//!
//! Strict Base58 decoding (no whitespace, no non-canonical padding) and the
//! double-SHA256 checksum layer shared by addresses and WIF keys.

pub mod base58check;

pub use base58check::{
    base58_decode, base58_decode_fixed, base58_encode, base58check_decode, base58check_decode_len,
    base58check_encode, strip_checksum, ALPHABET,
};
