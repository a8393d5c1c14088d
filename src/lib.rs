//! # Architect Cipher - Addresses and Key Interchange
//!
//! This is the identity layer I split out of my blockchain: everything that
//! turns a public key into an address and back, plus the Wallet Import
//! Format for secret keys.
//!
//! ## What I Built
//! - **Base58Check Codec**: strict decoder that refuses whitespace, stray
//!   characters and non-canonical leading `1`s before it even looks at the
//!   checksum
//! - **Addresses**: `version || RIPEMD160(SHA256(pk)) || checksum`, native
//!   (version `0x3F`) and Bitcoin-compatible (version `0x00`)
//! - **Verification**: confirms a public key really minted a given address
//! - **WIF**: Bitcoin private key interchange, compressed by default
//! - **Key Provider**: secp256k1 behind a trait so the curve can be swapped
//!   or stubbed out in tests
//!
//! ## How I Organized My Code
//! - `encoding/`: Base58 and Base58Check
//! - `address/`: the `Address` type, its byte/text forms and the Bitcoin variant
//! - `keys/`: secret/public key value types and the `KeyProvider` trait
//! - `wif/`: Wallet Import Format
//! - `utils/`: SHA256, RIPEMD160 and hex helpers
//! - `config/`: environment-driven settings for the CLI
//! - `cli/`: command-line parsing and key reports
//!
//! ## Things To Remember
//! - Everything is a pure function of its inputs; share a provider across
//!   threads freely
//! - Address equality is byte equality of version and hash
//! - Round trip `Address::decode_base58(&a.to_base58()) == a` must always hold

pub mod address;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod utils;
pub mod wif;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use address::{
    bitcoin_address_from_bytes, bitcoin_address_from_public_key, bitcoin_address_string,
    decode_bitcoin_address, hash_pub_key, verify_bitcoin_address, Address, ADDRESS_BYTES_LEN,
    ADDRESS_CHECK_SUM_LEN, ADDRESS_HASH_LEN, ADDRESS_VERSION, BITCOIN_ADDRESS_VERSION,
};
pub use cli::{bulk_round_trip, Command, KeyReport, Opt, SchemeArg};
pub use config::{Config, GLOBAL_CONFIG};
pub use encoding::{
    base58_decode, base58_decode_fixed, base58_encode, base58check_decode, base58check_decode_len,
    base58check_encode,
};
pub use error::{CipherError, Result};
pub use keys::{
    generate_deterministic_key_pair, KeyProvider, PublicKey, Secp256k1Provider, SecretKey,
};
pub use wif::{
    decode_wif, encode_wif, secret_key_from_wif, wif_from_secret_key, WifFormat, WIF_TYPE_BYTE,
};
