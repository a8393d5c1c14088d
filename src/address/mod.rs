//! Address derivation, serialization and verification
//!
//! Native addresses and their Bitcoin-compatible counterparts share one
//! `Address` type; they differ only in the version byte.

#[allow(clippy::module_inception)]
pub mod address;
pub mod bitcoin;

pub use address::{
    hash_pub_key, Address, ADDRESS_BYTES_LEN, ADDRESS_CHECK_SUM_LEN, ADDRESS_HASH_LEN,
    ADDRESS_VERSION,
};
pub use bitcoin::{
    bitcoin_address_from_bytes, bitcoin_address_from_public_key, bitcoin_address_string,
    decode_bitcoin_address, verify_bitcoin_address, BITCOIN_ADDRESS_VERSION,
};
