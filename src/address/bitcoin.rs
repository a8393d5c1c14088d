//! Legacy Bitcoin (P2PKH) addresses
//!
//! Same hash and byte layout as native addresses, with version byte `0x00`
//! so the text form starts with `1`.

use crate::address::Address;
use crate::address::ADDRESS_BYTES_LEN;
use crate::encoding::base58_decode_fixed;
use crate::error::{CipherError, Result};
use crate::keys::PublicKey;

pub const BITCOIN_ADDRESS_VERSION: u8 = 0x00;

pub fn bitcoin_address_from_public_key(public_key: &PublicKey) -> Address {
    Address::with_version(BITCOIN_ADDRESS_VERSION, public_key)
}

pub fn bitcoin_address_string(public_key: &PublicKey) -> String {
    bitcoin_address_from_public_key(public_key).to_base58()
}

pub fn bitcoin_address_from_bytes(bytes: &[u8]) -> Result<Address> {
    let address = Address::from_bytes(bytes)?;
    if address.version != BITCOIN_ADDRESS_VERSION {
        return Err(CipherError::VersionMismatch {
            expected: BITCOIN_ADDRESS_VERSION,
            actual: address.version,
        });
    }
    Ok(address)
}

pub fn decode_bitcoin_address(text: &str) -> Result<Address> {
    let bytes = base58_decode_fixed(text, ADDRESS_BYTES_LEN)?;
    bitcoin_address_from_bytes(&bytes)
}

pub fn verify_bitcoin_address(address: &Address, public_key: &PublicKey) -> Result<()> {
    address.verify_with_version(BITCOIN_ADDRESS_VERSION, public_key)
}
