//! Wallet Import Format
//!
//! Base58Check of `0x80 || secret(32) [|| 0x01]`. The trailing `0x01` marks
//! a key whose public key is used in compressed form and is written by
//! default.

use crate::encoding::{base58check_decode, base58check_encode};
use crate::error::{CipherError, Result};
use crate::keys::{SecretKey, SECRET_KEY_LEN};
use zeroize::Zeroize;

pub const WIF_TYPE_BYTE: u8 = 0x80;
pub const WIF_COMPRESSION_FLAG: u8 = 0x01;
pub const WIF_PAYLOAD_LEN: usize = 1 + SECRET_KEY_LEN;
pub const WIF_COMPRESSED_PAYLOAD_LEN: usize = WIF_PAYLOAD_LEN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifFormat {
    Compressed,
    Uncompressed,
}

impl WifFormat {
    pub fn from_compressed(compressed: bool) -> WifFormat {
        if compressed {
            WifFormat::Compressed
        } else {
            WifFormat::Uncompressed
        }
    }
}

pub fn encode_wif(secret_key: &SecretKey, format: WifFormat) -> String {
    let mut payload = Vec::with_capacity(WIF_COMPRESSED_PAYLOAD_LEN);
    payload.push(WIF_TYPE_BYTE);
    payload.extend_from_slice(secret_key.as_bytes());
    if format == WifFormat::Compressed {
        payload.push(WIF_COMPRESSION_FLAG);
    }
    let text = base58check_encode(&payload);
    payload.zeroize();
    text
}

pub fn decode_wif(text: &str) -> Result<(SecretKey, WifFormat)> {
    let mut payload = base58check_decode(text)?;
    let result = parse_payload(&payload);
    payload.zeroize();
    result
}

/// Compressed WIF of `secret_key`
pub fn wif_from_secret_key(secret_key: &SecretKey) -> String {
    encode_wif(secret_key, WifFormat::Compressed)
}

pub fn secret_key_from_wif(text: &str) -> Result<SecretKey> {
    decode_wif(text).map(|(secret_key, _)| secret_key)
}

fn parse_payload(payload: &[u8]) -> Result<(SecretKey, WifFormat)> {
    let format = match payload.len() {
        WIF_PAYLOAD_LEN => WifFormat::Uncompressed,
        WIF_COMPRESSED_PAYLOAD_LEN => WifFormat::Compressed,
        actual => {
            return Err(CipherError::WrongLength {
                expected: WIF_COMPRESSED_PAYLOAD_LEN,
                actual,
            })
        }
    };
    if payload[0] != WIF_TYPE_BYTE {
        return Err(CipherError::WrongKeyType(format!(
            "prefix {:#04x}, expected {WIF_TYPE_BYTE:#04x}",
            payload[0]
        )));
    }
    if format == WifFormat::Compressed && payload[WIF_PAYLOAD_LEN] != WIF_COMPRESSION_FLAG {
        return Err(CipherError::WrongKeyType(format!(
            "compression flag {:#04x}, expected {WIF_COMPRESSION_FLAG:#04x}",
            payload[WIF_PAYLOAD_LEN]
        )));
    }
    let secret_key = SecretKey::from_bytes(&payload[1..WIF_PAYLOAD_LEN])?;
    Ok((secret_key, format))
}
