use crate::error::{CipherError, Result};
use crate::utils::{decode_hex_fixed, encode_hex};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const SECRET_KEY_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 33;

/// secp256k1 group order, big-endian
const CURVE_ORDER: [u8; SECRET_KEY_LEN] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// A 32-byte secret scalar, nonzero and below the curve order.
///
/// The bytes are wiped when the key goes out of scope and never show up in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<SecretKey> {
        let bytes: [u8; SECRET_KEY_LEN] =
            bytes.try_into().map_err(|_| CipherError::WrongLength {
                expected: SECRET_KEY_LEN,
                actual: bytes.len(),
            })?;
        Self::from_array(bytes)
    }

    pub fn from_array(bytes: [u8; SECRET_KEY_LEN]) -> Result<SecretKey> {
        if bytes.iter().all(|b| *b == 0) {
            return Err(CipherError::InvalidSecretKey("key is zero".to_string()));
        }
        // big-endian arrays of equal width compare like the integers they hold
        if bytes >= CURVE_ORDER {
            return Err(CipherError::InvalidSecretKey(
                "key is not below the curve order".to_string(),
            ));
        }
        Ok(SecretKey(bytes))
    }

    pub fn from_hex(text: &str) -> Result<SecretKey> {
        let bytes = decode_hex_fixed::<SECRET_KEY_LEN>(text)?;
        Self::from_array(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// A 33-byte compressed curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<PublicKey> {
        let bytes: [u8; PUBLIC_KEY_LEN] =
            bytes.try_into().map_err(|_| CipherError::WrongLength {
                expected: PUBLIC_KEY_LEN,
                actual: bytes.len(),
            })?;
        Self::from_array(bytes)
    }

    pub fn from_array(bytes: [u8; PUBLIC_KEY_LEN]) -> Result<PublicKey> {
        match bytes[0] {
            0x02 | 0x03 => Ok(PublicKey(bytes)),
            prefix => Err(CipherError::InvalidPublicKey(format!(
                "unexpected prefix {prefix:#04x}, expected compressed point"
            ))),
        }
    }

    pub fn from_hex(text: &str) -> Result<PublicKey> {
        let bytes = decode_hex_fixed::<PUBLIC_KEY_LEN>(text)?;
        Self::from_array(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
