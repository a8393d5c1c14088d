use crate::encoding::{base58_decode_fixed, base58_encode, strip_checksum};
use crate::error::{CipherError, Result};
use crate::keys::{KeyProvider, PublicKey, SecretKey};
use crate::utils::crypto::{CHECKSUM_LEN, RIPEMD160_LEN};
use crate::utils::{checksum, encode_hex, hash160};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Version byte of native addresses
pub const ADDRESS_VERSION: u8 = 0x3F;
pub const ADDRESS_HASH_LEN: usize = RIPEMD160_LEN;
pub const ADDRESS_CHECK_SUM_LEN: usize = CHECKSUM_LEN;
/// version(1) + hash(20) + checksum(4)
pub const ADDRESS_BYTES_LEN: usize = 1 + ADDRESS_HASH_LEN + ADDRESS_CHECK_SUM_LEN;

/// A versioned public key hash. Two addresses are equal iff their version
/// and hash bytes are equal; the checksum is always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub version: u8,
    pub hash: [u8; ADDRESS_HASH_LEN],
}

impl Address {
    /// Native address of `public_key`
    pub fn from_public_key(public_key: &PublicKey) -> Address {
        Self::with_version(ADDRESS_VERSION, public_key)
    }

    pub(crate) fn with_version(version: u8, public_key: &PublicKey) -> Address {
        let address = Address {
            version,
            hash: hash_pub_key(public_key),
        };
        log::debug!(
            "derived address version {version:#04x} hash {}",
            encode_hex(&address.hash)
        );
        address
    }

    /// Native address of the public key derived from `secret_key`
    pub fn from_secret_key<P: KeyProvider + ?Sized>(
        provider: &P,
        secret_key: &SecretKey,
    ) -> Result<Address> {
        let public_key = provider.derive_public_key(secret_key)?;
        Ok(Self::from_public_key(&public_key))
    }

    pub fn checksum(&self) -> [u8; ADDRESS_CHECK_SUM_LEN] {
        checksum(&self.versioned_hash())
    }

    /// `version || hash || checksum`
    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES_LEN] {
        let mut out = [0u8; ADDRESS_BYTES_LEN];
        out[..=ADDRESS_HASH_LEN].copy_from_slice(&self.versioned_hash());
        out[ADDRESS_HASH_LEN + 1..].copy_from_slice(&self.checksum());
        out
    }

    /// Parse the 25-byte form. The version byte is not checked here, only
    /// the length and the checksum; see [`Address::verify`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Address> {
        if bytes.len() != ADDRESS_BYTES_LEN {
            return Err(CipherError::WrongLength {
                expected: ADDRESS_BYTES_LEN,
                actual: bytes.len(),
            });
        }
        let payload = strip_checksum(bytes)?;
        let mut hash = [0u8; ADDRESS_HASH_LEN];
        hash.copy_from_slice(&payload[1..]);
        Ok(Address {
            version: payload[0],
            hash,
        })
    }

    pub fn to_base58(&self) -> String {
        base58_encode(&self.to_bytes())
    }

    pub fn decode_base58(text: &str) -> Result<Address> {
        let bytes = base58_decode_fixed(text, ADDRESS_BYTES_LEN)?;
        Self::from_bytes(&bytes)
    }

    /// Check that this is a native address minted from `public_key`.
    pub fn verify(&self, public_key: &PublicKey) -> Result<()> {
        self.verify_with_version(ADDRESS_VERSION, public_key)
    }

    pub(crate) fn verify_with_version(&self, version: u8, public_key: &PublicKey) -> Result<()> {
        if self.version != version {
            return Err(CipherError::VersionMismatch {
                expected: version,
                actual: self.version,
            });
        }
        if Self::with_version(version, public_key) != *self {
            return Err(CipherError::HashMismatch);
        }
        Ok(())
    }

    fn versioned_hash(&self) -> [u8; ADDRESS_HASH_LEN + 1] {
        let mut payload = [0u8; ADDRESS_HASH_LEN + 1];
        payload[0] = self.version;
        payload[1..].copy_from_slice(&self.hash);
        payload
    }
}

pub fn hash_pub_key(public_key: &PublicKey) -> [u8; ADDRESS_HASH_LEN] {
    hash160(public_key.as_bytes())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for Address {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Address::decode_base58(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Address::decode_base58(&text).map_err(serde::de::Error::custom)
    }
}
