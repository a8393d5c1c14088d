//! Test utilities for address and key testing

use crate::error::{CipherError, Result};
use crate::keys::{KeyProvider, PublicKey, SecretKey};
use std::sync::Mutex;

pub const VECTOR_SECRET_KEY_HEX: &str =
    "47f7616ea6f9b923076625b4488115de1ef1187f760e65f89eb6f4f7ff04b012";
pub const VECTOR_PUBLIC_KEY_HEX: &str =
    "032596957532fc37e40486b910802ff45eeaa924548c0e1c080ef804e523ec3ed3";
pub const VECTOR_BITCOIN_ADDRESS: &str = "19ck9VKC6KjGxR9LJg4DNMRc45qFrJguvV";
pub const VECTOR_NATIVE_ADDRESS: &str = "SVukBL6LpgvUUivnr73HvFaAhs4ggrr3Q6";
pub const VECTOR_WIF: &str = "KydbzBtk6uc7M6dXwEgTEH2sphZxSPbmDSz6kUUHi4eUpSQuhEbq";

/// One secret key with everything derived from it
pub struct KeyVector {
    pub secret_key_hex: &'static str,
    pub public_key_hex: &'static str,
    pub bitcoin_address: &'static str,
    pub native_address: &'static str,
    pub wif: &'static str,
}

pub fn known_vectors() -> Vec<KeyVector> {
    vec![
        KeyVector {
            secret_key_hex: VECTOR_SECRET_KEY_HEX,
            public_key_hex: VECTOR_PUBLIC_KEY_HEX,
            bitcoin_address: VECTOR_BITCOIN_ADDRESS,
            native_address: VECTOR_NATIVE_ADDRESS,
            wif: VECTOR_WIF,
        },
        KeyVector {
            secret_key_hex: "1111111111111111111111111111111111111111111111111111111111111111",
            public_key_hex: "034f355bdcb7cc0af728ef3cceb9615d90684bb5b2ca5f859ab0f0b704075871aa",
            bitcoin_address: "1Q1pE5vPGEEMqRcVRMbtBK842Y6Pzo6nK9",
            native_address: "SkJpFvhXzbRZMjPwxnaxjDGcgKKpq7ad5d",
            wif: "KwntMbt59tTsj8xqpqYqRRWufyjGunvhSyeMo3NTYpFYzZbXJ5Hp",
        },
        KeyVector {
            secret_key_hex: "dddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddd",
            public_key_hex: "02ed83704c95d829046f1ac27806211132102c34e9ac7ffa1b71110658e5b9d1bd",
            bitcoin_address: "1NKRhS7iYUGTaAfaR5z8BueAJesqaTyc4a",
            native_address: "SicRjGtsGqTf6UT2xWyCjonixS7GMkeYUF",
            wif: "L4ezQvyC6QoBhxB4GVs9fAPhUKtbaXYUn8YTqoeXwbevQq4U92vN",
        },
    ]
}

/// Key provider that serves the known vectors.
///
/// `generate_key_pair` hands out the vectors in order and wraps around;
/// `derive_public_key` only knows the vector secret keys.
pub struct FixedKeyProvider {
    next: Mutex<usize>,
}

impl Default for FixedKeyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedKeyProvider {
    pub fn new() -> FixedKeyProvider {
        FixedKeyProvider {
            next: Mutex::new(0),
        }
    }
}

impl KeyProvider for FixedKeyProvider {
    fn generate_key_pair(&self) -> Result<(PublicKey, SecretKey)> {
        let vectors = known_vectors();
        let mut next = self
            .next
            .lock()
            .map_err(|e| CipherError::Crypto(format!("Fixed provider poisoned: {e}")))?;
        let vector = &vectors[*next % vectors.len()];
        *next += 1;
        Ok((
            PublicKey::from_hex(vector.public_key_hex)?,
            SecretKey::from_hex(vector.secret_key_hex)?,
        ))
    }

    fn derive_public_key(&self, secret_key: &SecretKey) -> Result<PublicKey> {
        let secret_hex = secret_key.to_hex();
        known_vectors()
            .into_iter()
            .find(|vector| vector.secret_key_hex == secret_hex)
            .map(|vector| PublicKey::from_hex(vector.public_key_hex))
            .unwrap_or_else(|| Err(CipherError::Crypto("unknown secret key".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{bitcoin_address_string, Address};
    use crate::keys::Secp256k1Provider;

    #[test]
    fn test_fixed_provider_agrees_with_curve() {
        let fixed = FixedKeyProvider::new();
        let curve = Secp256k1Provider::new();
        for _ in 0..known_vectors().len() {
            let (public_key, secret_key) = fixed.generate_key_pair().unwrap();
            assert_eq!(curve.derive_public_key(&secret_key).unwrap(), public_key);
            assert_eq!(fixed.derive_public_key(&secret_key).unwrap(), public_key);
        }
    }

    #[test]
    fn test_fixed_provider_wraps_around() {
        let fixed = FixedKeyProvider::new();
        let (first, _) = fixed.generate_key_pair().unwrap();
        for _ in 1..known_vectors().len() {
            fixed.generate_key_pair().unwrap();
        }
        let (again, _) = fixed.generate_key_pair().unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_vectors_are_self_consistent() {
        for vector in known_vectors() {
            let public_key = PublicKey::from_hex(vector.public_key_hex).unwrap();
            assert_eq!(bitcoin_address_string(&public_key), vector.bitcoin_address);
            assert_eq!(
                Address::from_public_key(&public_key).to_string(),
                vector.native_address
            );
        }
    }
}
