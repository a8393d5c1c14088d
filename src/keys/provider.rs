use crate::error::{CipherError, Result};
use crate::keys::{PublicKey, SecretKey};
use crate::utils::sha256_digest;
use secp256k1::{All, Secp256k1};

/// Curve capability consumed by address derivation.
///
/// Every `PublicKey` fed into an address comes out of one of these two
/// operations. Tests inject a fixed provider in place of the real curve.
pub trait KeyProvider {
    /// Generate a uniformly random key pair
    fn generate_key_pair(&self) -> Result<(PublicKey, SecretKey)>;

    /// Deterministically derive the public key of `secret_key`
    fn derive_public_key(&self, secret_key: &SecretKey) -> Result<PublicKey>;
}

/// secp256k1 provider backed by the `secp256k1` crate.
pub struct Secp256k1Provider {
    secp: Secp256k1<All>,
}

impl Default for Secp256k1Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl Secp256k1Provider {
    pub fn new() -> Secp256k1Provider {
        Secp256k1Provider {
            secp: Secp256k1::new(),
        }
    }
}

impl KeyProvider for Secp256k1Provider {
    fn generate_key_pair(&self) -> Result<(PublicKey, SecretKey)> {
        let mut rng = rand::thread_rng();
        let (secret, public) = self.secp.generate_keypair(&mut rng);
        let secret_key = SecretKey::from_array(secret.secret_bytes())?;
        let public_key = PublicKey::from_array(public.serialize())?;
        Ok((public_key, secret_key))
    }

    fn derive_public_key(&self, secret_key: &SecretKey) -> Result<PublicKey> {
        let secret = secp256k1::SecretKey::from_slice(secret_key.as_bytes())
            .map_err(|e| CipherError::Crypto(format!("Failed to load secret key: {e}")))?;
        let public = secp256k1::PublicKey::from_secret_key(&self.secp, &secret);
        PublicKey::from_array(public.serialize())
    }
}

/// Derive a key pair from a seed.
///
/// The secret is SHA256(seed), re-hashed until it lands on a valid scalar.
pub fn generate_deterministic_key_pair<P: KeyProvider + ?Sized>(
    provider: &P,
    seed: &[u8],
) -> Result<(PublicKey, SecretKey)> {
    if seed.is_empty() {
        return Err(CipherError::InvalidSecretKey("empty seed".to_string()));
    }
    let mut digest = sha256_digest(seed);
    let secret_key = loop {
        match SecretKey::from_array(digest) {
            Ok(key) => break key,
            Err(_) => digest = sha256_digest(&digest),
        }
    };
    let public_key = provider.derive_public_key(&secret_key)?;
    Ok((public_key, secret_key))
}
