use crate::address::{bitcoin_address_from_public_key, Address};
use crate::error::{CipherError, Result};
use crate::keys::{KeyProvider, PublicKey, SecretKey};
use crate::wif::{encode_wif, WifFormat};
use serde::Serialize;
use std::fmt;

/// Everything derived from one key pair, printable as text or JSON
#[derive(Debug, Clone, Serialize)]
pub struct KeyReport {
    pub public_key: String,
    pub secret_key: String,
    pub address: Address,
    pub bitcoin_address: Address,
    pub wif: String,
}

impl KeyReport {
    pub fn new(public_key: &PublicKey, secret_key: &SecretKey, format: WifFormat) -> KeyReport {
        KeyReport {
            public_key: public_key.to_hex(),
            secret_key: secret_key.to_hex(),
            address: Address::from_public_key(public_key),
            bitcoin_address: bitcoin_address_from_public_key(public_key),
            wif: encode_wif(secret_key, format),
        }
    }

    pub fn from_secret_key<P: KeyProvider + ?Sized>(
        provider: &P,
        secret_key: &SecretKey,
        format: WifFormat,
    ) -> Result<KeyReport> {
        let public_key = provider.derive_public_key(secret_key)?;
        Ok(Self::new(&public_key, secret_key, format))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CipherError::Config(format!("Failed to render report: {e}")))
    }
}

impl fmt::Display for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Public key:      {}", self.public_key)?;
        writeln!(f, "Secret key:      {}", self.secret_key)?;
        writeln!(f, "Address:         {}", self.address)?;
        writeln!(f, "Bitcoin address: {}", self.bitcoin_address)?;
        write!(f, "WIF:             {}", self.wif)
    }
}

/// Generate `count` key pairs and push each address through verify, text
/// encode and decode. Returns the number of pairs checked.
pub fn bulk_round_trip<P: KeyProvider + ?Sized>(provider: &P, count: usize) -> Result<usize> {
    for i in 0..count {
        let (public_key, _) = provider.generate_key_pair()?;
        let address = Address::from_public_key(&public_key);
        address.verify(&public_key)?;
        let decoded = Address::decode_base58(&address.to_base58())?;
        if let Err(e) = ensure_round_trip(&address, &decoded) {
            log::error!("Round trip {i} failed: {e}");
            return Err(e);
        }
    }
    log::info!("Round-tripped {count} addresses");
    Ok(count)
}

fn ensure_round_trip(original: &Address, decoded: &Address) -> Result<()> {
    if original != decoded {
        return Err(CipherError::InvalidEncoding(format!(
            "text round trip of {original} produced {decoded}"
        )));
    }
    Ok(())
}
