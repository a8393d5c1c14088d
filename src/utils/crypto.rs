use ring::digest::{Context, SHA256};
use ripemd::{Digest as RipemdDigest, Ripemd160};

pub const SHA256_LEN: usize = 32;
pub const RIPEMD160_LEN: usize = 20;
pub const CHECKSUM_LEN: usize = 4;

pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; SHA256_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

pub fn double_sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    let first_sha = sha256_digest(data);
    sha256_digest(&first_sha)
}

pub fn ripemd160_digest(data: &[u8]) -> [u8; RIPEMD160_LEN] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let mut out = [0u8; RIPEMD160_LEN];
    out.copy_from_slice(hasher.finalize().as_slice());
    out
}

/// RIPEMD160(SHA256(data)), the 20-byte public key hash used by addresses
pub fn hash160(data: &[u8]) -> [u8; RIPEMD160_LEN] {
    let pub_key_sha256 = sha256_digest(data);
    ripemd160_digest(&pub_key_sha256)
}

/// First four bytes of SHA256(SHA256(payload))
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let second_sha = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second_sha[0..CHECKSUM_LEN]);
    out
}
