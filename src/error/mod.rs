//! Error handling for address and key operations
//!
//! Every decode/verify path returns one of these kinds. None of them are
//! transient, so nothing here is retried.

use std::fmt;

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;

/// Error kinds for encoding, address and key operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Input contains a character outside the Base58 alphabet
    InvalidCharacter { character: char, index: usize },
    /// Input is empty or framed by whitespace
    MalformedInput(String),
    /// Text does not encode its bytes minimally, e.g. surplus leading `1`s
    InvalidEncoding(String),
    /// Embedded checksum does not match the recomputed digest
    ChecksumMismatch,
    /// Decoded length is not the size the context expects
    WrongLength { expected: usize, actual: usize },
    /// Address version byte is not the expected network constant
    VersionMismatch { expected: u8, actual: u8 },
    /// Address hash was not produced by the given public key
    HashMismatch,
    /// WIF prefix or suffix byte is not the expected secret key type
    WrongKeyType(String),
    /// Secret key is zero or not below the curve order
    InvalidSecretKey(String),
    /// Public key bytes are not a compressed curve point
    InvalidPublicKey(String),
    /// Hex text could not be decoded
    InvalidHex(String),
    /// Curve provider failures
    Crypto(String),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidCharacter { character, index } => {
                write!(f, "Invalid character {character:?} at index {index}")
            }
            CipherError::MalformedInput(msg) => write!(f, "Malformed input: {msg}"),
            CipherError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {msg}"),
            CipherError::ChecksumMismatch => write!(f, "Checksum mismatch"),
            CipherError::WrongLength { expected, actual } => {
                write!(f, "Wrong length: expected {expected} bytes, got {actual}")
            }
            CipherError::VersionMismatch { expected, actual } => {
                write!(
                    f,
                    "Version mismatch: expected {expected:#04x}, got {actual:#04x}"
                )
            }
            CipherError::HashMismatch => {
                write!(f, "Hash mismatch: public key does not match address")
            }
            CipherError::WrongKeyType(msg) => write!(f, "Wrong key type: {msg}"),
            CipherError::InvalidSecretKey(msg) => write!(f, "Invalid secret key: {msg}"),
            CipherError::InvalidPublicKey(msg) => write!(f, "Invalid public key: {msg}"),
            CipherError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            CipherError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            CipherError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CipherError {}

impl From<bs58::decode::Error> for CipherError {
    fn from(err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                CipherError::InvalidCharacter { character, index }
            }
            other => CipherError::InvalidEncoding(other.to_string()),
        }
    }
}

impl From<data_encoding::DecodeError> for CipherError {
    fn from(err: data_encoding::DecodeError) -> Self {
        CipherError::InvalidHex(err.to_string())
    }
}
