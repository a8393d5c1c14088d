use crate::error::{CipherError, Result};
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

pub fn encode_hex(data: &[u8]) -> String {
    HEXLOWER.encode(data)
}

/// Decode hex text into exactly `N` bytes. Either letter case is accepted.
pub fn decode_hex_fixed<const N: usize>(text: &str) -> Result<[u8; N]> {
    if text.len() % 2 != 0 {
        return Err(CipherError::InvalidHex(format!(
            "odd number of hex characters ({})",
            text.len()
        )));
    }
    if text.len() != N * 2 {
        return Err(CipherError::WrongLength {
            expected: N,
            actual: text.len() / 2,
        });
    }
    let decoded = HEXLOWER_PERMISSIVE.decode(text.as_bytes())?;
    let mut out = [0u8; N];
    out.copy_from_slice(&decoded);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_lowercase() {
        assert_eq!(encode_hex(&[0xAB, 0x01, 0xff]), "ab01ff");
    }

    #[test]
    fn test_decode_accepts_both_cases() {
        let lower: [u8; 2] = decode_hex_fixed("abcd").unwrap();
        let upper: [u8; 2] = decode_hex_fixed("ABCD").unwrap();
        assert_eq!(lower, [0xab, 0xcd]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_decode_rejects_wrong_width() {
        let result: Result<[u8; 32]> = decode_hex_fixed("abcd");
        assert!(matches!(
            result,
            Err(CipherError::WrongLength {
                expected: 32,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let secret = "1".repeat(65);
        let result: Result<[u8; 32]> = decode_hex_fixed(&secret);
        assert!(matches!(result, Err(CipherError::InvalidHex(_))));

        let result: Result<[u8; 2]> = decode_hex_fixed("abc");
        assert!(matches!(result, Err(CipherError::InvalidHex(_))));
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let result: Result<[u8; 2]> = decode_hex_fixed("zz00");
        assert!(matches!(result, Err(CipherError::InvalidHex(_))));
    }
}
