use crate::error::{CipherError, Result};
use crate::utils::checksum;
use crate::utils::crypto::CHECKSUM_LEN;

/// Standard Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`)
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Strict Base58 decode.
///
/// Runs two explicit passes before the alphabet decode: framing (no empty
/// input, no surrounding whitespace) and alphabet membership. Leading `1`s
/// are only judged canonical or not once the width of the payload is known,
/// see [`base58_decode_fixed`] and [`base58check_decode`].
pub fn base58_decode(text: &str) -> Result<Vec<u8>> {
    check_framing(text)?;
    check_alphabet(text)?;
    let decoded = bs58::decode(text).into_vec()?;
    Ok(decoded)
}

/// Strict decode for a fixed-width context such as a 25-byte address.
///
/// Zero bytes in front of an `expected_len` buffer come from surplus leading
/// `1`s and fail as `InvalidEncoding`. Any other size mismatch is left to the
/// caller's length check.
pub fn base58_decode_fixed(text: &str, expected_len: usize) -> Result<Vec<u8>> {
    let decoded = base58_decode(text)?;
    ensure_no_surplus_padding(&decoded, expected_len)?;
    Ok(decoded)
}

/// Append the 4-byte double-SHA256 checksum and Base58 encode.
pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    base58_encode(&data)
}

/// Strict decode followed by checksum verification. Returns the payload
/// without its checksum.
///
/// When the checksum fails but verifies after dropping some leading zero
/// bytes, the input was padded with extra `1`s and fails as
/// `InvalidEncoding` instead.
pub fn base58check_decode(text: &str) -> Result<Vec<u8>> {
    let decoded = base58_decode(text)?;
    match strip_checksum(&decoded) {
        Ok(payload) => Ok(payload.to_vec()),
        Err(err) => {
            ensure_no_padded_checksum(&decoded)?;
            Err(err)
        }
    }
}

/// Like [`base58check_decode`] but the payload must be exactly `expected_len`
/// bytes long.
pub fn base58check_decode_len(text: &str, expected_len: usize) -> Result<Vec<u8>> {
    let payload = base58check_decode(text)?;
    if payload.len() != expected_len {
        return Err(CipherError::WrongLength {
            expected: expected_len,
            actual: payload.len(),
        });
    }
    Ok(payload)
}

/// Split off the trailing checksum of `data` and verify it against the rest.
pub fn strip_checksum(data: &[u8]) -> Result<&[u8]> {
    if data.len() < CHECKSUM_LEN {
        return Err(CipherError::WrongLength {
            expected: CHECKSUM_LEN,
            actual: data.len(),
        });
    }
    let (payload, claimed) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(payload) != claimed {
        return Err(CipherError::ChecksumMismatch);
    }
    Ok(payload)
}

fn check_framing(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(CipherError::MalformedInput("empty input".to_string()));
    }
    if text.starts_with(char::is_whitespace) {
        return Err(CipherError::MalformedInput(
            "leading whitespace".to_string(),
        ));
    }
    if text.ends_with(char::is_whitespace) {
        return Err(CipherError::MalformedInput(
            "trailing whitespace".to_string(),
        ));
    }
    Ok(())
}

fn check_alphabet(text: &str) -> Result<()> {
    for (index, character) in text.char_indices() {
        if !ALPHABET.contains(character) {
            return Err(CipherError::InvalidCharacter { character, index });
        }
    }
    Ok(())
}

fn ensure_no_surplus_padding(decoded: &[u8], expected_len: usize) -> Result<()> {
    if decoded.len() <= expected_len {
        return Ok(());
    }
    let surplus = decoded.len() - expected_len;
    if decoded[..surplus].iter().all(|b| *b == 0) {
        return Err(CipherError::InvalidEncoding(format!(
            "{surplus} surplus leading zero bytes"
        )));
    }
    Ok(())
}

fn ensure_no_padded_checksum(decoded: &[u8]) -> Result<()> {
    let zeros = decoded.iter().take_while(|b| **b == 0).count();
    for surplus in 1..=zeros {
        if strip_checksum(&decoded[surplus..]).is_ok() {
            return Err(CipherError::InvalidEncoding(format!(
                "{surplus} surplus leading zero bytes"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "SVukBL6LpgvUUivnr73HvFaAhs4ggrr3Q6";

    #[test]
    fn test_leading_zero_bytes_become_ones() {
        assert_eq!(base58_encode(&[0, 0, 1]), "112");
        assert_eq!(base58_decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_check_round_trip_keeps_payload() {
        let payload = [0x3f, 0xde, 0xad, 0xbe, 0xef];
        let text = base58check_encode(&payload);
        assert_eq!(base58check_decode(&text).unwrap(), payload);
    }

    #[test]
    fn test_whitespace_framing_is_rejected() {
        for input in [
            format!(" {VALID}"),
            format!("{VALID} "),
            format!("\t{VALID}"),
            format!("{VALID}\n"),
        ] {
            assert!(
                matches!(base58_decode(&input), Err(CipherError::MalformedInput(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            base58_decode(""),
            Err(CipherError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_zero_characters_are_rejected() {
        assert_eq!(
            base58_decode(&format!("000{VALID}")),
            Err(CipherError::InvalidCharacter {
                character: '0',
                index: 0
            })
        );
        assert_eq!(
            base58_decode(&format!("{VALID}000")),
            Err(CipherError::InvalidCharacter {
                character: '0',
                index: VALID.len()
            })
        );
    }

    #[test]
    fn test_interior_whitespace_is_invalid_character() {
        assert!(matches!(
            base58_decode("SVuk BL6L"),
            Err(CipherError::InvalidCharacter { character: ' ', .. })
        ));
    }

    #[test]
    fn test_surplus_leading_ones_are_invalid_encoding() {
        for prefix in ["1", "111"] {
            let padded = format!("{prefix}{VALID}");
            assert!(
                matches!(
                    base58_decode_fixed(&padded, 25),
                    Err(CipherError::InvalidEncoding(_))
                ),
                "fixed decode accepted {padded}"
            );
            assert!(
                matches!(
                    base58check_decode(&padded),
                    Err(CipherError::InvalidEncoding(_))
                ),
                "check decode accepted {padded}"
            );
        }
        assert_eq!(base58_decode_fixed(VALID, 25).unwrap().len(), 25);
    }

    #[test]
    fn test_leading_zero_payload_is_not_padding() {
        // the payload's own zero bytes justify their '1's
        let text = base58check_encode(&[0, 0, 7]);
        assert!(text.starts_with("11"));
        assert_eq!(base58check_decode(&text).unwrap(), vec![0, 0, 7]);
        assert!(base58_decode_fixed(&text, 7).is_ok());
    }

    #[test]
    fn test_oversized_without_zero_prefix_is_left_to_length_check() {
        let decoded = base58_decode_fixed(&format!("{VALID}111"), 25).unwrap();
        assert!(decoded.len() > 25);
    }

    #[test]
    fn test_checksum_mismatch_detected() {
        let mut data = b"payload".to_vec();
        data.extend_from_slice(&checksum(b"payload"));
        let last = data.len() - 1;
        data[last] ^= 0x01;
        let text = base58_encode(&data);
        assert_eq!(base58check_decode(&text), Err(CipherError::ChecksumMismatch));
    }

    #[test]
    fn test_short_buffer_is_wrong_length() {
        assert_eq!(
            strip_checksum(&[1, 2, 3]),
            Err(CipherError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_decode_len_enforces_size() {
        let text = base58check_encode(&[1u8; 33]);
        assert_eq!(base58check_decode_len(&text, 33).unwrap().len(), 33);
        assert_eq!(
            base58check_decode_len(&text, 34),
            Err(CipherError::WrongLength {
                expected: 34,
                actual: 33
            })
        );
    }
}
