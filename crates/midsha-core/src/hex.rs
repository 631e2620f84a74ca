//! Lowercase hex encoding shared by digests and midstate snapshots.

/// Encode bytes as a lowercase hex string.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string (either case, surrounding whitespace ignored).
pub(crate) fn from_hex(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    if s.len() % 2 != 0 {
        return Err(format!("hex string has odd length: {}", s.len()));
    }
    if let Some(pos) = s.find(|c: char| !c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex character at position {pos}"));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(to_hex(&[0x00, 0xab, 0xff]), "00abff");
    }

    #[test]
    fn test_from_hex_accepts_uppercase_and_whitespace() {
        assert_eq!(from_hex(" 00ABff\n").unwrap(), vec![0x00, 0xab, 0xff]);
    }

    #[test]
    fn test_from_hex_rejects_odd_length() {
        assert!(from_hex("abc").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let err = from_hex("zz").unwrap_err();
        assert!(err.contains("position 0"));
    }

    #[test]
    fn test_from_hex_rejects_multibyte_chars() {
        // Even byte length, but slicing by byte index would split a char.
        assert!(from_hex("éé").is_err());
    }
}
