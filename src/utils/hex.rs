//! Hex text decoding for tooling and tests.

use crate::Result;

/// Decode hex text into bytes.
///
/// ASCII whitespace anywhere in the input is ignored, so grouped fixtures such as
/// `"EFCAFE01 010001 00 FE"` decode as one buffer. A single leading `0x`/`0X` is accepted.
/// Digits may be upper or lower case.
///
/// # Errors
/// Returns [`crate::Error::InvalidHex`] for a character that is not a hex digit, or an odd number
/// of digits. Reported positions count digits only, after the prefix and whitespace are
/// removed.
///
/// # Examples
///
/// ```rust
/// use eofscope::from_hex;
///
/// assert_eq!(from_hex("EFCAFE01 010001 00 FE")?, [0xEF, 0xCA, 0xFE, 0x01, 0x01, 0x00, 0x01, 0x00, 0xFE]);
/// assert_eq!(from_hex("0xdead")?, [0xDE, 0xAD]);
/// assert!(from_hex("abc").is_err());
/// # Ok::<(), eofscope::Error>(())
/// ```
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim_start();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(hex::decode(digits)?)
}
