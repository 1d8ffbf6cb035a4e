//! Magic and version checks over the first four bytes of a container.

use crate::{
    container::{EofVersion, Revision, Verdict},
    file::parser::Parser,
};

/// The 3-byte signature every EOF container starts with.
pub const EOF_MAGIC: [u8; 3] = [0xEF, 0xCA, 0xFE];

/// Length of the prefix region: magic plus the version byte.
pub const EOF_PREFIX_SIZE: usize = EOF_MAGIC.len() + 1;

/// Check the magic and the version byte, leaving `parser` at offset 4.
///
/// Magic and version form a single 4-byte region: a buffer too short to hold the version
/// byte is an [`Verdict::InvalidPrefix`], even when the magic itself is intact.
///
/// # Errors
/// - [`Verdict::InvalidPrefix`] if fewer than 4 bytes are present or the magic mismatches
/// - [`Verdict::EofVersionUnknown`] if `revision` does not recognize the version byte
pub(crate) fn read_prefix(
    revision: Revision,
    parser: &mut Parser<'_>,
) -> Result<EofVersion, Verdict> {
    match parser.read_bytes(EOF_MAGIC.len()) {
        Ok(magic) if magic == EOF_MAGIC => {}
        _ => return Err(Verdict::InvalidPrefix),
    }

    let Ok(version) = parser.read_be::<u8>() else {
        return Err(Verdict::InvalidPrefix);
    };

    revision
        .recognizes(version)
        .ok_or(Verdict::EofVersionUnknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(data: &[u8]) -> Result<EofVersion, Verdict> {
        read_prefix(Revision::Shanghai, &mut Parser::new(data))
    }

    #[test]
    fn short_inputs() {
        assert_eq!(check(&[]), Err(Verdict::InvalidPrefix));
        assert_eq!(check(&[0xEF]), Err(Verdict::InvalidPrefix));
        assert_eq!(check(&[0xEF, 0xCA]), Err(Verdict::InvalidPrefix));
        assert_eq!(check(&[0xEF, 0xCA, 0xFE]), Err(Verdict::InvalidPrefix));
    }

    #[test]
    fn magic_mismatch() {
        assert_eq!(check(&[0x00]), Err(Verdict::InvalidPrefix));
        assert_eq!(check(&[0xFE]), Err(Verdict::InvalidPrefix));
        assert_eq!(check(&[0xEF, 0xCB, 0xFE, 0x01]), Err(Verdict::InvalidPrefix));
        assert_eq!(check(&[0xEF, 0xCA, 0xFF, 0x01]), Err(Verdict::InvalidPrefix));
    }

    #[test]
    fn versions() {
        assert_eq!(check(&[0xEF, 0xCA, 0xFE, 0x00]), Err(Verdict::EofVersionUnknown));
        assert_eq!(check(&[0xEF, 0xCA, 0xFE, 0x03]), Err(Verdict::EofVersionUnknown));
        assert_eq!(check(&[0xEF, 0xCA, 0xFE, 0xFF]), Err(Verdict::EofVersionUnknown));
        assert_eq!(check(&[0xEF, 0xCA, 0xFE, 0x01]), Ok(EofVersion::V1));
        assert_eq!(check(&[0xEF, 0xCA, 0xFE, 0x02, 0x01]), Ok(EofVersion::V2));
    }

    #[test]
    fn leaves_parser_after_version() {
        let data = [0xEF, 0xCA, 0xFE, 0x02, 0x01, 0x00, 0x01];
        let mut parser = Parser::new(&data);

        assert!(read_prefix(Revision::Shanghai, &mut parser).is_ok());
        assert_eq!(parser.pos(), EOF_PREFIX_SIZE);
    }
}
