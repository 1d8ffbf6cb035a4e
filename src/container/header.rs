//! Header table scanning.
//!
//! The header table follows the version byte and is a run of 3-byte
//! [`SectionHeader`] records closed by a single [`SectionKind::TERMINATOR`] byte. The table
//! carries no length of its own, so the terminator is the only thing separating the last
//! record from the first section body.
//!
//! ```text
//! offset 4.. : { kind u8, size u16 BE }*  0x00
//! ```
//!
//! Only structural rules are enforced here: the table must be terminated and every kind byte
//! must belong to the closed set of [`SectionKind`]s. Version-dependent legality and
//! cardinality are left to the section-set policy.

use crate::{
    container::{EofVersion, SectionHeader, SectionKind, Verdict},
    file::parser::Parser,
};

/// The validated prefix and header table of a container.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct HeaderTable {
    /// Version byte of the container
    pub version: EofVersion,
    /// Section records in declaration order
    pub sections: Vec<SectionHeader>,
    /// Offset of the first byte after the terminator, where section bodies begin
    pub size: usize,
}

/// Read header records from `parser` up to and including the terminator.
///
/// On success the parser is positioned on the first byte after the terminator.
///
/// # Errors
/// - [`Verdict::SectionHeadersNotTerminated`] if the buffer ends before the terminator, or
///   inside the size field of a record
/// - [`Verdict::UnknownSectionId`] if a kind byte is neither the terminator nor a known kind
pub(crate) fn read_section_headers(
    parser: &mut Parser<'_>,
) -> Result<Vec<SectionHeader>, Verdict> {
    let mut sections = Vec::new();

    loop {
        let Ok(id) = parser.read_be::<u8>() else {
            return Err(Verdict::SectionHeadersNotTerminated);
        };

        if id == SectionKind::TERMINATOR {
            return Ok(sections);
        }

        let Some(kind) = SectionKind::from_id(id) else {
            log::debug!(
                "unknown section id 0x{:02X} at offset {}",
                id,
                parser.pos() - 1
            );
            return Err(Verdict::UnknownSectionId);
        };

        let Ok(size) = parser.read_be::<u16>() else {
            return Err(Verdict::SectionHeadersNotTerminated);
        };

        log::trace!("section header {} size {}", kind, size);
        sections.push(SectionHeader { kind, size });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(table: &[u8]) -> Result<Vec<SectionHeader>, Verdict> {
        read_section_headers(&mut Parser::new(table))
    }

    #[test]
    fn empty_table() {
        assert_eq!(scan(&[0x00]), Ok(vec![]));
    }

    #[test]
    fn records_in_order() {
        #[rustfmt::skip]
        let table = [
            0x01, 0x00, 0x01, // code, 1 byte
            0x03, 0x01, 0x02, // table, 258 bytes
            0x02, 0xFF, 0xFF, // data, 65535 bytes
            0x00,             // terminator
            0xFE,             // first body byte, not consumed
        ];
        let mut parser = Parser::new(&table);

        assert_eq!(
            read_section_headers(&mut parser),
            Ok(vec![
                SectionHeader { kind: SectionKind::Code, size: 1 },
                SectionHeader { kind: SectionKind::Table, size: 0x0102 },
                SectionHeader { kind: SectionKind::Data, size: 0xFFFF },
            ])
        );
        assert_eq!(parser.pos(), 10);
    }

    #[test]
    fn not_terminated() {
        assert_eq!(scan(&[]), Err(Verdict::SectionHeadersNotTerminated));
        assert_eq!(scan(&[0x01]), Err(Verdict::SectionHeadersNotTerminated));
        assert_eq!(scan(&[0x01, 0x00]), Err(Verdict::SectionHeadersNotTerminated));
        assert_eq!(scan(&[0x01, 0x00, 0x01]), Err(Verdict::SectionHeadersNotTerminated));
    }

    #[test]
    fn unknown_id() {
        assert_eq!(scan(&[0x04, 0x00, 0x01, 0x00]), Err(Verdict::UnknownSectionId));
        assert_eq!(scan(&[0x01, 0x00, 0x01, 0xDA]), Err(Verdict::UnknownSectionId));
        // Reported before the missing size field is noticed.
        assert_eq!(scan(&[0xFF]), Err(Verdict::UnknownSectionId));
    }

    #[test]
    fn table_kind_is_structurally_known() {
        assert_eq!(
            scan(&[0x03, 0x00, 0x02, 0x00]),
            Ok(vec![SectionHeader { kind: SectionKind::Table, size: 2 }])
        );
    }
}
