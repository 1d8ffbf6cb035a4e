//! Borrowed view over a validated container and its section bodies.
//!
//! [`crate::validate_eof`] only inspects the prefix and the header table; it deliberately does
//! not look at the bodies that follow. [`EofContainer`] is the layer for consumers that need the
//! bodies themselves: it validates first, then walks the bodies in declaration order and
//! requires them to account for every remaining byte of the buffer.
//!
//! # Examples
//!
//! ```rust
//! use eofscope::{EofContainer, Revision, SectionKind};
//!
//! #[rustfmt::skip]
//! let code = [
//!     0xEF, 0xCA, 0xFE, 0x02, // magic, version 2
//!     0x01, 0x00, 0x01,       // code, 1 byte
//!     0x03, 0x00, 0x02,       // table, 2 bytes
//!     0x00,                   // terminator
//!     0xFE,                   // code body
//!     0x00, 0x01,             // table body
//! ];
//!
//! let container = EofContainer::parse(Revision::Shanghai, &code)?;
//! assert_eq!(container.code().data, &[0xFE]);
//! assert_eq!(container.tables().count(), 1);
//! assert!(container.data().is_none());
//! # Ok::<(), eofscope::Error>(())
//! ```

use crate::{
    container::{
        validate::read_header_table, EofVersion, Revision, SectionKind, Verdict,
    },
    file::parser::Parser,
    Error, Result,
};

/// One section body, borrowed from the container buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Section<'a> {
    /// Kind declared for this section
    pub kind: SectionKind,
    /// Offset of the body within the container buffer
    pub offset: usize,
    /// The body bytes
    pub data: &'a [u8],
}

/// A validated EOF container with resolved section bodies.
#[derive(Clone, Debug)]
pub struct EofContainer<'a> {
    data: &'a [u8],
    version: EofVersion,
    header_size: usize,
    sections: Vec<Section<'a>>,
    /// Index of the code section within `sections`
    code: usize,
}

impl<'a> EofContainer<'a> {
    /// Validate `data` under `revision` and resolve its section bodies.
    ///
    /// Zero-length sections are accepted.
    ///
    /// # Errors
    /// - [`Error::Rejected`] with the verdict if validation fails
    /// - [`Error::Malformed`] if a body runs past the end of `data`, or if bytes remain
    ///   after the last body
    pub fn parse(revision: Revision, data: &'a [u8]) -> Result<EofContainer<'a>> {
        let table = read_header_table(revision, data).map_err(Error::Rejected)?;

        let mut parser = Parser::new(data);
        parser.advance_by(table.size)?;

        let mut sections = Vec::with_capacity(table.sections.len());
        for (index, header) in table.sections.iter().enumerate() {
            let offset = parser.pos();
            let Ok(body) = parser.read_bytes(usize::from(header.size)) else {
                return Err(malformed_error!(
                    "Section {} ({}) declares {} bytes at offset {}, but only {} remain",
                    index,
                    header.kind,
                    header.size,
                    offset,
                    parser.remaining()
                ));
            };

            sections.push(Section {
                kind: header.kind,
                offset,
                data: body,
            });
        }

        if parser.has_more_data() {
            return Err(malformed_error!(
                "{} trailing bytes after the last section body at offset {}",
                parser.remaining(),
                parser.pos()
            ));
        }

        let Some(code) = sections.iter().position(|s| s.kind == SectionKind::Code) else {
            // Unreachable after a successful policy check.
            return Err(Error::Rejected(Verdict::CodeSectionMissing));
        };

        Ok(EofContainer {
            data,
            version: table.version,
            header_size: table.size,
            sections,
            code,
        })
    }

    /// The raw container bytes.
    #[must_use]
    pub fn raw(&self) -> &'a [u8] {
        self.data
    }

    /// The container's version.
    #[must_use]
    pub fn version(&self) -> EofVersion {
        self.version
    }

    /// Length of magic, version and header table including the terminator.
    #[must_use]
    pub fn header_size(&self) -> usize {
        self.header_size
    }

    /// All sections in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[Section<'a>] {
        &self.sections
    }

    /// The code section.
    #[must_use]
    pub fn code(&self) -> &Section<'a> {
        &self.sections[self.code]
    }

    /// The data section, if one was declared.
    #[must_use]
    pub fn data(&self) -> Option<&Section<'a>> {
        self.sections.iter().find(|s| s.kind == SectionKind::Data)
    }

    /// Table sections in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = &Section<'a>> {
        self.sections.iter().filter(|s| s.kind == SectionKind::Table)
    }
}
