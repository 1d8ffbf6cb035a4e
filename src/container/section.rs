//! Section kinds and header records.

use strum::{Display, EnumCount, EnumIter};

/// The closed set of section kinds a header record may name.
///
/// Membership in this set is the structural check applied while scanning the header
/// table. Whether a kind is permitted for a particular container is decided later by
/// [`crate::container::EofVersion::allows`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum SectionKind {
    /// Executable bytecode (`0x01`). Exactly one per container.
    Code = 0x01,
    /// Auxiliary data (`0x02`). At most one per container.
    Data = 0x02,
    /// Table data (`0x03`). Any number, version 2 and later.
    Table = 0x03,
}

impl SectionKind {
    /// Byte value that terminates the header table.
    pub const TERMINATOR: u8 = 0x00;

    /// Decode a header record's kind byte.
    ///
    /// Returns `None` for unknown kinds. [`SectionKind::TERMINATOR`] is not a kind either and
    /// must be handled by the caller before decoding.
    #[must_use]
    pub fn from_id(id: u8) -> Option<SectionKind> {
        match id {
            0x01 => Some(SectionKind::Code),
            0x02 => Some(SectionKind::Data),
            0x03 => Some(SectionKind::Table),
            _ => None,
        }
    }

    /// The byte value used in header records.
    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// One `(kind, size)` record of the header table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SectionHeader {
    /// Kind of the declared section
    pub kind: SectionKind,
    /// Declared length of the section body in bytes
    pub size: u16,
}

impl SectionHeader {
    /// Size of an encoded record: one kind byte and a big-endian `u16` size.
    pub const SIZE: usize = 3;
}
