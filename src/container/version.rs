//! EOF format versions and the rule revisions that recognize them.
//!
//! Two separate concepts live here:
//!
//! - [`EofVersion`] - the version byte stored at offset 3 of a container. It decides which
//!   [`SectionKind`]s a container may declare.
//! - [`Revision`] - the rule revision the caller validates against. It decides which version
//!   bytes are recognized at all.

use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::container::SectionKind;

/// A recognized EOF container version.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, EnumCount)]
pub enum EofVersion {
    /// Version 1 (`0x01`): code and data sections.
    V1 = 0x01,
    /// Version 2 (`0x02`): adds any number of table sections.
    V2 = 0x02,
}

impl EofVersion {
    /// The byte value stored in the container.
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Whether a container of this version may declare sections of `kind`.
    ///
    /// Table sections are not a known concept before [`EofVersion::V2`].
    #[must_use]
    pub fn allows(self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Code | SectionKind::Data => true,
            SectionKind::Table => self >= EofVersion::V2,
        }
    }
}

/// The rule revision a container is validated against.
///
/// Revisions parse from and display as their lowercase names, so they can be taken
/// directly from command line arguments.
///
/// ```rust
/// use eofscope::{EofVersion, Revision};
///
/// let revision: Revision = "shanghai".parse().unwrap();
/// assert_eq!(revision, Revision::Shanghai);
/// assert_eq!(revision.recognizes(0x02), Some(EofVersion::V2));
/// assert_eq!(revision.recognizes(0x00), None);
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum Revision {
    /// The Shanghai rule set; recognizes EOF versions 1 and 2.
    #[default]
    Shanghai,
}

impl Revision {
    /// Map a raw version byte to a version this revision understands.
    ///
    /// Returns `None` for any byte outside the revision's recognized set, including `0x00`.
    #[must_use]
    pub fn recognizes(self, version: u8) -> Option<EofVersion> {
        match self {
            Revision::Shanghai => match version {
                0x01 => Some(EofVersion::V1),
                0x02 => Some(EofVersion::V2),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn shanghai_versions() {
        let recognized: Vec<u8> = (0..=u8::MAX)
            .filter(|byte| Revision::Shanghai.recognizes(*byte).is_some())
            .collect();
        assert_eq!(recognized, [0x01, 0x02]);

        for version in EofVersion::iter() {
            assert_eq!(Revision::Shanghai.recognizes(version.value()), Some(version));
        }
    }

    #[test]
    fn section_gate() {
        assert!(EofVersion::V1.allows(SectionKind::Code));
        assert!(EofVersion::V1.allows(SectionKind::Data));
        assert!(!EofVersion::V1.allows(SectionKind::Table));

        for kind in SectionKind::iter() {
            assert!(EofVersion::V2.allows(kind));
        }
    }

    #[test]
    fn revision_names() {
        assert_eq!(Revision::default(), Revision::Shanghai);
        assert_eq!(Revision::Shanghai.to_string(), "shanghai");
        assert!("cancun".parse::<Revision>().is_err());
    }
}
