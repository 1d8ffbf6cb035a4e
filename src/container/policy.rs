//! Section-set policy.
//!
//! Applied to the records collected by the header scan, in this fixed order so that a
//! container breaking several rules always reports the same one:
//!
//! 1. exactly one code section
//! 2. at most one data section
//! 3. every declared kind is allowed by the container's version
//!
//! Table sections have no cardinality limit once their version gate passes.

use crate::container::{EofVersion, SectionHeader, SectionKind, Verdict};

/// Check the declared sections of a container of `version`.
///
/// # Errors
/// - [`Verdict::CodeSectionMissing`] / [`Verdict::MultipleCodeSections`]
/// - [`Verdict::MultipleDataSections`]
/// - [`Verdict::UnknownSectionId`] for a kind `version` does not allow
pub(crate) fn check_section_set(
    version: EofVersion,
    sections: &[SectionHeader],
) -> Result<(), Verdict> {
    let count = |kind: SectionKind| sections.iter().filter(|s| s.kind == kind).count();

    match count(SectionKind::Code) {
        0 => return Err(Verdict::CodeSectionMissing),
        1 => {}
        _ => return Err(Verdict::MultipleCodeSections),
    }

    if count(SectionKind::Data) > 1 {
        return Err(Verdict::MultipleDataSections);
    }

    if sections.iter().any(|s| !version.allows(s.kind)) {
        return Err(Verdict::UnknownSectionId);
    }

    Ok(())
}
