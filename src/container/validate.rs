//! The validation entry point.

use crate::{
    container::{
        header::{read_section_headers, HeaderTable},
        policy::check_section_set,
        prefix::read_prefix,
        Revision, Verdict,
    },
    file::parser::Parser,
};

/// Validate that `code` is a well-formed EOF container under `revision`.
///
/// Runs the prefix check, the version check, the header table scan and the section-set
/// policy in that order, and reports the first rule violated. The function is pure: it
/// only reads `code`, keeps no state between calls and always terminates in time linear
/// to `code.len()`.
///
/// # Examples
///
/// ```rust
/// use eofscope::{validate_eof, Revision, Verdict};
///
/// // Version 1, one code section holding a single byte.
/// let code = [0xEF, 0xCA, 0xFE, 0x01, 0x01, 0x00, 0x01, 0x00, 0xFE];
/// assert_eq!(validate_eof(Revision::Shanghai, &code), Verdict::Success);
///
/// // Same bytes without the header table terminator.
/// assert_eq!(
///     validate_eof(Revision::Shanghai, &code[..7]),
///     Verdict::SectionHeadersNotTerminated
/// );
/// ```
#[must_use]
pub fn validate_eof(revision: Revision, code: &[u8]) -> Verdict {
    match read_header_table(revision, code) {
        Ok(_) => Verdict::Success,
        Err(verdict) => {
            log::debug!(
                "rejected {}-byte container under {}: {}",
                code.len(),
                revision,
                verdict
            );
            verdict
        }
    }
}

/// Validate `code` and return its header table.
///
/// The returned table has passed every check [`validate_eof`] applies. An `Err` never
/// carries [`Verdict::Success`].
pub(crate) fn read_header_table(revision: Revision, code: &[u8]) -> Result<HeaderTable, Verdict> {
    let mut parser = Parser::new(code);

    let version = read_prefix(revision, &mut parser)?;
    let sections = read_section_headers(&mut parser)?;
    check_section_set(version, &sections)?;

    Ok(HeaderTable {
        version,
        sections,
        size: parser.pos(),
    })
}
