use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Outcome of validating an EOF container.
///
/// Exactly one variant, [`Verdict::Success`], accepts the container. Every other variant names
/// the first rule the container violated; callers must treat all of them as "reject outright".
///
/// The `Display` and `Into<&'static str>` forms yield the snake_case names of the variants
/// (`success`, `invalid_prefix`, ...), which is what tooling reports to users.
///
/// # Examples
///
/// ```rust
/// use eofscope::Verdict;
///
/// assert_eq!(Verdict::MultipleDataSections.to_string(), "multiple_data_sections");
/// assert!(Verdict::Success.is_success());
/// assert!(!Verdict::InvalidPrefix.is_success());
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Display, IntoStaticStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum Verdict {
    /// The container is well-formed.
    Success,
    /// The buffer is shorter than 4 bytes or does not start with the `EF CA FE` magic.
    InvalidPrefix,
    /// The version byte is not recognized by the selected revision.
    EofVersionUnknown,
    /// The buffer ended before the header table terminator, or inside a header record.
    SectionHeadersNotTerminated,
    /// No code section was declared.
    CodeSectionMissing,
    /// More than one code section was declared.
    MultipleCodeSections,
    /// More than one data section was declared.
    MultipleDataSections,
    /// A section kind is not known, or not permitted by the container's version.
    UnknownSectionId,
}

impl Verdict {
    /// Returns `true` only for [`Verdict::Success`].
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Verdict::Success
    }

    /// The snake_case name of this verdict.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
