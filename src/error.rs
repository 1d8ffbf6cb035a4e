use thiserror::Error;

use crate::container::Verdict;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Note that plain validation never produces an [`Error`]: [`crate::validate_eof`] reports every
/// rejection as a [`Verdict`]. This type covers the surfaces built around the validator, such as
/// the cursor [`crate::Parser`], the section body view [`crate::EofContainer`] and the hex helper.
///
/// # Error Categories
///
/// ## Parsing Errors
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of the buffer
/// - [`Error::Malformed`] - Section bodies disagree with the declared header table
/// - [`Error::Rejected`] - The container failed validation with the given verdict
///
/// ## Input Errors
/// - [`Error::InvalidHex`] - Hex text could not be decoded
///
/// # Examples
///
/// ```rust
/// use eofscope::{EofContainer, Error, Revision, Verdict};
///
/// match EofContainer::parse(Revision::Shanghai, &[0xEF, 0xCA, 0xFE, 0x01]) {
///     Ok(container) => println!("{} sections", container.sections().len()),
///     Err(Error::Rejected(verdict)) => {
///         assert_eq!(verdict, Verdict::SectionHeadersNotTerminated);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while parsing the buffer.
    ///
    /// Every read performed by [`crate::Parser`] is checked against the remaining length
    /// before any byte is touched; this is what a failed check reports.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The container is damaged and could not be parsed.
    ///
    /// Raised when a container passes validation but its section bodies do not line up
    /// with the sizes declared in the header table.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The container was rejected by validation.
    ///
    /// The associated [`Verdict`] is never [`Verdict::Success`].
    #[error("Container rejected - {0}")]
    Rejected(Verdict),

    /// Hex text could not be decoded into bytes.
    #[error("Invalid hex input - {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
