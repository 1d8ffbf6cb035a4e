// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # eofscope
//!
//! A strict, version-aware validator for EOF (EVM Object Format) bytecode containers.
//!
//! EOF wraps executable bytecode and its auxiliary data in a small binary envelope: a
//! 3-byte magic, a version byte, a self-terminating table of section headers, and the
//! section bodies. `eofscope` decides, before anything is executed, whether a byte sequence
//! is such a container, and if not, exactly which rule it breaks.
//!
//! ## Features
//!
//! - **🛡️ Bounds-checked scanning** - Every read is checked before it happens; hostile input
//!   produces a verdict, never a panic
//! - **🎯 Precise verdicts** - A closed [`Verdict`] enumeration naming the first rule violated
//! - **🔀 Version aware** - Section legality follows the container's version and the selected
//!   [`Revision`]
//! - **📦 Zero-copy** - Containers are borrowed, never copied or retained
//!
//! ## Quick Start
//!
//! ```rust
//! use eofscope::{from_hex, prelude::*};
//!
//! let code = from_hex("EFCAFE01 010001 00 FE")?;
//! assert_eq!(validate_eof(Revision::Shanghai, &code), Verdict::Success);
//!
//! // Table sections only exist from version 2 on.
//! let v1 = from_hex("EFCAFE01 010001 030002 00 FE 0001")?;
//! let v2 = from_hex("EFCAFE02 010001 030002 00 FE 0001")?;
//! assert_eq!(validate_eof(Revision::Shanghai, &v1), Verdict::UnknownSectionId);
//! assert_eq!(validate_eof(Revision::Shanghai, &v2), Verdict::Success);
//! # Ok::<(), eofscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`container`] - Prefix, header table and section-set checks, and the [`EofContainer`] view
//! - [`Parser`] - Bounds-checked cursor the checks are built on
//! - [`Error`] and [`Result`] - Errors of the surfaces around the validator
//!
//! ### Validation Pipeline
//!
//! [`validate_eof`] runs four steps, each of which either passes or ends validation:
//!
//! 1. **Magic** - the buffer starts with `EF CA FE`
//! 2. **Version** - byte 3 is a version the [`Revision`] recognizes
//! 3. **Header table** - `(kind, size)` records up to a `0x00` terminator, every kind known
//! 4. **Section set** - one code section, at most one data section, table sections only
//!    where the version allows them
//!
//! Validation failures are values, not errors: every rejection is a [`Verdict`] variant.
//!
//! ### Section Bodies
//!
//! [`validate_eof`] does not look past the header table. [`EofContainer::parse`] validates and
//! then resolves each section body, failing with [`Error::Malformed`] when the declared sizes
//! do not account for the rest of the buffer.
//!
//! ## Concurrency
//!
//! Validation is a pure function over a borrowed slice. There is no global state, so
//! concurrent calls on independent buffers need no synchronization.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! cargo +nightly fuzz run validate --release
//! ```
#[macro_use]
pub(crate) mod error;
pub(crate) mod file;
pub(crate) mod utils;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use eofscope::prelude::*;
///
/// let verdict = validate_eof(Revision::default(), &EOF_MAGIC);
/// assert_eq!(verdict, Verdict::InvalidPrefix);
/// ```
pub mod prelude;

/// EOF container structure and validation.
///
/// # Key Types
///
/// - [`container::Verdict`] - The validation outcome
/// - [`container::Revision`] - Rule revision selecting the recognized versions
/// - [`container::EofVersion`] - Version byte of a container
/// - [`container::SectionKind`] - Kind byte of a header record
/// - [`container::EofContainer`] - Validated container with section bodies
///
/// # Examples
///
/// ```rust
/// use eofscope::container::{validate_eof, Revision, Verdict};
///
/// let code = [0xEF, 0xCA, 0xFE, 0x01, 0x02, 0x00, 0x01, 0x00];
/// assert_eq!(validate_eof(Revision::Shanghai, &code), Verdict::CodeSectionMissing);
/// ```
pub mod container;

/// `eofscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `eofscope` Error type
///
/// The error type for the fallible surfaces around the validator: the [`Parser`], the
/// [`EofContainer`] body walk and the hex helper. [`validate_eof`] itself reports through
/// [`Verdict`] and never fails.
pub use error::Error;

/// Validate a byte buffer as an EOF container.
///
/// See [`container::validate_eof`].
pub use container::validate_eof;

/// Validation outcome, rule revision and container version.
pub use container::{EofVersion, Revision, Verdict};

/// Validated container view and its sections.
///
/// # Example
///
/// ```rust
/// use eofscope::{EofContainer, Revision};
///
/// let code = [0xEF, 0xCA, 0xFE, 0x01, 0x01, 0x00, 0x01, 0x00, 0xFE];
/// let container = EofContainer::parse(Revision::Shanghai, &code)?;
/// assert_eq!(container.code().data, &[0xFE]);
/// # Ok::<(), eofscope::Error>(())
/// ```
pub use container::{EofContainer, Section, SectionHeader, SectionKind};

/// Provides access to the low-level cursor used by the container checks.
///
/// # Example
///
/// ```rust
/// use eofscope::Parser;
/// let data = [0x01, 0x00, 0x01];
/// let mut parser = Parser::new(&data);
/// assert_eq!(parser.read_be::<u8>()?, 0x01);
/// assert_eq!(parser.read_be::<u16>()?, 0x0001);
/// # Ok::<(), eofscope::Error>(())
/// ```
pub use file::parser::Parser;

/// Primitive types readable through [`Parser::read_be`].
pub use file::io::EofIO;

/// Decode hex text, ignoring whitespace.
///
/// Intended for tooling and fixtures; validation itself only deals in bytes.
pub use utils::from_hex;
