//! EOF container validation.
//!
//! An EOF container is a binary envelope around executable bytecode and its auxiliary data:
//!
//! ```text
//! offset 0..3 : magic EF CA FE
//! offset 3    : version (0x01 | 0x02)
//! offset 4..  : header records { kind u8, size u16 BE }*, terminator 0x00
//! offset ...  : section bodies, concatenated in declaration order
//! ```
//!
//! Validation is a linear pipeline; each step either passes or produces the final
//! [`Verdict`]:
//!
//! 1. prefix - magic and version byte
//! 2. header - header table scan, structural kind check, terminator
//! 3. policy - section cardinality and version gating over the collected records
//!
//! # Key Components
//!
//! - [`validate_eof`] - The entry point, returning a [`Verdict`]
//! - [`EofContainer`] - Validated container with resolved section bodies
//! - [`Revision`] / [`EofVersion`] - Rule revision and container version
//! - [`SectionKind`] / [`SectionHeader`] - Header table records

mod eofcontainer;
mod header;
mod policy;
mod prefix;
mod section;
mod validate;
mod verdict;
mod version;

pub use eofcontainer::{EofContainer, Section};
pub use prefix::{EOF_MAGIC, EOF_PREFIX_SIZE};
pub use section::{SectionHeader, SectionKind};
pub use validate::validate_eof;
pub use verdict::Verdict;
pub use version::{EofVersion, Revision};
