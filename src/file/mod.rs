//! Bounds-checked byte access for container parsing.
//!
//! - [`io`] - Endian-aware primitive reads over a raw buffer
//! - [`parser`] - The cursor type used by the header scanner and the section body walker

pub mod io;
pub mod parser;
