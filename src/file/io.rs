//! Low-level byte order and safe reading utilities for EOF container parsing.
//!
//! This module provides bounds-checked, endian-aware reads of the primitive field types
//! found in an EOF container. Every multi-byte field of the format is big-endian, so only
//! big-endian readers are provided.
//!
//! # Key Components
//!
//! - [`crate::file::io::EofIO`] - Trait describing how a primitive is decoded from raw bytes
//! - [`crate::file::io::read_be_at`] - Read a value at an offset and advance the offset
//!
//! # Usage Examples
//!
//! These reads are reached through [`crate::Parser::read_be`]:
//!
//! ```rust
//! use eofscope::Parser;
//!
//! // A section header record: kind 0x01, size 0x0102
//! let data = [0x01, 0x01, 0x02];
//! let mut parser = Parser::new(&data);
//!
//! let kind: u8 = parser.read_be()?;   // position: 0 -> 1
//! let size: u16 = parser.read_be()?;  // position: 1 -> 3
//!
//! assert_eq!(kind, 0x01);
//! assert_eq!(size, 0x0102);
//! assert_eq!(parser.pos(), 3);
//! # Ok::<(), eofscope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All reading functions return [`crate::Result<T>`] and fail with [`crate::Error::OutOfBounds`]
//! when the buffer does not hold enough bytes. The offset is left untouched on failure, so a
//! failed read never moves a cursor past the end of the data.

use crate::{Error::OutOfBounds, Result};

/// Trait for primitive types that can be decoded from an EOF container.
///
/// The associated `Bytes` type is the fixed-size array the value is decoded from; its size
/// is the number of bytes a read consumes.
pub trait EofIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

impl EofIO for u8 {
    type Bytes = [u8; 1];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u8::from_be_bytes(bytes)
    }
}

impl EofIO for u16 {
    type Bytes = [u8; 2];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u16::from_be_bytes(bytes)
    }
}

/// Safely reads a value of type `T` in big-endian byte order at `offset`, advancing it.
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the offset position (advanced only on success)
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + size_of::<T>()` exceeds the buffer
/// length, including when that sum would overflow.
pub fn read_be_at<T: EofIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_be_bytes(read))
}
