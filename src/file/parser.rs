//! Low-level byte stream parser for EOF container decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor-based binary data
//! parser used to walk the prefix, the header table and the section bodies of an EOF container.
//! Every read is bounds-checked before any byte is touched, so a truncated or hostile buffer
//! surfaces as [`crate::Error::OutOfBounds`] instead of a panic.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::advance`] - Move forward by one byte
//! - [`crate::file::parser::Parser::advance_by`] - Move forward by specified bytes
//! - [`crate::file::parser::Parser::pos`] - Get current position
//! - [`crate::file::parser::Parser::remaining`] - Number of unread bytes
//!
//! ## Data Access Methods
//! - [`crate::file::parser::Parser::read_be`] - Read primitive types (big-endian)
//! - [`crate::file::parser::Parser::read_bytes`] - Borrow a sub-slice and advance past it
//! - [`crate::file::parser::Parser::peek_byte`] - Peek at current byte without advancing
//!
//! # Usage Examples
//!
//! ```rust
//! use eofscope::Parser;
//!
//! let data = [0xEF, 0xCA, 0xFE, 0x01, 0x01, 0x00, 0x01];
//! let mut parser = Parser::new(&data);
//!
//! let magic = parser.read_bytes(3)?;
//! assert_eq!(magic, &[0xEF, 0xCA, 0xFE]);
//!
//! let version = parser.read_be::<u8>()?;
//! let kind = parser.read_be::<u8>()?;
//! let size = parser.read_be::<u16>()?;
//! assert_eq!((version, kind, size), (1, 1, 1));
//! assert!(!parser.has_more_data());
//! # Ok::<(), eofscope::Error>(())
//! ```

use crate::{
    file::io::{read_be_at, EofIO},
    Error::OutOfBounds,
    Result,
};

/// A cursor over a borrowed byte slice.
///
/// `Parser` never copies the underlying data; sub-slices returned by
/// [`Parser::read_bytes`] borrow from the same buffer with the original lifetime.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    ///
    /// ```rust
    /// use eofscope::Parser;
    /// let data = [0x01, 0x02];
    /// let mut parser = Parser::new(&data);
    /// assert!(parser.has_more_data());
    ///
    /// parser.advance_by(2)?;
    /// assert!(!parser.has_more_data());
    /// # Ok::<(), eofscope::Error>(())
    /// ```
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Number of bytes between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Move the position forward by one byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing would exceed the data length.
    pub fn advance(&mut self) -> Result<()> {
        self.advance_by(1)
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if step > self.remaining() {
            return Err(OutOfBounds);
        }

        self.position += step;
        Ok(())
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Peek at the next byte without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is at or beyond the data length.
    pub fn peek_byte(&self) -> Result<u8> {
        if self.position >= self.data.len() {
            return Err(OutOfBounds);
        }
        Ok(self.data[self.position])
    }

    /// Read a type `T` from the current position in big-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` would exceed the data length.
    /// The position is unchanged on failure.
    pub fn read_be<T: EofIO>(&mut self) -> Result<T> {
        read_be_at::<T>(self.data, &mut self.position)
    }

    /// Borrow the next `len` bytes and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `len` bytes remain.
    /// The position is unchanged on failure.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(OutOfBounds);
        }

        let slice = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn sequential_reads() {
        #[rustfmt::skip]
        let data = [
            0x03,       // kind
            0x00, 0x02, // size
            0x00,       // terminator
        ];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_be::<u8>().unwrap(), 0x03);
        assert_eq!(parser.read_be::<u16>().unwrap(), 0x0002);
        assert_eq!(parser.pos(), 3);
        assert_eq!(parser.remaining(), 1);
        assert_eq!(parser.peek_byte().unwrap(), 0x00);
        assert_eq!(parser.pos(), 3);

        parser.advance().unwrap();
        assert!(!parser.has_more_data());
        assert!(matches!(parser.peek_byte(), Err(Error::OutOfBounds)));
    }

    #[test]
    fn truncated_u16_does_not_move() {
        let data = [0x01, 0x00];
        let mut parser = Parser::new(&data);

        parser.advance().unwrap();
        assert!(matches!(parser.read_be::<u16>(), Err(Error::OutOfBounds)));
        assert_eq!(parser.pos(), 1);
    }

    #[test]
    fn read_bytes_borrows() {
        let data = [0xFE, 0xDA, 0x00, 0x01];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_bytes(1).unwrap(), &[0xFE]);
        assert_eq!(parser.read_bytes(0).unwrap(), &[] as &[u8]);
        assert_eq!(parser.read_bytes(3).unwrap(), &[0xDA, 0x00, 0x01]);
        assert!(matches!(parser.read_bytes(1), Err(Error::OutOfBounds)));
    }

    #[test]
    fn advance_past_end() {
        let data = [0x00; 4];
        let mut parser = Parser::new(&data);

        assert!(parser.advance_by(5).is_err());
        assert!(parser.advance_by(usize::MAX).is_err());
        assert!(parser.advance_by(4).is_ok());
        assert!(parser.advance().is_err());
        assert_eq!(parser.len(), 4);
        assert!(!parser.is_empty());
    }
}
