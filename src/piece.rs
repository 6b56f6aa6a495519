use core::ops::Range;

use crate::error::{ParseError, Result};

/// Byte range into a base buffer, stored as a 16-bit offset and length
///
/// A piece does not borrow the buffer it was computed from; pair it with the
/// same bytes (or an exact copy) to materialize the slice.
///
/// Buffer: "http://example.com/a"
/// - scheme: offset 0, len 4
/// - host: offset 7, len 11
/// - path: offset 18, len 2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece {
    offset: u16,
    len: u16,
}

impl Piece {
    /// Maximum buffer length a piece can address
    pub const MAX_EXTENT: usize = u16::MAX as usize;

    /// Absent piece
    pub const EMPTY: Self = Self { offset: 0, len: 0 };

    /// Build a piece covering `start..end`.
    ///
    /// # Errors
    ///
    /// Returns `ExtentOverflow` if `end` is past the 16-bit extent. A
    /// reversed range is reported the same way rather than wrapped.
    pub fn from_range(start: usize, end: usize) -> Result<Self> {
        if start > end || end > Self::MAX_EXTENT {
            return Err(ParseError::ExtentOverflow);
        }
        Ok(Self {
            offset: start as u16,
            len: (end - start) as u16,
        })
    }

    /// Offset of the first byte. Meaningless when the piece is absent.
    pub fn offset(self) -> usize {
        usize::from(self.offset)
    }

    /// Length in bytes
    pub fn len(self) -> usize {
        usize::from(self.len)
    }

    /// Offset one past the last byte
    pub fn end(self) -> usize {
        self.offset() + self.len()
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// A piece is present iff it covers at least one byte
    pub fn is_present(self) -> bool {
        !self.is_empty()
    }

    pub fn range(self) -> Range<usize> {
        self.offset()..self.end()
    }

    /// Materialize the piece against its base buffer.
    ///
    /// Returns `None` for an absent piece, or when `base` is too short to
    /// contain it (the piece was computed from different bytes).
    pub fn get(self, base: &[u8]) -> Option<&[u8]> {
        if self.is_empty() {
            return None;
        }
        base.get(self.range())
    }

    /// Like [`Piece::get`], for text buffers.
    ///
    /// Pieces produced by the parser always start and end next to ASCII
    /// delimiters, so they fall on `char` boundaries of the text they were
    /// computed from.
    pub fn get_str(self, base: &str) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        base.get(self.range())
    }
}
