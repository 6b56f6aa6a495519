use crate::character_sets::to_lower;
use crate::error::{ParseError, Result};
use crate::piece::Piece;
use crate::storage::StorageMut;

/// Write cursor over a caller-supplied fixed capacity
///
/// Bytes between `mark` and `pos` form the piece returned by the next
/// [`Output::extract`]. Running out of room is `CapacityExhausted`, which
/// means the chosen capacity is too small, not that the input is wrong.
#[derive(Debug)]
pub struct Output<'b> {
    buf: &'b mut [u8],
    mark: usize,
    pos: usize,
}

impl<'b> Output<'b> {
    pub fn new<S: StorageMut + ?Sized>(storage: &'b mut S) -> Self {
        Self {
            buf: storage.capacity_mut(),
            mark: 0,
            pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn remain(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_full(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Append one byte.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` if the buffer is full.
    pub fn push(&mut self, c: u8) -> Result<()> {
        let slot = self
            .buf
            .get_mut(self.pos)
            .ok_or(ParseError::CapacityExhausted)?;
        *slot = c;
        self.pos += 1;
        Ok(())
    }

    /// Append `bytes` verbatim. Nothing is written unless all of them fit.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` if fewer than `bytes.len()` bytes remain.
    pub fn extend(&mut self, bytes: &[u8]) -> Result<()> {
        let dst = self.reserve(bytes.len())?;
        dst.copy_from_slice(bytes);
        Ok(())
    }

    /// Append `bytes` ASCII-lowercased. Nothing is written unless all of
    /// them fit.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` if fewer than `bytes.len()` bytes remain.
    pub fn push_lowercase(&mut self, bytes: &[u8]) -> Result<()> {
        let dst = self.reserve(bytes.len())?;
        for (d, &s) in dst.iter_mut().zip(bytes) {
            *d = to_lower(s);
        }
        Ok(())
    }

    /// Close `mark..pos` into a piece of the output buffer.
    ///
    /// # Errors
    ///
    /// `ExtentOverflow` if the capacity is larger than a piece can address
    /// and the write went past it.
    pub fn extract(&mut self) -> Result<Piece> {
        let piece = Piece::from_range(self.mark, self.pos)?;
        self.mark = self.pos;
        Ok(piece)
    }

    fn reserve(&mut self, n: usize) -> Result<&mut [u8]> {
        if n > self.remain() {
            return Err(ParseError::CapacityExhausted);
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..self.pos])
    }
}
