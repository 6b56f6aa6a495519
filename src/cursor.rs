use crate::error::{ParseError, Result};
use crate::piece::Piece;

/// Forward-only scan state over one input span
///
/// `begin..end` bounds the span, `pos` is the start of the next piece.
/// Offsets are always relative to the start of `input`, so a cursor
/// narrowed to a sub-span still produces pieces into the whole buffer.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    begin: usize,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Start a cursor over the whole input.
    ///
    /// The extent check happens here, before any piece is extracted.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        if input.len() > Piece::MAX_EXTENT {
            return Err(ParseError::ExtentOverflow);
        }
        Ok(Self {
            input,
            begin: 0,
            pos: 0,
            end: input.len(),
        })
    }

    /// Cursor restricted to the bytes of `piece`
    pub fn within(&self, piece: Piece) -> Self {
        debug_assert!(piece.end() <= self.input.len());
        Self {
            input: self.input,
            begin: piece.offset(),
            pos: piece.offset(),
            end: piece.end(),
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.end
    }

    pub fn remain(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    /// Unconsumed bytes
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..self.end]
    }

    pub fn peek(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Whether the next byte is `c`; consumes it if so
    pub fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume exactly the literal byte `c`.
    ///
    /// # Errors
    ///
    /// `BadSyntax` at end of input or on any other byte.
    pub fn expect_byte(&mut self, c: u8) -> Result<()> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(ParseError::BadSyntax)
        }
    }

    pub fn skip(&mut self, n: usize) {
        debug_assert!(n <= self.remain());
        self.pos += n;
    }

    /// Absolute index of the first byte equal to `a`, or `end`
    pub fn find(&self, a: u8) -> usize {
        memchr::memchr(a, self.rest()).map_or(self.end, |i| self.pos + i)
    }

    /// Absolute index of the first byte equal to `a` or `b`, or `end`
    pub fn find2(&self, a: u8, b: u8) -> usize {
        memchr::memchr2(a, b, self.rest()).map_or(self.end, |i| self.pos + i)
    }

    /// Absolute index of the first byte equal to `a`, `b` or `c`, or `end`
    pub fn find3(&self, a: u8, b: u8, c: u8) -> usize {
        memchr::memchr3(a, b, c, self.rest()).map_or(self.end, |i| self.pos + i)
    }

    /// Absolute index of the last byte equal to `a` in the span
    pub fn rfind(&self, a: u8) -> Option<usize> {
        memchr::memrchr(a, self.rest()).map(|i| self.pos + i)
    }

    /// Close `pos..end` into a piece and move `pos` to `end`.
    pub fn extract(&mut self, end: usize) -> Result<Piece> {
        debug_assert!(self.begin <= self.pos && self.pos <= end && end <= self.end);
        let piece = Piece::from_range(self.pos, end)?;
        self.pos = end;
        Ok(piece)
    }

    /// Extract everything left in the span
    pub fn extract_rest(&mut self) -> Result<Piece> {
        self.extract(self.end)
    }
}
