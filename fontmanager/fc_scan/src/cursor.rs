//! Bounded cursor over a [`ByteSource`].
//!
//! Reads at or past the logical limit return `0x00`, the same byte as the
//! NUL terminator, so scanning code never has to bounds-check. Use
//! [`is_eof()`](Cursor::is_eof) to tell a real NUL from the limit.

use crate::source::ByteSource;

/// Position within a control string, limited to `min(length, source.len())`.
///
/// The cursor is [`Copy`], so callers snapshot it freely for lookahead.
#[derive(Debug)]
pub struct Cursor<'a, S: ?Sized> {
    src: &'a S,
    pos: u32,
    limit: u32,
}

impl<S: ?Sized> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Cursor<'_, S> {}

impl<'a, S: ByteSource + ?Sized> Cursor<'a, S> {
    /// Cursor at offset 0, reading no further than `length` bytes.
    pub fn new(src: &'a S, length: u32) -> Self {
        Self {
            src,
            pos: 0,
            limit: length.min(src.len()),
        }
    }

    #[inline]
    pub fn byte_at(&self, offset: u32) -> u8 {
        if offset >= self.limit {
            return 0;
        }
        self.src.read(offset).unwrap_or(0)
    }

    /// Byte at the current position, `0x00` at the limit.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte `n` positions ahead of current.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.byte_at(self.pos.saturating_add(n))
    }

    /// Advance one byte, stopping at the limit.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance `n` bytes, stopping at the limit.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.limit);
    }

    /// Advance while `pred` holds for the current byte and input remains.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.limit - self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.limit
    }

    /// Host address of offset 0, for word alignment.
    #[inline]
    pub fn base_address(&self) -> u32 {
        self.src.base_address()
    }
}
