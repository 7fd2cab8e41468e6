//! Raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner does not interpret operands; it only knows how many bytes
//! each control code owns. Operand bytes are raw data and may hold any
//! value, terminators included. Only the logical limit can cut an operand
//! short.

use crate::control::{alignment_padding, is_terminator, ControlCode, OperandShape};
use crate::cursor::Cursor;
use crate::source::ByteSource;
use crate::tag::{RawTag, RawToken};
use crate::LITERAL_THRESHOLD;

/// Allocation-free scanner over one control string.
///
/// Error conditions are encoded as [`RawTag`] variants, not as `Err`.
pub struct RawScanner<'a, S: ?Sized> {
    cursor: Cursor<'a, S>,
}

impl<'a, S: ByteSource + ?Sized> RawScanner<'a, S> {
    pub fn new(cursor: Cursor<'a, S>) -> Self {
        Self { cursor }
    }

    /// Offset of the next unscanned byte.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<'a, S> {
        &self.cursor
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` at a terminator or the limit.
    /// The terminator is not consumed, so repeated calls keep returning `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let byte = self.cursor.current();
        if is_terminator(byte) {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        if byte >= LITERAL_THRESHOLD {
            return self.literal(start);
        }
        match ControlCode::from_byte(byte) {
            Some(code) => self.control(start, code),
            None => self.unknown_opcode(start),
        }
    }

    fn literal(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b >= LITERAL_THRESHOLD);
        RawToken {
            tag: RawTag::Literal,
            len: self.cursor.pos() - start,
        }
    }

    fn unknown_opcode(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::UnknownOpcode,
            len: self.cursor.pos() - start,
        }
    }

    fn control(&mut self, start: u32, code: ControlCode) -> RawToken {
        let operand_len = match code.operands() {
            OperandShape::Fixed(n) => n,
            OperandShape::Aligned(n) => alignment_padding(self.cursor.base_address(), start) + n,
            OperandShape::UntilControl => return self.comment(start),
        };

        // `remaining` includes the code byte itself.
        if self.cursor.remaining() - 1 < operand_len {
            self.cursor.advance_n(self.cursor.remaining());
            return RawToken {
                tag: RawTag::TruncatedOperand(code),
                len: self.cursor.pos() - start,
            };
        }

        self.cursor.advance_n(1 + operand_len);
        RawToken {
            tag: RawTag::Control(code),
            len: self.cursor.pos() - start,
        }
    }

    /// Comment text runs to the next byte below 32. That byte closes the
    /// comment and is swallowed with it, unless it terminates the string.
    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(|b| b >= LITERAL_THRESHOLD);
        if !self.cursor.is_eof() && !is_terminator(self.cursor.current()) {
            self.cursor.advance();
        }
        RawToken {
            tag: RawTag::Control(ControlCode::Comment),
            len: self.cursor.pos() - start,
        }
    }
}
