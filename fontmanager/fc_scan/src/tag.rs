//! Raw token tags produced by the scanner.

use crate::control::ControlCode;

/// What kind of byte run the scanner found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// One or more bytes `>= 32`.
    Literal,
    /// A control code plus its operand bytes (and any alignment padding).
    Control(ControlCode),
    /// A byte below 32 with no assigned meaning. Length 1.
    UnknownOpcode,
    /// A control code whose operands run past the limit. Length covers the
    /// code and whatever operand bytes were available.
    TruncatedOperand(ControlCode),
    /// Terminator byte or limit reached. Always length 0; the terminator is
    /// not consumed.
    Eof,
}

impl RawTag {
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, RawTag::UnknownOpcode | RawTag::TruncatedOperand(_))
    }

    pub fn name(self) -> &'static str {
        match self {
            RawTag::Literal => "literal",
            RawTag::Control(code) => code.name(),
            RawTag::UnknownOpcode => "unknown-opcode",
            RawTag::TruncatedOperand(_) => "truncated-operand",
            RawTag::Eof => "eof",
        }
    }
}

/// A tag and the number of bytes it covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
