//! Decode failures.
//!
//! Every failure carries the offset of the offending byte and the tokens
//! decoded before it. Nothing after the error is kept.

use fc_ir::Sequence;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DecodeErrorKind {
    /// A control code's operands run past the end of the string.
    #[error("control code {code} needs {needed} operand bytes but only {available} remain")]
    TruncatedOperand {
        code: u8,
        needed: u32,
        available: u32,
    },
    /// A byte below 32 that is neither a terminator nor a control code.
    #[error("byte {byte} is not a control code")]
    UnknownOpcode { byte: u8 },
}

/// A decode failure at `offset`, with the valid prefix.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (at offset {offset})")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub offset: u32,
    partial: Sequence,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, offset: u32, partial: Sequence) -> Self {
        debug_assert_eq!(partial.end(), offset, "prefix must end at the error");
        DecodeError {
            kind,
            offset,
            partial,
        }
    }

    /// Tokens decoded before the failing byte.
    pub fn partial(&self) -> &Sequence {
        &self.partial
    }

    pub fn into_partial(self) -> Sequence {
        self.partial
    }
}
