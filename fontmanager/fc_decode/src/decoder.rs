//! The decode loop: scan, cook, push.

use fc_ir::{Sequence, Span};
use fc_scan::{alignment_padding, ByteSource, ControlCode, Cursor, OperandShape, RawScanner, RawTag};

use crate::cooker::Cooker;
use crate::{DecodeConfig, DecodeError, DecodeErrorKind};

/// Decode `source` up to the first terminator or `length` bytes.
///
/// Fails on the first unknown opcode or truncated operand. The error holds
/// the tokens decoded before the failing byte.
#[tracing::instrument(level = "debug", skip_all, fields(length = length))]
pub fn decode<S: ByteSource + ?Sized>(
    source: &S,
    length: u32,
    config: &DecodeConfig,
) -> Result<Sequence, DecodeError> {
    let cursor = Cursor::new(source, config.effective_length(length));
    let cooker = Cooker::new(cursor);
    let mut scanner = RawScanner::new(cursor);
    let mut sequence = Sequence::new();

    loop {
        let start = scanner.pos();
        let raw = scanner.next_token();
        let token = match raw.tag {
            RawTag::Eof => break,
            RawTag::Literal => cooker.literal(start, raw.len),
            RawTag::Control(code) => cooker.control(code, start, raw.len),
            RawTag::UnknownOpcode => {
                let kind = DecodeErrorKind::UnknownOpcode {
                    byte: cursor.byte_at(start),
                };
                return Err(fail(kind, start, sequence));
            }
            RawTag::TruncatedOperand(code) => {
                let kind = DecodeErrorKind::TruncatedOperand {
                    code: code.byte(),
                    needed: operand_bytes(code, cursor.base_address(), start),
                    available: raw.len - 1,
                };
                return Err(fail(kind, start, sequence));
            }
        };

        let span = Span::with_len(start, raw.len);
        if config.trace {
            tracing::debug!(%span, token = %token, "decoded");
        }
        sequence.push(token, span);
    }

    tracing::trace!(tokens = sequence.len(), end = sequence.end(), "decode complete");
    Ok(sequence)
}

/// Decode as far as possible, dropping everything from the first error on.
///
/// For callers that prefer a usable prefix over a hard failure.
pub fn decode_prefix<S: ByteSource + ?Sized>(
    source: &S,
    length: u32,
    config: &DecodeConfig,
) -> Sequence {
    match decode(source, length, config) {
        Ok(sequence) => sequence,
        Err(err) => {
            tracing::debug!(error = %err, "keeping decoded prefix");
            err.into_partial()
        }
    }
}

fn fail(kind: DecodeErrorKind, offset: u32, partial: Sequence) -> DecodeError {
    tracing::debug!(offset, error = %kind, "decode failed");
    DecodeError::new(kind, offset, partial)
}

/// Operand bytes `code` at `offset` would need, padding included.
fn operand_bytes(code: ControlCode, base_address: u32, offset: u32) -> u32 {
    match code.operands() {
        OperandShape::Fixed(n) => n,
        OperandShape::Aligned(n) => alignment_padding(base_address, offset) + n,
        OperandShape::UntilControl => 0,
    }
}
