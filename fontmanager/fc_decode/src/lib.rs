//! Decoder for FontManager control strings.
//!
//! Turns a byte string (text interleaved with control codes) into a
//! [`Sequence`](fc_ir::Sequence) of typed tokens, each tagged with the byte
//! span it came from.
//!
//! ```text
//! ByteSource → fc_scan::RawScanner → Cooker → Sequence
//! ```
//!
//! Decoding stops at the first terminator (0, 10 or 13) or at the declared
//! length. Errors are never skipped: an unknown control byte or an operand
//! cut off by the length fails the call. Callers that want whatever decoded
//! cleanly use [`decode_prefix`].

mod config;
mod cooker;
mod decode_error;
mod decoder;

pub use config::{DecodeConfig, MAX_STRING_LENGTH};
pub use decode_error::{DecodeError, DecodeErrorKind};
pub use decoder::{decode, decode_prefix};
