//! Low-level scanner for FontManager control strings.
//!
//! Splits a byte string into raw tokens: maximal literal runs, control codes
//! with their operand bytes, and error tokens. Nothing here interprets
//! operands; that is the decoder's job (`fc_decode`).
//!
//! ```text
//! ByteSource → Cursor → RawScanner → (RawTag, len)
//! ```
//!
//! # End of string
//!
//! A control string ends at the first terminator byte (0, 10 or 13) met in
//! scanning position, or at the declared length, whichever comes first. The
//! cursor reports `0x00` for every read at or past the declared length, so
//! running out of bytes looks exactly like meeting a terminator.

mod control;
mod cursor;
mod raw_scanner;
mod source;
mod tag;

pub use control::{alignment_padding, is_terminator, ControlCode, OperandShape, LITERAL_THRESHOLD};
pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source::{ByteSource, SliceSource};
pub use tag::{RawTag, RawToken};
