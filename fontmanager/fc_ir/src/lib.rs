//! Shared data model for FontManager control sequences.
//!
//! This crate contains the types passed between the decoder and the font
//! context:
//! - Spans locating tokens in the source string
//! - Tokens and `Sequence` for decoder output
//! - Points, rectangles and transform matrices in millipoints
//! - Colour specifications (GCOL numbers and RGB palette entries)
//!
//! # Design Philosophy
//!
//! - **Plain values**: every type is `Clone` with no shared interior state,
//!   so a font context holding them can be deep-copied by assignment.
//! - **Byte offsets everywhere**: tokens keep the `[start, end)` range of the
//!   bytes that produced them, which caret mapping relies on.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod colour;
mod geometry;
mod sequence;
mod span;
mod token;

pub use colour::{ColourChange, ColourSpec, Rgb};
pub use geometry::{Matrix, Point, Rect, FIXED_ONE};
pub use sequence::Sequence;
pub use span::Span;
pub use token::{FontRef, LiteralRun, Token, FONT_SLOTS};
