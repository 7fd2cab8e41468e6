//! Font context for FontManager control sequences.
//!
//! A [`FontContext`] holds everything that persists while a string is
//! interpreted: font registers, colours, transform, underline, pen position
//! and accumulated bounds. Decoded tokens drive it through one of three
//! walks:
//!
//! - [`FontContext::paint`] sends glyphs and underline bars to a
//!   [`RenderSink`]
//! - [`FontContext::size`] measures up to optional limits, rewinding to a
//!   split character when the text does not fit
//! - [`FontContext::locate`] maps a byte offset to a pen position and back
//!
//! Font metrics come from a [`FontHost`]; spacing is supplied per walk as a
//! [`Spacing`].
//!
//! The context never shares state: cloning or [`FontContext::copy`] gives an
//! independent snapshot, which is how measuring ahead works without
//! disturbing the live context.

mod colour;
mod context;
mod error;
mod host;
mod spacing;
mod walker;

#[cfg(test)]
mod test_support;

pub use colour::{ColourResolver, ColourState, OneBitPalette, DEFAULT_MAX_COLOUR};
pub use context::{FontContext, Underline};
pub use error::FontError;
pub use host::{FontHost, GlyphDraw, GlyphMetrics, RenderSink};
pub use spacing::Spacing;
pub use walker::{
    walk, GlyphStep, Location, PlacedGlyph, Query, SizeRequest, SizeResult, WalkAction,
};
