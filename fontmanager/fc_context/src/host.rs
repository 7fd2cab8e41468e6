//! Collaborators supplied by the host: font metrics, colour resolution and
//! rendering.

use fc_ir::{FontRef, Matrix, Point, Rect, Rgb};

use crate::colour::{ColourResolver, ColourState, OneBitPalette};

/// Untransformed metrics of one character, in millipoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Pen displacement after the character.
    pub advance: Point,
    /// Ink box relative to the pen.
    pub bbox: Rect,
}

/// Font lookup and metrics.
///
/// Hosts resolve font handles themselves; an unknown handle should still
/// produce metrics (typically zero) rather than fail.
pub trait FontHost {
    fn glyph(&self, font: FontRef, code: u32) -> GlyphMetrics;

    /// Font bounding box. `y1` is the font height used to scale underlines.
    fn font_bounds(&self, font: FontRef) -> Rect;

    fn colours(&self) -> &dyn ColourResolver {
        &OneBitPalette
    }
}

/// Everything a renderer needs to draw one character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphDraw {
    pub font: FontRef,
    pub code: u32,
    /// Byte offset of the character in the control string.
    pub offset: u32,
    /// Pen position before the character.
    pub origin: Point,
    pub transform: Matrix,
    pub colours: ColourState,
}

/// Receives draw calls in sequence order.
pub trait RenderSink {
    fn draw_glyph(&mut self, glyph: &GlyphDraw);

    fn draw_underline(&mut self, rect: Rect, colour: Rgb);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn draw_glyph(&mut self, glyph: &GlyphDraw) {
        (**self).draw_glyph(glyph);
    }

    fn draw_underline(&mut self, rect: Rect, colour: Rgb) {
        (**self).draw_underline(rect, colour);
    }
}
