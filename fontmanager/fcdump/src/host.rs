//! Stand-in font host and a sink that prints draw calls.

use std::fmt::Write;

use fc_context::{FontHost, GlyphDraw, GlyphMetrics, RenderSink};
use fc_ir::{FontRef, Point, Rect, Rgb};

/// Every font is fixed pitch with the same cell size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedPitchHost {
    pub pitch: i32,
    pub height: i32,
}

impl Default for FixedPitchHost {
    fn default() -> Self {
        FixedPitchHost {
            pitch: 8000,
            height: 16000,
        }
    }
}

impl FontHost for FixedPitchHost {
    fn glyph(&self, _font: FontRef, _code: u32) -> GlyphMetrics {
        GlyphMetrics {
            advance: Point::new(self.pitch, 0),
            bbox: Rect::new(0, 0, self.pitch, self.height),
        }
    }

    fn font_bounds(&self, _font: FontRef) -> Rect {
        Rect::new(0, 0, self.pitch, self.height)
    }
}

/// Writes one line per draw call.
#[derive(Debug, Default)]
pub struct TextSink {
    pub out: String,
}

impl RenderSink for TextSink {
    fn draw_glyph(&mut self, glyph: &GlyphDraw) {
        let shown = char::from_u32(glyph.code)
            .filter(|c| !c.is_control())
            .map_or_else(|| format!("#{}", glyph.code), |c| c.to_string());
        let _ = write!(
            self.out,
            "  glyph {shown:?} {} @{} at {} fg={} bg={}",
            glyph.font, glyph.offset, glyph.origin, glyph.colours.fore, glyph.colours.back
        );
        if !glyph.transform.is_identity() {
            let _ = write!(self.out, " matrix={}", glyph.transform);
        }
        self.out.push('\n');
    }

    fn draw_underline(&mut self, rect: Rect, colour: Rgb) {
        let _ = writeln!(self.out, "  underline {rect} colour={colour}");
    }
}
