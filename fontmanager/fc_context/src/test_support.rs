//! Fake font host and recording sink shared by the walker tests.

use fc_decode::{decode, DecodeConfig};
use fc_ir::{FontRef, Point, Rect, Rgb, Sequence};

use crate::{FontHost, GlyphDraw, GlyphMetrics, RenderSink};

/// Fixed-pitch fonts: 1 is 8 wide by 16 high, 2 is 32 by 32, 3 is 8 by 8.
/// Unknown fonts have zero metrics.
pub(crate) struct FakeHost;

impl FakeHost {
    fn size(font: FontRef) -> (i32, i32) {
        match font.0 {
            1 => (8, 16),
            2 => (32, 32),
            3 => (8, 8),
            _ => (0, 0),
        }
    }
}

impl FontHost for FakeHost {
    fn glyph(&self, font: FontRef, _code: u32) -> GlyphMetrics {
        let (w, h) = Self::size(font);
        GlyphMetrics {
            advance: Point::new(w, 0),
            bbox: Rect::new(0, 0, w, h),
        }
    }

    fn font_bounds(&self, font: FontRef) -> Rect {
        let (w, h) = Self::size(font);
        Rect::new(0, 0, w, h)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Drawn {
    Glyph(GlyphDraw),
    Underline(Rect, Rgb),
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub drawn: Vec<Drawn>,
}

impl RecordingSink {
    pub fn glyphs(&self) -> Vec<GlyphDraw> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Glyph(g) => Some(*g),
                Drawn::Underline(..) => None,
            })
            .collect()
    }

    pub fn underlines(&self) -> Vec<Rect> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Underline(r, _) => Some(*r),
                Drawn::Glyph(_) => None,
            })
            .collect()
    }

    /// Character codes drawn, as text.
    pub fn text(&self) -> String {
        self.glyphs()
            .iter()
            .filter_map(|g| char::from_u32(g.code))
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn draw_glyph(&mut self, glyph: &GlyphDraw) {
        self.drawn.push(Drawn::Glyph(*glyph));
    }

    fn draw_underline(&mut self, rect: Rect, colour: Rgb) {
        self.drawn.push(Drawn::Underline(rect, colour));
    }
}

pub(crate) fn seq(bytes: &[u8]) -> Sequence {
    match decode(bytes, u32::MAX, &DecodeConfig::default()) {
        Ok(seq) => seq,
        Err(err) => panic!("decode of {bytes:?} failed: {err}"),
    }
}

/// Decode `text` prefixed with a selection of font 1.
pub(crate) fn with_font(text: &[u8]) -> Sequence {
    let mut bytes = vec![26, 1];
    bytes.extend_from_slice(text);
    seq(&bytes)
}
