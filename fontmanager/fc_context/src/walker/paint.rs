use std::ops::ControlFlow;

use fc_ir::Sequence;

use super::{walk, PlacedGlyph, WalkAction};
use crate::host::{FontHost, GlyphDraw, RenderSink};
use crate::{FontContext, FontError, Spacing};

struct Paint<'s, K: ?Sized> {
    sink: &'s mut K,
}

impl<K: RenderSink + ?Sized> WalkAction for Paint<'_, K> {
    fn measuring(&self) -> bool {
        false
    }

    fn after_glyph(&mut self, ctx: &FontContext, glyph: &PlacedGlyph) -> ControlFlow<()> {
        let colours = *ctx.colours();
        if let Some(bar) = glyph.underline {
            self.sink.draw_underline(bar, colours.fore);
        }
        self.sink.draw_glyph(&GlyphDraw {
            font: glyph.font,
            code: glyph.code,
            offset: glyph.offset,
            origin: glyph.origin,
            transform: ctx.transform(),
            colours,
        });
        ControlFlow::Continue(())
    }
}

impl FontContext {
    /// Render `sequence` from the current pen position.
    ///
    /// Bounds and underline start cleared. Glyphs and underline bars reach
    /// `sink` in sequence order, each bar before the glyph it sits under.
    /// The context is left in its final state.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = sequence.len()))]
    pub fn paint<H, K>(
        &mut self,
        sequence: &Sequence,
        spacing: &Spacing,
        host: &H,
        sink: &mut K,
    ) -> Result<(), FontError>
    where
        H: FontHost + ?Sized,
        K: RenderSink + ?Sized,
    {
        self.clear_bounds();
        self.clear_underline();
        walk(self, sequence, spacing, host, &mut Paint { sink })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
