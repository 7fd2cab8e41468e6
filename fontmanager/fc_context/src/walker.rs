//! One traversal of a token sequence, shared by paint, size and locate.
//!
//! [`walk`] owns the iteration and all position and bounds bookkeeping. A
//! [`WalkAction`] decides what happens around each character and control,
//! and when to stop. The three modes are thin actions over the same loop,
//! so their pen arithmetic cannot drift apart.

use std::ops::ControlFlow;

use fc_ir::{FontRef, Point, Rect, Sequence, Span, Token};

use crate::host::FontHost;
use crate::{FontContext, FontError, Spacing};

mod locate;
mod paint;
mod size;

pub use locate::{Location, Query};
pub use size::{SizeRequest, SizeResult};

/// A character about to be placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphStep {
    pub code: u32,
    /// Byte offset in the control string.
    pub offset: u32,
    /// Character index within the walk, counting from zero.
    pub index: u32,
    /// The character came from a split marker.
    pub split: bool,
}

/// A character after placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub font: FontRef,
    pub code: u32,
    pub offset: u32,
    pub index: u32,
    pub split: bool,
    /// Pen position before the character.
    pub origin: Point,
    /// Transformed glyph advance.
    pub advance: Point,
    /// Full pen movement: advance plus spacing.
    pub step: Point,
    /// Transformed ink box at the pen.
    pub ink: Rect,
    /// Underline bar under the step, if underlining is on.
    pub underline: Option<Rect>,
}

impl PlacedGlyph {
    /// Pen position after the character.
    #[inline]
    pub fn end(&self) -> Point {
        self.origin + self.step
    }
}

/// Per-mode behaviour plugged into [`walk`].
///
/// Every hook may return `Break` to end the walk; the context is left as it
/// was at that moment.
pub trait WalkAction {
    /// Whether moves fold the pen position into the bounds.
    fn measuring(&self) -> bool;

    /// Before a non-text token is applied.
    fn before_control(&mut self, _ctx: &FontContext, _token: &Token, _span: Span) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// After a non-text token was applied.
    fn after_control(&mut self, _ctx: &FontContext, _token: &Token, _span: Span) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Before a character is placed.
    fn before_glyph(&mut self, _ctx: &FontContext, _step: &GlyphStep) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// After a character was placed and the pen moved past it.
    fn after_glyph(&mut self, _ctx: &FontContext, _glyph: &PlacedGlyph) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Walk `sequence` from the context's current state.
///
/// A text token with no font in the active register fails with
/// [`FontError::UnresolvedFont`] before any of its characters reach the
/// action.
pub fn walk<H, A>(
    ctx: &mut FontContext,
    sequence: &Sequence,
    spacing: &Spacing,
    host: &H,
    action: &mut A,
) -> Result<ControlFlow<()>, FontError>
where
    H: FontHost + ?Sized,
    A: WalkAction + ?Sized,
{
    let mut index = 0u32;
    for (token, span) in sequence {
        if !token.is_text() {
            if action.before_control(ctx, token, *span).is_break() {
                return Ok(ControlFlow::Break(()));
            }
            ctx.apply_control(token, host, action.measuring())?;
            if action.after_control(ctx, token, *span).is_break() {
                return Ok(ControlFlow::Break(()));
            }
            continue;
        }

        let font = ctx.require_font()?;
        let split = matches!(token, Token::SplitMarker { .. });
        for (offset, &code) in (span.start..).zip(token.codes()) {
            let step = GlyphStep {
                code,
                offset,
                index,
                split,
            };
            if action.before_glyph(ctx, &step).is_break() {
                return Ok(ControlFlow::Break(()));
            }
            let placed = ctx.place_glyph(font, &step, spacing.delta(index, code), host);
            index += 1;
            if action.after_glyph(ctx, &placed).is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}
