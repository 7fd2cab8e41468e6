use std::ops::ControlFlow;

use fc_ir::{Point, Sequence, Span, Token};

use super::{walk, GlyphStep, PlacedGlyph, WalkAction};
use crate::host::FontHost;
use crate::{FontContext, FontError, Spacing};

/// Limits for a size walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeRequest {
    /// Furthest pen position allowed on each axis. A negative limit bounds
    /// the axis from below, for right-to-left or downward text.
    pub limits: Point,
    /// Character at which the text may be split when a limit is hit.
    pub split_char: Option<u32>,
}

impl Default for SizeRequest {
    fn default() -> Self {
        SizeRequest {
            limits: Point::new(i32::MAX, i32::MAX),
            split_char: None,
        }
    }
}

impl SizeRequest {
    pub fn new(limits: Point) -> Self {
        SizeRequest {
            limits,
            split_char: None,
        }
    }

    #[must_use]
    pub fn with_split(mut self, split_char: u32) -> Self {
        self.split_char = Some(split_char);
        self
    }

    fn exceeded(&self, p: Point) -> bool {
        let past = |pos: i32, limit: i32| if limit >= 0 { pos > limit } else { pos < limit };
        past(p.x, self.limits.x) || past(p.y, self.limits.y)
    }
}

/// Outcome of a size walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeResult {
    /// Byte offset where measuring stopped: the end of the sequence, the
    /// last split character before the limit, or the first character or
    /// move that did not fit.
    pub split_offset: u32,
    /// Offsets of split characters that fitted, in order.
    pub splits: Vec<u32>,
    /// A limit was hit.
    pub truncated: bool,
}

struct Size<'r> {
    request: &'r SizeRequest,
    leading: Option<(u32, FontContext)>,
    split: Option<(u32, FontContext)>,
    splits: Vec<u32>,
}

impl WalkAction for Size<'_> {
    fn measuring(&self) -> bool {
        true
    }

    fn before_control(&mut self, ctx: &FontContext, token: &Token, span: Span) -> ControlFlow<()> {
        if matches!(token, Token::Move { .. }) {
            snapshot(&mut self.leading, span.start, ctx);
        }
        ControlFlow::Continue(())
    }

    fn after_control(&mut self, ctx: &FontContext, token: &Token, _span: Span) -> ControlFlow<()> {
        if matches!(token, Token::Move { .. }) && self.request.exceeded(ctx.position()) {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn before_glyph(&mut self, ctx: &FontContext, step: &GlyphStep) -> ControlFlow<()> {
        snapshot(&mut self.leading, step.offset, ctx);
        if step.split {
            snapshot(&mut self.split, step.offset, ctx);
        }
        ControlFlow::Continue(())
    }

    fn after_glyph(&mut self, ctx: &FontContext, glyph: &PlacedGlyph) -> ControlFlow<()> {
        if self.request.exceeded(ctx.position()) {
            return ControlFlow::Break(());
        }
        if glyph.split {
            self.splits.push(glyph.offset);
        }
        ControlFlow::Continue(())
    }
}

/// Record `ctx` at `offset`, reusing the slot's allocation.
fn snapshot(slot: &mut Option<(u32, FontContext)>, offset: u32, ctx: &FontContext) {
    match slot {
        Some((at, saved)) => {
            *at = offset;
            ctx.copy(saved);
        }
        None => *slot = Some((offset, ctx.clone())),
    }
}

impl FontContext {
    /// Measure `sequence` from the origin until it ends or the pen passes
    /// a limit.
    ///
    /// On a limit the context is rewound to just before the last split
    /// character seen, or failing that to just before the character or
    /// move that crossed the limit, and `split_offset` names that token.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = sequence.len()))]
    pub fn size<H: FontHost + ?Sized>(
        &mut self,
        sequence: &Sequence,
        spacing: &Spacing,
        host: &H,
        request: &SizeRequest,
    ) -> Result<SizeResult, FontError> {
        self.set_position(Point::ORIGIN);
        self.clear_bounds();
        self.clear_underline();

        let marked;
        let sequence = match request.split_char {
            Some(code) => {
                marked = sequence.mark_splits(code);
                &marked
            }
            None => sequence,
        };

        let mut action = Size {
            request,
            leading: None,
            split: None,
            splits: Vec::new(),
        };
        let flow = walk(self, sequence, spacing, host, &mut action)?;
        if flow.is_continue() {
            return Ok(SizeResult {
                split_offset: sequence.end(),
                splits: action.splits,
                truncated: false,
            });
        }

        let Some((split_offset, restored)) = action.split.or(action.leading) else {
            return Ok(SizeResult {
                split_offset: sequence.end(),
                splits: action.splits,
                truncated: true,
            });
        };
        *self = restored;
        tracing::debug!(split_offset, "size limit reached");
        Ok(SizeResult {
            split_offset,
            splits: action.splits,
            truncated: true,
        })
    }
}
