use std::ops::ControlFlow;

use fc_ir::{Point, Sequence, Span, Token};

use super::{walk, GlyphStep, PlacedGlyph, WalkAction};
use crate::host::FontHost;
use crate::{FontContext, FontError, Spacing};

/// What to find in a locate walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Pen position at a byte offset.
    Offset(u32),
    /// Caret offset nearest a point.
    Point(Point),
}

/// A caret: byte offset and the pen position there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub offset: u32,
    pub position: Point,
}

struct Locate {
    query: Query,
    found: Option<Location>,
    leading: Option<FontContext>,
    nearest: Option<Nearest>,
}

/// Best caret so far for a point query.
struct Nearest {
    distance: i128,
    location: Location,
    ctx: FontContext,
}

impl Locate {
    fn at_offset(&mut self, ctx: &FontContext, start: u32) -> ControlFlow<()> {
        match self.query {
            Query::Offset(target) if start >= target => {
                self.found = Some(Location {
                    offset: start,
                    position: ctx.position(),
                });
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    }
}

/// Store a new best caret, reusing the slot's allocation.
fn keep(slot: &mut Option<Nearest>, distance: i128, location: Location, ctx: &FontContext) {
    match slot {
        Some(best) => {
            best.distance = distance;
            best.location = location;
            ctx.copy(&mut best.ctx);
        }
        None => {
            *slot = Some(Nearest {
                distance,
                location,
                ctx: ctx.clone(),
            });
        }
    }
}

/// Squared distance from `p` to the segment `from..from + step`.
fn segment_distance(p: Point, from: Point, step: Point) -> i128 {
    let rel = p - from;
    let len2 = i128::from(step.dot(step));
    let along = i128::from(rel.dot(step));
    if len2 == 0 || along <= 0 {
        return i128::from(rel.dot(rel));
    }
    if along >= len2 {
        let past = p - (from + step);
        return i128::from(past.dot(past));
    }
    let cross = i128::from(rel.x) * i128::from(step.y) - i128::from(rel.y) * i128::from(step.x);
    cross * cross / len2
}

impl WalkAction for Locate {
    fn measuring(&self) -> bool {
        true
    }

    fn before_control(&mut self, ctx: &FontContext, _token: &Token, span: Span) -> ControlFlow<()> {
        self.at_offset(ctx, span.start)
    }

    fn before_glyph(&mut self, ctx: &FontContext, step: &GlyphStep) -> ControlFlow<()> {
        self.at_offset(ctx, step.offset)?;
        if matches!(self.query, Query::Point(_)) {
            match &mut self.leading {
                Some(saved) => ctx.copy(saved),
                None => self.leading = Some(ctx.clone()),
            }
        }
        ControlFlow::Continue(())
    }

    fn after_glyph(&mut self, ctx: &FontContext, glyph: &PlacedGlyph) -> ControlFlow<()> {
        let Query::Point(target) = self.query else {
            return ControlFlow::Continue(());
        };
        let distance = segment_distance(target, glyph.origin, glyph.step);
        if self.nearest.as_ref().is_some_and(|best| distance >= best.distance) {
            return ControlFlow::Continue(());
        }

        // Before the midpoint along the direction of travel: leading edge.
        let mid = glyph.origin.midpoint(glyph.end());
        if (target - mid).dot(glyph.step) < 0 {
            if let Some(leading) = &self.leading {
                let location = Location {
                    offset: glyph.offset,
                    position: glyph.origin,
                };
                keep(&mut self.nearest, distance, location, leading);
            }
        } else {
            let location = Location {
                offset: glyph.offset + 1,
                position: glyph.end(),
            };
            keep(&mut self.nearest, distance, location, ctx);
        }
        ControlFlow::Continue(())
    }
}

impl FontContext {
    /// Map between byte offsets and pen positions.
    ///
    /// [`Query::Offset`] stops at the first token or character starting at
    /// or after the offset. [`Query::Point`] walks the whole sequence and
    /// picks the character whose pen step passes nearest the point, the
    /// earliest one on a tie; the caret is its leading edge when the point
    /// lies before its midpoint and its trailing edge otherwise. The
    /// context is left at that caret. A string with no characters, or an
    /// offset past the last token, reports the end of the sequence.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = sequence.len()))]
    pub fn locate<H: FontHost + ?Sized>(
        &mut self,
        sequence: &Sequence,
        spacing: &Spacing,
        host: &H,
        query: Query,
    ) -> Result<Location, FontError> {
        let mut action = Locate {
            query,
            found: None,
            leading: None,
            nearest: None,
        };
        walk(self, sequence, spacing, host, &mut action)?;

        if let Some(nearest) = action.nearest {
            *self = nearest.ctx;
            return Ok(nearest.location);
        }
        Ok(action.found.unwrap_or(Location {
            offset: sequence.end(),
            position: self.position(),
        }))
    }
}
