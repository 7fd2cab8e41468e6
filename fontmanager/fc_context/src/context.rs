//! The font context state machine.

use fc_ir::{ColourChange, FontRef, Matrix, Point, Rect, Token, FONT_SLOTS};

use crate::colour::{ColourResolver, ColourState};
use crate::host::FontHost;
use crate::walker::{GlyphStep, PlacedGlyph};
use crate::FontError;

/// Underline geometry in millipoints, relative to the baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Underline {
    /// Top of the bar (negative is below the baseline).
    pub position: i32,
    /// Zero means no underline.
    pub thickness: i32,
}

impl Underline {
    pub const OFF: Underline = Underline {
        position: 0,
        thickness: 0,
    };

    #[inline]
    pub fn is_on(&self) -> bool {
        self.thickness != 0
    }

    /// Bar under a pen step from `origin` by `step`.
    fn bar(&self, origin: Point, step: Point) -> Rect {
        let top = origin.y.saturating_add(self.position);
        let bottom = top.saturating_sub(self.thickness);
        Rect::new(
            origin.x.min(origin.x.saturating_add(step.x)),
            bottom.min(top),
            origin.x.max(origin.x.saturating_add(step.x)),
            bottom.max(top),
        )
    }
}

/// Accumulated rendering state while interpreting a token sequence.
///
/// All fields are plain values. [`copy`](Self::copy) and `Clone` give a
/// fully independent snapshot, which is how "future" queries stay isolated
/// from the live context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontContext {
    fonts: [Option<FontRef>; FONT_SLOTS],
    active_slot: u8,
    colours: ColourState,
    transform: Matrix,
    underline: Underline,
    position: Point,
    bounds: Option<Rect>,
}

impl Default for FontContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FontContext {
    pub fn new() -> Self {
        FontContext {
            fonts: [None; FONT_SLOTS],
            active_slot: 0,
            colours: ColourState::default(),
            transform: Matrix::IDENTITY,
            underline: Underline::OFF,
            position: Point::ORIGIN,
            bounds: None,
        }
    }

    /// Font in the active register.
    #[inline]
    pub fn font(&self) -> Option<FontRef> {
        self.fonts[usize::from(self.active_slot)]
    }

    pub fn font_in(&self, slot: u8) -> Option<FontRef> {
        self.fonts.get(usize::from(slot)).copied().flatten()
    }

    #[inline]
    pub fn active_slot(&self) -> u8 {
        self.active_slot
    }

    #[inline]
    pub fn colours(&self) -> &ColourState {
        &self.colours
    }

    #[inline]
    pub fn transform(&self) -> Matrix {
        self.transform
    }

    #[inline]
    pub fn underline(&self) -> Underline {
        self.underline
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Extent covered so far, `None` until something was measured.
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_transform(&mut self, transform: Matrix) {
        self.transform = transform;
    }

    /// Highest GCOL number colour changes saturate to.
    pub fn set_max_colour(&mut self, max_colour: i32) {
        self.colours.max_colour = max_colour.max(0);
    }

    /// Load `font` into register `slot` and make it active.
    pub fn select_font(&mut self, slot: u8, font: FontRef) -> Result<(), FontError> {
        let Some(register) = self.fonts.get_mut(usize::from(slot)) else {
            return Err(FontError::InvalidSlot { slot });
        };
        *register = Some(font);
        self.active_slot = slot;
        Ok(())
    }

    pub fn select_colour<R: ColourResolver + ?Sized>(
        &mut self,
        change: &ColourChange,
        resolver: &R,
    ) {
        self.colours.select(change, resolver);
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    pub fn clear_transform(&mut self) {
        self.transform = Matrix::IDENTITY;
    }

    pub fn clear_underline(&mut self) {
        self.underline = Underline::OFF;
    }

    /// Overwrite `to` with a complete copy of this context.
    pub fn copy(&self, to: &mut FontContext) {
        to.clone_from(self);
    }

    /// Apply one token with no spacing, accumulating bounds as a measuring
    /// walk would.
    ///
    /// Text is measured from character index 0; walks use
    /// [`paint`](Self::paint), [`size`](Self::size) or
    /// [`locate`](Self::locate) to carry indexes and spacing across tokens.
    pub fn apply<H: FontHost + ?Sized>(
        &mut self,
        token: &Token,
        host: &H,
    ) -> Result<(), FontError> {
        if !token.is_text() {
            return self.apply_control(token, host, true);
        }
        let font = self.require_font()?;
        let split = matches!(token, Token::SplitMarker { .. });
        for (index, &code) in (0..).zip(token.codes()) {
            let step = GlyphStep {
                offset: 0,
                code,
                index,
                split,
            };
            self.place_glyph(font, &step, Point::ORIGIN, host);
        }
        Ok(())
    }

    /// Apply a non-text token. Measuring walks also fold the pen position
    /// after a move into the bounds.
    pub(crate) fn apply_control<H: FontHost + ?Sized>(
        &mut self,
        token: &Token,
        host: &H,
        measuring: bool,
    ) -> Result<(), FontError> {
        match *token {
            Token::SelectFont { slot, font } => self.select_font(slot, font)?,
            Token::SetColour(ref change) => self.colours.select(change, host.colours()),
            Token::Move { dx, dy } => {
                self.position += self.transform.apply_linear(Point::new(dx, dy));
                if measuring {
                    self.include(Rect::at(self.position));
                }
            }
            Token::SetTransform(matrix) => self.transform = matrix,
            Token::Underline {
                position,
                thickness,
            } => {
                if thickness == 0 {
                    self.underline = Underline::OFF;
                } else {
                    let height = i64::from(host.font_bounds(self.require_font()?).y1);
                    let scale = |v: i64| (v * height / 256) as i32;
                    self.underline = Underline {
                        position: scale(i64::from(position)),
                        thickness: scale(i64::from(thickness)),
                    };
                }
            }
            // Text is placed glyph by glyph by the caller.
            Token::Comment(_) | Token::Literal(_) | Token::SplitMarker { .. } => {}
        }
        tracing::trace!(%token, position = %self.position, "applied");
        Ok(())
    }

    pub(crate) fn require_font(&self) -> Result<FontRef, FontError> {
        self.font().ok_or(FontError::UnresolvedFont {
            slot: self.active_slot,
        })
    }

    /// Place one character at the pen: accumulate its ink box and underline
    /// bar, then advance by the transformed advance plus `delta`.
    pub(crate) fn place_glyph<H: FontHost + ?Sized>(
        &mut self,
        font: FontRef,
        step: &GlyphStep,
        delta: Point,
        host: &H,
    ) -> PlacedGlyph {
        let metrics = host.glyph(font, step.code);
        let origin = self.position;
        let ink = self.transform.transform_rect(metrics.bbox).translate(origin);
        let advance = self.transform.apply_linear(metrics.advance);
        let pen_step = advance + delta;
        let underline = self
            .underline
            .is_on()
            .then(|| self.underline.bar(origin, pen_step));

        self.include(ink);
        if let Some(bar) = underline {
            self.include(bar);
        }
        self.position = origin + pen_step;

        PlacedGlyph {
            font,
            code: step.code,
            offset: step.offset,
            index: step.index,
            split: step.split,
            origin,
            advance,
            step: pen_step,
            ink,
            underline,
        }
    }

    fn include(&mut self, rect: Rect) {
        self.bounds = Some(self.bounds.map_or(rect, |b| b.union(rect)));
    }
}
