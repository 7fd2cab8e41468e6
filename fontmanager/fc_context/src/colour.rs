//! Foreground and background colour state.
//!
//! The FontManager tracks colours twice: as logical GCOL numbers (with a
//! base and an anti-alias offset for the foreground) and as palette RGB
//! values. A change to either side is converted to the other through the
//! host's [`ColourResolver`].

use fc_ir::{ColourChange, ColourSpec, Rgb};

/// Highest GCOL number when the host does not say otherwise.
pub const DEFAULT_MAX_COLOUR: i32 = 7;

/// Conversion between logical colours and RGB.
///
/// The provided methods model a palette with one bit each of red, green
/// and blue: GCOL bit 0 is red, bit 1 green and bit 2 blue.
pub trait ColourResolver {
    fn gcol_to_rgb(&self, gcol: i32) -> Rgb {
        let on = |bit: i32| if gcol & bit == 0 { 0 } else { 255 };
        Rgb::new(on(1), on(2), on(4))
    }

    fn rgb_to_gcol(&self, rgb: Rgb) -> i32 {
        i32::from(rgb.r >> 7) | (i32::from(rgb.g >> 7) << 1) | (i32::from(rgb.b >> 7) << 2)
    }
}

/// The default eight-colour palette.
#[derive(Copy, Clone, Debug, Default)]
pub struct OneBitPalette;

impl ColourResolver for OneBitPalette {}

/// Colour registers of a font context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColourState {
    /// GCOL numbers are saturated to `0..=max_colour`.
    pub max_colour: i32,
    pub bg: i32,
    pub fg: i32,
    pub fg_base: i32,
    pub fg_offset: i32,
    pub fore: Rgb,
    pub back: Rgb,
}

impl Default for ColourState {
    fn default() -> Self {
        ColourState {
            max_colour: DEFAULT_MAX_COLOUR,
            bg: 0,
            fg: 0,
            fg_base: 0,
            fg_offset: 0,
            fore: Rgb::BLACK,
            back: Rgb::BLACK,
        }
    }
}

impl ColourState {
    /// Apply a colour control.
    ///
    /// GCOL changes set the foreground base; the effective foreground is
    /// base plus offset. The offset operand is a signed byte.
    pub fn select<R: ColourResolver + ?Sized>(&mut self, change: &ColourChange, resolver: &R) {
        let mut gcol_changed = false;
        let mut rgb_changed = false;

        match change.fore {
            Some(ColourSpec::Gcol(gcol)) => {
                self.fg_base = i32::from(gcol);
                gcol_changed = true;
            }
            Some(ColourSpec::Rgb(rgb)) => {
                self.fore = rgb;
                rgb_changed = true;
            }
            None => {}
        }
        match change.back {
            Some(ColourSpec::Gcol(gcol)) => {
                self.bg = i32::from(gcol);
                gcol_changed = true;
            }
            Some(ColourSpec::Rgb(rgb)) => {
                self.back = rgb;
                rgb_changed = true;
            }
            None => {}
        }
        if let Some(offset) = change.offset {
            self.fg_offset = i32::from(offset as i8);
        }

        if gcol_changed || change.offset.is_some() {
            self.fg = self.fg_base + self.fg_offset;
        }
        if gcol_changed {
            self.gcol_updated(resolver);
        }
        if rgb_changed {
            self.rgb_updated(resolver);
        }
    }

    /// Re-saturate the GCOL registers and derive RGB from them.
    fn gcol_updated<R: ColourResolver + ?Sized>(&mut self, resolver: &R) {
        self.saturate_gcols();
        self.fore = resolver.gcol_to_rgb(self.fg);
        self.back = resolver.gcol_to_rgb(self.bg);
    }

    /// Derive GCOL registers from RGB. The requested RGB values are kept.
    fn rgb_updated<R: ColourResolver + ?Sized>(&mut self, resolver: &R) {
        self.bg = resolver.rgb_to_gcol(self.back);
        self.fg = resolver.rgb_to_gcol(self.fore);
        self.fg_base = self.fg - self.fg_offset;
        self.saturate_gcols();
    }

    fn saturate_gcols(&mut self) {
        let max = self.max_colour;
        self.bg = self.bg.clamp(0, max);
        self.fg = self.fg.clamp(0, max);
        self.fg_base = (self.fg - self.fg_offset).clamp(0, max);
        self.fg_offset = self.fg - self.fg_base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gcols(state: &ColourState) -> (i32, i32, i32, i32) {
        (state.bg, state.fg, state.fg_base, state.fg_offset)
    }

    #[test]
    fn one_bit_palette() {
        let p = OneBitPalette;
        assert_eq!(p.gcol_to_rgb(0), Rgb::BLACK);
        assert_eq!(p.gcol_to_rgb(7), Rgb::WHITE);
        assert_eq!(p.gcol_to_rgb(1), Rgb::new(255, 0, 0));
        assert_eq!(p.gcol_to_rgb(6), Rgb::new(0, 255, 255));
        for gcol in 0..8 {
            assert_eq!(p.rgb_to_gcol(p.gcol_to_rgb(gcol)), gcol);
        }
        assert_eq!(p.rgb_to_gcol(Rgb::new(0x80, 0x7F, 0xFF)), 5);
    }

    #[test]
    fn gcol_pair_sets_foreground_and_background() {
        let mut state = ColourState::default();
        state.select(
            &ColourChange {
                fore: Some(ColourSpec::Gcol(7)),
                back: Some(ColourSpec::Gcol(0)),
                offset: None,
            },
            &OneBitPalette,
        );
        assert_eq!(gcols(&state), (0, 7, 7, 0));
        assert_eq!(state.fore, Rgb::WHITE);
        assert_eq!(state.back, Rgb::BLACK);
    }

    #[test]
    fn offset_is_signed_and_added_to_base() {
        let mut state = ColourState::default();
        state.select(
            &ColourChange {
                fore: Some(ColourSpec::Gcol(3)),
                back: Some(ColourSpec::Gcol(1)),
                offset: Some(2),
            },
            &OneBitPalette,
        );
        assert_eq!(gcols(&state), (1, 5, 3, 2));

        state.select(
            &ColourChange {
                fore: None,
                back: None,
                offset: Some(0xFF),
            },
            &OneBitPalette,
        );
        // Offset change alone recomputes fg but does not re-saturate.
        assert_eq!(state.fg_offset, -1);
        assert_eq!(state.fg, 2);
    }

    #[test]
    fn gcols_saturate_to_max_colour() {
        let mut state = ColourState::default();
        state.select(
            &ColourChange {
                fore: Some(ColourSpec::Gcol(6)),
                back: Some(ColourSpec::Gcol(20)),
                offset: Some(5),
            },
            &OneBitPalette,
        );
        // fg 11 clamps to 7; the base follows so the offset survives.
        assert_eq!(gcols(&state), (7, 7, 2, 5));
    }

    #[test]
    fn rgb_change_derives_gcols_and_keeps_rgb() {
        let mut state = ColourState::default();
        let orange = Rgb::new(0xFF, 0x80, 0x00);
        state.select(
            &ColourChange {
                fore: Some(ColourSpec::Rgb(orange)),
                back: Some(ColourSpec::Rgb(Rgb::WHITE)),
                offset: None,
            },
            &OneBitPalette,
        );
        assert_eq!(state.fore, orange);
        assert_eq!(state.back, Rgb::WHITE);
        assert_eq!(gcols(&state), (7, 3, 3, 0));
    }

    #[test]
    fn single_background_gcol_leaves_foreground_base() {
        let mut state = ColourState::default();
        state.select(
            &ColourChange::foreground(ColourSpec::Gcol(4)),
            &OneBitPalette,
        );
        state.select(
            &ColourChange::background(ColourSpec::Gcol(2)),
            &OneBitPalette,
        );
        assert_eq!(gcols(&state), (2, 4, 4, 0));
        assert_eq!(state.fore, Rgb::new(0, 0, 255));
        assert_eq!(state.back, Rgb::new(0, 255, 0));
    }
}
