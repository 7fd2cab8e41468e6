//! Colour specifications carried by control codes 17, 18 and 19.
//!
//! The core never resolves colours itself. GCOL numbers and RGB triples are
//! handed to the host's colour resolver by the font context.

use std::fmt;

/// 24-bit colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Palette word in the `&BBGGRR10` layout used by `ColourTrans`.
    #[inline]
    pub const fn to_palette(self) -> u32 {
        ((self.b as u32) << 24) | ((self.g as u32) << 16) | ((self.r as u32) << 8) | 0x10
    }

    /// Unpack a `&BBGGRRxx` palette word; the low byte is ignored.
    #[inline]
    pub const fn from_palette(word: u32) -> Self {
        Rgb {
            r: (word >> 8) as u8,
            g: (word >> 16) as u8,
            b: (word >> 24) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{:08X}", self.to_palette())
    }
}

/// One colour as written in a control string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColourSpec {
    /// Logical GCOL number (0-127).
    Gcol(u8),
    /// Explicit RGB value.
    Rgb(Rgb),
}

/// A colour control: which of foreground and background change, and the
/// anti-alias colour offset if one was given.
///
/// Code 17 sets one target, codes 18 and 19 set both plus the offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColourChange {
    pub fore: Option<ColourSpec>,
    pub back: Option<ColourSpec>,
    pub offset: Option<u8>,
}

impl ColourChange {
    pub const fn foreground(spec: ColourSpec) -> Self {
        ColourChange {
            fore: Some(spec),
            back: None,
            offset: None,
        }
    }

    pub const fn background(spec: ColourSpec) -> Self {
        ColourChange {
            fore: None,
            back: Some(spec),
            offset: None,
        }
    }
}
