//! Decoded control-sequence tokens.

use std::fmt;

use smallvec::SmallVec;

use crate::{ColourChange, Matrix};

/// Number of font selection registers in a font context.
pub const FONT_SLOTS: usize = 8;

/// Opaque font handle, resolved by the host's metrics collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontRef(pub u8);

impl fmt::Display for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font#{}", self.0)
    }
}

/// A maximal run of literal character codes.
///
/// Codes are single bytes in the font's encoding, so the code at index `i`
/// was read from byte `span.start + i`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LiteralRun {
    pub codes: SmallVec<[u32; 16]>,
}

impl LiteralRun {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        LiteralRun {
            codes: bytes.iter().map(|&b| u32::from(b)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes rendered as Latin-1 text, for diagnostics.
    pub fn text(&self) -> String {
        self.codes
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Characters to measure or render with the active font.
    Literal(LiteralRun),
    /// Select `font` into register `slot` and make that register active.
    SelectFont { slot: u8, font: FontRef },
    /// Change foreground and/or background colour.
    SetColour(ColourChange),
    /// Explicit displacement in millipoints, before the active transform.
    Move { dx: i32, dy: i32 },
    /// Replace the active transform.
    SetTransform(Matrix),
    /// Underline position and thickness in 1/256ths of the font height.
    /// A thickness of zero turns underlining off.
    Underline { position: i8, thickness: u8 },
    /// Hidden comment text.
    Comment(Vec<u8>),
    /// A legal line-break character, measured like a one-character literal.
    SplitMarker { code: u32 },
}

impl Token {
    /// Short lowercase name, used by trace output and `fcdump`.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Literal(_) => "literal",
            Token::SelectFont { .. } => "font",
            Token::SetColour(_) => "colour",
            Token::Move { .. } => "move",
            Token::SetTransform(_) => "matrix",
            Token::Underline { .. } => "underline",
            Token::Comment(_) => "comment",
            Token::SplitMarker { .. } => "split",
        }
    }

    /// Character codes this token contributes to the rendered text.
    pub fn codes(&self) -> &[u32] {
        match self {
            Token::Literal(run) => &run.codes,
            Token::SplitMarker { code } => std::slice::from_ref(code),
            _ => &[],
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Literal(_) | Token::SplitMarker { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(run) => write!(f, "literal {:?}", run.text()),
            Token::SelectFont { slot, font } => write!(f, "font slot={slot} {font}"),
            Token::SetColour(change) => {
                write!(f, "colour")?;
                if let Some(back) = change.back {
                    write!(f, " bg={back:?}")?;
                }
                if let Some(fore) = change.fore {
                    write!(f, " fg={fore:?}")?;
                }
                if let Some(offset) = change.offset {
                    write!(f, " offset={offset}")?;
                }
                Ok(())
            }
            Token::Move { dx, dy } => write!(f, "move dx={dx} dy={dy}"),
            Token::SetTransform(m) => write!(f, "matrix {m}"),
            Token::Underline {
                position,
                thickness,
            } => {
                if *thickness == 0 {
                    write!(f, "underline off")
                } else {
                    write!(f, "underline at {position}, thickness {thickness}")
                }
            }
            Token::Comment(text) => write!(f, "comment {:?}", String::from_utf8_lossy(text)),
            Token::SplitMarker { code } => write!(f, "split {code}"),
        }
    }
}
