//! Turns raw scanner output into tokens by reading operand bytes.
//!
//! The scanner has already checked that every operand byte lies inside the
//! limit, so the cooker reads without further validation.

use fc_ir::{ColourChange, ColourSpec, FontRef, LiteralRun, Matrix, Rgb, Token};
use fc_scan::{ByteSource, ControlCode, Cursor, LITERAL_THRESHOLD};

/// Bit 7 of a code 17 operand selects the background.
const GCOL_BACKGROUND: u8 = 0x80;

pub(crate) struct Cooker<'a, S: ?Sized> {
    cursor: Cursor<'a, S>,
}

impl<'a, S: ByteSource + ?Sized> Cooker<'a, S> {
    pub(crate) fn new(cursor: Cursor<'a, S>) -> Self {
        Self { cursor }
    }

    #[inline]
    fn byte(&self, offset: u32) -> u8 {
        self.cursor.byte_at(offset)
    }

    /// Signed 24-bit little-endian value.
    fn int24(&self, offset: u32) -> i32 {
        let raw = u32::from(self.byte(offset))
            | (u32::from(self.byte(offset + 1)) << 8)
            | (u32::from(self.byte(offset + 2)) << 16);
        // Shift the sign bit into bit 31 and back.
        ((raw << 8) as i32) >> 8
    }

    /// Signed 32-bit little-endian word.
    fn word(&self, offset: u32) -> i32 {
        i32::from_le_bytes([
            self.byte(offset),
            self.byte(offset + 1),
            self.byte(offset + 2),
            self.byte(offset + 3),
        ])
    }

    fn rgb(&self, offset: u32) -> Rgb {
        Rgb::new(self.byte(offset), self.byte(offset + 1), self.byte(offset + 2))
    }

    pub(crate) fn literal(&self, start: u32, len: u32) -> Token {
        Token::Literal(LiteralRun {
            codes: (start..start + len)
                .map(|offset| u32::from(self.byte(offset)))
                .collect(),
        })
    }

    /// Build the token for `code` spanning `start..start + len`.
    pub(crate) fn control(&self, code: ControlCode, start: u32, len: u32) -> Token {
        let operands = start + 1;
        match code {
            ControlCode::MoveX => Token::Move {
                dx: self.int24(operands),
                dy: 0,
            },
            ControlCode::MoveY => Token::Move {
                dx: 0,
                dy: self.int24(operands),
            },
            ControlCode::Gcol => {
                let byte = self.byte(operands);
                let spec = ColourSpec::Gcol(byte & !GCOL_BACKGROUND);
                if byte & GCOL_BACKGROUND == 0 {
                    Token::SetColour(ColourChange::foreground(spec))
                } else {
                    Token::SetColour(ColourChange::background(spec))
                }
            }
            ControlCode::Colours => Token::SetColour(ColourChange {
                back: Some(ColourSpec::Gcol(self.byte(operands))),
                fore: Some(ColourSpec::Gcol(self.byte(operands + 1))),
                offset: Some(self.byte(operands + 2)),
            }),
            ControlCode::RgbColours => Token::SetColour(ColourChange {
                back: Some(ColourSpec::Rgb(self.rgb(operands))),
                fore: Some(ColourSpec::Rgb(self.rgb(operands + 3))),
                offset: Some(self.byte(operands + 6)),
            }),
            ControlCode::Comment => Token::Comment(
                (operands..start + len)
                    .map(|offset| self.byte(offset))
                    .take_while(|&b| b >= LITERAL_THRESHOLD)
                    .collect(),
            ),
            ControlCode::Underline => Token::Underline {
                position: self.byte(operands) as i8,
                thickness: self.byte(operands + 1),
            },
            ControlCode::Font => Token::SelectFont {
                slot: 0,
                font: FontRef(self.byte(operands)),
            },
            ControlCode::Matrix => {
                let w = start + len - 16;
                Token::SetTransform(Matrix::new(
                    self.word(w),
                    self.word(w + 4),
                    self.word(w + 8),
                    self.word(w + 12),
                    0,
                    0,
                ))
            }
            ControlCode::MatrixWithTranslation => {
                let w = start + len - 24;
                Token::SetTransform(Matrix::new(
                    self.word(w),
                    self.word(w + 4),
                    self.word(w + 8),
                    self.word(w + 12),
                    self.word(w + 16),
                    self.word(w + 20),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests;
