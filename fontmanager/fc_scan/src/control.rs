//! The FontManager control-code table.
//!
//! Every byte below [`LITERAL_THRESHOLD`] is either a terminator, a control
//! code with a fixed operand layout, or unknown. Bytes at or above the
//! threshold are literal character codes.

/// First byte value treated as a literal character code.
pub const LITERAL_THRESHOLD: u8 = 32;

/// Returns `true` for bytes that end a control string: NUL, LF and CR.
#[inline]
pub const fn is_terminator(byte: u8) -> bool {
    matches!(byte, 0 | 10 | 13)
}

/// Control codes recognised by the scanner, valued by their byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlCode {
    /// Horizontal move: signed 24-bit millipoint offset.
    MoveX = 9,
    /// Vertical move: signed 24-bit millipoint offset.
    MoveY = 11,
    /// Single GCOL colour; bit 7 selects background.
    Gcol = 17,
    /// Colour change: background, foreground, offset.
    Colours = 18,
    /// RGB colour change: background triple, foreground triple, offset.
    RgbColours = 19,
    /// Comment running to the next control byte.
    Comment = 21,
    /// Underline: signed position, thickness.
    Underline = 25,
    /// Font change: one font handle byte.
    Font = 26,
    /// Four-word transform (no translation), word aligned.
    Matrix = 27,
    /// Six-word transform with translation, word aligned.
    MatrixWithTranslation = 28,
}

/// How many operand bytes follow a control code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandShape {
    /// Exactly this many bytes after the code.
    Fixed(u32),
    /// Padding to the next word boundary, then this many bytes.
    Aligned(u32),
    /// Bytes up to, not including, the next byte below 32.
    UntilControl,
}

impl ControlCode {
    pub const ALL: [ControlCode; 10] = [
        ControlCode::MoveX,
        ControlCode::MoveY,
        ControlCode::Gcol,
        ControlCode::Colours,
        ControlCode::RgbColours,
        ControlCode::Comment,
        ControlCode::Underline,
        ControlCode::Font,
        ControlCode::Matrix,
        ControlCode::MatrixWithTranslation,
    ];

    /// Map a byte to its control code, if it is one.
    ///
    /// Terminators and literals return `None`, as do unassigned bytes below 32.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            9 => Some(ControlCode::MoveX),
            11 => Some(ControlCode::MoveY),
            17 => Some(ControlCode::Gcol),
            18 => Some(ControlCode::Colours),
            19 => Some(ControlCode::RgbColours),
            21 => Some(ControlCode::Comment),
            25 => Some(ControlCode::Underline),
            26 => Some(ControlCode::Font),
            27 => Some(ControlCode::Matrix),
            28 => Some(ControlCode::MatrixWithTranslation),
            _ => None,
        }
    }

    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub const fn operands(self) -> OperandShape {
        match self {
            ControlCode::MoveX | ControlCode::MoveY => OperandShape::Fixed(3),
            ControlCode::Gcol | ControlCode::Font => OperandShape::Fixed(1),
            ControlCode::Colours => OperandShape::Fixed(3),
            ControlCode::RgbColours => OperandShape::Fixed(7),
            ControlCode::Underline => OperandShape::Fixed(2),
            ControlCode::Comment => OperandShape::UntilControl,
            ControlCode::Matrix => OperandShape::Aligned(16),
            ControlCode::MatrixWithTranslation => OperandShape::Aligned(24),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ControlCode::MoveX => "move-x",
            ControlCode::MoveY => "move-y",
            ControlCode::Gcol => "gcol",
            ControlCode::Colours => "colours",
            ControlCode::RgbColours => "rgb-colours",
            ControlCode::Comment => "comment",
            ControlCode::Underline => "underline",
            ControlCode::Font => "font",
            ControlCode::Matrix => "matrix",
            ControlCode::MatrixWithTranslation => "matrix-translate",
        }
    }
}

/// Padding bytes needed after the code byte at `code_offset` to reach a word
/// boundary, given the address of offset 0.
#[inline]
pub const fn alignment_padding(base_address: u32, code_offset: u32) -> u32 {
    let after_code = base_address.wrapping_add(code_offset).wrapping_add(1);
    (4 - (after_code & 3)) & 3
}
