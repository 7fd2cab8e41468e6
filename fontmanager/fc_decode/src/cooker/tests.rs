use super::*;
use pretty_assertions::assert_eq;

fn cook(bytes: &[u8], code: ControlCode) -> Token {
    let cooker = Cooker::new(Cursor::new(bytes, u32::MAX));
    cooker.control(code, 0, bytes.len() as u32)
}

#[test]
fn move_sign_extends() {
    assert_eq!(
        cook(&[9, 0x80, 0x02, 0x00], ControlCode::MoveX),
        Token::Move { dx: 0x280, dy: 0 }
    );
    assert_eq!(
        cook(&[11, 0xFF, 0xFF, 0xFF], ControlCode::MoveY),
        Token::Move { dx: 0, dy: -1 }
    );
    assert_eq!(
        cook(&[9, 0x00, 0x00, 0x80], ControlCode::MoveX),
        Token::Move {
            dx: -0x80_0000,
            dy: 0
        }
    );
    assert_eq!(
        cook(&[9, 0xFF, 0xFF, 0x7F], ControlCode::MoveX),
        Token::Move {
            dx: 0x7F_FFFF,
            dy: 0
        }
    );
}

#[test]
fn gcol_bit_seven_selects_background() {
    assert_eq!(
        cook(&[17, 7], ControlCode::Gcol),
        Token::SetColour(ColourChange::foreground(ColourSpec::Gcol(7)))
    );
    assert_eq!(
        cook(&[17, 0x83], ControlCode::Gcol),
        Token::SetColour(ColourChange::background(ColourSpec::Gcol(3)))
    );
}

#[test]
fn colours_are_background_first() {
    assert_eq!(
        cook(&[18, 0, 7, 14], ControlCode::Colours),
        Token::SetColour(ColourChange {
            fore: Some(ColourSpec::Gcol(7)),
            back: Some(ColourSpec::Gcol(0)),
            offset: Some(14),
        })
    );
}

#[test]
fn rgb_colours() {
    assert_eq!(
        cook(&[19, 0, 0, 0, 0xFF, 0, 0, 2], ControlCode::RgbColours),
        Token::SetColour(ColourChange {
            fore: Some(ColourSpec::Rgb(Rgb::new(0xFF, 0, 0))),
            back: Some(ColourSpec::Rgb(Rgb::BLACK)),
            offset: Some(2),
        })
    );
}

#[test]
fn underline_position_is_signed() {
    assert_eq!(
        cook(&[25, 0xF0, 0x20], ControlCode::Underline),
        Token::Underline {
            position: -16,
            thickness: 32
        }
    );
}

#[test]
fn font_selects_primary_slot() {
    assert_eq!(
        cook(&[26, 3], ControlCode::Font),
        Token::SelectFont {
            slot: 0,
            font: FontRef(3)
        }
    );
}

#[test]
fn comment_text_excludes_closing_byte() {
    assert_eq!(
        cook(b"\x15hidden\x11", ControlCode::Comment),
        Token::Comment(b"hidden".to_vec())
    );
    assert_eq!(
        cook(b"\x15", ControlCode::Comment),
        Token::Comment(Vec::new())
    );
}

#[test]
fn matrix_words_follow_padding() {
    // Code at 0, three padding bytes, then a = 1.0, b = 0, c = 0.25, d = 1.0.
    let mut bytes = vec![27, 0xAA, 0xAA, 0xAA];
    for word in [0x1_0000i32, 0, 0x4000, 0x1_0000] {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    assert_eq!(
        cook(&bytes, ControlCode::Matrix),
        Token::SetTransform(Matrix::new(0x1_0000, 0, 0x4000, 0x1_0000, 0, 0))
    );
}

#[test]
fn matrix_with_translation() {
    let mut bytes = vec![28, 0, 0, 0];
    for word in [0x2_0000i32, 0, 0, 0x2_0000, -500, 1000] {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    assert_eq!(
        cook(&bytes, ControlCode::MatrixWithTranslation),
        Token::SetTransform(Matrix::new(0x2_0000, 0, 0, 0x2_0000, -500, 1000))
    );
}

#[test]
fn literal_reads_each_byte() {
    let bytes = b"xHi!";
    let cooker = Cooker::new(Cursor::new(bytes.as_slice(), 4));
    assert_eq!(
        cooker.literal(1, 3),
        Token::Literal(LiteralRun::from_bytes(b"Hi!"))
    );
}
