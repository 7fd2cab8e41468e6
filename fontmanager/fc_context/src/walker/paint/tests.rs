use super::*;
use crate::test_support::{seq, with_font, Drawn, FakeHost, RecordingSink};
use fc_ir::{ColourChange, ColourSpec, FontRef, Point, Rect, Rgb};
use pretty_assertions::assert_eq;

/// Empty context drawing white on black.
fn ready() -> FontContext {
    let mut ctx = FontContext::new();
    ctx.select_colour(
        &ColourChange {
            fore: Some(ColourSpec::Gcol(7)),
            back: Some(ColourSpec::Gcol(0)),
            offset: None,
        },
        &crate::OneBitPalette,
    );
    ctx
}

fn paint(ctx: &mut FontContext, sequence: &Sequence, spacing: &Spacing) -> RecordingSink {
    let mut sink = RecordingSink::default();
    if let Err(err) = ctx.paint(sequence, spacing, &FakeHost, &mut sink) {
        panic!("paint failed: {err}");
    }
    sink
}

fn origins_x(sink: &RecordingSink) -> Vec<i32> {
    sink.glyphs().iter().map(|g| g.origin.x).collect()
}

// Plain text and spacing

#[test]
fn plain_string() {
    let mut ctx = ready();
    let sink = paint(&mut ctx, &with_font(b"plain string"), &Spacing::new());

    assert_eq!(sink.text(), "plain string");
    assert_eq!(origins_x(&sink), (0..12).map(|i| i * 8).collect::<Vec<_>>());
    assert_eq!(ctx.position(), Point::new(96, 0));
    assert_eq!(ctx.bounds(), Some(Rect::new(0, 0, 96, 16)));

    let first = sink.glyphs()[0];
    assert_eq!(first.font, FontRef(1));
    assert_eq!(first.offset, 2);
    assert_eq!(first.colours.fore, Rgb::WHITE);
    assert_eq!(first.colours.back, Rgb::BLACK);
}

#[test]
fn word_spacing() {
    let mut ctx = ready();
    let spacing = Spacing::new().with_word(Point::new(2, 0));
    let sink = paint(&mut ctx, &with_font(b"plain string"), &spacing);

    assert_eq!(sink.glyphs()[6].origin, Point::new(50, 0));
    assert_eq!(ctx.position(), Point::new(98, 0));
}

#[test]
fn char_spacing() {
    let mut ctx = ready();
    let spacing = Spacing::new().with_character(Point::new(2, 0));
    let sink = paint(&mut ctx, &with_font(b"plain string"), &spacing);

    assert_eq!(origins_x(&sink), (0..12).map(|i| i * 10).collect::<Vec<_>>());
    assert_eq!(ctx.position(), Point::new(120, 0));
}

#[test]
fn word_and_char_spacing() {
    let mut ctx = ready();
    let spacing = Spacing::new()
        .with_word(Point::new(5, 0))
        .with_character(Point::new(2, 0));
    let sink = paint(&mut ctx, &with_font(b"plain string"), &spacing);

    assert_eq!(sink.glyphs()[6].origin, Point::new(65, 0));
    assert_eq!(ctx.position(), Point::new(125, 0));
}

#[test]
fn font_change_mid_string() {
    let mut ctx = ready();
    let sink = paint(&mut ctx, &with_font(b"one\x1a\x02two"), &Spacing::new());

    let fonts: Vec<u8> = sink.glyphs().iter().map(|g| g.font.0).collect();
    assert_eq!(fonts, vec![1, 1, 1, 2, 2, 2]);
    assert_eq!(origins_x(&sink), vec![0, 8, 16, 24, 56, 88]);
    assert_eq!(ctx.position(), Point::new(120, 0));
    assert_eq!(ctx.bounds(), Some(Rect::new(0, 0, 120, 32)));
}

// Moves and transforms

#[test]
fn moves_reposition_the_pen() {
    let mut ctx = ready();
    let sink = paint(
        &mut ctx,
        &with_font(b"A\x09\x98\x02\x00B\x0b\x00\x03\x00C"),
        &Spacing::new(),
    );

    let origins: Vec<Point> = sink.glyphs().iter().map(|g| g.origin).collect();
    assert_eq!(
        origins,
        vec![Point::new(0, 0), Point::new(672, 0), Point::new(680, 768)]
    );
    assert_eq!(ctx.bounds(), Some(Rect::new(0, 0, 688, 784)));
}

#[test]
fn moves_alone_do_not_grow_painted_bounds() {
    let mut ctx = ready();
    paint(&mut ctx, &with_font(b"\x09\x00\x10\x00"), &Spacing::new());
    assert_eq!(ctx.position(), Point::new(0x1000, 0));
    assert_eq!(ctx.bounds(), None);
}

const ITALIC: &[u8] =
    b"\x1b   \x00\x00\x01\x00\x00\x00\x00\x00\x00\x40\x00\x00\x00\x00\x01\x00Font";
const DOUBLE_WIDTH: &[u8] =
    b"\x1b   \x00\x00\x02\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x01\x00Font";

#[test]
fn italic_matrix() {
    let mut ctx = ready();
    ctx.select_font(0, FontRef(1)).ok();
    let sink = paint(&mut ctx, &seq(ITALIC), &Spacing::new());

    assert_eq!(sink.text(), "Font");
    assert_eq!(ctx.position(), Point::new(32, 0));
    assert_eq!(ctx.bounds(), Some(Rect::new(0, 0, 36, 16)));
    assert_eq!(sink.glyphs()[0].transform, ctx.transform());
}

#[test]
fn double_width_matrix() {
    let mut ctx = ready();
    ctx.select_font(0, FontRef(1)).ok();
    paint(&mut ctx, &seq(DOUBLE_WIDTH), &Spacing::new());

    assert_eq!(ctx.position(), Point::new(64, 0));
    assert_eq!(ctx.bounds(), Some(Rect::new(0, 0, 64, 16)));
}

// Underline

#[test]
fn underline_bars_precede_glyphs() {
    let mut ctx = ready();
    let sink = paint(
        &mut ctx,
        &with_font(b"\x19\xf0\x20underlined\x19\x00\x00off"),
        &Spacing::new(),
    );

    let bars = sink.underlines();
    assert_eq!(bars.len(), 10);
    for (i, bar) in (0..).zip(&bars) {
        assert_eq!(*bar, Rect::new(i * 8, -3, i * 8 + 8, -1));
    }
    assert_eq!(
        &sink.drawn[..2],
        &[
            Drawn::Underline(Rect::new(0, -3, 8, -1), Rgb::WHITE),
            Drawn::Glyph(sink.glyphs()[0]),
        ]
    );
    assert_eq!(sink.text(), "underlinedoff");
    assert_eq!(ctx.bounds(), Some(Rect::new(0, -3, 104, 16)));
}

#[test]
fn underline_spans_spacing() {
    let mut ctx = ready();
    let spacing = Spacing::new().with_character(Point::new(4, 0));
    let sink = paint(&mut ctx, &with_font(b"\x19\xf0\x20ab"), &spacing);
    assert_eq!(
        sink.underlines(),
        vec![Rect::new(0, -3, 12, -1), Rect::new(12, -3, 24, -1)]
    );
}

#[test]
fn paint_starts_without_underline_or_bounds() {
    let mut ctx = ready();
    paint(&mut ctx, &with_font(b"\x19\xf0\x20ab"), &Spacing::new());
    assert!(ctx.underline().is_on());

    let sink = paint(&mut ctx, &seq(b"cd"), &Spacing::new());
    assert!(sink.underlines().is_empty());
    assert_eq!(ctx.bounds(), Some(Rect::new(16, 0, 32, 16)));
}

// Errors

#[test]
fn paint_without_font_draws_nothing() {
    let mut ctx = ready();
    let mut sink = RecordingSink::default();
    let result = ctx.paint(&seq(b"plain string"), &Spacing::new(), &FakeHost, &mut sink);

    assert_eq!(result, Err(FontError::UnresolvedFont { slot: 0 }));
    assert!(sink.drawn.is_empty());
}

#[test]
fn paint_through_dyn_sink() {
    let mut ctx = ready();
    let mut sink = RecordingSink::default();
    let dyn_sink: &mut dyn RenderSink = &mut sink;
    ctx.paint(&with_font(b"ok"), &Spacing::new(), &FakeHost, dyn_sink).ok();
    assert_eq!(sink.text(), "ok");
}

mod proptest_paint {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pen_moves_forward(
            text in "[a-z ]{0,40}",
            word in 0i32..20,
            character in 0i32..20,
        ) {
            let mut ctx = ready();
            let spacing = Spacing::new()
                .with_word(Point::new(word, 0))
                .with_character(Point::new(character, 0));
            let sink = paint(&mut ctx, &with_font(text.as_bytes()), &spacing);

            let xs = origins_x(&sink);
            prop_assert_eq!(xs.len(), text.len());
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
            let spaces = text.bytes().filter(|&b| b == b' ').count() as i32;
            let n = text.len() as i32;
            prop_assert_eq!(ctx.position().x, n * (8 + character) + spaces * word);
        }
    }
}
