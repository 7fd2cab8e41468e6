use super::*;
use crate::FontRef;
use pretty_assertions::assert_eq;

fn lit(text: &[u8]) -> Token {
    Token::Literal(LiteralRun::from_bytes(text))
}

fn sample() -> Sequence {
    // "\x1a\x01ab c\x09\x00\x01\x00d e"
    let mut seq = Sequence::new();
    seq.push(
        Token::SelectFont {
            slot: 0,
            font: FontRef(1),
        },
        Span::new(0, 2),
    );
    seq.push(lit(b"ab c"), Span::new(2, 6));
    seq.push(Token::Move { dx: 256, dy: 0 }, Span::new(6, 10));
    seq.push(lit(b"d e"), Span::new(10, 13));
    seq
}

#[test]
fn push_tracks_end() {
    let seq = sample();
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.end(), 13);
    assert!(!seq.is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "token spans must be contiguous")]
fn push_rejects_a_gap() {
    let mut seq = sample();
    seq.push(lit(b"x"), Span::new(14, 15));
}

#[test]
fn simple_string_concatenates_text() {
    let text: Vec<u8> = sample().simple_string().iter().map(|&c| c as u8).collect();
    assert_eq!(text, b"ab cd e".to_vec());
}

#[test]
fn skipped_bytes_counts_controls() {
    assert_eq!(sample().skipped_bytes(), 6);
}

#[test]
fn mark_splits_breaks_literals_at_split_char() {
    let marked = sample().mark_splits(u32::from(b' '));
    let got: Vec<(Token, Span)> = marked.iter().cloned().collect();
    assert_eq!(
        got,
        vec![
            (
                Token::SelectFont {
                    slot: 0,
                    font: FontRef(1)
                },
                Span::new(0, 2)
            ),
            (lit(b"ab"), Span::new(2, 4)),
            (Token::SplitMarker { code: 32 }, Span::new(4, 5)),
            (lit(b"c"), Span::new(5, 6)),
            (Token::Move { dx: 256, dy: 0 }, Span::new(6, 10)),
            (lit(b"d"), Span::new(10, 11)),
            (Token::SplitMarker { code: 32 }, Span::new(11, 12)),
            (lit(b"e"), Span::new(12, 13)),
        ]
    );
    assert_eq!(marked.end(), 13);
}

#[test]
fn mark_splits_never_emits_empty_literals() {
    let mut seq = Sequence::new();
    seq.push(lit(b"  x "), Span::new(0, 4));
    let marked = seq.mark_splits(u32::from(b' '));
    let kinds: Vec<&str> = marked.tokens().map(Token::name).collect();
    assert_eq!(kinds, vec!["split", "split", "literal", "split"]);
    assert_eq!(marked.simple_string(), seq.simple_string());
}

#[test]
fn mark_splits_keeps_spans_contiguous() {
    let marked = sample().mark_splits(u32::from(b'c'));
    let mut expected_start = 0;
    for (_, span) in &marked {
        assert_eq!(span.start, expected_start);
        expected_start = span.end;
    }
    assert_eq!(expected_start, marked.end());
}

#[test]
fn empty_sequence_end_can_be_set() {
    let mut seq = Sequence::new();
    seq.set_end(0);
    assert!(seq.is_empty());
    assert_eq!(seq.end(), 0);
    assert_eq!(seq.mark_splits(32).end(), 0);
}
