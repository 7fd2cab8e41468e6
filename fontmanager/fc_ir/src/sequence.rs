//! Decoded token sequence.

use smallvec::SmallVec;

use crate::{LiteralRun, Span, Token};

/// Ordered tokens with the byte span each one was decoded from.
///
/// # Invariant
///
/// Spans are contiguous and non-overlapping, starting at offset 0, and the
/// last one ends at [`end()`](Self::end), the offset of the terminator (or
/// the declared length when the string ran out first).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    tokens: Vec<(Token, Span)>,
    end: u32,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token. `span.start` must equal the current end.
    ///
    /// # Panics
    ///
    /// In debug builds, if `span.start` is not the current end. Release
    /// builds append the token as given.
    pub fn push(&mut self, token: Token, span: Span) {
        debug_assert_eq!(
            span.start, self.end,
            "token spans must be contiguous ({} pushed after end {})",
            span, self.end
        );
        self.end = span.end;
        self.tokens.push((token, span));
    }

    /// Set the end offset without adding a token.
    ///
    /// Only valid while no tokens cover the gap; used by the decoder when the
    /// string is empty.
    ///
    /// # Panics
    ///
    /// In debug builds, if `end` is before the current end.
    pub fn set_end(&mut self, end: u32) {
        debug_assert!(end >= self.end, "sequence end cannot move backwards");
        self.end = end;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Offset one past the last byte covered by a token.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Token, Span)> {
        self.tokens.iter()
    }

    pub fn get(&self, index: usize) -> Option<&(Token, Span)> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().map(|(tok, _)| tok)
    }

    /// The character codes of every text token, concatenated.
    pub fn simple_string(&self) -> Vec<u32> {
        self.tokens().flat_map(|tok| tok.codes().iter().copied()).collect()
    }

    /// Number of bytes consumed by control codes rather than text.
    pub fn skipped_bytes(&self) -> u32 {
        self.iter()
            .filter(|(tok, _)| !tok.is_text())
            .map(|(_, span)| span.len())
            .sum()
    }

    /// Copy of this sequence with every occurrence of `split_char` inside a
    /// literal run turned into its own [`Token::SplitMarker`].
    ///
    /// Text between split characters stays in `Literal` runs; empty runs are
    /// never produced. Spans remain contiguous.
    #[must_use]
    pub fn mark_splits(&self, split_char: u32) -> Sequence {
        let mut out = Sequence {
            tokens: Vec::with_capacity(self.tokens.len()),
            end: 0,
        };
        for (tok, span) in &self.tokens {
            let Token::Literal(run) = tok else {
                out.push(tok.clone(), *span);
                continue;
            };
            if !run.codes.contains(&split_char) {
                out.push(tok.clone(), *span);
                continue;
            }

            let mut pending: SmallVec<[u32; 16]> = SmallVec::new();
            let mut pending_start = span.start;
            for (offset, &code) in (span.start..).zip(run.codes.iter()) {
                if code == split_char {
                    if !pending.is_empty() {
                        out.push(
                            Token::Literal(LiteralRun {
                                codes: std::mem::take(&mut pending),
                            }),
                            Span::new(pending_start, offset),
                        );
                    }
                    out.push(Token::SplitMarker { code }, Span::new(offset, offset + 1));
                    pending_start = offset + 1;
                } else {
                    pending.push(code);
                }
            }
            if !pending.is_empty() {
                out.push(
                    Token::Literal(LiteralRun { codes: pending }),
                    Span::new(pending_start, span.end),
                );
            }
        }
        out.end = self.end;
        out
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a (Token, Span);
    type IntoIter = std::slice::Iter<'a, (Token, Span)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
