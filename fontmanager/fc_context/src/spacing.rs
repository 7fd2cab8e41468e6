//! Per-character spacing adjustments.
//!
//! Spacing is supplied per walk and never stored in tokens. Deltas are added
//! to the pen after each character's advance, untransformed.

use fc_ir::Point;
use rustc_hash::FxHashMap;

/// Extra displacement applied after characters.
///
/// Character indexes count every text character of a walk, across token
/// boundaries, starting at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spacing {
    /// Added after every space (code 32).
    pub word: Point,
    /// Added after every character.
    pub character: Point,
    extra: FxHashMap<u32, Point>,
}

impl Spacing {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_word(mut self, word: Point) -> Self {
        self.word = word;
        self
    }

    #[must_use]
    pub fn with_character(mut self, character: Point) -> Self {
        self.character = character;
        self
    }

    /// Set the justification delta for the character at `index`.
    pub fn set_extra(&mut self, index: u32, delta: Point) {
        if delta.is_zero() {
            self.extra.remove(&index);
        } else {
            self.extra.insert(index, delta);
        }
    }

    pub fn extra(&self, index: u32) -> Point {
        self.extra.get(&index).copied().unwrap_or_default()
    }

    /// Total delta after the character at `index` with character `code`.
    pub fn delta(&self, index: u32, code: u32) -> Point {
        let mut delta = self.character + self.extra(index);
        if code == u32::from(b' ') {
            delta += self.word;
        }
        delta
    }

    pub fn is_zero(&self) -> bool {
        self.word.is_zero() && self.character.is_zero() && self.extra.is_empty()
    }
}
