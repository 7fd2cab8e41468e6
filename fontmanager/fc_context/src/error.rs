//! Errors raised while applying tokens to a font context.

/// A token could not be applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FontError {
    /// Text or an underline needs a font but the active register is empty.
    #[error("no font selected in slot {slot}")]
    UnresolvedFont { slot: u8 },
    /// A font register index outside `0..8`.
    #[error("font slot {slot} is out of range")]
    InvalidSlot { slot: u8 },
}
