//! Decoder configuration.

/// Longest control string the FontManager will read, in bytes.
pub const MAX_STRING_LENGTH: u32 = 1 << 20;

/// Knobs for a single decode call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Emit one `debug` event per decoded token.
    pub trace: bool,
    /// Upper bound applied to the caller's declared length.
    pub max_length: u32,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        DecodeConfig {
            trace: false,
            max_length: MAX_STRING_LENGTH,
        }
    }
}

impl DecodeConfig {
    /// Default configuration, with tracing switched on when `FC_TRACE` is set.
    pub fn from_env() -> Self {
        DecodeConfig {
            trace: std::env::var_os("FC_TRACE").is_some(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Lower the length bound. Values above [`MAX_STRING_LENGTH`] are
    /// capped at it.
    #[must_use]
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length.min(MAX_STRING_LENGTH);
        self
    }

    /// The length actually scanned for a caller-declared `length`.
    #[inline]
    pub fn effective_length(&self, length: u32) -> u32 {
        length.min(self.max_length)
    }
}
