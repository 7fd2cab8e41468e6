//! Errors reported by `fcdump`.

use std::path::PathBuf;

use fc_context::FontError;
use fc_decode::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("invalid hex input: {0}")]
    Hex(String),
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing input")]
    MissingInput,
    #[error("invalid value for --{option}: '{value}'")]
    BadOption { option: &'static str, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Font(#[from] FontError),
}
