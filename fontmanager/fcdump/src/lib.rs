//! Library side of the `fcdump` debugging CLI.
//!
//! Runs a control string through the decoder and a font context with a
//! fixed-pitch stand-in host, and renders the result as text.

mod commands;
mod config;
mod error;
mod host;
mod input;

pub use commands::{run, Command, Report};
pub use config::DumpConfig;
pub use error::DumpError;
pub use host::{FixedPitchHost, TextSink};
pub use input::{parse_hex, read_input};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
///
/// ```bash
/// RUST_LOG=fc_context=trace fcdump paint 1a01 4869
/// RUST_LOG=fc_decode=debug FC_TRACE=1 fcdump decode @string.bin
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
