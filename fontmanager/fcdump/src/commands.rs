//! The four `fcdump` commands.
//!
//! Each command renders its findings into a [`Report`]. A failure keeps the
//! output produced before it, so `decode` can still show the valid prefix.

use std::fmt::Write;

use fc_context::FontContext;
use fc_decode::decode;
use fc_ir::Sequence;
use fc_scan::SliceSource;

use crate::{DumpConfig, DumpError, TextSink};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Decode,
    Size,
    Paint,
    Locate,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "decode" => Some(Command::Decode),
            "size" => Some(Command::Size),
            "paint" => Some(Command::Paint),
            "locate" => Some(Command::Locate),
            _ => None,
        }
    }
}

/// Command output, and the error that cut it short if any.
#[derive(Debug, Default)]
pub struct Report {
    pub output: String,
    pub error: Option<DumpError>,
}

impl Report {
    fn failed(mut self, error: impl Into<DumpError>) -> Self {
        self.error = Some(error.into());
        self
    }
}

pub fn run(command: Command, bytes: &[u8], config: &DumpConfig) -> Report {
    tracing::debug!(?command, bytes = bytes.len(), "running");
    let mut report = Report::default();
    let sequence = match decode(
        &SliceSource::at_address(bytes, config.base),
        config.length,
        &config.decode,
    ) {
        Ok(sequence) => {
            tracing::debug!(tokens = sequence.len(), end = sequence.end(), "decoded");
            sequence
        }
        Err(err) if command == Command::Decode => {
            list_tokens(&mut report.output, err.partial());
            return report.failed(err);
        }
        Err(err) => return report.failed(err),
    };

    match command {
        Command::Decode => {
            list_tokens(&mut report.output, &sequence);
            report
        }
        Command::Size => size(report, &sequence, config),
        Command::Paint => paint(report, &sequence, config),
        Command::Locate => locate(report, &sequence, config),
    }
}

fn list_tokens(out: &mut String, sequence: &Sequence) {
    let _ = writeln!(out, "Tokens ({} tokens, end {}):", sequence.len(), sequence.end());
    for (token, span) in sequence {
        let at = span.to_string();
        let _ = writeln!(out, "  {at:>9}  {token}");
    }
    let text: String = sequence
        .simple_string()
        .into_iter()
        .filter_map(char::from_u32)
        .collect();
    let _ = writeln!(out, "Text: {text:?}");
    let _ = writeln!(out, "Control bytes: {}", sequence.skipped_bytes());
}

fn size(mut report: Report, sequence: &Sequence, config: &DumpConfig) -> Report {
    let mut ctx = FontContext::new();
    match ctx.size(sequence, &config.spacing, &config.host, &config.size) {
        Ok(result) => {
            let out = &mut report.output;
            let _ = writeln!(out, "split_offset: {}", result.split_offset);
            let _ = writeln!(out, "truncated: {}", result.truncated);
            let _ = writeln!(out, "splits: {:?}", result.splits);
            let _ = writeln!(out, "position: {}", ctx.position());
            match ctx.bounds() {
                Some(bounds) => {
                    let _ = writeln!(out, "bounds: {bounds}");
                }
                None => {
                    let _ = writeln!(out, "bounds: none");
                }
            }
            report
        }
        Err(err) => report.failed(err),
    }
}

fn paint(mut report: Report, sequence: &Sequence, config: &DumpConfig) -> Report {
    let mut ctx = FontContext::new();
    let mut sink = TextSink::default();
    let result = ctx.paint(sequence, &config.spacing, &config.host, &mut sink);

    let _ = writeln!(report.output, "Draw calls:");
    report.output.push_str(&sink.out);
    let _ = writeln!(report.output, "End: {}", ctx.position());
    match result {
        Ok(()) => report,
        Err(err) => report.failed(err),
    }
}

fn locate(mut report: Report, sequence: &Sequence, config: &DumpConfig) -> Report {
    let mut ctx = FontContext::new();
    match ctx.locate(sequence, &config.spacing, &config.host, config.query) {
        Ok(location) => {
            let _ = writeln!(report.output, "offset: {}", location.offset);
            let _ = writeln!(report.output, "position: {}", location.position);
            report
        }
        Err(err) => report.failed(err),
    }
}
