//! Control string input: hex on the command line or a raw file.

use std::path::PathBuf;

use crate::DumpError;

/// Read the control string named by the positional arguments.
///
/// A single `@path` argument reads the file's bytes. Anything else is
/// concatenated and parsed as hex, ignoring whitespace and `_`.
pub fn read_input(args: &[String]) -> Result<Vec<u8>, DumpError> {
    match args {
        [] => Err(DumpError::MissingInput),
        [single] if single.starts_with('@') => {
            let path = PathBuf::from(&single[1..]);
            std::fs::read(&path).map_err(|source| DumpError::Io { path, source })
        }
        _ => parse_hex(&args.concat()),
    }
}

/// Parse hex digit pairs into bytes.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, DumpError> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b'_')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(DumpError::Hex(format!("odd number of digits in '{text}'")));
    }
    digits
        .chunks(2)
        .map(|pair| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(DumpError::Hex(format!(
                "'{}' is not a hex byte",
                String::from_utf8_lossy(pair)
            ))),
        })
        .collect()
}

fn nibble(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}
