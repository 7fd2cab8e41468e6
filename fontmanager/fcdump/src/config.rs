//! Command-line options shared by every `fcdump` command.

use fc_context::{Query, SizeRequest, Spacing};
use fc_decode::DecodeConfig;
use fc_ir::Point;

use crate::{DumpError, FixedPitchHost};

/// Parsed options plus the positional input arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpConfig {
    pub decode: DecodeConfig,
    /// Declared string length; the terminator bounds the string otherwise.
    pub length: u32,
    /// Address of the first byte, for matrix operand alignment.
    pub base: u32,
    pub host: FixedPitchHost,
    pub spacing: Spacing,
    pub size: SizeRequest,
    pub query: Query,
    pub input: Vec<String>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            decode: DecodeConfig::from_env(),
            length: u32::MAX,
            base: 0,
            host: FixedPitchHost::default(),
            spacing: Spacing::new(),
            size: SizeRequest::default(),
            query: Query::Offset(0),
            input: Vec::new(),
        }
    }
}

impl DumpConfig {
    /// Parse `--name=value` options; anything not starting with `-` is input.
    pub fn from_args(args: &[String]) -> Result<Self, DumpError> {
        let mut config = DumpConfig::default();
        for arg in args {
            if !arg.starts_with('-') {
                config.input.push(arg.clone());
                continue;
            }
            let (name, value) = arg.split_once('=').unwrap_or((arg.as_str(), ""));
            match name {
                "--trace" => config.decode = config.decode.with_trace(true),
                "--length" => config.length = number("length", value)?,
                "--max-length" => {
                    config.decode = config.decode.with_max_length(number("max-length", value)?);
                }
                "--base" => config.base = number("base", value)?,
                "--pitch" => config.host.pitch = number("pitch", value)?,
                "--height" => config.host.height = number("height", value)?,
                "--word" => config.spacing.word = point("word", value)?,
                "--char" => config.spacing.character = point("char", value)?,
                "--limit" => config.size.limits = point("limit", value)?,
                "--split" => config.size.split_char = Some(number("split", value)?),
                "--offset" => config.query = Query::Offset(number("offset", value)?),
                "--point" => config.query = Query::Point(point("point", value)?),
                _ => return Err(DumpError::UnknownOption(arg.clone())),
            }
        }
        Ok(config)
    }
}

/// Decimal, or hex with a `0x` prefix.
fn number<T>(option: &'static str, value: &str) -> Result<T, DumpError>
where
    T: TryFrom<i64>,
{
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).ok(),
        None => value.parse::<i64>().ok(),
    };
    parsed
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| DumpError::BadOption {
            option,
            value: value.to_string(),
        })
}

/// `X,Y` pair.
fn point(option: &'static str, value: &str) -> Result<Point, DumpError> {
    let Some((x, y)) = value.split_once(',') else {
        return Err(DumpError::BadOption {
            option,
            value: value.to_string(),
        });
    };
    Ok(Point::new(number(option, x.trim())?, number(option, y.trim())?))
}
