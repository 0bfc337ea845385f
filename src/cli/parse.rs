use thiserror::Error;

use super::CliFlags;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown argument: {0}")]
    UnknownArg(String),

    #[error("flag {0} needs a value")]
    MissingValue(String),

    #[error("invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },

    #[error("invalid boolean for {flag}: {value}")]
    InvalidBool { flag: String, value: String },
}

/// Parse `args` (program name first) into flags.
///
/// Value flags take the next argument verbatim, or an inline `-l=20` value.
/// Switches accept an inline boolean, `-a=false`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let (name, inline) = split_inline(&args[i]);
        match name {
            "-h" | "--help" => flags.help = switch(name, inline)?,
            "-v" | "--version" => flags.version = switch(name, inline)?,
            "--verbose" => flags.verbose = switch(name, inline)?,
            "-a" | "--alpha" => flags.alpha = switch(name, inline)?,
            "-n" | "--numeric" => flags.numeric = switch(name, inline)?,
            "-s" | "--symbols" => flags.symbols = switch(name, inline)?,
            "-l" | "--length" => {
                let raw = value(args, &mut i, name, inline)?;
                flags.length = Some(number(name, raw)?);
            }
            "-d" | "--deny" => {
                flags.deny = Some(value(args, &mut i, name, inline)?.to_string());
            }
            "--seed" => {
                let raw = value(args, &mut i, name, inline)?;
                flags.seed = Some(number(name, raw)?);
            }
            _ => return Err(ParseError::UnknownArg(args[i].clone())),
        }
        i += 1;
    }

    Ok(flags)
}

fn split_inline(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((name, value)) if name.starts_with('-') => (name, Some(value)),
        _ => (arg, None),
    }
}

/// Inline value if present, otherwise the next argument. A leading `-` in the
/// next argument is fine: `-l -3` and `-d -#` are both meaningful.
fn value<'a>(
    args: &'a [String],
    i: &mut usize,
    name: &str,
    inline: Option<&'a str>,
) -> Result<&'a str, ParseError> {
    if let Some(v) = inline {
        return Ok(v);
    }
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(name.to_string()))
}

fn number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ParseError> {
    raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
        flag: name.to_string(),
        value: raw.to_string(),
    })
}

fn switch(name: &str, inline: Option<&str>) -> Result<bool, ParseError> {
    match inline {
        None => Ok(true),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(other) => Err(ParseError::InvalidBool {
            flag: name.to_string(),
            value: other.to_string(),
        }),
    }
}
