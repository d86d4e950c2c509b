//! Line-oriented `KEY=VALUE` parser
//!
//! Tokenizing is kept apart from semantic validation: the parser splits each
//! line and hands the pair to a translator, which decides whether it knows the
//! key and whether the value is acceptable. The package file format and the
//! richer recipe format share this parser through different translators.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Outcome of offering one `(key, value)` pair to a translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// The key is not handled by this translator
    UnknownKey,
    /// The pair was stored in the destination record
    Accepted,
    /// The key is known but the value is outside its allowed set
    InvalidValue,
}

/// Terminal status of a failed parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("file does not exist")]
    NoFile,

    #[error("permission denied")]
    Permission,

    #[error("malformed line {line}: '{content}'")]
    Malformed { line: usize, content: String },

    #[error("invalid value '{value}' for '{key}' on line {line}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ParseError::NoFile,
            io::ErrorKind::PermissionDenied => ParseError::Permission,
            _ => ParseError::Io(err.to_string()),
        }
    }
}

/// Split a raw line into `(key, value)` on the first `=`.
///
/// Carriage returns at either end and leading spaces are stripped first.
/// Returns `None` when there is no `=` or when a space appears in the key.
pub fn tokenize(raw: &str) -> Option<(&str, &str)> {
    let line = raw.trim_matches('\r').trim_start_matches(' ');
    let (key, value) = line.split_once('=')?;

    if key.contains(' ') {
        return None;
    }

    Some((key, value))
}

/// Parse every line of `reader`, feeding pairs to `translator`.
///
/// Blank lines are skipped. Parsing stops at the first malformed line or
/// rejected value. On error, `dest` may be partially populated and the
/// caller is expected to discard it.
pub fn parse<R, T, F>(reader: R, dest: &mut T, mut translator: F) -> Result<(), ParseError>
where
    R: BufRead,
    F: FnMut(&str, &str, &mut T) -> Translation,
{
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| match e.kind() {
            // Bad text is a content error on this line, not a read failure
            io::ErrorKind::InvalidData => ParseError::Malformed {
                line: line_number,
                content: "<not valid UTF-8>".to_string(),
            },
            _ => ParseError::from(e),
        })?;

        if line.trim_matches(|c| c == '\r' || c == ' ').is_empty() {
            continue;
        }

        let Some((key, value)) = tokenize(&line) else {
            return Err(ParseError::Malformed {
                line: line_number,
                content: line.clone(),
            });
        };

        match translator(key, value, dest) {
            Translation::Accepted => {}
            Translation::UnknownKey => {
                return Err(ParseError::Malformed {
                    line: line_number,
                    content: line.clone(),
                });
            }
            Translation::InvalidValue => {
                return Err(ParseError::InvalidValue {
                    line: line_number,
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Open `path` and parse it with `translator`.
///
/// A missing file is reported as [`ParseError::NoFile`] and an unreadable one
/// as [`ParseError::Permission`].
pub fn parse_file<T, F>(path: &Path, dest: &mut T, translator: F) -> Result<(), ParseError>
where
    F: FnMut(&str, &str, &mut T) -> Translation,
{
    let file = File::open(path)?;
    parse(BufReader::new(file), dest, translator)
}
