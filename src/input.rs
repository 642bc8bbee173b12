use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Largest element accepted from input. Keeps the parent and size arrays of the driver
/// within a few hundred MB.
pub const MAX_ELEMENT: usize = (1 << 24) - 1;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty, expected a pair count on line 1")]
    MissingCount,
    #[error("line {line}: bad pair count {token:?}")]
    BadCount { line: usize, token: String },
    #[error("line {line}: input ended, {expected} more pair(s) expected")]
    MissingPair { line: usize, expected: usize },
    #[error("line {line}: {token:?} is not a non-negative integer")]
    BadToken { line: usize, token: String },
    #[error("line {line}: expected two values, found {found}")]
    WrongArity { line: usize, found: usize },
    #[error("line {line}: element {value} exceeds the limit of {max}", max = MAX_ELEMENT)]
    ValueTooLarge { line: usize, value: usize },
}

/// Pairs in input order together with the largest element mentioned (0 when there are none).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pairs {
    pub max_value: usize,
    pub pairs: Vec<(usize, usize)>,
}

fn parse_pair(line: usize, text: &str) -> Result<(usize, usize), InputError> {
    let parts = text.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 2 {
        return Err(InputError::WrongArity { line, found: parts.len() });
    }
    let parse = |token: &str| -> Result<usize, InputError> {
        let value = token
            .parse::<usize>()
            .map_err(|_| InputError::BadToken { line, token: token.to_string() })?;
        if value > MAX_ELEMENT {
            return Err(InputError::ValueTooLarge { line, value });
        }
        Ok(value)
    };
    Ok((parse(parts[0])?, parse(parts[1])?))
}

/// Reads a pair count on the first line, then that many `p q` lines.
/// Anything after them is ignored.
pub fn parse_pairs<R: BufRead>(reader: R) -> Result<Pairs, InputError> {
    let mut lines = reader.lines();

    let first = match lines.next() {
        Some(line) => line?,
        None => return Err(InputError::MissingCount),
    };
    let count = first
        .trim()
        .parse::<usize>()
        .map_err(|_| InputError::BadCount { line: 1, token: first.trim().to_string() })?;

    let mut out = Pairs::default();
    for i in 0..count {
        let line = i + 2;
        let text = match lines.next() {
            Some(text) => text?,
            None => return Err(InputError::MissingPair { line, expected: count - i }),
        };
        let (p, q) = parse_pair(line, &text)?;
        out.max_value = out.max_value.max(p).max(q);
        out.pairs.push((p, q));
    }
    debug!("parsed {} pairs, max value {}", out.pairs.len(), out.max_value);
    Ok(out)
}

pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Pairs, InputError> {
    let f = File::open(path.as_ref())?;
    debug!("reading pairs from {}", path.as_ref().display());
    parse_pairs(BufReader::new(f))
}
