//! Parser for one-line maze records: `(<rows>,<columns>)-[<v0>,<v1>,...]`.

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// A maze record as read from the input file, before any validation of
/// its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeRecord {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<u32>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected '(<rows>,<columns>)' at the start of \"{0}\"")]
    MissingHeader(String),

    #[error("expected '-' between the size and the cell list in \"{0}\"")]
    MissingSeparator(String),

    #[error("expected the cell list in brackets in \"{0}\"")]
    MissingCellList(String),

    #[error("invalid number \"{token}\": {source}")]
    Number {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

fn number<T: FromStr<Err = ParseIntError>>(token: &str) -> Result<T, RecordError> {
    let token = token.trim();
    token.parse().map_err(|source| RecordError::Number {
        token: token.to_string(),
        source,
    })
}

/// Parse a maze record line.
///
/// Whitespace around tokens is ignored and the cell list may be wrapped in
/// either `[...]` or `(...)`. The cell count is not checked against the
/// header here; that is the maze builder's job.
pub fn parse_record(line: &str) -> Result<MazeRecord, RecordError> {
    let s = line.trim();

    let (header, rest) = s
        .strip_prefix('(')
        .and_then(|r| r.split_once(')'))
        .ok_or_else(|| RecordError::MissingHeader(s.to_string()))?;
    let (rows, columns) = header
        .split_once(',')
        .ok_or_else(|| RecordError::MissingHeader(s.to_string()))?;
    let rows = number(rows)?;
    let columns = number(columns)?;

    let list = rest
        .trim_start()
        .strip_prefix('-')
        .ok_or_else(|| RecordError::MissingSeparator(s.to_string()))?
        .trim();
    let body = list
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'))
        .or_else(|| list.strip_prefix('(').and_then(|b| b.strip_suffix(')')))
        .ok_or_else(|| RecordError::MissingCellList(s.to_string()))?;

    let cells = if body.trim().is_empty() {
        Vec::new()
    } else {
        body.split(',').map(number::<u32>).collect::<Result<_, _>>()?
    };

    Ok(MazeRecord {
        rows,
        columns,
        cells,
    })
}

impl FromStr for MazeRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}
