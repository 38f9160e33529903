//! Error types for document checks
//!
//! Each stage of a check has its own error: parsing the document XML,
//! extracting the content entry from its container, and loading a grade
//! table. [`CheckError`] is what the public entry points return.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for XML parsing failures
///
/// Positions are byte offsets into the parsed text (after any BOM).
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The XML itself is malformed
    #[error("malformed XML at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    /// The input ended before this element was closed
    #[error("unexpected end of input, <{tag}> is never closed")]
    UnclosedElement { tag: String, position: usize },

    /// An end tag with no element left to close
    #[error("unexpected end tag </{tag}>")]
    UnexpectedEndTag { tag: String, position: usize },

    /// The input contains no element at all
    #[error("document has no root element")]
    NoRootElement,
}

impl ParseError {
    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        match self {
            ParseError::Syntax { position, .. } => *position,
            ParseError::UnclosedElement { position, .. } => *position,
            ParseError::UnexpectedEndTag { position, .. } => *position,
            ParseError::NoRootElement => 0,
        }
    }
}

/// Get line and column (both 1-based, column counted in characters) for a
/// byte offset
pub fn line_col(input: &str, pos: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, ch) in input.char_indices() {
        if i >= pos {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Failure to get the content entry out of a document container
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot open container {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a readable zip container")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{path} has no entry named {entry}")]
    EntryNotFound { path: PathBuf, entry: String },

    #[error("cannot write extracted entry {entry}")]
    Write {
        entry: String,
        #[source]
        source: io::Error,
    },
}

/// Failure to load a custom grade table
#[derive(Debug, Error)]
pub enum GradeTableError {
    #[error("cannot read grade table {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid grade table")]
    Json(#[from] serde_json::Error),

    #[error("grade table defines no grades")]
    Empty,
}

/// Error returned by a document check
#[derive(Debug, Error)]
pub enum CheckError {
    /// Malformed document XML, located by line and column (1-based)
    #[error("cannot parse document at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    GradeTable(#[from] GradeTableError),

    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CheckError {
    /// Wrap a parse error, locating it in the input it came from
    pub fn parse(source: ParseError, input: &str) -> Self {
        let (line, column) = line_col(input, source.position());
        CheckError::Parse {
            line,
            column,
            source,
        }
    }
}
