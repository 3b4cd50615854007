//! Error types for outline conversion

use crate::outline::formats::FormatError;
use std::fmt;

/// Error raised while reading an outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line is indented by an odd number of spaces, or sits more than one level
    /// deeper than the line before it.
    IllegalNesting {
        /// 1-based line number in the input text
        line: usize,
        indent: usize,
        name: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IllegalNesting { line, indent, name } => write!(
                f,
                "Illegal nesting: {indent} spaces at line #{line} \"{name}\""
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned by the block helper
#[derive(Debug, Clone, PartialEq)]
pub enum FolderTreeError {
    Parse(ParseError),
    Format(FormatError),
}

impl fmt::Display for FolderTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderTreeError::Parse(err) => write!(f, "{err}"),
            FolderTreeError::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FolderTreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolderTreeError::Parse(err) => Some(err),
            FolderTreeError::Format(err) => Some(err),
        }
    }
}

impl From<ParseError> for FolderTreeError {
    fn from(err: ParseError) -> Self {
        FolderTreeError::Parse(err)
    }
}

impl From<FormatError> for FolderTreeError {
    fn from(err: FormatError) -> Self {
        FolderTreeError::Format(err)
    }
}
