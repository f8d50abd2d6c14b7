use std::fmt;

use arbor_core::GraphError;
use thiserror::Error;

/// Errors raised while loading an edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A header-format input contained no `n m` line.
    #[error("edge list has no `n m` header line")]
    MissingHeader,
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// One-based line number in the source.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The parsed edges do not form a valid graph.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Stable machine-readable codes for [`EdgeListError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeListErrorCode {
    /// Reading the underlying source failed.
    Io,
    /// The header line is missing.
    MissingHeader,
    /// A line could not be parsed.
    MalformedLine,
    /// The parsed edges do not form a valid graph.
    Graph,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "EDGELIST_IO",
            Self::MissingHeader => "EDGELIST_MISSING_HEADER",
            Self::MalformedLine => "EDGELIST_MALFORMED_LINE",
            Self::Graph => "EDGELIST_INVALID_GRAPH",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieve the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::Io(_) => EdgeListErrorCode::Io,
            Self::MissingHeader => EdgeListErrorCode::MissingHeader,
            Self::MalformedLine { .. } => EdgeListErrorCode::MalformedLine,
            Self::Graph(_) => EdgeListErrorCode::Graph,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}
