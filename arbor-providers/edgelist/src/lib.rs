//! Edge-list provider loading [`Graph`]s from whitespace-separated text.
//!
//! Two layouts are understood:
//!
//! - [`EdgeListFormat::Header`]: a first line `n m`, then one `u v w` line
//!   per edge.
//! - [`EdgeListFormat::Snap`]: `#` comments and bare `u v` pairs with unit
//!   weight, as published by the SNAP road-network datasets.
//!
//! Vertex ids and declared vertex counts are bounded by [`MAX_VERTEX_COUNT`]
//! so a single stray id cannot force a huge allocation downstream. The edge
//! count in a header is advisory and never sizes a buffer.
//!
//! ```
//! use std::io::Cursor;
//!
//! use arbor_providers_edgelist::{EdgeListFormat, from_reader};
//!
//! let graph = from_reader(Cursor::new("3 2\n0 1 0.5\n1 2 1.5\n"), EdgeListFormat::Header)?;
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! # Ok::<(), arbor_providers_edgelist::EdgeListError>(())
//! ```

mod errors;

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use arbor_core::{Edge, Graph};
use tracing::{debug, instrument, warn};

pub use crate::errors::{EdgeListError, EdgeListErrorCode};

/// Largest vertex count a file may describe. Every vertex id must be below it.
pub const MAX_VERTEX_COUNT: usize = 1 << 27;

/// Text layout of an edge list.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeListFormat {
    /// `n m` header followed by weighted `u v w` lines.
    #[default]
    Header,
    /// SNAP layout: `#` comments and unweighted `u v` pairs.
    Snap,
}

impl fmt::Display for EdgeListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Header => "header",
            Self::Snap => "snap",
        })
    }
}

/// Loads a graph from the file at `path`.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the file cannot be opened or read and
/// the parse errors documented on [`from_reader`] otherwise.
pub fn load_path(path: impl AsRef<Path>, format: EdgeListFormat) -> Result<Graph, EdgeListError> {
    load(path.as_ref(), format)
}

#[instrument(name = "edgelist.load", skip_all, fields(path = %path.display(), format = %format))]
fn load(path: &Path, format: EdgeListFormat) -> Result<Graph, EdgeListError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file), format)
}

/// Parses a graph from `reader`.
///
/// Blank lines are ignored in both layouts. Endpoints may be written as
/// integral floats such as `3.0`.
///
/// # Errors
/// - [`EdgeListError::Io`] when reading fails.
/// - [`EdgeListError::MissingHeader`] when a header-format input has no
///   non-blank line.
/// - [`EdgeListError::MalformedLine`] for a line with the wrong number of
///   fields or an unparsable token.
/// - [`EdgeListError::Graph`] when an endpoint exceeds the declared vertex
///   count or a weight is not finite.
pub fn from_reader<R: BufRead>(reader: R, format: EdgeListFormat) -> Result<Graph, EdgeListError> {
    let graph = match format {
        EdgeListFormat::Header => parse_header(reader)?,
        EdgeListFormat::Snap => parse_snap(reader)?,
    };
    debug!(
        format = %format,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded",
    );
    Ok(graph)
}

/// Non-blank lines paired with their one-based line numbers.
fn content_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<(usize, String), EdgeListError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => Some(Ok((index + 1, text))),
            Err(error) => Some(Err(EdgeListError::Io(error))),
        })
}

fn parse_header<R: BufRead>(reader: R) -> Result<Graph, EdgeListError> {
    let mut lines = content_lines(reader);
    let (header_line, header) = lines.next().ok_or(EdgeListError::MissingHeader)??;
    let [vertices, declared] = fields::<2>(header_line, &header)?;
    let vertex_count = parse_count(header_line, vertices, "vertex count")?;
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(EdgeListError::malformed(
            header_line,
            format!("vertex count {vertex_count} exceeds the limit of {MAX_VERTEX_COUNT}"),
        ));
    }
    let declared_edges = parse_count(header_line, declared, "edge count")?;

    let mut edges = Vec::new();
    for entry in lines {
        let (line, text) = entry?;
        let [left, right, weight] = fields::<3>(line, &text)?;
        edges.push(Edge::new(
            parse_endpoint(line, left)?,
            parse_endpoint(line, right)?,
            parse_weight(line, weight)?,
        ));
    }
    if edges.len() != declared_edges {
        warn!(
            declared = declared_edges,
            parsed = edges.len(),
            "edge count disagrees with header",
        );
    }
    Ok(Graph::new(vertex_count, edges)?)
}

fn parse_snap<R: BufRead>(reader: R) -> Result<Graph, EdgeListError> {
    let mut edges = Vec::new();
    let mut vertex_count = 0;
    for entry in content_lines(reader) {
        let (line, text) = entry?;
        if text.trim_start().starts_with('#') {
            continue;
        }
        let [left, right] = fields::<2>(line, &text)?;
        let source = parse_endpoint(line, left)?;
        let target = parse_endpoint(line, right)?;
        vertex_count = vertex_count.max(source.max(target) + 1);
        edges.push(Edge::new(source, target, 1.0));
    }
    Ok(Graph::new(vertex_count, edges)?)
}

/// Splits `text` into exactly `N` whitespace-separated tokens.
fn fields<const N: usize>(line: usize, text: &str) -> Result<[&str; N], EdgeListError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let found = tokens.len();
    <[&str; N]>::try_from(tokens)
        .map_err(|_| EdgeListError::malformed(line, format!("expected {N} fields, found {found}")))
}

fn parse_count(line: usize, token: &str, what: &str) -> Result<usize, EdgeListError> {
    token
        .parse()
        .map_err(|_| EdgeListError::malformed(line, format!("{what} `{token}` is not a count")))
}

fn parse_endpoint(line: usize, token: &str) -> Result<usize, EdgeListError> {
    let invalid = || EdgeListError::malformed(line, format!("`{token}` is not a vertex id"));
    let vertex = match token.parse::<usize>() {
        Ok(vertex) => vertex,
        Err(_) => {
            let value: f64 = token.parse().map_err(|_| invalid())?;
            if value.fract() != 0.0 || value < 0.0 {
                return Err(invalid());
            }
            if value >= MAX_VERTEX_COUNT as f64 {
                return Err(too_large(line, token));
            }
            // Integral and below the limit, so the conversion is exact.
            value as usize
        }
    };
    if vertex >= MAX_VERTEX_COUNT {
        return Err(too_large(line, token));
    }
    Ok(vertex)
}

fn too_large(line: usize, token: &str) -> EdgeListError {
    EdgeListError::malformed(
        line,
        format!("vertex id `{token}` exceeds the limit of {MAX_VERTEX_COUNT} vertices"),
    )
}

fn parse_weight(line: usize, token: &str) -> Result<f64, EdgeListError> {
    token
        .parse()
        .map_err(|_| EdgeListError::malformed(line, format!("weight `{token}` is not a number")))
}
