//! Edge-list input.
//!
//! Each line holds two delimiter-separated node ids, `from` then `to`,
//! one directed edge per line. Parsing is strict: a line that does not
//! yield two valid ids aborts the whole load, since silently skipping
//! edges would silently corrupt the ranking. Both ids are parsed before
//! the graph is touched, so a bad line never half-applies an edge.

use crate::graph::{Graph, GraphError, GraphResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Parse delimiter-separated edge pairs from `reader` into the graph.
///
/// Returns the number of edges inserted. Repeated delimiters between the
/// two ids are collapsed, so `"0  1"` parses under the default single
/// space delimiter.
pub fn read_edges<R: BufRead>(reader: R, graph: &mut Graph) -> GraphResult<u64> {
    let delimiter = graph.config().delimiter.clone();
    let mut count = 0u64;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx as u64 + 1;
        let (from, to) = parse_edge(&line, &delimiter, line_no)?;
        graph.add_edge(from, to)?;
        count += 1;
    }

    Ok(count)
}

/// Open `path` and load every edge it contains into the graph.
pub fn read_edges_file<P: AsRef<Path>>(path: P, graph: &mut Graph) -> GraphResult<u64> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading edge list");

    let file = File::open(path).map_err(|source| GraphError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = read_edges(BufReader::new(file), graph)?;
    info!(lines, vertices = graph.size(), "edge list loaded");
    Ok(lines)
}

fn parse_edge(line: &str, delimiter: &str, line_no: u64) -> GraphResult<(usize, usize)> {
    let mut fields = line.split(delimiter).filter(|f| !f.is_empty());

    let from = fields
        .next()
        .ok_or_else(|| malformed(line_no, "missing source id"))?;
    let to = fields
        .next()
        .ok_or_else(|| malformed(line_no, "missing target id"))?;

    let from = from
        .trim()
        .parse::<usize>()
        .map_err(|_| malformed(line_no, "source id is not an unsigned integer"))?;
    let to = to
        .trim()
        .parse::<usize>()
        .map_err(|_| malformed(line_no, "target id is not an unsigned integer"))?;

    Ok((from, to))
}

fn malformed(line_no: u64, reason: &str) -> GraphError {
    GraphError::MalformedLine {
        line_no,
        reason: reason.to_string(),
    }
}
