//! Human-readable dumps of the graph structure and the rank vector.

use crate::graph::{Graph, GraphResult};
use std::io::Write;

/// Write each node's incoming-link list as `i:[ j k ... ]`.
pub fn write_graph<W: Write>(graph: &Graph, w: &mut W) -> GraphResult<()> {
    for i in 0..graph.size() {
        write!(w, "{}:[ ", i)?;
        for &source in graph.incoming_links(i) {
            write!(w, "{} ", source)?;
        }
        writeln!(w, "]")?;
    }
    Ok(())
}

/// Write each node's rank as `i = r`, then a trailing `s = sum` line as a
/// mass sanity check. After a converged run the sum lands very close to 1.
pub fn write_ranks<W: Write>(graph: &Graph, w: &mut W) -> GraphResult<()> {
    let mut sum = 0.0;
    for (i, rank) in graph.ranks().iter().enumerate() {
        writeln!(w, "{} = {:.6}", i, rank)?;
        sum += rank;
    }
    writeln!(w, "s = {:.6}", sum)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn graph_dump_format() {
        let mut graph = Graph::with_defaults(3).unwrap();
        graph.add_edge(1, 0).unwrap();
        graph.add_edge(2, 0).unwrap();

        let mut out = Vec::new();
        write_graph(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0:[ 1 2 ]\n1:[ ]\n2:[ ]\n");
    }

    #[test]
    fn rank_dump_ends_with_sum_line() {
        let graph = Graph::with_defaults(2).unwrap();

        let mut out = Vec::new();
        write_ranks(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0 = 0.500000");
        assert_eq!(lines[1], "1 = 0.500000");
        assert_eq!(lines[2], "s = 1.000000");
    }
}
