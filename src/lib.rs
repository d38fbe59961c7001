//! EdgeRank — PageRank over edge-list files.
//!
//! Builds a reverse-adjacency graph from a stream of `(from, to)` edge
//! pairs, then runs power iteration with dangling-node mass redistribution
//! until the rank vector reaches a fixed point or an iteration cap.
//!
//! Construction and computation are strictly phase-separated: all edges
//! are inserted first, then [`pagerank`] runs to completion on the calling
//! thread, then the rank vector is read back through [`Graph::ranks`].
//!
//! ```
//! use edgerank::{pagerank, Graph};
//!
//! let mut graph = Graph::with_defaults(2).unwrap();
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 0).unwrap();
//!
//! let summary = pagerank(&mut graph).unwrap();
//! assert!(summary.diff <= graph.config().convergence);
//! assert!((graph.ranks()[0] - 0.5).abs() < 1e-4);
//! ```

pub mod config;
pub mod dump;
pub mod graph;
pub mod pagerank;
pub mod reader;

pub use config::GraphConfig;
pub use dump::{write_graph, write_ranks};
pub use graph::{Graph, GraphError, GraphResult};
pub use pagerank::{pagerank, PageRankSummary};
pub use reader::{read_edges, read_edges_file};

/// Library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
