//! Reverse-adjacency graph store.
//!
//! Holds, for a fixed set of `size` nodes, the list of incoming link
//! sources per node, each node's outgoing-edge count, and the rank vector.
//! All per-node data lives in parallel arrays indexed by a dense node id
//! in `[0, size)`; there is no separate node object.
//!
//! Construction and computation are phase-separated: every edge is
//! inserted before [`crate::pagerank::pagerank`] runs, and the store is
//! never mutated once the solver has started.

use crate::config::GraphConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while configuring, building or ranking a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("graph must contain at least one node")]
    EmptyGraph,

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("node {node} out of range for graph of {size} nodes")]
    NodeOutOfRange { node: usize, size: usize },

    #[error("malformed line {line_no}: {reason}")]
    MalformedLine { line_no: u64, reason: String },

    #[error("could not read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory reverse-adjacency store for a fixed set of nodes.
///
/// Three parallel arrays indexed by node id:
/// - `incoming`: source ids of edges pointing into the node
/// - `outgoing`: count of edges leaving the node
/// - `ranks`: current PageRank estimate, seeded uniform at creation
pub struct Graph {
    config: GraphConfig,
    size: usize,
    incoming: Vec<Vec<usize>>,
    outgoing: Vec<usize>,
    ranks: Vec<f64>,
    edge_count: u64,
}

impl Graph {
    /// Create a store for `size` nodes with the given configuration.
    ///
    /// Incoming-link lists start with no backing storage; nothing is
    /// allocated for a node until its first inbound edge arrives. Ranks
    /// are seeded with the uniform distribution `1/size`, so the vector
    /// is a probability distribution from the start.
    pub fn new(size: usize, config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        if size == 0 {
            return Err(GraphError::EmptyGraph);
        }

        debug!(size, alpha = config.alpha, "creating graph store");

        let uniform = 1.0 / size as f64;
        Ok(Self {
            config,
            size,
            incoming: vec![Vec::new(); size],
            outgoing: vec![0; size],
            ranks: vec![uniform; size],
            edge_count: 0,
        })
    }

    /// Create a store for `size` nodes with the default configuration.
    pub fn with_defaults(size: usize) -> GraphResult<Self> {
        Self::new(size, GraphConfig::default())
    }

    /// Record a directed edge `from -> to`.
    ///
    /// Increments the out-degree of `from` and appends `from` to the
    /// incoming-link list of `to`. The first append to a node reserves
    /// `initial_link_capacity` slots; a full list doubles its capacity,
    /// keeping total allocation work across N insertions O(N) amortized.
    pub fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        self.outgoing[from] += 1;

        let links = &mut self.incoming[to];
        if links.capacity() == 0 {
            links.reserve_exact(self.config.initial_link_capacity);
        } else if links.len() == links.capacity() {
            links.reserve_exact(links.capacity());
        }
        links.push(from);

        self.edge_count += 1;
        Ok(())
    }

    fn check_node(&self, node: usize) -> GraphResult<()> {
        if node >= self.size {
            return Err(GraphError::NodeOutOfRange {
                node,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of edges inserted so far.
    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// Out-degree of a node. A zero out-degree marks a dangling node.
    pub fn out_degree(&self, node: usize) -> usize {
        self.outgoing[node]
    }

    /// Source ids of the edges pointing into `node`.
    pub fn incoming_links(&self, node: usize) -> &[usize] {
        &self.incoming[node]
    }

    /// Allocated capacity of a node's incoming-link list. Zero until the
    /// node receives its first inbound edge.
    pub fn incoming_capacity(&self, node: usize) -> usize {
        self.incoming[node].capacity()
    }

    /// Current rank vector, one entry per node.
    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    /// Configuration supplied at creation.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [f64], &[Vec<usize>], &[usize]) {
        (&mut self.ranks, &self.incoming, &self.outgoing)
    }
}
