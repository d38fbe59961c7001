//! Solver and parsing configuration.
//!
//! The configuration is taken by value at graph creation and never mutated
//! afterwards, so a running solve cannot be reconfigured underneath.

use crate::graph::{GraphError, GraphResult};

/// Tunables for graph construction, edge-list parsing and the solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Damping factor: probability the random surfer follows an outgoing
    /// link rather than teleporting. Must lie strictly in (0, 1).
    pub alpha: f64,
    /// Convergence threshold on the L1 change between successive rank
    /// vectors. Must be positive.
    pub convergence: f64,
    /// Cap on solver iterations. Must be positive.
    pub max_iterations: u64,
    /// Field separator between the two node ids on each input line.
    pub delimiter: String,
    /// Capacity of the first allocation backing a node's incoming-link
    /// list; growth doubles from there.
    pub initial_link_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            alpha: 0.85,
            convergence: 1e-5,
            max_iterations: 10_000,
            delimiter: " ".to_string(),
            initial_link_capacity: 16,
        }
    }
}

impl GraphConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> GraphResult<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(GraphError::InvalidConfig("alpha must be in (0, 1)"));
        }
        if !(self.convergence > 0.0) {
            return Err(GraphError::InvalidConfig("convergence must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(GraphError::InvalidConfig("max_iterations must be positive"));
        }
        if self.delimiter.is_empty() {
            return Err(GraphError::InvalidConfig("delimiter must not be empty"));
        }
        if self.initial_link_capacity == 0 {
            return Err(GraphError::InvalidConfig(
                "initial_link_capacity must be positive",
            ));
        }
        Ok(())
    }
}
