//! Power-iteration PageRank solver.
//!
//! Classic random-surfer formulation: with probability `alpha` the surfer
//! follows a random outgoing link, with probability `1 - alpha` it
//! teleports uniformly. Mass sitting on dangling nodes (out-degree zero)
//! is redistributed uniformly each iteration, so total probability mass is
//! preserved by construction.
//!
//! The reverse-adjacency layout lets each node's new rank be computed as a
//! local reduction over its incoming-link list, making an iteration O(E)
//! rather than O(N*E).

use crate::graph::{Graph, GraphResult};
use tracing::{debug, info};

/// Diagnostics from a solver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankSummary {
    /// Iterations actually performed.
    pub iterations: u64,
    /// Final L1 distance between successive rank vectors.
    pub diff: f64,
}

impl PageRankSummary {
    /// Whether the run stopped because the L1 change dropped to the
    /// threshold, rather than hitting the iteration cap.
    pub fn converged(&self, convergence: f64) -> bool {
        self.diff <= convergence
    }
}

/// Run power iteration on the graph's rank vector until the L1 change
/// between iterations drops to `convergence` or `max_iterations` is
/// reached, whichever comes first.
///
/// The rank vector is mutated in place and read back through
/// [`Graph::ranks`]. Each iteration renormalizes the previous-iteration
/// snapshot to sum to exactly one before the transition multiply, so
/// floating-point summation drift cannot pull the total mass away from 1
/// over long runs. The converged vector sums to 1.
pub fn pagerank(graph: &mut Graph) -> GraphResult<PageRankSummary> {
    let size = graph.size();
    let alpha = graph.config().alpha;
    let convergence = graph.config().convergence;
    let max_iterations = graph.config().max_iterations;

    info!(size, alpha, convergence, "calculating pagerank");

    // Snapshot of the previous iteration's ranks. Allocated before any
    // rank is touched; if this fails nothing has been clobbered.
    let mut old_pr = vec![0.0f64; size];

    let (ranks, incoming, outgoing) = graph.parts_mut();

    let mut diff = 1.0;
    let mut iterations: u64 = 0;

    while diff > convergence && iterations < max_iterations {
        let mut sum_pr = 0.0;
        let mut dangling_pr = 0.0;
        for (k, &rank) in ranks.iter().enumerate() {
            sum_pr += rank;
            if outgoing[k] == 0 {
                dangling_pr += rank;
            }
        }

        if iterations == 0 {
            old_pr.copy_from_slice(ranks);
        } else {
            // Normalize so the previous distribution sums to exactly one
            // going into the transition multiply.
            for (old, &rank) in old_pr.iter_mut().zip(ranks.iter()) {
                *old = rank / sum_pr;
            }
        }

        // Dangling mass spread uniformly, and the teleport term. Both are
        // identical across nodes.
        let one_av = alpha * dangling_pr / size as f64;
        let one_iv = (1.0 - alpha) / size as f64;

        diff = 0.0;
        for i in 0..size {
            // Local reduction over the nodes linking into i.
            let mut h = 0.0;
            for &source in &incoming[i] {
                let out = outgoing[source];
                if out > 0 {
                    h += old_pr[source] / out as f64;
                }
            }
            h *= alpha;
            ranks[i] = h + one_av + one_iv;
            diff += (ranks[i] - old_pr[i]).abs();
        }

        iterations += 1;
        debug!(iterations, diff, "pagerank iteration");
    }

    info!(iterations, diff, "pagerank done");
    Ok(PageRankSummary { iterations, diff })
}
