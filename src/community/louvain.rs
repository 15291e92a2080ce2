//! Louvain algorithm for unsigned networks.
//!
//! Fast modularity optimization through local node moves and graph aggregation,
//! operating directly on the modularity matrix.
//!
//! ## The Algorithm (Blondel et al. 2008)
//!
//! 1. **Phase 1 (Local Moving)**: Start with each node in its own community.
//!    Repeatedly move nodes to the community with highest modularity
//!    gain until no improvement.
//!
//! 2. **Phase 2 (Aggregation)**: Build a meta-graph where communities become
//!    single nodes. The modularity matrix of the meta-graph is the block sum
//!    of the current one, so its trace is the modularity of the partition.
//!
//! 3. **Iterate**: Repeat phases 1-2 on the meta-graph until modularity
//!    stops improving.
//!
//! Visiting order, tie-breaking and tolerances are shared with
//! [`SignedLouvain`](super::SignedLouvain): on a matrix without negative
//! entries both produce the same partition for the same seed.
//!
//! ## References
//!
//! Blondel et al. (2008). "Fast unfolding of communities in large networks."
//! Journal of Statistical Mechanics: Theory and Experiment, P10008.

use super::partition::{renumber, Hierarchy, Partition};
use super::signed::first_max;
use super::state::aggregate_matrix;
use super::traits::{adjacency_from_graph, validate_matrix, CommunityDetection};
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2, Axis};
use petgraph::graph::UnGraph;
use rand::prelude::*;
use tracing::{debug, trace, warn};

/// Louvain community detection algorithm.
#[derive(Debug, Clone)]
pub struct Louvain {
    /// Resolution parameter (gamma).
    resolution: f64,
    /// Maximum local-moving passes per level.
    max_iter: usize,
    /// Maximum levels of aggregation.
    max_levels: usize,
    /// Minimum modularity improvement to continue.
    min_modularity_gain: f64,
    /// Random seed for the visiting order.
    seed: Option<u64>,
}

impl Louvain {
    /// Create a new Louvain detector with default settings.
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            max_iter: 1000,
            max_levels: 300,
            min_modularity_gain: 1e-10,
            seed: None,
        }
    }

    /// Set resolution parameter.
    ///
    /// Higher values produce smaller communities.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set maximum iterations per level.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set maximum aggregation levels.
    pub fn with_max_levels(mut self, levels: usize) -> Self {
        self.max_levels = levels;
        self
    }

    /// Set the minimum modularity gain between levels.
    pub fn with_min_modularity_gain(mut self, gain: f64) -> Self {
        self.min_modularity_gain = gain;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Normalized modularity matrix `(W - γ k kᵀ / s) / s`.
    fn modularity_matrix(&self, w: ArrayView2<'_, f64>) -> Array2<f64> {
        let s = w.sum();
        let n = w.nrows();
        if s == 0.0 {
            return Array2::zeros((n, n));
        }
        let k = w.sum_axis(Axis(1));
        Array2::from_shape_fn((n, n), |(i, j)| {
            (w[[i, j]] - self.resolution * k[i] * k[j] / s) / s
        })
    }

    /// Phase 1: Local moving on the modularity matrix.
    /// Returns the module of every node (not renumbered).
    fn local_moving(&self, b: &Array2<f64>, rng: &mut dyn RngCore) -> Result<Vec<usize>> {
        let n = b.nrows();
        let mut modules: Vec<usize> = (0..n).collect();
        // Node-to-module modularity sums.
        let mut hnm = b.clone();
        let mut order: Vec<usize> = (0..n).collect();
        let mut gains = vec![0.0; n];

        let mut pass = 0;
        loop {
            pass += 1;
            if pass > self.max_iter {
                warn!(passes = self.max_iter, "local moving did not converge");
                return Err(Error::LocalMovingDiverged {
                    passes: self.max_iter,
                });
            }

            order.shuffle(&mut *rng);
            let mut moves = 0usize;
            for &node in &order {
                let current = modules[node];
                let row = hnm.row(node);
                let leave = row[current] - b[[node, node]];
                for (target, gain) in gains.iter_mut().enumerate() {
                    *gain = row[target] - leave;
                }
                gains[current] = 0.0;

                let (best, gain) = first_max(&gains);
                if gain > 1e-10 {
                    let column = b.column(node);
                    for (v, &x) in column.iter().enumerate() {
                        hnm[[v, best]] += x;
                        hnm[[v, current]] -= x;
                    }
                    modules[node] = best;
                    moves += 1;
                }
            }

            trace!(pass, moves, "local moving pass");
            if moves == 0 {
                break;
            }
        }

        Ok(modules)
    }

    /// Partition the nodes of a nonnegative, symmetric weight matrix.
    pub fn optimize(&self, w: ArrayView2<'_, f64>) -> Result<Partition> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(Error::InvalidParameter {
                name: "resolution",
                message: "must be positive and finite",
            });
        }
        let n = validate_matrix(w)?;
        if w.iter().any(|&x| x < 0.0) {
            return Err(Error::InvalidParameter {
                name: "w",
                message: "unsigned louvain requires nonnegative weights; use SignedLouvain",
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut b = self.modularity_matrix(w);
        let mut hierarchy = Hierarchy::new(n);
        while hierarchy.should_continue(self.min_modularity_gain) {
            if hierarchy.depth() >= self.max_levels {
                warn!(levels = self.max_levels, "hierarchy did not terminate");
                return Err(Error::HierarchyOverflow {
                    levels: self.max_levels,
                });
            }

            // Phase 1: Local moving
            let modules = self.local_moving(&b, &mut *rng)?;

            // Phase 2: Aggregate
            let (groups, k) = renumber(&modules);
            b = aggregate_matrix(&b, &groups, k);
            let q = b.diag().sum();

            debug!(level = hierarchy.depth() + 1, communities = k, q, "level complete");
            hierarchy.push(&groups, q);
        }

        Ok(hierarchy.finish())
    }
}

impl Default for Louvain {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for Louvain {
    fn detect<N>(&self, graph: &UnGraph<N, f64>) -> Result<Vec<usize>> {
        let w = adjacency_from_graph(graph);
        Ok(self.optimize(w.view())?.zero_based())
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use petgraph::graph::UnGraph;

    #[test]
    fn test_louvain_triangle() {
        // Simple triangle - should be one community
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());

        let _ = graph.add_edge(n0, n1, 1.0);
        let _ = graph.add_edge(n1, n2, 1.0);
        let _ = graph.add_edge(n0, n2, 1.0);

        let louvain = Louvain::new().with_seed(0);
        let communities = louvain.detect(&graph).unwrap();

        assert_eq!(communities.len(), 3);
        // Triangle is well-connected, should be one community
        assert_eq!(communities[0], communities[1]);
        assert_eq!(communities[1], communities[2]);
    }

    #[test]
    fn test_louvain_two_cliques() {
        // Two triangles connected by a single edge
        let mut graph = UnGraph::<(), f64>::new_undirected();

        // First clique
        let a0 = graph.add_node(());
        let a1 = graph.add_node(());
        let a2 = graph.add_node(());
        let _ = graph.add_edge(a0, a1, 1.0);
        let _ = graph.add_edge(a1, a2, 1.0);
        let _ = graph.add_edge(a0, a2, 1.0);

        // Second clique
        let b0 = graph.add_node(());
        let b1 = graph.add_node(());
        let b2 = graph.add_node(());
        let _ = graph.add_edge(b0, b1, 1.0);
        let _ = graph.add_edge(b1, b2, 1.0);
        let _ = graph.add_edge(b0, b2, 1.0);

        // Bridge
        let _ = graph.add_edge(a2, b0, 1.0);

        let louvain = Louvain::new().with_seed(4);
        let communities = louvain.detect(&graph).unwrap();

        assert_eq!(communities.len(), 6);

        // First clique should be in same community
        assert_eq!(communities[0], communities[1]);
        assert_eq!(communities[1], communities[2]);

        // Second clique should be in same community
        assert_eq!(communities[3], communities[4]);
        assert_eq!(communities[4], communities[5]);

        // Two cliques should be in different communities
        assert_ne!(communities[0], communities[3]);
    }

    #[test]
    fn test_louvain_empty_graph() {
        let graph = UnGraph::<(), f64>::new_undirected();
        let louvain = Louvain::new();
        let result = louvain.detect(&graph);
        assert_eq!(result, Err(Error::EmptyInput));
    }

    #[test]
    fn test_louvain_single_node() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let _ = graph.add_node(());

        let louvain = Louvain::new();
        let communities = louvain.detect(&graph).unwrap();

        assert_eq!(communities.len(), 1);
        assert_eq!(communities[0], 0);
    }

    #[test]
    fn test_louvain_disconnected() {
        // Two isolated nodes
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let _ = graph.add_node(());
        let _ = graph.add_node(());

        let louvain = Louvain::new();
        let communities = louvain.detect(&graph).unwrap();

        assert_eq!(communities.len(), 2);
        // Disconnected nodes should be in separate communities
        assert_ne!(communities[0], communities[1]);
    }

    #[test]
    fn test_louvain_rejects_negative_weights() {
        let w = array![[0.0, -1.0], [-1.0, 0.0]];
        let err = Louvain::new().optimize(w.view()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "w", .. }));
    }

    #[test]
    fn test_louvain_modularity_is_trace() {
        // Two triangles joined by a bridge: Q = 2 * (6/14 - (7/14)^2) = 5/14
        let mut w = Array2::zeros((6, 6));
        for (i, j) in [(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5), (2, 3)] {
            w[[i, j]] = 1.0;
            w[[j, i]] = 1.0;
        }
        let p = Louvain::new().with_seed(8).optimize(w.view()).unwrap();
        assert_eq!(p.community_count(), 2);
        assert!((p.modularity() - 5.0 / 14.0).abs() < 1e-12);
    }
}
