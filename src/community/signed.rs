//! Louvain optimization of signed modularity.
//!
//! Networks built from correlations (functional connectivity, co-expression,
//! asset returns) carry negative weights that ordinary modularity cannot
//! score. Signed modularity splits the matrix into positive and negative
//! parts, builds a null model for each, and rewards communities that are
//! dense in positive weight and sparse in negative weight:
//!
//! ```text
//! Q = d0 × Σ[W⁺_ij - γ k⁺_i k⁺_j / s0] δ(c_i, c_j)
//!   - d1 × Σ[W⁻_ij - γ k⁻_i k⁻_j / s1] δ(c_i, c_j)
//! ```
//!
//! The constants d0 and d1 depend on the [`ModularityVariant`].
//!
//! ## The Algorithm
//!
//! 1. **Local moving**: every node starts alone. Nodes are visited in random
//!    order and each one joins the module with the largest positive gain.
//!    Passes repeat until a full pass moves nothing.
//! 2. **Aggregation**: modules become nodes of a smaller graph whose weights
//!    are the summed positive and negative weights between (and within)
//!    modules.
//! 3. **Iterate** while the level modularity grows by more than 1e-10.
//!
//! Both loops are capped. Exceeding the pass cap almost always means the
//! input was not symmetric.
//!
//! ## References
//!
//! Rubinov & Sporns (2011). "Weight-conserving characterization of complex
//! functional brain networks." NeuroImage 56(4), 2068-2079.

use super::modularity::level_modularity;
use super::partition::{renumber, Hierarchy, Partition};
use super::state::{MoveState, SignedWeights};
use super::traits::{adjacency_from_graph, check_symmetric, validate_matrix, CommunityDetection};
use super::variant::{ModularityVariant, Scaling};
use crate::error::{Error, Result};
use ndarray::ArrayView2;
use petgraph::graph::UnGraph;
use rand::prelude::*;
use tracing::{debug, trace, warn};

/// Minimum gain for a node move.
const MOVE_TOLERANCE: f64 = 1e-10;

/// Minimum modularity improvement between levels.
const LEVEL_TOLERANCE: f64 = 1e-10;

/// Signed-modularity Louvain optimizer.
#[derive(Debug, Clone)]
pub struct SignedLouvain {
    /// Resolution parameter (gamma).
    resolution: f64,
    /// How positive and negative terms are weighted.
    variant: ModularityVariant,
    /// Seed for the node visiting order.
    seed: Option<u64>,
    /// Maximum local-moving passes per level.
    max_passes: usize,
    /// Maximum levels of aggregation.
    max_levels: usize,
    /// Reject matrices whose transpose differs by more than this.
    symmetry_tolerance: Option<f64>,
}

impl SignedLouvain {
    /// Create an optimizer with default settings: resolution 1, standard
    /// variant, unseeded.
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            variant: ModularityVariant::Standard,
            seed: None,
            max_passes: 1000,
            max_levels: 300,
            symmetry_tolerance: None,
        }
    }

    /// Set resolution parameter.
    ///
    /// Higher values produce smaller communities.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the modularity variant.
    pub fn with_variant(mut self, variant: ModularityVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set maximum local-moving passes per level.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Set maximum aggregation levels.
    pub fn with_max_levels(mut self, levels: usize) -> Self {
        self.max_levels = levels;
        self
    }

    /// Check symmetry up front instead of failing after the pass cap.
    pub fn with_symmetry_tolerance(mut self, tol: f64) -> Self {
        self.symmetry_tolerance = Some(tol);
        self
    }

    /// The configured variant.
    pub fn variant(&self) -> ModularityVariant {
        self.variant
    }

    /// Partition the nodes of a signed, symmetric weight matrix.
    pub fn optimize(&self, w: ArrayView2<'_, f64>) -> Result<Partition> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(Error::InvalidParameter {
                name: "resolution",
                message: "must be positive and finite",
            });
        }
        let n = validate_matrix(w)?;
        if let Some(tol) = self.symmetry_tolerance {
            check_symmetric(w, tol)?;
        }

        let mut weights = SignedWeights::split(w);
        let (s0, s1) = weights.totals();
        let scaling = self.variant.scaling(s0, s1);
        debug!(
            n,
            s0,
            s1,
            variant = %self.variant,
            resolution = self.resolution,
            "starting signed louvain"
        );

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut hierarchy = Hierarchy::new(n);
        while hierarchy.should_continue(LEVEL_TOLERANCE) {
            if hierarchy.depth() >= self.max_levels {
                warn!(levels = self.max_levels, "hierarchy did not terminate");
                return Err(Error::HierarchyOverflow {
                    levels: self.max_levels,
                });
            }

            let modules = self.local_moving(&weights, &scaling, &mut *rng)?;
            let (groups, k) = renumber(&modules);
            weights = weights.aggregate(&groups, k);
            let q = level_modularity(&weights, &scaling);

            debug!(level = hierarchy.depth() + 1, communities = k, q, "level complete");
            hierarchy.push(&groups, q);
        }

        Ok(hierarchy.finish())
    }

    /// Phase 1: greedy node moves on the current graph.
    /// Returns the module of every node (not renumbered).
    fn local_moving(
        &self,
        weights: &SignedWeights,
        scaling: &Scaling,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<usize>> {
        let n = weights.len();
        let mut state = MoveState::singletons(weights);
        let mut order: Vec<usize> = (0..n).collect();
        let mut delta = vec![0.0; n];

        let mut pass = 0;
        loop {
            pass += 1;
            if pass > self.max_passes {
                warn!(passes = self.max_passes, "local moving did not converge");
                return Err(Error::LocalMovingDiverged {
                    passes: self.max_passes,
                });
            }

            order.shuffle(&mut *rng);
            let mut moves = 0usize;
            for &u in &order {
                state.gains(weights, u, self.resolution, scaling, &mut delta);
                let (best, gain) = first_max(&delta);
                if gain > MOVE_TOLERANCE {
                    state.move_node(weights, u, best);
                    moves += 1;
                }
            }

            trace!(pass, moves, "local moving pass");
            if moves == 0 {
                break;
            }
        }

        Ok(state.modules)
    }
}

/// Index and value of the largest entry; ties go to the lowest index.
pub(crate) fn first_max(values: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, &v) in values.iter().enumerate() {
        if v > best.1 {
            best = (i, v);
        }
    }
    best
}

impl Default for SignedLouvain {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for SignedLouvain {
    fn detect<N>(&self, graph: &UnGraph<N, f64>) -> Result<Vec<usize>> {
        let w = adjacency_from_graph(graph);
        Ok(self.optimize(w.view())?.zero_based())
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}

/// Run signed Louvain with a variant given by name.
///
/// `qtype` is parsed before any matrix work, so an unknown name fails without
/// side effects. Returns 1-based labels and the final modularity.
///
/// ```rust
/// use ndarray::array;
///
/// let w = array![
///     [0.0, 1.0, 1.0, -1.0],
///     [1.0, 0.0, 1.0, -1.0],
///     [1.0, 1.0, 0.0, -1.0],
///     [-1.0, -1.0, -1.0, 0.0],
/// ];
/// let (labels, q) = signmod::optimize(w.view(), 1.0, "standard", Some(7)).unwrap();
/// assert_eq!(labels.len(), 4);
/// assert!(q > 0.0);
/// ```
pub fn optimize(
    w: ArrayView2<'_, f64>,
    gamma: f64,
    qtype: &str,
    seed: Option<u64>,
) -> Result<(Vec<usize>, f64)> {
    let variant: ModularityVariant = qtype.parse()?;
    let mut louvain = SignedLouvain::new()
        .with_resolution(gamma)
        .with_variant(variant);
    if let Some(s) = seed {
        louvain = louvain.with_seed(s);
    }
    Ok(louvain.optimize(w)?.into_parts())
}
