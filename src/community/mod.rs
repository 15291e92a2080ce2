//! Community detection on signed, weighted graphs.
//!
//! Given a symmetric weight matrix whose entries may be positive or negative,
//! find groups of nodes that are tightly bound by positive weight and kept
//! apart by negative weight.
//!
//! ## The Modularity Objective
//!
//! Ordinary modularity compares the weight inside communities with the weight
//! expected in a random graph with the same degree sequence:
//!
//! ```text
//! Q = (1/s) × Σ[W_ij - γ(k_i × k_j)/s] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - s = total weight (sum of all matrix entries)
//! - W_ij = edge weight between i and j
//! - k_i = weighted degree of node i
//! - γ = resolution parameter
//! - δ(c_i, c_j) = 1 if i and j are in same community
//!
//! Signed modularity evaluates this separately for the positive part W⁺ and
//! the negative part W⁻ of the matrix and subtracts the latter. The
//! [`ModularityVariant`] decides the relative weight of the two terms.
//!
//! ## The Resolution Parameter γ
//!
//! - **γ = 1**: Standard modularity (default)
//! - **γ > 1**: Smaller communities (higher penalty for merging)
//! - **γ < 1**: Larger communities (lower penalty for merging)
//!
//! ## Algorithms
//!
//! - [`SignedLouvain`]: multi-level greedy optimization of signed modularity.
//! - [`Louvain`]: the same procedure for nonnegative matrices, formulated on
//!   the modularity matrix. Useful as a cross-check.
//!
//! Both return a [`Partition`] with 1-based contiguous labels and the full
//! level hierarchy.
//!
//! ## Usage
//!
//! ```rust
//! use ndarray::array;
//! use signmod::community::{ModularityVariant, SignedLouvain};
//!
//! let w = array![
//!     [0.0, 0.9, 0.8, -0.4],
//!     [0.9, 0.0, 0.7, -0.2],
//!     [0.8, 0.7, 0.0, -0.3],
//!     [-0.4, -0.2, -0.3, 0.0],
//! ];
//!
//! let partition = SignedLouvain::new()
//!     .with_variant(ModularityVariant::Standard)
//!     .with_seed(1)
//!     .optimize(w.view())
//!     .unwrap();
//! // partition.labels()[i] = community of node i, starting at 1
//! assert_eq!(partition.labels().len(), 4);
//! ```
//!
//! ## References
//!
//! - Blondel et al. (2008). "Fast unfolding of communities in large networks."
//! - Rubinov & Sporns (2011). "Weight-conserving characterization of complex
//!   functional brain networks."
//! - Newman & Girvan (2004). "Finding and evaluating community structure in networks."

mod louvain;
mod modularity;
mod partition;
mod signed;
mod state;
mod traits;
mod variant;

pub use louvain::Louvain;
pub use modularity::signed_modularity;
pub use partition::{renumber, Level, Partition};
pub use signed::{optimize, SignedLouvain};
pub use state::SignedWeights;
pub use traits::{adjacency_from_graph, CommunityDetection};
pub use variant::{ModularityVariant, Scaling};
