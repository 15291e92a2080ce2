//! Community detection traits and shared input handling.

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Trait for community detection algorithms.
pub trait CommunityDetection {
    /// Detect communities in a weighted graph.
    ///
    /// Returns a mapping from node index to community ID (0-based).
    fn detect<N>(&self, graph: &UnGraph<N, f64>) -> Result<Vec<usize>>;

    /// Get the resolution parameter (if applicable).
    fn resolution(&self) -> f64 {
        1.0
    }
}

/// Dense symmetric weight matrix of an undirected petgraph graph.
///
/// Parallel edges are summed; a self-loop of weight `w` lands on the diagonal
/// once.
pub fn adjacency_from_graph<N>(graph: &UnGraph<N, f64>) -> Array2<f64> {
    let n = graph.node_count();
    let mut w = Array2::zeros((n, n));
    for edge in graph.edge_references() {
        let i = edge.source().index();
        let j = edge.target().index();
        w[[i, j]] += *edge.weight();
        if i != j {
            w[[j, i]] += *edge.weight();
        }
    }
    w
}

/// Check that `w` is a non-empty square matrix of finite values.
/// Returns its size.
pub(crate) fn validate_matrix(w: ArrayView2<'_, f64>) -> Result<usize> {
    let (rows, cols) = w.dim();
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyInput);
    }
    if rows != cols {
        return Err(Error::ShapeMismatch {
            expected: "square matrix".to_string(),
            actual: format!("{rows}x{cols}"),
        });
    }
    if w.iter().any(|x| !x.is_finite()) {
        return Err(Error::InvalidParameter {
            name: "w",
            message: "weights must be finite",
        });
    }
    Ok(rows)
}

/// First `(row, col)` with `row < col` where `w` and its transpose differ by
/// more than `tol`.
pub(crate) fn check_symmetric(w: ArrayView2<'_, f64>, tol: f64) -> Result<()> {
    let n = w.nrows();
    for row in 0..n {
        for col in row + 1..n {
            if (w[[row, col]] - w[[col, row]]).abs() > tol {
                return Err(Error::Asymmetric { row, col });
            }
        }
    }
    Ok(())
}
