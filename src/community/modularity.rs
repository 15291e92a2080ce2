//! Scoring partitions with signed modularity.

use super::partition::renumber;
use super::state::{sum_of_square, SignedWeights};
use super::traits::validate_matrix;
use super::variant::{ModularityVariant, Scaling};
use crate::error::{Error, Result};
use ndarray::{Array1, ArrayView2};

/// Modularity of an aggregated level: every node is one community.
///
/// `d0·(tr(W⁺) − Σ(W⁺·W⁺)/s0) − d1·(tr(W⁻) − Σ(W⁻·W⁻)/s1)`
pub(crate) fn level_modularity(weights: &SignedWeights, scaling: &Scaling) -> f64 {
    let q0 = weights.positive.diag().sum() - sum_of_square(&weights.positive) / scaling.s0;
    let q1 = weights.negative.diag().sum() - sum_of_square(&weights.negative) / scaling.s1;
    scaling.d0 * q0 - scaling.d1 * q1
}

/// Signed modularity of an arbitrary labelling of `w`.
///
/// Labels may be any integers; only equality matters. Totals and scaling
/// constants are taken from `w` itself, with the same zero-total policy as
/// the optimizer. With `gamma = 1` this reproduces the modularity reported by
/// [`SignedLouvain`](super::SignedLouvain) for its own labels.
///
/// ```rust
/// use ndarray::array;
/// use signmod::community::{signed_modularity, ModularityVariant};
///
/// let w = array![[0.0, 1.0], [1.0, 0.0]];
/// let q = signed_modularity(w.view(), &[1, 1], 1.0, ModularityVariant::Standard).unwrap();
/// assert!(q.abs() < 1e-12);
/// ```
pub fn signed_modularity(
    w: ArrayView2<'_, f64>,
    labels: &[usize],
    gamma: f64,
    variant: ModularityVariant,
) -> Result<f64> {
    let n = validate_matrix(w)?;
    if labels.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: labels.len(),
        });
    }

    let weights = SignedWeights::split(w);
    let (s0, s1) = weights.totals();
    let scaling = variant.scaling(s0, s1);
    let (groups, k) = renumber(labels);

    let mut inside0 = Array1::<f64>::zeros(k);
    let mut inside1 = Array1::<f64>::zeros(k);
    let mut degree0 = Array1::<f64>::zeros(k);
    let mut degree1 = Array1::<f64>::zeros(k);
    for ((i, j), &x) in w.indexed_iter() {
        let (ci, cj) = (groups[i], groups[j]);
        if x > 0.0 {
            degree0[ci] += x;
            if ci == cj {
                inside0[ci] += x;
            }
        } else if x < 0.0 {
            degree1[ci] -= x;
            if ci == cj {
                inside1[ci] -= x;
            }
        }
    }

    let q0: f64 = inside0.sum() - gamma * degree0.mapv(|d| d * d).sum() / scaling.s0;
    let q1: f64 = inside1.sum() - gamma * degree1.mapv(|d| d * d).sum() / scaling.s1;
    Ok(scaling.d0 * q0 - scaling.d1 * q1)
}
