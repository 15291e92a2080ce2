//! Per-level working state for the signed local-moving phase.

use super::variant::Scaling;
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Positive and negative parts of a signed weight matrix.
///
/// Both parts are nonnegative: `positive[i, j] = max(w, 0)` and
/// `negative[i, j] = max(-w, 0)`.
#[derive(Debug, Clone)]
pub struct SignedWeights {
    pub(crate) positive: Array2<f64>,
    pub(crate) negative: Array2<f64>,
}

impl SignedWeights {
    /// Split a signed matrix into its positive and negative parts.
    pub fn split(w: ArrayView2<'_, f64>) -> Self {
        Self {
            positive: w.mapv(|x| if x > 0.0 { x } else { 0.0 }),
            negative: w.mapv(|x| if x < 0.0 { -x } else { 0.0 }),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.positive.nrows()
    }

    /// True if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positive part.
    pub fn positive(&self) -> &Array2<f64> {
        &self.positive
    }

    /// Negative part (absolute values).
    pub fn negative(&self) -> &Array2<f64> {
        &self.negative
    }

    /// Total positive weight and total negative weight.
    pub fn totals(&self) -> (f64, f64) {
        (self.positive.sum(), self.negative.sum())
    }

    /// Collapse nodes into super-nodes according to 0-based `groups`.
    ///
    /// Entry `(a, b)` of each new matrix is the summed weight between every
    /// node of group `a` and every node of group `b`; the diagonal holds
    /// internal weight, self-loops included.
    pub fn aggregate(&self, groups: &[usize], k: usize) -> Self {
        Self {
            positive: aggregate_matrix(&self.positive, groups, k),
            negative: aggregate_matrix(&self.negative, groups, k),
        }
    }
}

pub(crate) fn aggregate_matrix(w: &Array2<f64>, groups: &[usize], k: usize) -> Array2<f64> {
    let mut out = Array2::zeros((k, k));
    for ((i, j), &x) in w.indexed_iter() {
        if x != 0.0 {
            out[[groups[i], groups[j]]] += x;
        }
    }
    out
}

/// Sum of all entries of `w · w`, computed as column totals dotted with row
/// totals.
pub(crate) fn sum_of_square(w: &Array2<f64>) -> f64 {
    w.sum_axis(Axis(0)).dot(&w.sum_axis(Axis(1)))
}

/// Mutable accumulators for one level of local moving.
///
/// `knm*[[i, m]]` is the weight from node `i` into module `m`; `km*[m]` is the
/// total degree of module `m`. Modules are indexed `0..n` (initially every
/// node is its own module) and may become empty.
#[derive(Debug)]
pub(crate) struct MoveState {
    pub(crate) modules: Vec<usize>,
    pub(crate) kn0: Array1<f64>,
    pub(crate) kn1: Array1<f64>,
    km0: Array1<f64>,
    km1: Array1<f64>,
    knm0: Array2<f64>,
    knm1: Array2<f64>,
}

impl MoveState {
    /// Singleton modules for every node of `weights`.
    pub(crate) fn singletons(weights: &SignedWeights) -> Self {
        let n = weights.len();
        let kn0 = weights.positive.sum_axis(Axis(1));
        let kn1 = weights.negative.sum_axis(Axis(1));
        Self {
            modules: (0..n).collect(),
            km0: kn0.clone(),
            km1: kn1.clone(),
            kn0,
            kn1,
            knm0: weights.positive.clone(),
            knm1: weights.negative.clone(),
        }
    }

    /// Modularity change of moving `u` from its current module into every
    /// module, written into `delta`. The entry for the current module is 0.
    pub(crate) fn gains(
        &self,
        weights: &SignedWeights,
        u: usize,
        gamma: f64,
        scaling: &Scaling,
        delta: &mut [f64],
    ) {
        let Scaling { d0, d1, s0, s1 } = *scaling;
        let ma = self.modules[u];
        let (k0, k1) = (self.kn0[u], self.kn1[u]);
        let (self0, self1) = (weights.positive[[u, u]], weights.negative[[u, u]]);
        let row0 = self.knm0.row(u);
        let row1 = self.knm1.row(u);
        let (out0, out1) = (row0[ma], row1[ma]);
        let (rest0, rest1) = (self.km0[ma], self.km1[ma]);

        for (mb, slot) in delta.iter_mut().enumerate() {
            let dq0 = (row0[mb] + self0 - out0) - gamma * k0 * (self.km0[mb] + k0 - rest0) / s0;
            let dq1 = (row1[mb] + self1 - out1) - gamma * k1 * (self.km1[mb] + k1 - rest1) / s1;
            *slot = d0 * dq0 - d1 * dq1;
        }
        delta[ma] = 0.0;
    }

    /// Move `u` into module `mb`, updating the accumulators in place.
    pub(crate) fn move_node(&mut self, weights: &SignedWeights, u: usize, mb: usize) {
        let ma = self.modules[u];
        if ma == mb {
            return;
        }

        let col0 = weights.positive.column(u);
        let col1 = weights.negative.column(u);
        for (v, (&w0, &w1)) in col0.iter().zip(col1.iter()).enumerate() {
            self.knm0[[v, mb]] += w0;
            self.knm0[[v, ma]] -= w0;
            self.knm1[[v, mb]] += w1;
            self.knm1[[v, ma]] -= w1;
        }

        self.km0[mb] += self.kn0[u];
        self.km0[ma] -= self.kn0[u];
        self.km1[mb] += self.kn1[u];
        self.km1[ma] -= self.kn1[u];
        self.modules[u] = mb;
    }
}
