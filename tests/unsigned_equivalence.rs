//! On matrices without negative entries, signed Louvain must behave exactly
//! like ordinary (unsigned) Louvain.

use ndarray::{array, Array2};
use proptest::prelude::*;
use signmod::community::{Louvain, ModularityVariant, SignedLouvain};

/// Same co-membership, regardless of label names.
fn same_grouping(a: &[usize], b: &[usize]) -> bool {
    a.len() == b.len()
        && (0..a.len()).all(|i| (0..a.len()).all(|j| (a[i] == a[j]) == (b[i] == b[j])))
}

fn bridged_triangles() -> Array2<f64> {
    let mut w = Array2::zeros((6, 6));
    for (i, j) in [(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5), (2, 3)] {
        w[[i, j]] = 1.0;
        w[[j, i]] = 1.0;
    }
    w
}

#[test]
fn bridged_triangles_match() {
    let w = bridged_triangles();
    for seed in 0..8 {
        let signed = SignedLouvain::new().with_seed(seed).optimize(w.view()).unwrap();
        let unsigned = Louvain::new().with_seed(seed).optimize(w.view()).unwrap();

        assert_eq!(signed.labels(), unsigned.labels(), "seed {seed}");
        assert!((signed.modularity() - unsigned.modularity()).abs() < 1e-12);
        assert!((signed.modularity() - 5.0 / 14.0).abs() < 1e-12);
    }
}

#[test]
fn weighted_matrix_matches() {
    let w = array![
        [0.0, 3.1, 2.7, 0.2, 0.0, 0.1, 0.0],
        [3.1, 0.0, 2.2, 0.0, 0.3, 0.0, 0.0],
        [2.7, 2.2, 0.5, 0.1, 0.0, 0.0, 0.4],
        [0.2, 0.0, 0.1, 0.0, 1.9, 2.4, 0.0],
        [0.0, 0.3, 0.0, 1.9, 0.0, 1.3, 0.2],
        [0.1, 0.0, 0.0, 2.4, 1.3, 0.0, 0.1],
        [0.0, 0.0, 0.4, 0.0, 0.2, 0.1, 0.0]
    ];

    // Only the positive part exists, so every variant with a positive term
    // collapses onto unsigned modularity.
    for variant in [
        ModularityVariant::Standard,
        ModularityVariant::PositiveOnly,
        ModularityVariant::Simple,
    ] {
        for seed in [1, 5, 21] {
            let signed = SignedLouvain::new()
                .with_variant(variant)
                .with_seed(seed)
                .optimize(w.view())
                .unwrap();
            let unsigned = Louvain::new().with_seed(seed).optimize(w.view()).unwrap();

            assert_eq!(signed.labels(), unsigned.labels(), "{variant} seed {seed}");
            assert_eq!(signed.levels().len(), unsigned.levels().len());
            assert!((signed.modularity() - unsigned.modularity()).abs() < 1e-12);
        }
    }
}

fn symmetric_nonnegative(n: usize) -> impl Strategy<Value = Array2<f64>> {
    proptest::collection::vec(0.0f64..1.0, n * n).prop_map(move |entries| {
        let mut w = Array2::zeros((n, n));
        for i in 0..n {
            for j in i + 1..n {
                // Sparsify so that communities are not trivial.
                let x = entries[i * n + j];
                let x = if x < 0.5 { 0.0 } else { x };
                w[[i, j]] = x;
                w[[j, i]] = x;
            }
        }
        w
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_positive_matrices_match_unsigned(
        w in (2usize..10).prop_flat_map(symmetric_nonnegative),
        seed in any::<u64>(),
    ) {
        let signed = SignedLouvain::new().with_seed(seed).optimize(w.view()).unwrap();
        let unsigned = Louvain::new().with_seed(seed).optimize(w.view()).unwrap();

        prop_assert!(same_grouping(signed.labels(), unsigned.labels()));
        prop_assert!((signed.modularity() - unsigned.modularity()).abs() < 1e-9);
    }
}
