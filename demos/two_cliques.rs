use ndarray::Array2;
use signmod::community::{ModularityVariant, SignedLouvain};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=signmod=debug shows one line per hierarchy level.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Two positive cliques that repel each other, plus a loosely attached node.
    let n = 7;
    let mut w = Array2::zeros((n, n));
    for i in 0..6 {
        for j in 0..6 {
            if i != j {
                w[[i, j]] = if i / 3 == j / 3 { 1.0 } else { -0.6 };
            }
        }
    }
    w[[6, 0]] = 0.3;
    w[[0, 6]] = 0.3;
    w[[6, 4]] = -0.2;
    w[[4, 6]] = -0.2;

    for variant in ModularityVariant::ALL {
        let partition = SignedLouvain::new()
            .with_variant(variant)
            .with_seed(7)
            .optimize(w.view())?;

        println!(
            "{:<14} Q = {:>8.4}  levels = {}  communities = {:?}",
            variant.name(),
            partition.modularity(),
            partition.levels().len(),
            partition.communities()
        );
    }

    Ok(())
}
