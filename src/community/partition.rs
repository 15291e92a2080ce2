//! Partitions and the multi-level hierarchy that produces them.
//!
//! Labels handed to callers are 1-based and contiguous: a partition with `k`
//! communities uses exactly the labels `1..=k`.

/// One level of the hierarchy, expressed over the original nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Community label of every original node at this level (1-based).
    pub labels: Vec<usize>,
    /// Modularity of the aggregated graph at this level.
    pub modularity: f64,
}

/// Result of a modularity optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    labels: Vec<usize>,
    modularity: f64,
    levels: Vec<Level>,
}

impl Partition {
    /// Community label of every node (1-based, contiguous).
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Modularity of the final level.
    pub fn modularity(&self) -> f64 {
        self.modularity
    }

    /// Every level, finest first. The last level is the returned partition.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Modularity after each level.
    pub fn trace(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.modularity).collect()
    }

    /// Number of communities.
    pub fn community_count(&self) -> usize {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Nodes carrying `label`, in ascending order.
    pub fn members(&self, label: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// Nodes grouped by community; entry `c` holds the members of label `c + 1`.
    pub fn communities(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.community_count()];
        for (node, &label) in self.labels.iter().enumerate() {
            out[label - 1].push(node);
        }
        out
    }

    /// Labels shifted to start at 0.
    pub fn zero_based(&self) -> Vec<usize> {
        self.labels.iter().map(|&l| l - 1).collect()
    }

    /// Consume into `(labels, modularity)`.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.labels, self.modularity)
    }
}

/// Renumber arbitrary labels to `0..k`, ordered by ascending original label.
///
/// Returns the new labels and `k`.
pub fn renumber(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut unique = labels.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let renumbered = labels
        .iter()
        .map(|l| unique.binary_search(l).unwrap_or_default())
        .collect();
    (renumbered, unique.len())
}

/// Run-scoped accumulation of levels.
///
/// `current[i]` is the 0-based node of the current (aggregated) graph that
/// original node `i` has been collapsed into.
#[derive(Debug)]
pub(crate) struct Hierarchy {
    current: Vec<usize>,
    levels: Vec<Level>,
}

impl Hierarchy {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            levels: Vec::new(),
        }
    }

    /// Levels completed so far.
    pub(crate) fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Whether another level should be attempted.
    ///
    /// The first level always runs. Afterwards a level runs only if the last
    /// one improved on its predecessor by more than `tol`; the level before
    /// the first counts as modularity 0.
    pub(crate) fn should_continue(&self, tol: f64) -> bool {
        match self.levels.as_slice() {
            [] => true,
            [only] => only.modularity > tol,
            [.., prev, last] => last.modularity - prev.modularity > tol,
        }
    }

    /// Record a level: `groups[v]` is the 0-based community of current node
    /// `v`, `q` the modularity of the graph aggregated by `groups`.
    pub(crate) fn push(&mut self, groups: &[usize], q: f64) {
        for node in self.current.iter_mut() {
            *node = groups[*node];
        }
        self.levels.push(Level {
            labels: self.current.iter().map(|&c| c + 1).collect(),
            modularity: q,
        });
    }

    pub(crate) fn finish(self) -> Partition {
        let (labels, _) = renumber(&self.current);
        let modularity = self.levels.last().map_or(0.0, |l| l.modularity);
        Partition {
            labels: labels.into_iter().map(|c| c + 1).collect(),
            modularity,
            levels: self.levels,
        }
    }
}
