use std::ops::Range;

use crate::{gens::*, utils::*};

/// `G(n,p)` graphs contain every possible edge between `n` vertices with probability `p`
/// independent from each other.
///
/// Vertices carry the payloads `0..n`. For undirected generators every unordered pair is
/// considered once (as `u -> v` with `u <= v`), for directed ones every ordered pair.
/// Self-loops are only generated if enabled via [`Gnp::loops`].
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
/// let edges = Gnp::new().vertices(10).prob(1.0).kind(EdgeKind::Undirected).generate(rng);
///
/// // all unordered pairs without loops
/// assert_eq!(edges.len(), 45);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gnp {
    n: NumVertices,
    p: Option<f64>,
    kind: EdgeKind,
    loops: bool,
    weights: Option<Range<Weight>>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = Some(prob);
        self
    }

    /// Sets the kind of all generated edges (directed by default)
    pub fn kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Allows or forbids self-loops (forbidden by default)
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Draws a weight uniformly from `range` for every edge; edges are unweighted otherwise
    pub fn weights(mut self, range: Range<Weight>) -> Self {
        assert!(range.start < range.end, "Weight range must not be empty!");
        self.weights = Some(range);
        self
    }
}

impl NumVerticesGen for Gnp {
    /// Updates `n`
    fn vertices(mut self, n: NumVertices) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>> {
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };

        let n = self.n;
        let kind = self.kind;
        let loops = self.loops;
        let weights = self.weights.clone();

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| (u, v)))
            .filter(move |&(u, v)| (loops || u != v) && (!kind.is_undirected() || u <= v))
            .filter_map(move |(u, v)| {
                if !rng.random_bool(p) {
                    return None;
                }

                Some(Edge {
                    source: Vertex::new(u),
                    destination: Vertex::new(v),
                    weight: weights.clone().map(|range| rng.random_range(range)),
                    kind,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert_eq!(Gnp::new().vertices(20).prob(0.0).generate(rng).len(), 0);
        assert_eq!(Gnp::new().vertices(20).prob(1.0).generate(rng).len(), 380);
        assert_eq!(
            Gnp::new().vertices(20).prob(1.0).loops(true).generate(rng).len(),
            400
        );
        assert_eq!(
            Gnp::new()
                .vertices(20)
                .prob(1.0)
                .loops(true)
                .kind(EdgeKind::Undirected)
                .generate(rng)
                .len(),
            210
        );
    }

    #[test]
    fn edges_respect_configuration() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let edges = Gnp::new()
            .vertices(30)
            .prob(0.3)
            .kind(EdgeKind::Undirected)
            .weights(1.0..10.0)
            .generate(rng);

        assert!(!edges.is_empty());
        for edge in &edges {
            assert!(edge.source < edge.destination);
            assert!(*edge.destination.payload() < 30);
            assert_eq!(edge.kind, EdgeKind::Undirected);
            assert!(edge.weight.is_some_and(|w| (1.0..10.0).contains(&w)));
        }
        assert!(edges.iter().all_unique());
    }

    #[test]
    fn average_number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 100;
        let p = 0.1;

        let m = Gnp::new().vertices(n).prob(p).generate(rng).len() as f64;
        let expected = (n * (n - 1)) as f64 * p;
        assert!((m - expected).abs() < 0.1 * expected);
    }

    #[test]
    #[should_panic]
    fn missing_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let _ = Gnp::new().vertices(3).generate(rng);
    }
}
