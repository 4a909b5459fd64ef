/*!
# Graph Generators

Builders for random graphs and helpers that add deterministic motifs to existing graphs.

The typical usage workflow for random generators is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the builder methods (e.g., `.vertices(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Random generators label vertices with the payloads `0..n` (as `u32`). The [`RandomGraph`] trait
wraps this into constructors for whole graph instances, creating all `n` vertices first so that
isolated vertices are part of the graph.
*/

use rand::Rng;

use crate::{ops::*, *};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of vertices
pub trait NumVerticesGen {
    /// Sets the number of vertices in the graph generator.
    fn vertices(self, n: NumVertices) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge<u32>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph with vertices `0..n` where every edge has the given kind.
    /// Self-loops are allowed.
    fn gnp<R>(rng: &mut R, n: NumVertices, p: f64, kind: EdgeKind) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumVertices, p: f64, kind: EdgeKind) -> Self
    where
        R: Rng;
}

/// Creates a graph with vertices `0..n` and inserts all `edges`
fn build_graph<G, I>(n: NumVertices, edges: I) -> G
where
    G: GraphNew + GraphEdgeEditing + GraphType<Payload = u32>,
    I: IntoIterator<Item = Edge<u32>>,
{
    let mut graph = G::new();
    graph.create_vertices(0..n);

    for edge in edges {
        let inserted = graph.try_add_edge(edge);
        debug_assert!(inserted);
    }
    graph
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphEdgeEditing + GraphType<Payload = u32>,
{
    fn gnp<R>(rng: &mut R, n: NumVertices, p: f64, kind: EdgeKind) -> Self
    where
        R: Rng,
    {
        build_graph(
            n,
            Gnp::new()
                .vertices(n)
                .prob(p)
                .kind(kind)
                .loops(true)
                .stream(rng),
        )
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumVertices, p: f64, kind: EdgeKind) -> Self
    where
        R: Rng,
    {
        build_graph(n, Gnp::new().vertices(n).prob(p).kind(kind).stream(rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::{AdjMatrix, AdjacencyMap};

    #[test]
    fn random_graph_keeps_isolated_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph: AdjacencyMap<u32> = AdjacencyMap::gnp_no_loops(rng, 15, 0.0, EdgeKind::Directed);

        assert_eq!(graph.number_of_vertices(), 15);
        assert!(graph.has_no_edges());
    }

    #[test]
    fn undirected_random_graph_is_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let graph: AdjMatrix<u32> = AdjMatrix::gnp_no_loops(rng, 25, 0.2, EdgeKind::Undirected);

        assert!(!graph.has_no_edges());
        assert_eq!(graph.number_of_edges() % 2, 0);
        for edge in graph.edges() {
            assert!(graph.has_edge(&edge.destination, &edge.source));
            assert!(!edge.is_loop());
        }
    }

    #[test]
    fn complete_directed_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph: AdjacencyMap<u32> = AdjacencyMap::gnp(rng, 6, 1.0, EdgeKind::Directed);
        assert_eq!(graph.number_of_edges(), 36);
    }
}
