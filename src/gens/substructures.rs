/*!
# Substructure Generators

This module provides utility methods to add **substructures** to an already existing graph:

- **Paths**
- **Cycles**
- **Stars**

All vertices have to be created beforehand; a motif touching an unknown vertex reports
[`GraphError::VertexNotFound`] and stops at that point.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = AdjacencyMap::new();
let vertices = g.create_vertices(0..5u32);

g.connect_path(EdgeKind::Directed, vertices[0..3].iter().cloned(), None).unwrap();
g.connect_cycle(EdgeKind::Directed, vertices[2..5].iter().cloned(), Some(1.0)).unwrap();

assert_eq!(g.number_of_edges(), 5);
assert!(g.has_edge(&vertices[4], &vertices[2]));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, stars)
/// inside an already existing graph.
///
/// Every connection is inserted with the given kind and weight, so an undirected motif stores
/// both directions of each connection.
pub trait GeneratorSubstructures: GraphType {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjacencyMap::new();
    /// let [a, b, c] = [g.create_vertex('a'), g.create_vertex('b'), g.create_vertex('c')];
    /// g.connect_path(EdgeKind::Undirected, [a.clone(), b.clone(), c.clone()], None).unwrap();
    ///
    /// assert!(g.has_edge(&b, &a));
    /// assert!(g.has_edge(&b, &c));
    /// assert!(!g.has_edge(&a, &c));
    /// ```
    fn connect_path<I>(
        &mut self,
        kind: EdgeKind,
        vertices_on_path: I,
        weight: Option<Weight>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Vertex<Self::Payload>>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected and
    /// the last vertex is connected back to the first. A single vertex receives a self-loop.
    fn connect_cycle<I>(
        &mut self,
        kind: EdgeKind,
        vertices_in_cycle: I,
        weight: Option<Weight>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Vertex<Self::Payload>>;

    /// Connects the first vertex (the center) to every following vertex
    fn connect_star<I>(&mut self, kind: EdgeKind, vertices: I, weight: Option<Weight>) -> Result<()>
    where
        I: IntoIterator<Item = Vertex<Self::Payload>>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<I>(
        &mut self,
        kind: EdgeKind,
        vertices_on_path: I,
        weight: Option<Weight>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Vertex<Self::Payload>>,
    {
        for (u, v) in vertices_on_path.into_iter().tuple_windows() {
            self.add_edge(kind, &u, &v, weight)?;
        }
        Ok(())
    }

    fn connect_cycle<I>(
        &mut self,
        kind: EdgeKind,
        vertices_in_cycle: I,
        weight: Option<Weight>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Vertex<Self::Payload>>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.add_edge(kind, &prev, &cur, weight)?;
                prev = cur;
            }

            self.add_edge(kind, &prev, &first, weight)?;
        }
        Ok(())
    }

    fn connect_star<I>(&mut self, kind: EdgeKind, vertices: I, weight: Option<Weight>) -> Result<()>
    where
        I: IntoIterator<Item = Vertex<Self::Payload>>,
    {
        let mut iter = vertices.into_iter();

        if let Some(center) = iter.next() {
            for leaf in iter {
                self.add_edge(kind, &center, &leaf, weight)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::repr::{AdjMatrix, AdjacencyMap};

    use super::*;

    fn vertices(n: u32) -> (AdjMatrix<u32>, Vec<Vertex<u32>>) {
        let mut g = AdjMatrix::new();
        let vertices = g.create_vertices(0..n);
        (g, vertices)
    }

    fn arcs<G: AdjacencyList<Payload = u32>>(g: &G) -> Vec<(u32, u32)> {
        g.edges()
            .map(|e| (*e.source.payload(), *e.destination.payload()))
            .collect_vec()
    }

    #[test]
    fn test_connect_path() {
        {
            let (mut g, _) = vertices(6);
            g.connect_path(EdgeKind::Directed, [], None).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let (mut g, v) = vertices(6);
            g.connect_path(EdgeKind::Directed, [v[1].clone()], None).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let (mut g, v) = vertices(6);
            g.connect_path(EdgeKind::Directed, [v[2].clone(), v[1].clone()], Some(2.0))
                .unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert_eq!(g.weight_of(&v[2], &v[1]), Ok(Some(2.0)));
        }

        {
            let (mut g, v) = vertices(6);
            g.connect_path(EdgeKind::Directed, [0usize, 3, 1, 4].map(|i| v[i].clone()), None)
                .unwrap();
            assert_eq!(arcs(&g), vec![(0, 3), (1, 4), (3, 1)]);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let (mut g, _) = vertices(6);
            g.connect_cycle(EdgeKind::Directed, [], None).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let (mut g, v) = vertices(6);
            g.connect_cycle(EdgeKind::Directed, [v[1].clone()], None).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&v[1], &v[1]));
        }

        {
            let (mut g, v) = vertices(6);
            g.connect_cycle(EdgeKind::Directed, [0usize, 3, 1, 4].map(|i| v[i].clone()), None)
                .unwrap();
            assert_eq!(arcs(&g), vec![(0, 3), (1, 4), (3, 1), (4, 0)]);
        }
    }

    #[test]
    fn test_connect_star() {
        let mut g = AdjacencyMap::new();
        let v = g.create_vertices(0..4u32);
        g.connect_star(EdgeKind::Undirected, [2usize, 0, 3].map(|i| v[i].clone()), None)
            .unwrap();

        assert_eq!(arcs(&g), vec![(0, 2), (2, 0), (2, 3), (3, 2)]);
        assert_eq!(g.degree_of(&v[1]), Ok(0));
    }

    #[test]
    fn unknown_vertex_stops_motif() {
        let mut g = AdjacencyMap::new();
        let v = g.create_vertices(0..3u32);
        let ghost = Vertex::new(9);

        let result = g.connect_path(
            EdgeKind::Directed,
            [v[0].clone(), v[1].clone(), ghost.clone(), v[2].clone()],
            None,
        );

        assert_eq!(result, Err(GraphError::vertex_not_found(&ghost)));
        assert_eq!(arcs(&g), vec![(0, 1)]);
    }
}
