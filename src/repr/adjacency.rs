/*!
# Adjacency List

[`AdjacencyMap`] maps every vertex to the ordered list of its outgoing edges.

Vertices are assigned dense indices in creation order: a hash index resolves a vertex to its
slot, and the edge lists live in a `Vec` indexed by that slot. This keeps vertex enumeration and
edge enumeration deterministic, so traversals are reproducible given the same sequence of
insertions.
*/

use std::fmt::{self, Debug, Display};

use fxhash::FxHashMap;
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// An adjacency-list graph over arbitrary payloads.
///
/// - Every created vertex owns an edge list, possibly empty.
/// - Edges are kept in insertion order; parallel edges are allowed.
/// - The graph only grows: there are no removal operations.
///
/// # Examples
/// ```
/// use lgraphs::prelude::*;
///
/// let mut graph = AdjacencyMap::new();
/// let singapore = graph.create_vertex("Singapore");
/// let tokyo = graph.create_vertex("Tokyo");
///
/// graph.add_edge(EdgeKind::Undirected, &singapore, &tokyo, Some(500.0)).unwrap();
///
/// assert_eq!(graph.weight_of(&tokyo, &singapore), Ok(Some(500.0)));
/// assert_eq!(graph.number_of_edges(), 2);
/// ```
#[derive(Clone)]
pub struct AdjacencyMap<P>
where
    P: Payload,
{
    index: FxHashMap<Vertex<P>, usize>,
    vertices: Vec<Vertex<P>>,
    out_edges: Vec<Vec<Edge<P>>>,
    num_edges: NumEdges,
}

impl<P: Payload> AdjacencyMap<P> {
    /// Returns the slot of `u` or `Err(VertexNotFound)`
    fn slot_of(&self, u: &Vertex<P>) -> Result<usize> {
        self.index
            .get(u)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(u))
    }
}

impl<P: Payload> Default for AdjacencyMap<P> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            vertices: Vec::new(),
            out_edges: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<P: Payload> GraphType for AdjacencyMap<P> {
    type Payload = P;
}

impl<P: Payload> GraphNew for AdjacencyMap<P> {
    fn new() -> Self {
        Self::default()
    }
}

impl<P: Payload> GraphVertexOrder for AdjacencyMap<P> {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex<P>> + '_ {
        self.vertices.iter()
    }

    fn has_vertex(&self, u: &Vertex<P>) -> bool {
        self.index.contains_key(u)
    }
}

impl<P: Payload> GraphEdgeOrder for AdjacencyMap<P> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<P: Payload> AdjacencyList for AdjacencyMap<P> {
    type EdgeIter<'a>
        = std::iter::Cloned<std::slice::Iter<'a, Edge<P>>>
    where
        Self: 'a;

    fn edges_of(&self, u: &Vertex<P>) -> Result<Self::EdgeIter<'_>> {
        Ok(self.edges_slice_of(u)?.iter().cloned())
    }

    // Redefine to avoid cloning edges during the scan
    fn edge_between(&self, u: &Vertex<P>, v: &Vertex<P>) -> Result<Option<Edge<P>>> {
        Ok(self
            .edges_slice_of(u)?
            .iter()
            .find(|e| &e.destination == v)
            .cloned())
    }

    fn degree_of(&self, u: &Vertex<P>) -> Result<NumEdges> {
        Ok(self.edges_slice_of(u)?.len() as NumEdges)
    }
}

impl<P: Payload> EdgesSlice for AdjacencyMap<P> {
    fn edges_slice_of(&self, u: &Vertex<P>) -> Result<&[Edge<P>]> {
        Ok(&self.out_edges[self.slot_of(u)?])
    }
}

impl<P: Payload> GraphVertexEditing for AdjacencyMap<P> {
    fn create_vertex(&mut self, payload: P) -> Vertex<P> {
        let vertex = Vertex::new(payload);

        if !self.index.contains_key(&vertex) {
            trace!(vertex = ?vertex, slot = self.vertices.len(), "created vertex");
            self.index.insert(vertex.clone(), self.vertices.len());
            self.vertices.push(vertex.clone());
            self.out_edges.push(Vec::new());
        }

        vertex
    }
}

impl<P: Payload> GraphEdgeEditing for AdjacencyMap<P> {
    fn try_add_arc(&mut self, edge: Edge<P>) -> bool {
        if !self.index.contains_key(&edge.destination) {
            return false;
        }

        match self.index.get(&edge.source) {
            Some(&slot) => {
                self.out_edges[slot].push(edge);
                self.num_edges += 1;
                true
            }
            None => false,
        }
    }
}

impl<P> Display for AdjacencyMap<P>
where
    P: Payload + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}

impl<P: Payload> Debug for AdjacencyMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().zip(self.out_edges.iter()))
            .finish()
    }
}

test_graph_ops!(test_adjacency_map, AdjacencyMap, true);
