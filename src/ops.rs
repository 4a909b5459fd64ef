/*!
# Graph Capabilities

The traits in this module form the contract between graph stores and the algorithms in
[`algo`](crate::algo). Every algorithm is written against these traits only, so any store that
can answer "which vertices exist" and "which edges leave this vertex" can be traversed:

- [`GraphVertexOrder`] / [`GraphEdgeOrder`]: sizes and vertex enumeration,
- [`AdjacencyList`]: outgoing edges, neighbors, weights,
- [`GraphVertexEditing`] / [`GraphEdgeEditing`]: growing a graph,
- [`GraphNew`] / [`GraphFromScratch`]: construction.

Querying a vertex that was never created reports [`GraphError::VertexNotFound`]; a vertex
without outgoing edges simply yields nothing.
*/

use std::fmt::{self, Display};

use itertools::Itertools;
use tracing::trace;

use crate::*;

/// Associates a graph with the payload type labelling its vertices
pub trait GraphType {
    type Payload: Payload;
}

/// Provides getters pertaining to the vertex-set of a graph
pub trait GraphVertexOrder: GraphType {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all vertices in creation order
    fn vertices(&self) -> impl Iterator<Item = &Vertex<Self::Payload>> + '_;

    /// Returns *true* if `u` was created in this graph
    fn has_vertex(&self, u: &Vertex<Self::Payload>) -> bool;

    /// Returns `Err(VertexNotFound)` if `u` was never created in this graph
    fn check_vertex(&self, u: &Vertex<Self::Payload>) -> Result<()> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(u))
        }
    }
}

/// Provides getters pertaining to the edge-set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of stored (directed) edges.
    /// An undirected connection accounts for two edges.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphVertexOrder + GraphEdgeOrder + Sized {
    /// Iterator over the outgoing edges of a single vertex
    type EdgeIter<'a>: Iterator<Item = Edge<Self::Payload>> + 'a
    where
        Self: 'a;

    /// Returns the outgoing edges of `u`. Stores that keep an insertion order report edges in
    /// that order, which determines the tie-breaking of all traversals.
    fn edges_of(&self, u: &Vertex<Self::Payload>) -> Result<Self::EdgeIter<'_>>;

    /// Returns an iterator over the (out-)neighbors of `u`
    fn neighbors_of(
        &self,
        u: &Vertex<Self::Payload>,
    ) -> Result<impl Iterator<Item = Vertex<Self::Payload>> + '_> {
        Ok(self.edges_of(u)?.map(|e| e.destination))
    }

    /// Returns the number of outgoing edges of `u`
    fn degree_of(&self, u: &Vertex<Self::Payload>) -> Result<NumEdges> {
        Ok(self.edges_of(u)?.count() as NumEdges)
    }

    /// Returns the first edge `u -> v` in the outgoing edges of `u`, if any.
    /// Parallel edges beyond the first are not considered.
    fn edge_between(
        &self,
        u: &Vertex<Self::Payload>,
        v: &Vertex<Self::Payload>,
    ) -> Result<Option<Edge<Self::Payload>>> {
        Ok(self.edges_of(u)?.find(|e| &e.destination == v))
    }

    /// Returns the weight of the first edge `u -> v`.
    ///
    /// `Ok(None)` is returned both if there is no such edge and if it is unweighted;
    /// use [`AdjacencyList::edge_between`] to tell these apart.
    fn weight_of(
        &self,
        u: &Vertex<Self::Payload>,
        v: &Vertex<Self::Payload>,
    ) -> Result<Option<Weight>> {
        Ok(self.edge_between(u, v)?.and_then(|e| e.weight))
    }

    /// Returns *true* if an edge `u -> v` exists. Unknown vertices have no edges.
    fn has_edge(&self, u: &Vertex<Self::Payload>, v: &Vertex<Self::Payload>) -> bool {
        matches!(self.edge_between(u, v), Ok(Some(_)))
    }

    /// Returns an iterator over all stored edges, grouped by source in vertex creation order
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Payload>> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u).into_iter().flatten())
    }
}

/// Trait for accessing the outgoing edges of vertices as slices
pub trait EdgesSlice: GraphType {
    /// Returns a slice-reference of the outgoing edges of `u` in insertion order
    fn edges_slice_of(&self, u: &Vertex<Self::Payload>) -> Result<&[Edge<Self::Payload>]>;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph without vertices
    fn new() -> Self;
}

/// Provides functions to create vertices
pub trait GraphVertexEditing: GraphType {
    /// Returns the vertex for `payload`, registering it if it is new.
    ///
    /// Creating a vertex whose payload is already present keeps the existing vertex and all of
    /// its edges.
    fn create_vertex(&mut self, payload: Self::Payload) -> Vertex<Self::Payload>;

    /// Creates a vertex for every payload and returns them in order
    fn create_vertices<I>(&mut self, payloads: I) -> Vec<Vertex<Self::Payload>>
    where
        I: IntoIterator<Item = Self::Payload>,
    {
        payloads
            .into_iter()
            .map(|payload| self.create_vertex(payload))
            .collect()
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphVertexEditing + GraphVertexOrder {
    /// Appends a single directed arc to the edges of its source.
    /// Returns *false* (and drops the arc) if either endpoint is unknown.
    fn try_add_arc(&mut self, edge: Edge<Self::Payload>) -> bool;

    /// Inserts `edge` according to its kind: a directed edge is stored as is, an undirected
    /// one is stored as the two arcs `source -> destination` and `destination -> source`.
    /// Returns *false* and inserts nothing if either endpoint is unknown.
    fn try_add_edge(&mut self, edge: Edge<Self::Payload>) -> bool {
        if !self.has_vertex(&edge.source) || !self.has_vertex(&edge.destination) {
            trace!(edge = ?edge, "rejected edge with unknown endpoint");
            return false;
        }

        if edge.kind.is_undirected() {
            let reverse = edge.reversed();
            self.try_add_arc(edge) && self.try_add_arc(reverse)
        } else {
            self.try_add_arc(edge)
        }
    }

    /// Adds an edge of the given kind between `source` and `destination`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if either endpoint was never created. In that case
    /// the graph is left unchanged.
    fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: &Vertex<Self::Payload>,
        destination: &Vertex<Self::Payload>,
        weight: Option<Weight>,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        let inserted = self.try_add_edge(Edge {
            source: source.clone(),
            destination: destination.clone(),
            weight,
            kind,
        });
        debug_assert!(inserted);

        Ok(())
    }

    /// Adds all edges in the collection (respecting each edge's kind).
    ///
    /// # Errors
    /// Stops at the first edge with an unknown endpoint; edges before it remain inserted.
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Payload>>,
    {
        for edge in edges {
            let edge = edge.into();
            self.add_edge(edge.kind, &edge.source, &edge.destination, edge.weight)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphType {
    /// Create a graph from an iterator over edges. Endpoints are created on the fly in order of
    /// their first appearance.
    fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Payload>>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Payload>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let edge = edge.into();
            graph.create_vertex(edge.source.payload().clone());
            graph.create_vertex(edge.destination.payload().clone());

            let inserted = graph.try_add_edge(edge);
            debug_assert!(inserted);
        }
        graph
    }
}

/// Writes one line per vertex in creation order: `u ---> [ v, w ]`
pub(crate) fn fmt_adjacency<G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: AdjacencyList,
    G::Payload: Display,
{
    for u in graph.vertices() {
        let neighbors = graph.neighbors_of(u).map_err(|_| fmt::Error)?;
        writeln!(f, "{u} ---> [ {} ]", neighbors.format(", "))?;
    }
    Ok(())
}
