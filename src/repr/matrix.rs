/*!
# Adjacency Matrix

[`AdjMatrix`] stores one optional cell per ordered pair of vertices. It trades memory
(`O(n^2)`) for constant-time edge lookups and exists mainly to show that the traversal
algorithms only depend on the capability traits and not on a concrete store.

In contrast to [`AdjacencyMap`](super::AdjacencyMap):
- at most one arc per ordered pair is stored; re-adding an arc replaces its weight and kind,
- outgoing edges are reported in creation order of their *destination*, not insertion order.
*/

use std::fmt::{self, Debug, Display};

use fxhash::FxHashMap;
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// Content of a non-empty matrix cell
#[derive(Debug, Copy, Clone, PartialEq)]
struct Cell {
    weight: Option<Weight>,
    kind: EdgeKind,
}

/// A graph represented by a (growable) adjacency matrix
#[derive(Clone)]
pub struct AdjMatrix<P>
where
    P: Payload,
{
    index: FxHashMap<Vertex<P>, usize>,
    vertices: Vec<Vertex<P>>,
    rows: Vec<Vec<Option<Cell>>>,
    num_edges: NumEdges,
}

impl<P: Payload> AdjMatrix<P> {
    fn slot_of(&self, u: &Vertex<P>) -> Result<usize> {
        self.index
            .get(u)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(u))
    }
}

impl<P: Payload> Default for AdjMatrix<P> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            vertices: Vec::new(),
            rows: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<P: Payload> GraphType for AdjMatrix<P> {
    type Payload = P;
}

impl<P: Payload> GraphNew for AdjMatrix<P> {
    fn new() -> Self {
        Self::default()
    }
}

impl<P: Payload> GraphVertexOrder for AdjMatrix<P> {
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

impl<P: Payload> GraphEdgeOrder for AdjMatrix<P> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

/// Iterator over the outgoing edges of a vertex in an [`AdjMatrix`].
///
/// Scans the row of the vertex and materializes an [`Edge`] for every occupied cell.
pub struct MatrixEdgeIter<'a, P>
where
    P: Payload,
{
    matrix: &'a AdjMatrix<P>,
    source: usize,
    next: usize,
}

impl<P: Payload> Iterator for MatrixEdgeIter<'_, P> {
    type Item = Edge<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = &self.matrix.rows[self.source];
        while self.next < row.len() {
            self.next += 1;

            if let Some(cell) = row[self.next - 1] {
                return Some(Edge {
                    source: self.matrix.vertices[self.source].clone(),
                    destination: self.matrix.vertices[self.next - 1].clone(),
                    weight: cell.weight,
                    kind: cell.kind,
                });
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.matrix.rows[self.source].len() - self.next))
    }
}

impl<P: Payload> AdjacencyList for AdjMatrix<P> {
    type EdgeIter<'a>
        = MatrixEdgeIter<'a, P>
    where
        Self: 'a;

    fn edges_of(&self, u: &Vertex<P>) -> Result<Self::EdgeIter<'_>> {
        Ok(MatrixEdgeIter {
            matrix: self,
            source: self.slot_of(u)?,
            next: 0,
        })
    }

    // Redefine to make use of constant-time cell access
    fn edge_between(&self, u: &Vertex<P>, v: &Vertex<P>) -> Result<Option<Edge<P>>> {
        let i = self.slot_of(u)?;
        Ok(self.index.get(v).and_then(|&j| {
            self.rows[i][j].map(|cell| Edge {
                source: u.clone(),
                destination: v.clone(),
                weight: cell.weight,
                kind: cell.kind,
            })
        }))
    }

    fn degree_of(&self, u: &Vertex<P>) -> Result<NumEdges> {
        let i = self.slot_of(u)?;
        Ok(self.rows[i].iter().filter(|c| c.is_some()).count() as NumEdges)
    }
}

impl<P: Payload> GraphVertexEditing for AdjMatrix<P> {
    fn create_vertex(&mut self, payload: P) -> Vertex<P> {
        let vertex = Vertex::new(payload);

        if !self.index.contains_key(&vertex) {
            let n = self.vertices.len();
            trace!(vertex = ?vertex, slot = n, "created vertex");

            for row in self.rows.iter_mut() {
                row.push(None);
            }
            self.rows.push(vec![None; n + 1]);

            self.index.insert(vertex.clone(), n);
            self.vertices.push(vertex.clone());
        }

        vertex
    }
}

impl<P: Payload> GraphEdgeEditing for AdjMatrix<P> {
    fn try_add_arc(&mut self, edge: Edge<P>) -> bool {
        let (Some(&i), Some(&j)) = (
            self.index.get(&edge.source),
            self.index.get(&edge.destination),
        ) else {
            return false;
        };

        let previous = self.rows[i][j].replace(Cell {
            weight: edge.weight,
            kind: edge.kind,
        });

        if previous.is_none() {
            self.num_edges += 1;
        }
        true
    }
}

impl<P> Display for AdjMatrix<P>
where
    P: Payload + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}

impl<P: Payload> Debug for AdjMatrix<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.vertices
                    .iter()
                    .zip(self.rows.iter().map(|row| row.iter().filter(|c| c.is_some()).count())),
            )
            .finish()
    }
}

test_graph_ops!(test_adj_matrix, AdjMatrix, false);
